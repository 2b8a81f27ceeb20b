use crate::models::quote::PricingDefaults;

/// CRM deal properties requested on every lookup, in query-string order
pub const DEAL_PROPERTIES: &str = "bnpl3,bnpl6,bnpl9,precio_comite_final,whatsapp_asesor";

/// Seconds the landing view waits for a resolution before giving up
pub const RESOLVE_TIMEOUT_SECS: u32 = 15;

/// Canonical host for number-only WhatsApp contacts
pub const WHATSAPP_SEND_HOST: &str = "https://wa.me";

/// Send-URL of the sales advisor line, used when a degraded payload still
/// needs a reachable contact
pub const ADVISOR_WHATSAPP_URL: &str = "https://api.whatsapp.com/send?phone=3009128399";

pub const OFFER_MESSAGE: &str = "¡Hola! Me interesa solicitar una oferta para mi propiedad.";
pub const VISIT_MESSAGE: &str = "¡Hola! Me gustaría agendar una visita a sus oficinas.";

/// Generic marketing prices shown when no identifier was provided at all.
/// These match the non-personalized figures of the campaign page.
pub const NO_IDENTIFIER_DEFAULTS: PricingDefaults = PricingDefaults {
    bnpl3: "149572520",
    bnpl6: "151464588",
    bnpl9: "153226755",
    precio_comite_final: "148566058",
    whatsapp_contact: "",
};

/// Served when no CRM credential is configured in the environment.
/// Kept literal for backward compatibility with the prior deployment.
pub const NO_CREDENTIAL_DEFAULTS: PricingDefaults = PricingDefaults {
    bnpl3: "115000000",
    bnpl6: "117000000",
    bnpl9: "120000000",
    precio_comite_final: "110000000",
    whatsapp_contact: ADVISOR_WHATSAPP_URL,
};

/// Served when the CRM call fails or answers with a non-success status
pub const CRM_ERROR_DEFAULTS: PricingDefaults = PricingDefaults {
    bnpl3: "115000000",
    bnpl6: "117000000",
    bnpl9: "123000000",
    precio_comite_final: "110000000",
    whatsapp_contact: ADVISOR_WHATSAPP_URL,
};

/// View-side safety net, applied when the resolver itself is unreachable or
/// the safety timeout fires. Distinct from every resolver table.
pub const CLIENT_FALLBACK_DEFAULTS: PricingDefaults = PricingDefaults {
    bnpl3: "100000000",
    bnpl6: "100000000",
    bnpl9: "100000000",
    precio_comite_final: "100000000",
    whatsapp_contact: "",
};

/// Per-field substitutes for a deal record the CRM answered but left
/// partially unset. Applied field by field, never wholesale.
pub const DEFAULT_BNPL3: &str = "110000000";
pub const DEFAULT_BNPL6: &str = "112000000";
pub const DEFAULT_BNPL9: &str = "123000000";
pub const DEFAULT_PRECIO_COMITE: &str = "100000000";
