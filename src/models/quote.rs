use serde::{Deserialize, Serialize};

use crate::consts;

/// Pricing payload served to the landing view.
///
/// Fixed shape: the five fields are always present, whatever degraded path
/// produced them. Prices are digit-only strings as the CRM stores them;
/// formatting happens at render time.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct PricingPayload {
    pub bnpl3: String,
    pub bnpl6: String,
    pub bnpl9: String,
    pub precio_comite_final: String,
    pub whatsapp_contact: String,
}

/// One literal fallback table. Each degraded resolution path owns its own
/// table so the serving path can be told apart from the data alone.
pub struct PricingDefaults {
    pub bnpl3: &'static str,
    pub bnpl6: &'static str,
    pub bnpl9: &'static str,
    pub precio_comite_final: &'static str,
    pub whatsapp_contact: &'static str,
}

impl From<&PricingDefaults> for PricingPayload {
    fn from(defaults: &PricingDefaults) -> Self {
        Self {
            bnpl3: defaults.bnpl3.into(),
            bnpl6: defaults.bnpl6.into(),
            bnpl9: defaults.bnpl9.into(),
            precio_comite_final: defaults.precio_comite_final.into(),
            whatsapp_contact: defaults.whatsapp_contact.into(),
        }
    }
}

impl PricingPayload {
    /// Builds a payload from a CRM deal record, substituting each missing
    /// property with its own default. A deal with only `bnpl3` set still
    /// yields a complete payload.
    pub fn from_deal_properties(properties: DealProperties) -> Self {
        Self {
            bnpl3: properties
                .bnpl3
                .unwrap_or_else(|| consts::DEFAULT_BNPL3.into()),
            bnpl6: properties
                .bnpl6
                .unwrap_or_else(|| consts::DEFAULT_BNPL6.into()),
            bnpl9: properties
                .bnpl9
                .unwrap_or_else(|| consts::DEFAULT_BNPL9.into()),
            precio_comite_final: properties
                .precio_comite_final
                .unwrap_or_else(|| consts::DEFAULT_PRECIO_COMITE.into()),
            whatsapp_contact: properties.whatsapp_asesor.unwrap_or_default(),
        }
    }
}

/// Deal record as the HubSpot objects API returns it:
/// `{ "properties": { ... } }`
#[derive(Debug, Default, Deserialize)]
pub struct DealRecord {
    #[serde(default)]
    pub properties: DealProperties,
}

/// The five deal properties the app reads. Every one of them can be absent
/// or null on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct DealProperties {
    pub bnpl3: Option<String>,
    pub bnpl6: Option<String>,
    pub bnpl9: Option<String>,
    pub precio_comite_final: Option<String>,
    pub whatsapp_asesor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_record_deserializes_hubspot_shape() {
        let json = r#"{
            "id": "39285529713",
            "properties": {
                "bnpl3": "149572520",
                "bnpl6": null,
                "bnpl9": "153226755",
                "whatsapp_asesor": "3009128399"
            },
            "archived": false
        }"#;

        let record: DealRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.properties.bnpl3.as_deref(), Some("149572520"));
        assert_eq!(record.properties.bnpl6, None);
        assert_eq!(record.properties.precio_comite_final, None);
        assert_eq!(record.properties.whatsapp_asesor.as_deref(), Some("3009128399"));
    }

    #[test]
    fn test_from_deal_properties_defaults_each_field_individually() {
        let properties = DealProperties {
            bnpl3: Some("149572520".into()),
            ..Default::default()
        };

        let payload = PricingPayload::from_deal_properties(properties);
        assert_eq!(payload.bnpl3, "149572520");
        assert_eq!(payload.bnpl6, "112000000");
        assert_eq!(payload.bnpl9, "123000000");
        assert_eq!(payload.precio_comite_final, "100000000");
        assert_eq!(payload.whatsapp_contact, "");
    }

    #[test]
    fn test_payload_serializes_all_five_fields_as_strings() {
        let payload = PricingPayload::from(&crate::consts::NO_CREDENTIAL_DEFAULTS);
        let value = serde_json::to_value(&payload).unwrap();

        for field in [
            "bnpl3",
            "bnpl6",
            "bnpl9",
            "precio_comite_final",
            "whatsapp_contact",
        ] {
            assert!(value[field].is_string(), "{field} should be a string");
        }
        assert_eq!(value["bnpl9"], "120000000");
    }
}
