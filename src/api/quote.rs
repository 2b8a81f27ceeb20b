//! # Quote Resolution Module
//!
//! Resolves a lead identifier (NID) into the pricing payload the landing
//! view renders. Every failure path collapses into a valid payload built
//! from one of the literal fallback tables; the caller never sees an error.

use crate::{consts, crm, models::quote::PricingPayload};

/// Resolves the pricing payload for a lead identifier.
///
/// Resolution order:
/// 1. blank identifier: generic marketing defaults, no lookup
/// 2. no CRM credential configured: the legacy no-credential table, no lookup
/// 3. CRM lookup; a failed call or non-success status degrades to the
///    crm-error table, a successful one is completed field by field
///
/// # Arguments
/// * `nid` - Lead identifier as received from the request
/// * `crm` - CRM collaborator used for the deal lookup
pub async fn resolve_pricing(nid: &str, crm: &crm::ImplCrmApi) -> PricingPayload {
    let nid = nid.trim();

    if nid.is_empty() {
        log::info!("pricing requested without an identifier, serving generic defaults");
        return PricingPayload::from(&consts::NO_IDENTIFIER_DEFAULTS);
    }

    if !crm.is_configured() {
        log::warn!("no CRM credential configured, serving fallback pricing for nid {nid}");
        return PricingPayload::from(&consts::NO_CREDENTIAL_DEFAULTS);
    }

    match crm.get_deal_properties(nid).await {
        Ok(properties) => PricingPayload::from_deal_properties(properties),
        Err(e) => {
            log::error!("deal lookup for nid {nid} failed: {e:#}");
            PricingPayload::from(&consts::CRM_ERROR_DEFAULTS)
        }
    }
}
