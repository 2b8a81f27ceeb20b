pub mod hubspot;

use crate::models;
use async_trait::async_trait;

/// Read access to the CRM system of record.
///
/// The pricing resolver only ever reads one deal at a time, so the surface
/// stays small; it is a trait object so tests can swap the collaborator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CrmApi {
    /// Whether an access credential is configured. When this is false the
    /// resolver must not attempt a lookup.
    fn is_configured(&self) -> bool;

    /// Reads the deal record matching `nid` and returns its pricing and
    /// contact properties.
    async fn get_deal_properties(
        &self,
        nid: &str,
    ) -> anyhow::Result<models::quote::DealProperties>;
}

pub type ImplCrmApi = Box<dyn CrmApi>;
