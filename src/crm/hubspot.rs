//! # HubSpot CRM Client
//!
//! This module provides a client for reading deal records from the HubSpot
//! CRM API. It handles bearer authentication and response decoding.

use super::CrmApi;
use crate::{config, models, utils};
use anyhow::{Context, Result};
use async_trait::async_trait;

/// HubSpot API client for deal record lookups
pub struct HubSpotClient {
    /// HTTP client for making API requests
    client: reqwest::Client,
    /// Base host of the CRM API
    api_host: String,
    /// Authentication token; `None` means the degraded no-lookup mode
    auth_token: Option<String>,
}

impl HubSpotClient {
    /// Creates a new HubSpot client from the application configuration
    pub fn new() -> Self {
        let app_config = &*config::APP_CONFIG;

        Self {
            client: utils::REQUEST_CLIENT.clone(),
            api_host: app_config.hubspot_api_host.clone(),
            auth_token: app_config.hubspot_access_token.clone(),
        }
    }

    fn deal_endpoint(&self, nid: &str) -> String {
        format!(
            "{host}/crm/v3/objects/deals/{nid}?properties={props}",
            host = self.api_host,
            props = crate::consts::DEAL_PROPERTIES,
        )
    }
}

impl Default for HubSpotClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CrmApi for HubSpotClient {
    fn is_configured(&self) -> bool {
        self.auth_token
            .as_ref()
            .is_some_and(|token| !token.trim().is_empty())
    }

    async fn get_deal_properties(
        &self,
        nid: &str,
    ) -> Result<models::quote::DealProperties> {
        let token = self
            .auth_token
            .as_deref()
            .context("HubSpot access token is not configured")?;

        let url = self.deal_endpoint(nid);
        log::debug!("requesting deal record from {url}");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .send()
            .await
            .context("Failed to send request to HubSpot API")?;

        let status = response.status();
        log::debug!("HubSpot answered deal lookup for nid {nid} with status {status}");

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());

            anyhow::bail!("HubSpot API returned error status {status}: {body}");
        }

        let record: models::quote::DealRecord = response
            .json()
            .await
            .context("Failed to parse HubSpot deal response")?;

        Ok(record.properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_token(token: Option<&str>) -> HubSpotClient {
        HubSpotClient {
            client: reqwest::Client::new(),
            api_host: "https://api.hubapi.com".into(),
            auth_token: token.map(str::to_string),
        }
    }

    #[test]
    fn test_is_configured_requires_a_non_blank_token() {
        assert!(client_with_token(Some("pat-na1-something")).is_configured());
        assert!(!client_with_token(Some("   ")).is_configured());
        assert!(!client_with_token(None).is_configured());
    }

    #[test]
    fn test_deal_endpoint_matches_the_objects_api() {
        let client = client_with_token(Some("pat"));
        assert_eq!(
            client.deal_endpoint("42"),
            "https://api.hubapi.com/crm/v3/objects/deals/42\
             ?properties=bnpl3,bnpl6,bnpl9,precio_comite_final,whatsapp_asesor"
        );
    }
}
