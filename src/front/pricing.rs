//! Handlers related to the /api/pricing url

use ntex::web;
use serde::Deserialize;

use crate::{
    api,
    front::{AppState, errors},
};

/// Query parameters for the pricing lookup
#[derive(Debug, Deserialize)]
pub struct PricingQuery {
    /// Lead identifier; `None` when the parameter is absent from the request
    pub id: Option<String>,
}

/// Proxy endpoint resolving a lead identifier into a pricing payload.
///
/// Always answers 200 with a complete payload, however degraded the
/// resolution was; the only observable error is 400 when the `id`
/// parameter is missing entirely (an empty `id` is a valid degraded
/// lookup, not an error).
#[web::get("/pricing")]
pub async fn get_pricing(
    query: web::types::Query<PricingQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let Some(nid) = &query.id else {
        return Err(errors::UserError::IdentifierRequired.into());
    };

    let payload = api::quote::resolve_pricing(nid, &app_state.crm).await;

    Ok(web::HttpResponse::Ok().json(&payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_query_distinguishes_absent_from_empty() {
        let absent: PricingQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.id, None);

        let empty: PricingQuery = serde_json::from_str(r#"{"id":""}"#).unwrap();
        assert_eq!(empty.id.as_deref(), Some(""));
    }
}
