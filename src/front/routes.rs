//! Frontend route configuration module.
//!
//! This module organizes and configures the web routes of the pricing
//! application. Routes are grouped by functionality into logical scopes.

use super::pricing;
use ntex::web;

/// Configures the pricing proxy api routes.
///
/// # Routes
/// - `GET /api/pricing?id=<nid>` - Resolve a lead identifier into a pricing payload
pub fn pricing_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").service((pricing::get_pricing,)));
}
