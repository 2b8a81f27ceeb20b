pub mod controller;
pub mod errors;
pub mod pricing;
pub mod routes;
pub mod server;
pub mod templates;

use crate::crm;

pub struct AppState {
    pub crm: crm::ImplCrmApi,
}
