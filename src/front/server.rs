//! Handlers not linked to a specific url

use ntex::{time, web};
use ntex_files::NamedFile;
use serde::Deserialize;
use serde_json::json;

use crate::{
    api::{self, whatsapp::ContactAction},
    consts,
    front::{
        AppState,
        controller::{ViewController, ViewEvent, ViewState},
        errors, templates,
    },
    models::quote::PricingPayload,
};

/// Query parameters of the landing page navigation
#[derive(Debug, Deserialize)]
pub struct LandingQuery {
    /// Lead identifier carried by the navigation url
    pub nid: Option<String>,
}

/// Serve `favicon.ico`
#[web::get("/favicon.ico")]
async fn serve_favicon() -> Result<impl web::Responder, web::Error> {
    Ok(NamedFile::open("web/static/images/favicon.ico")?)
}

/// Return a [UrlNotFound](errors::UserError::UrlNotFound) error for urls not defined
pub async fn serve_not_found() -> Result<web::HttpResponse, web::Error> {
    Err(errors::UserError::UrlNotFound.into())
}

/// Endpoint to render the landing view.
///
/// Without `nid` the identifier capture form is shown. With `nid` the view
/// machine enters loading, the resolution is raced against the safety
/// timeout and the resulting state is rendered. The capture form submits
/// back to this url, so the navigation parameter always reflects the
/// identifier on display.
#[web::get("/")]
async fn index(
    query: web::types::Query<LandingQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let mut controller = ViewController::new();

    match &query.nid {
        Some(nid) => controller.dispatch(ViewEvent::NidSubmitted(nid.clone())),
        // navigating here without the parameter drops any shown proposal
        None => controller.dispatch(ViewEvent::NidCleared),
    };

    if let Some((nid, token)) = controller.pending() {
        let event = match time::timeout(
            time::Millis::from_secs(consts::RESOLVE_TIMEOUT_SECS),
            api::quote::resolve_pricing(&nid, &app_state.crm),
        )
        .await
        {
            Ok(payload) => ViewEvent::ResolveSucceeded { token, payload },
            Err(_) => {
                log::warn!("pricing resolution for nid {nid} hit the safety timeout");
                ViewEvent::ResolveTimedOut { token }
            }
        };
        controller.dispatch(event);
    }

    match controller.state() {
        ViewState::NoIdentifier => render_nid_form(),
        ViewState::Ready { nid, payload } => render_landing(nid, payload),
        ViewState::Loading { .. } => Err(errors::ServerError::InternalServerError(
            "the resolution race settled without leaving the loading state".into(),
        )
        .into()),
    }
}

fn render_nid_form() -> Result<web::HttpResponse, web::Error> {
    let content = templates::WEB_TEMPLATES
        .render("nid_form.html", &tera::Context::new())
        .map_err(|e| {
            errors::ServerError::TemplateError(format!(
                "at / endpoint the nid form template couldnt be rendered: {e}"
            ))
        })?;

    Ok(web::HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(content))
}

fn render_landing(nid: &str, payload: &PricingPayload) -> Result<web::HttpResponse, web::Error> {
    let context = tera::Context::from_value(json!({
        "nid": nid,
        "headline_price": api::pricing::format_price(&payload.bnpl9),
        "cards": api::pricing::build_product_cards(payload),
        "offer_link": api::whatsapp::build_contact_link(
            &payload.whatsapp_contact,
            ContactAction::RequestOffer,
        ),
        "visit_link": api::whatsapp::build_contact_link(
            &payload.whatsapp_contact,
            ContactAction::ScheduleVisit,
        ),
    }))
    .unwrap_or_default();

    let content = templates::WEB_TEMPLATES
        .render("landing.html", &context)
        .map_err(|e| {
            errors::ServerError::TemplateError(format!(
                "at / endpoint the landing template couldnt be rendered: {e}"
            ))
        })?;

    Ok(web::HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(content))
}
