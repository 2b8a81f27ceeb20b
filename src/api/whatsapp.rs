//! # WhatsApp Redirect Module
//!
//! Normalizes the advisor contact value of a payload (a full send-URL or a
//! bare phone number) into a message-prefilled WhatsApp link for the landing
//! view's call-to-action buttons.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::consts;

/// Action behind a contact button, each with its own prefilled message
#[derive(Debug, Display, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub enum ContactAction {
    #[display("oferta")]
    #[serde(alias = "oferta", rename(serialize = "oferta"))]
    RequestOffer,
    #[display("visita")]
    #[serde(alias = "visita", rename(serialize = "visita"))]
    ScheduleVisit,
}

impl ContactAction {
    pub fn message(&self) -> &'static str {
        match self {
            ContactAction::RequestOffer => consts::OFFER_MESSAGE,
            ContactAction::ScheduleVisit => consts::VISIT_MESSAGE,
        }
    }
}

/// Builds the redirect link for a contact value and action.
///
/// A value without a URL scheme is treated as a phone number: everything but
/// digits and `+` is stripped and the canonical `wa.me` target is used. The
/// action message is appended URL-encoded, reusing the link's query string
/// when it already has one.
///
/// Returns `None` for an empty contact; the action is simply unavailable,
/// never an error shown to the user.
pub fn build_contact_link(contact: &str, action: ContactAction) -> Option<String> {
    if contact.is_empty() {
        log::warn!("advisor contact is not available, skipping {action} redirect");
        return None;
    }

    let target = if contact.starts_with("http") {
        contact.to_string()
    } else {
        let number: String = contact
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();

        format!(
            "{host}/{number}",
            host = consts::WHATSAPP_SEND_HOST,
            number = number.replace('+', ""),
        )
    };

    let separator = if target.contains('?') { '&' } else { '?' };
    let message = urlencoding::encode(action.message());

    Some(format!("{target}{separator}text={message}"))
}
