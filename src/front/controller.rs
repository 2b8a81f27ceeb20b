//! # View Controller
//!
//! Finite state machine behind the personalized landing view. A single
//! reducer takes the current state and an event and produces the next
//! state, which keeps identifier changes, resolution outcomes and the
//! safety timeout from racing each other.
//!
//! Each submission mints a monotonically increasing request token;
//! completion events carry the token of the resolution they belong to and
//! only commit while that token is still the live one. A slow, stale
//! resolution can therefore never overwrite the outcome of a newer one.

use crate::{consts, models::quote::PricingPayload};

/// What the landing view is currently showing
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// No lead identifier: the capture form is on screen
    NoIdentifier,
    /// A resolution for `nid` is in flight
    Loading { nid: String, token: u64 },
    /// Personalized (or fallback) pricing is on screen
    Ready {
        nid: String,
        payload: PricingPayload,
    },
}

/// Everything that can move the view machine
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// A new identifier was submitted (form input or navigation parameter)
    NidSubmitted(String),
    /// The identifier was removed from the navigation parameter
    NidCleared,
    ResolveSucceeded { token: u64, payload: PricingPayload },
    /// The transport to the resolver failed; the resolver itself never errors
    ResolveFailed { token: u64 },
    /// The safety timeout won the race against the resolution
    ResolveTimedOut { token: u64 },
}

pub struct ViewController {
    state: ViewState,
    last_token: u64,
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            state: ViewState::NoIdentifier,
            last_token: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Token of the in-flight resolution, if any
    pub fn pending(&self) -> Option<(String, u64)> {
        match &self.state {
            ViewState::Loading { nid, token } => Some((nid.clone(), *token)),
            _ => None,
        }
    }

    /// Applies an event and returns the state after the transition
    pub fn dispatch(&mut self, event: ViewEvent) -> &ViewState {
        self.state = self.reduce(event);
        &self.state
    }

    fn reduce(&mut self, event: ViewEvent) -> ViewState {
        match event {
            ViewEvent::NidSubmitted(nid) => {
                let nid = nid.trim().to_string();
                if nid.is_empty() {
                    return self.state.clone();
                }

                // a fresh token supersedes whatever was loading or shown
                self.last_token += 1;
                ViewState::Loading {
                    nid,
                    token: self.last_token,
                }
            }
            ViewEvent::NidCleared => ViewState::NoIdentifier,
            ViewEvent::ResolveSucceeded { token, payload } => match &self.state {
                ViewState::Loading {
                    nid,
                    token: current,
                } if *current == token => ViewState::Ready {
                    nid: nid.clone(),
                    payload,
                },
                _ => self.discard(token),
            },
            ViewEvent::ResolveFailed { token } | ViewEvent::ResolveTimedOut { token } => {
                match &self.state {
                    ViewState::Loading {
                        nid,
                        token: current,
                    } if *current == token => ViewState::Ready {
                        nid: nid.clone(),
                        payload: PricingPayload::from(&consts::CLIENT_FALLBACK_DEFAULTS),
                    },
                    _ => self.discard(token),
                }
            }
        }
    }

    fn discard(&self, token: u64) -> ViewState {
        log::debug!("discarding completion for request token {token}");
        self.state.clone()
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_for(nid: &str) -> PricingPayload {
        PricingPayload {
            bnpl3: "149572520".into(),
            bnpl6: "151464588".into(),
            bnpl9: "153226755".into(),
            precio_comite_final: "148566058".into(),
            whatsapp_contact: nid.into(),
        }
    }

    fn submitted(controller: &mut ViewController, nid: &str) -> u64 {
        controller.dispatch(ViewEvent::NidSubmitted(nid.into()));
        controller.pending().expect("submission should load").1
    }

    #[test]
    fn test_starts_without_identifier() {
        let controller = ViewController::new();
        assert_eq!(*controller.state(), ViewState::NoIdentifier);
    }

    #[test]
    fn test_submission_enters_loading_and_success_commits() {
        let mut controller = ViewController::new();
        let token = submitted(&mut controller, "39285529713");

        let state = controller.dispatch(ViewEvent::ResolveSucceeded {
            token,
            payload: payload_for("a"),
        });

        assert_eq!(
            *state,
            ViewState::Ready {
                nid: "39285529713".into(),
                payload: payload_for("a"),
            }
        );
    }

    #[test]
    fn test_whitespace_submission_is_ignored() {
        let mut controller = ViewController::new();
        controller.dispatch(ViewEvent::NidSubmitted("   ".into()));
        assert_eq!(*controller.state(), ViewState::NoIdentifier);
    }

    #[test]
    fn test_timeout_commits_client_fallback() {
        let mut controller = ViewController::new();
        let token = submitted(&mut controller, "42");

        let state = controller.dispatch(ViewEvent::ResolveTimedOut { token });

        let ViewState::Ready { payload, .. } = state else {
            panic!("timeout should leave the view ready");
        };
        assert_eq!(payload.bnpl9, "100000000");
        assert_eq!(payload.whatsapp_contact, "");
    }

    #[test]
    fn test_late_success_after_timeout_is_discarded() {
        let mut controller = ViewController::new();
        let token = submitted(&mut controller, "42");

        controller.dispatch(ViewEvent::ResolveTimedOut { token });
        let after_timeout = controller.state().clone();

        // the resolution finally lands, too late
        let state = controller.dispatch(ViewEvent::ResolveSucceeded {
            token,
            payload: payload_for("late"),
        });

        assert_eq!(*state, after_timeout);
    }

    #[test]
    fn test_newer_submission_supersedes_older_in_flight_one() {
        let mut controller = ViewController::new();
        let first = submitted(&mut controller, "first");
        let second = submitted(&mut controller, "second");
        assert_ne!(first, second);

        // the slow first resolution completes after the second started
        controller.dispatch(ViewEvent::ResolveSucceeded {
            token: first,
            payload: payload_for("first"),
        });
        assert_eq!(
            controller.pending(),
            Some(("second".into(), second)),
            "stale completion must not leave the loading state"
        );

        let state = controller.dispatch(ViewEvent::ResolveSucceeded {
            token: second,
            payload: payload_for("second"),
        });
        let ViewState::Ready { nid, payload } = state else {
            panic!("newest resolution should commit");
        };
        assert_eq!(nid, "second");
        assert_eq!(payload.whatsapp_contact, "second");
    }

    #[test]
    fn test_resubmission_replaces_ready_payload_wholesale() {
        let mut controller = ViewController::new();
        let token = submitted(&mut controller, "first");
        controller.dispatch(ViewEvent::ResolveSucceeded {
            token,
            payload: payload_for("first"),
        });

        let token = submitted(&mut controller, "second");
        assert!(matches!(controller.state(), ViewState::Loading { .. }));

        controller.dispatch(ViewEvent::ResolveFailed { token });
        let ViewState::Ready { payload, .. } = controller.state() else {
            panic!("failure should fall back to the client table");
        };
        assert_eq!(payload.precio_comite_final, "100000000");
    }

    #[test]
    fn test_clearing_discards_the_held_payload() {
        let mut controller = ViewController::new();
        let token = submitted(&mut controller, "42");
        controller.dispatch(ViewEvent::ResolveSucceeded {
            token,
            payload: payload_for("a"),
        });

        controller.dispatch(ViewEvent::NidCleared);
        assert_eq!(*controller.state(), ViewState::NoIdentifier);

        // a completion from before the clear stays discarded
        controller.dispatch(ViewEvent::ResolveFailed { token });
        assert_eq!(*controller.state(), ViewState::NoIdentifier);
    }
}
