use log::trace;
use serde_derive::Deserialize;
use serde_json::Value;

use crate::error::PayloadError;
use crate::message::UrlVerificationReply;

/// A request body delivered to a Slack events endpoint.
///
/// Slack sends exactly two shapes, discriminated by the literal `type` field:
/// the one-time [`UrlVerification`] handshake and [`EventCallback`] envelopes
/// carrying one event each.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestPayload {
    UrlVerification(UrlVerification),
    EventCallback(EventCallback),
}

impl RequestPayload {
    /// Deserializes a raw webhook POST body.
    ///
    /// Bodies that are not JSON and bodies whose `type` tag matches neither
    /// known shape are reported as distinct [`PayloadError`] variants.
    pub fn parse(body: &str) -> Result<Self, PayloadError> {
        trace!("received payload: {}", body);
        let json = serde_json::from_str::<Value>(body)?;
        serde_json::from_value(json)
            .map_err(|e| PayloadError::UnrecognizedPayload(e.to_string()))
    }

    /// True iff this is the `url_verification` handshake.
    pub fn is_url_verification(&self) -> bool {
        matches!(self, RequestPayload::UrlVerification(_))
    }

    /// True iff this is an `event_callback` envelope.
    pub fn is_event_callback(&self) -> bool {
        matches!(self, RequestPayload::EventCallback(_))
    }

    pub fn as_url_verification(&self) -> Option<&UrlVerification> {
        match self {
            RequestPayload::UrlVerification(verification) => Some(verification),
            _ => None,
        }
    }

    pub fn as_event_callback(&self) -> Option<&EventCallback> {
        match self {
            RequestPayload::EventCallback(callback) => Some(callback),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UrlVerification {
    pub token: String,
    pub challenge: String,
}

impl UrlVerification {
    /// Builds the echo body Slack expects back to confirm endpoint ownership.
    pub fn reply(&self) -> UrlVerificationReply {
        UrlVerificationReply {
            challenge: self.challenge.clone(),
        }
    }
}

/// Delivery envelope around a single event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventCallback {
    pub token: String,
    pub team_id: String,
    pub api_app_id: String,
    pub event: Event,
    pub event_id: String,
    pub event_time: i64,
    pub authed_users: Option<Vec<String>>,
    pub authorizations: Option<Vec<Value>>,
    pub is_ext_shared_channel: Option<bool>,
    pub event_context: Option<String>,
}

/// A user-generated event inside an [`EventCallback`].
///
/// The kind tag is an open set upstream, so it stays a plain string here;
/// narrowing to the kinds this crate knows about goes through predicates
/// like [`Event::is_app_mention`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub ty: String,
    pub user: String,
    pub text: String,
    pub ts: String,
    pub channel: String,
    pub event_ts: String,
    pub channel_type: Option<String>,
    pub subtype: Option<String>,
}

impl Event {
    /// True iff this event is a mention of the app.
    pub fn is_app_mention(&self) -> bool {
        self.ty == "app_mention"
    }
}
