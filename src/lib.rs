//! Type definitions and narrowing helpers for Slack Events API webhook
//! payloads.
//!
//! Slack delivers exactly two body shapes to an events endpoint: a one-time
//! `url_verification` handshake and `event_callback` envelopes wrapping a
//! single event. [`RequestPayload`] models both, discriminated by the literal
//! `type` tag, and [`RequestPayload::parse`] is the deserialization boundary
//! for the raw POST body. [`EventTracker`] filters the redeliveries Slack
//! performs when a callback is not acknowledged in time.

mod dedup;
mod error;
mod event;
mod message;

pub use dedup::EventTracker;
pub use error::PayloadError;
pub use event::{Event, EventCallback, RequestPayload, UrlVerification};
pub use message::{PostMessage, UrlVerificationReply};
