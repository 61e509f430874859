use serde_derive::Serialize;

/// Body echoed back to complete the `url_verification` handshake.
#[derive(Debug, Serialize)]
pub struct UrlVerificationReply {
    pub challenge: String,
}

/// `chat.postMessage` request body for answering in the source channel.
#[derive(Debug, Default, Serialize)]
pub struct PostMessage {
    pub channel: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<String>,
}
