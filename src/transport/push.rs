use serde::Deserialize;

use crate::domain::{MessageBody, MessageTitle, PushReply};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The service returned an empty (or whitespace-only) body. Treated as
    /// undecodable rather than inferring any particular outcome from it.
    #[error("empty response body")]
    EmptyBody,

    /// The body was not the expected JSON object. Some failure paths return
    /// an HTML error page instead of JSON.
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct PushJsonReply {
    errno: i32,
    #[serde(default)]
    errmsg: String,
    #[serde(default)]
    dataset: Option<String>,
}

pub fn encode_push_form(title: &MessageTitle, body: &MessageBody) -> Vec<(String, String)> {
    vec![
        (MessageTitle::FIELD.to_owned(), title.as_str().to_owned()),
        (MessageBody::FIELD.to_owned(), body.as_str().to_owned()),
    ]
}

pub fn decode_push_json_response(json: &str) -> Result<PushReply, DecodeError> {
    if json.trim().is_empty() {
        return Err(DecodeError::EmptyBody);
    }

    let parsed: PushJsonReply = serde_json::from_str(json)?;
    Ok(PushReply {
        errno: parsed.errno,
        errmsg: parsed.errmsg,
        dataset: parsed.dataset,
    })
}
