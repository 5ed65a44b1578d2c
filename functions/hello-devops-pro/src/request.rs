use serde::de::{Error as _, Unexpected};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::ProcessingError;

pub const DEFAULT_HTTP_METHOD: &str = "GET";
pub const DEFAULT_PATH: &str = "/";
pub const DEFAULT_USER_AGENT: &str = "Unknown";

const USER_AGENT: &str = "User-Agent";

/// The parts of an API Gateway proxy event the greeting echoes back.
///
/// Every field is optional on the wire; absent and `null` both fall back to
/// the defaults above. Keys we don't read are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    http_method: Option<String>,
    path: Option<String>,
    headers: Option<HashMap<String, Option<String>>>,
}

impl Request {
    /// Only a JSON object is an event; serde would otherwise fill the struct
    /// positionally from an array.
    pub fn from_event(event: &Value) -> Result<Self, ProcessingError> {
        if !event.is_object() {
            let err = serde_json::Error::invalid_type(unexpected(event), &"a JSON object");
            return Err(ProcessingError::InvalidEvent(err));
        }

        Request::deserialize(event).map_err(ProcessingError::InvalidEvent)
    }

    pub fn http_method(&self) -> &str {
        self.http_method.as_deref().unwrap_or(DEFAULT_HTTP_METHOD)
    }

    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_PATH)
    }

    /// Exact `User-Agent` key only; `user-agent` does not count.
    pub fn user_agent(&self) -> &str {
        self.headers
            .as_ref()
            .and_then(|headers| headers.get(USER_AGENT))
            .and_then(Option::as_deref)
            .unwrap_or(DEFAULT_USER_AGENT)
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
