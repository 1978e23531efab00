//! Browser network log entry.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON pointer to the URL of the request a log entry describes.
const REQUEST_URL_POINTER: &str = "/message/params/request/url";
const METHOD_POINTER: &str = "/message/method";

/// One structured record from the browser's network log, e.g.
/// `{"message": {"method": "Network.requestWillBeSent", "params": {...}}}`.
///
/// The record is kept opaque; fields are read through accessors that return
/// `None` when any level of the path is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogEntry(Value);

impl LogEntry {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Builds an entry from a decoded record.
    ///
    /// WebDriver performance logs wrap each record in an envelope whose
    /// `message` is the record serialized as a string
    /// (`{"level": .., "message": "{\"message\": ..}", "timestamp": ..}`).
    /// Such envelopes are unwrapped; anything else is taken as the record.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        match value.get("message") {
            Some(Value::String(inner)) => Ok(Self(serde_json::from_str(inner)?)),
            _ => Ok(Self(value)),
        }
    }

    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        Self::from_value(serde_json::from_str(s)?)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// `message.params.request.url`, if every level is present and the leaf
    /// is a string.
    pub fn request_url(&self) -> Option<&str> {
        self.0.pointer(REQUEST_URL_POINTER).and_then(Value::as_str)
    }

    /// `message.method` (the DevTools event name), if present.
    pub fn method(&self) -> Option<&str> {
        self.0.pointer(METHOD_POINTER).and_then(Value::as_str)
    }
}

impl From<Value> for LogEntry {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
