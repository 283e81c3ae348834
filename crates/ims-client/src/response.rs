//! Normalized view of an IMS operations API response body.
//!
//! The API reports per-member completion inside a `messages` object:
//!
//! ```json
//! {
//!   "messages": {
//!     "IMS1": { "rc": "0000000", "rsn": "0000000", "message": "..." }
//!   },
//!   "data": [ { "pgm": "PGM1", "stt": "STOSCHD" } ]
//! }
//! ```
//!
//! A failure there is independent of the HTTP status.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ClientError;

/// Keys that carry a top-level completion code.
const TOP_LEVEL_CODE_KEYS: [&str; 3] = ["returnCode", "rc", "status"];

/// Words that mark a textual status as failed.
const FAILURE_WORDS: [&str; 3] = ["error", "failed", "failure"];

/// A completion code as reported: numeric, or text such as `"0000000C"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReturnCode {
    Numeric(i64),
    Text(String),
}

impl ReturnCode {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(Self::Numeric),
            Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }

    /// Non-zero codes fail. Text made only of hex digits is read as a hex
    /// number; any other text fails only if it is a failure word.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        match self {
            Self::Numeric(n) => *n != 0,
            Self::Text(text) => {
                let text = text.trim();
                if !text.is_empty() && text.chars().all(|c| c.is_ascii_hexdigit()) {
                    u64::from_str_radix(text, 16).map_or(true, |code| code != 0)
                } else {
                    is_failure_word(text)
                }
            }
        }
    }
}

impl std::fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// One completion code and where in the body it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnCodeEntry {
    /// Top-level key (`returnCode`, `rc`, `status`) or IMS member name.
    pub origin: String,
    pub code: ReturnCode,
    /// Reason code, when the member entry carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ReturnCodeEntry {
    /// A top-level `status` is a word or an HTTP-style number; everything
    /// else is a return code.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        if self.origin == "status" {
            return match &self.code {
                ReturnCode::Numeric(n) => *n >= 400,
                ReturnCode::Text(text) => is_failure_word(text.trim()),
            };
        }
        self.code.is_failure()
    }
}

/// Response body reduced to payload, messages and completion codes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    /// The `data` member, or the whole body when it is not an object.
    pub data: Value,
    pub messages: Vec<String>,
    pub return_codes: Vec<ReturnCodeEntry>,
}

impl ResponseEnvelope {
    /// Normalize a parsed JSON body.
    #[must_use]
    pub fn from_json(body: Value) -> Self {
        let Value::Object(mut object) = body else {
            return Self {
                data: body,
                messages: Vec::new(),
                return_codes: Vec::new(),
            };
        };

        let mut return_codes = Vec::new();
        for key in TOP_LEVEL_CODE_KEYS {
            if let Some(code) = object.get(key).and_then(ReturnCode::from_value) {
                return_codes.push(ReturnCodeEntry {
                    origin: key.to_string(),
                    code,
                    reason: None,
                });
            }
        }

        let mut messages = Vec::new();
        match object.remove("messages") {
            Some(Value::Array(items)) => messages.extend(items.iter().map(message_text)),
            Some(Value::Object(members)) => {
                collect_member_messages(members, &mut messages, &mut return_codes);
            }
            Some(Value::String(text)) => messages.push(text),
            _ => {}
        }

        Self {
            data: object.remove("data").unwrap_or(Value::Null),
            messages,
            return_codes,
        }
    }

    /// Entries whose code indicates failure.
    pub fn failures(&self) -> impl Iterator<Item = &ReturnCodeEntry> {
        self.return_codes.iter().filter(|entry| entry.is_failure())
    }

    /// Raise an application-level failure if any completion code failed.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ApplicationFailure`] with the failing codes and
    /// every message of the response.
    pub fn check_return_code(&self) -> Result<(), ClientError> {
        let codes = self
            .failures()
            .map(|entry| format!("{}={}", entry.origin, entry.code))
            .collect::<Vec<_>>();
        if codes.is_empty() {
            return Ok(());
        }
        Err(ClientError::ApplicationFailure {
            codes,
            messages: self.messages.clone(),
        })
    }
}

fn collect_member_messages(
    members: Map<String, Value>,
    messages: &mut Vec<String>,
    return_codes: &mut Vec<ReturnCodeEntry>,
) {
    for (member, entry) in members {
        if let Some(code) = entry.get("rc").and_then(ReturnCode::from_value) {
            return_codes.push(ReturnCodeEntry {
                origin: member.clone(),
                code,
                reason: entry.get("rsn").map(value_text),
            });
        }
        match entry.get("message") {
            Some(Value::Null) | None => {}
            Some(message) => messages.push(format!("{member}: {}", value_text(message))),
        }
    }
}

fn message_text(item: &Value) -> String {
    match item.get("message") {
        Some(message) => value_text(message),
        None => value_text(item),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_failure_word(text: &str) -> bool {
    FAILURE_WORDS
        .iter()
        .any(|word| text.eq_ignore_ascii_case(word))
}
