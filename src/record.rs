use crate::level::Level;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::backtrace::Backtrace;
use std::collections::BTreeMap;

/// Key/value pairs attached to a record. Ordering is irrelevant to
/// consumers; a sorted map keeps the encoded form deterministic.
pub type Properties = BTreeMap<String, String>;

/// One structured log record. Built per call, encoded, and discarded.
#[derive(Debug, Serialize)]
pub struct Record {
    level: &'static str,
    time: String,
    message: String,
    properties: Properties,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<String>,
}

impl Record {
    /// Builds a record stamped with the current time. Records at `Error`
    /// severity and above capture a snapshot of the current call stack.
    pub fn new(level: Level, message: impl Into<String>, properties: Option<Properties>) -> Self {
        let trace = (level >= Level::Error).then(|| Backtrace::force_capture().to_string());
        Self {
            level: level.as_str(),
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            message: message.into(),
            properties: properties.unwrap_or_default(),
            trace,
        }
    }

    /// Encodes the record as exactly one newline-terminated JSON line.
    /// Encoding cannot fail from the caller's perspective: a record that
    /// refuses to serialize degrades to a plain-text diagnostic line.
    pub fn to_line(&self) -> Vec<u8> {
        encode_line(self)
    }
}

pub(crate) fn encode_line<T: Serialize>(value: &T) -> Vec<u8> {
    let mut line = match serde_json::to_vec(value) {
        Ok(line) => line,
        // Plain text on purpose: re-entering the JSON encoder here could
        // fail the same way again.
        Err(e) => format!("{}: unable to serialize log message: {e}", Level::Error).into_bytes(),
    };
    line.push(b'\n');
    line
}
