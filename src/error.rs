use std::fmt::{self, Display};

use crate::model::DecodePosition;

#[derive(Debug, Clone)]
pub struct JsonGraphError {
    pub message: String,
    pub decode_position: Option<DecodePosition>,
}

impl JsonGraphError {
    pub fn new(message: impl Into<String>, pos: Option<DecodePosition>) -> Self {
        let message = message.into();
        let message = if let Some(p) = pos {
            format!("{} at line {}, column {}", message, p.line, p.column)
        } else {
            message
        };
        Self { message, decode_position: pos }
    }

    pub fn simple(message: impl Into<String>) -> Self {
        Self::new(message, None)
    }
}

impl Display for JsonGraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for JsonGraphError {}

impl From<serde_json::Error> for JsonGraphError {
    fn from(err: serde_json::Error) -> Self {
        let pos = DecodePosition { line: err.line(), column: err.column() };
        // serde_json reports line 0 for errors with no meaningful location
        if pos.line == 0 {
            Self::simple(err.to_string())
        } else {
            Self { message: err.to_string(), decode_position: Some(pos) }
        }
    }
}
