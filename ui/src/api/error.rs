//! Failure taxonomy for backend calls.
//!
//! Every failure a caller can see is one of these variants; nothing in the
//! client panics across its boundary. Missing or partially-populated result
//! sections are *not* errors; they are absorbed by defaults when the JSON is
//! decoded (see `api::model`).

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Request never produced an HTTP response (refused, DNS, timeout, body read).
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-2xx response; message comes from the body's `error` field when present.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// 2xx response whose body did not match the expected shape.
    #[error("unexpected response from backend: {0}")]
    Decode(String),

    /// Required form fields missing; raised before any request is sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }

    pub(crate) fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }
}
