//! Response shaping for the lookup API.
//!
//! # Responsibilities
//! - Map the error taxonomy to HTTP status codes
//! - Serialize failures as `{"error": "<message>"}`
//!
//! # Design Decisions
//! - Every error is terminal for the current query; none is fatal to
//!   the process
//! - User-facing messages are fixed strings in the language of the
//!   lookup page; no structured error codes beyond the status

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::lookup::CpfError;
use crate::source::SourceError;

/// Wire shape of a failed lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error taxonomy of the lookup API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The search key does not reduce to 11 digits.
    #[error("invalid CPF")]
    InvalidCpf,

    /// The scan completed without a match.
    #[error("CPF not found")]
    NotFound,

    /// The table provider failed (network, status, timeout, IO).
    #[error("source error: {0}")]
    Source(#[from] SourceError),
}

impl From<CpfError> for ApiError {
    fn from(_: CpfError) -> Self {
        ApiError::InvalidCpf
    }
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidCpf => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Source(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// User-facing message, surfaced verbatim by the lookup page.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::InvalidCpf => "Por favor, digite um CPF válido.",
            ApiError::NotFound => "CPF não encontrado. Verifique e tente novamente.",
            ApiError::Source(_) => "Erro ao buscar dados. Tente novamente.",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorBody {
            error: self.user_message().to_string(),
        });
        (status, body).into_response()
    }
}
