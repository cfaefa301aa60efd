//! Adrep Error Types with Error Codes
//!
//! Error code ranges:
//! - ADREP-000-009: Transport errors
//! - ADREP-010-019: Config errors
//! - ADREP-020-029: TUI errors

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdrepError>;

/// All error variants are part of the public API.
///
/// Implements both `thiserror::Error` for std error compatibility
/// and `miette::Diagnostic` for fancy terminal error display.
#[derive(Error, Debug, Diagnostic)]
pub enum AdrepError {
    // ═══════════════════════════════════════════
    // TRANSPORT ERRORS (000-009)
    // ═══════════════════════════════════════════
    #[error("[ADREP-001] Backend unreachable: {message}")]
    #[diagnostic(
        code(adrep::network_unreachable),
        help("Check the backend is running and the origin is correct (adrep --backend <url>)")
    )]
    NetworkUnreachable { message: String },

    #[error("[ADREP-002] Bad response from backend ({status}): {message}")]
    #[diagnostic(
        code(adrep::bad_response),
        help("The backend answered but not with a usable body; check backend logs")
    )]
    BadResponse { status: u16, message: String },

    #[error("[ADREP-003] Unhandled transport error: {message}")]
    #[diagnostic(code(adrep::unhandled))]
    Unhandled { message: String },

    // ═══════════════════════════════════════════
    // CONFIG ERRORS (010-019)
    // ═══════════════════════════════════════════
    #[error("[ADREP-010] Configuration error: {reason}")]
    #[diagnostic(
        code(adrep::config_error),
        help("Check ~/.config/adrep/config.toml and ADREP_BACKEND_URL")
    )]
    ConfigError { reason: String },

    // ═══════════════════════════════════════════
    // TUI ERRORS (020-029)
    // ═══════════════════════════════════════════
    #[error("[ADREP-020] TUI error: {reason}")]
    #[diagnostic(code(adrep::tui_error))]
    TuiError { reason: String },
}

impl AdrepError {
    /// Short user-facing form for the TUI status line.
    pub fn notice_text(&self) -> String {
        match self {
            AdrepError::NetworkUnreachable { .. } => {
                "backend unreachable — is it running?".to_string()
            }
            AdrepError::BadResponse { status, .. } => {
                format!("backend error (HTTP {})", status)
            }
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for AdrepError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            AdrepError::NetworkUnreachable {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            AdrepError::BadResponse {
                status: err.status().map(|s| s.as_u16()).unwrap_or(0),
                message: err.to_string(),
            }
        } else {
            AdrepError::Unhandled {
                message: err.to_string(),
            }
        }
    }
}
