//! adrep — terminal client for an adverse-event report backend
//!
//! ## Module Responsibilities
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`model`] | Wire types: `ProcessedReport`, `HistoryEntry` |
//! | [`client`] | HTTP transport (`ReportClient`): submit, history, translate |
//! | [`session`] | Interaction state machine (`Session`, `CallOutcome`) |
//! | [`tui`] | Ratatui front end: app loop + pure view projection |
//! | [`config`] | Backend origin resolution |
//! | [`error`] | Error types with diagnostic codes |

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod session;

#[cfg(feature = "tui")]
pub mod tui;

// Public API re-exports
pub use client::ReportClient;
pub use config::AdrepConfig;
pub use error::AdrepError;
pub use model::{HistoryEntry, ProcessedReport};
pub use session::{CallOutcome, FollowUp, Session};
