//! Terminal User Interface Module
//!
//! Feature-gated TUI: draft editor, structured result panel, history table.
//!
//! # Architecture
//!
//! ```text
//! key event ──▶ Action ──▶ Session transition ──▶ spawned transport call
//!                                   ▲                      │
//!                                   └── CallOutcome (mpsc) ┘
//! ```
//!
//! The app loop in [`app`] is the single owner of the [`Session`]; the view
//! in [`ui`] is a pure projection of it.
//!
//! [`Session`]: crate::session::Session

mod app;
mod theme;
pub mod ui;

pub use app::{Action, App};
pub use theme::Theme;

use crate::client::ReportClient;
use crate::config::AdrepConfig;
use crate::error::Result;

/// Run the TUI against the configured backend origin.
pub async fn run_tui(config: &AdrepConfig, backend_override: Option<&str>) -> Result<()> {
    let client = ReportClient::new(config.backend_origin(backend_override))?;
    let app = App::new(client);
    app.run().await
}
