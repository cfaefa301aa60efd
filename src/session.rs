//! Session state machine.
//!
//! Owns the three pieces of session state — draft text, last processing
//! result, recent-history list — plus the transient notice and per-call-kind
//! in-flight counters. All mutation goes through the transition methods
//! below; resolved transport calls are applied at a single point
//! ([`Session::apply`]), one outcome at a time, so the view projector never
//! observes a half-applied response.
//!
//! Ordering across calls of the same kind is last-resolved-wins: whichever
//! response reaches `apply` last determines the final value, regardless of
//! issue order.

use crate::error::AdrepError;
use crate::model::{HistoryEntry, ProcessedReport};

/// Resolved transport call, fed back into the session.
#[derive(Debug)]
pub enum CallOutcome {
    Submit(Result<ProcessedReport, AdrepError>),
    Refresh(Result<Vec<HistoryEntry>, AdrepError>),
    Translate {
        lang: String,
        result: Result<String, AdrepError>,
    },
}

/// Follow-up request the caller must issue after applying an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// A successful submit chains a history refresh.
    RefreshHistory,
}

/// Transient notice shown on the status line until dismissed or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

impl Notice {
    fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Outstanding request counters, for spinner text only.
///
/// Counters, not flags: nothing blocks a second submit while the first is
/// outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InFlight {
    pub submitting: u32,
    pub refreshing: u32,
    pub translating: u32,
}

impl InFlight {
    pub fn any(&self) -> bool {
        self.submitting > 0 || self.refreshing > 0 || self.translating > 0
    }
}

/// The session state container.
///
/// Fields are private: the enumerated transitions are the only mutation
/// surface, read access goes through the accessors.
#[derive(Debug, Default)]
pub struct Session {
    draft: String,
    result: Option<ProcessedReport>,
    history: Option<Vec<HistoryEntry>>,
    notice: Option<Notice>,
    in_flight: InFlight,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── accessors ───────────────────────────────────────────────

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn result(&self) -> Option<&ProcessedReport> {
        self.result.as_ref()
    }

    pub fn history(&self) -> Option<&[HistoryEntry]> {
        self.history.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn in_flight(&self) -> InFlight {
        self.in_flight
    }

    /// True once the UI may offer translation: a result with an outcome.
    pub fn can_translate(&self) -> bool {
        self.result
            .as_ref()
            .and_then(|r| r.outcome.as_deref())
            .is_some()
    }

    // ─── transitions ─────────────────────────────────────────────

    /// `EditDraft`: always legal, no network effect.
    pub fn edit_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// `Submit`: snapshot the draft for sending. No preconditions — an empty
    /// draft is forwarded, the backend is the validation authority.
    pub fn begin_submit(&mut self) -> String {
        self.in_flight.submitting = self.in_flight.submitting.saturating_add(1);
        self.draft.clone()
    }

    /// `RefreshHistory`: mark a refresh as outstanding.
    pub fn begin_refresh(&mut self) {
        self.in_flight.refreshing = self.in_flight.refreshing.saturating_add(1);
    }

    /// `Translate`: returns the outcome text to translate, or `None` when no
    /// result with an outcome is present (the only legal source field).
    pub fn begin_translate(&mut self) -> Option<String> {
        let text = self.result.as_ref()?.outcome.clone()?;
        self.in_flight.translating = self.in_flight.translating.saturating_add(1);
        Some(text)
    }

    /// Dismiss the transient notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Apply one resolved transport call.
    ///
    /// The single point where responses mutate state. A failed call leaves
    /// every state field untouched (no partial application); a successful
    /// submit or refresh replaces its field wholesale.
    pub fn apply(&mut self, outcome: CallOutcome) -> Option<FollowUp> {
        match outcome {
            CallOutcome::Submit(Ok(report)) => {
                self.in_flight.submitting = self.in_flight.submitting.saturating_sub(1);
                self.result = Some(report);
                Some(FollowUp::RefreshHistory)
            }
            CallOutcome::Submit(Err(err)) => {
                self.in_flight.submitting = self.in_flight.submitting.saturating_sub(1);
                tracing::warn!("submit failed: {}", err);
                self.notice = Some(Notice::error(format!(
                    "Submit failed: {}",
                    err.notice_text()
                )));
                None
            }
            CallOutcome::Refresh(Ok(entries)) => {
                self.in_flight.refreshing = self.in_flight.refreshing.saturating_sub(1);
                self.history = Some(entries);
                None
            }
            CallOutcome::Refresh(Err(err)) => {
                self.in_flight.refreshing = self.in_flight.refreshing.saturating_sub(1);
                // Best-effort refresh: keep the last good list, log only.
                tracing::warn!("history refresh failed: {}", err);
                None
            }
            CallOutcome::Translate {
                lang,
                result: Ok(translation),
            } => {
                self.in_flight.translating = self.in_flight.translating.saturating_sub(1);
                self.notice = Some(Notice::info(format!(
                    "Translation ({}): {}",
                    lang, translation
                )));
                None
            }
            CallOutcome::Translate {
                lang,
                result: Err(err),
            } => {
                self.in_flight.translating = self.in_flight.translating.saturating_sub(1);
                tracing::warn!("translate ({}) failed: {}", lang, err);
                self.notice = Some(Notice::error(format!(
                    "Translate ({}) failed: {}",
                    lang,
                    err.notice_text()
                )));
                None
            }
        }
    }
}
