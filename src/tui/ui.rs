//! View projection.
//!
//! Pure functions from session state to a rendered frame; recomputed on
//! every draw, no side effects on the session.
//!
//! Layout:
//! ```text
//! ┌ DRAFT ──────────────────────────────────────────┐
//! │ free-text adverse-event report (editable)       │
//! ├ RESULT ─────────────────────────────────────────┤
//! │ drug / adverse events / severity / outcome      │
//! ├ HISTORY (latest 10) ────────────────────────────┤
//! │ id │ drug │ events │ severity │ outcome │ when  │
//! └─────────────────────────────────────────────────┘
//!  status line: spinners · notice · key hints
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use tui_textarea::TextArea;

use crate::model::{field_or_blank, HistoryEntry};
use crate::session::{NoticeKind, Session};

use super::theme::Theme;

/// The history table shows at most this many rows; the transport hands over
/// whatever the backend returns.
pub const HISTORY_DISPLAY_LIMIT: usize = 10;

/// The prefix of the history list that is actually rendered, in server order.
pub fn visible_history(session: &Session) -> &[HistoryEntry] {
    match session.history() {
        Some(entries) => &entries[..entries.len().min(HISTORY_DISPLAY_LIMIT)],
        None => &[],
    }
}

/// Render one full frame from the current session state.
pub fn render_frame(frame: &mut Frame, session: &Session, textarea: &TextArea, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_draft(frame, chunks[0], textarea, theme);
    render_result(frame, chunks[1], session, theme);
    render_history(frame, chunks[2], session, theme);
    render_status(frame, chunks[3], session, theme);
}

fn render_draft(frame: &mut Frame, area: Rect, textarea: &TextArea, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(" DRAFT ", theme.title_style()));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(textarea, inner);
}

fn render_result(frame: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(" RESULT ", theme.title_style()));

    let lines = match session.result() {
        Some(report) => {
            let mut lines = vec![
                field_line("Drug", field_or_blank(report.drug.as_deref()), theme),
                field_line("Adverse events", &report.events_joined(), theme),
                field_line("Severity", field_or_blank(report.severity.as_deref()), theme),
                field_line("Outcome", field_or_blank(report.outcome.as_deref()), theme),
            ];
            if session.can_translate() {
                lines.push(Line::from(Span::styled(
                    "Translate outcome: Ctrl+F → fr · Ctrl+K → sw",
                    theme.muted_style(),
                )));
            }
            lines
        }
        None => vec![Line::from(Span::styled(
            "No processed result yet — Ctrl+S submits the draft",
            theme.muted_style(),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line<'a>(label: &'a str, value: &str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), theme.label_style()),
        Span::styled(
            value.to_string(),
            Style::default().fg(theme.text_primary),
        ),
    ])
}

fn render_history(frame: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(" HISTORY (latest 10) ", theme.title_style()));

    let entries = visible_history(session);
    if session.history().is_none() {
        let hint = Paragraph::new(Span::styled(
            "History not loaded — Ctrl+R refreshes",
            theme.muted_style(),
        ))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let header = Row::new(
        ["ID", "Drug", "Events", "Severity", "Outcome", "Created"]
            .into_iter()
            .map(|h| Cell::from(Span::styled(h, theme.title_style()))),
    );

    let rows = entries.iter().map(|entry| {
        Row::new([
            Cell::from(entry.id.to_string()),
            Cell::from(field_or_blank(entry.drug.as_deref()).to_string()),
            Cell::from(entry.events_joined()),
            Cell::from(field_or_blank(entry.severity.as_deref()).to_string()),
            Cell::from(field_or_blank(entry.outcome.as_deref()).to_string()),
            Cell::from(field_or_blank(entry.created_at.as_deref()).to_string()),
        ])
        .style(Style::default().fg(theme.text_primary))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Percentage(18),
            Constraint::Percentage(30),
            Constraint::Percentage(12),
            Constraint::Percentage(14),
            Constraint::Percentage(22),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

fn render_status(frame: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
    let in_flight = session.in_flight();
    let mut spans: Vec<Span> = Vec::new();

    let mut spinners: Vec<&str> = Vec::new();
    if in_flight.submitting > 0 {
        spinners.push("processing…");
    }
    if in_flight.refreshing > 0 {
        spinners.push("refreshing…");
    }
    if in_flight.translating > 0 {
        spinners.push("translating…");
    }
    if !spinners.is_empty() {
        spans.push(Span::styled(
            format!("{} ", spinners.join(" ")),
            Style::default().fg(theme.accent),
        ));
    }

    match session.notice() {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Info => theme.notice_info,
                NoticeKind::Error => theme.notice_error,
            };
            spans.push(Span::styled(
                format!("{} (Esc dismisses)", notice.text),
                Style::default().fg(color),
            ));
        }
        None => {
            spans.push(Span::styled(
                "Ctrl+S submit · Ctrl+R refresh · Ctrl+Q quit",
                theme.muted_style(),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
