use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Focus};
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.alert.is_visible() {
        hints!["Enter" => "OK", "Ctrl+C" => "Quit"]
    } else if app.router.current().is_some() {
        hints!["Esc" => "Back", "Ctrl+C" => "Quit"]
    } else if app.focus == Focus::ResultsList {
        hints!["↑/↓" => "Select", "Enter" => "Open", "Tab" => "Edit Search", "Ctrl+C" => "Quit"]
    } else {
        hints!["Enter" => "Submit", "Tab/↓" => "Results", "Esc" => "Back", "Ctrl+C" => "Quit"]
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

/// Status shown after the hints: worker trouble or a pending submit
fn status_span(app: &App) -> Option<Span<'static>> {
    if let Some(error) = app.search.worker_error() {
        return Some(Span::styled(
            format!("   {}", error),
            Style::default().fg(theme::help_line::ERROR),
        ));
    }
    if app.search.is_submitting() {
        return Some(Span::styled(
            "   Searching…",
            Style::default().fg(theme::help_line::STATUS),
        ));
    }
    None
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_context_hints(app);
    let mut spans = build_styled_spans(&hints);
    spans.extend(status_span(app));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
