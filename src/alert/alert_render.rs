use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::alert_state::AlertState;
use crate::theme;
use crate::widgets::popup;

const MAX_WIDTH: u16 = 50;
const MIN_WIDTH: u16 = 24;

/// Render the alert centered over `area`
///
/// Returns the popup area, or `None` when no alert is showing.
pub fn render_popup(alert: &AlertState, frame: &mut Frame, area: Rect) -> Option<Rect> {
    let message = alert.message()?;

    // borders + one space of padding each side
    let message_width = Span::raw(message).width() as u16;
    let width = (message_width + 4).clamp(MIN_WIDTH, MAX_WIDTH);
    let inner_width = width.saturating_sub(4).max(1);
    let message_lines = message_width.div_ceil(inner_width).max(1);
    // message, blank line, hint, borders
    let height = message_lines + 4;

    let popup_area = popup::centered_in(area, width, height);
    popup::clear_area(frame, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(" Alert ", Style::default().fg(theme::alert::TITLE)))
        .border_style(Style::default().fg(theme::alert::BORDER))
        .style(Style::default().bg(theme::alert::BACKGROUND));

    let text = vec![
        Line::from(Span::styled(
            message,
            Style::default().fg(theme::alert::MESSAGE),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: OK",
            Style::default().fg(theme::alert::DISMISS_HINT),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
    Some(popup_area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::NO_RESULTS_MESSAGE;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(alert: &AlertState, width: u16, height: u16) -> (Option<Rect>, String) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut rect = None;
        terminal
            .draw(|f| {
                let area = f.area();
                rect = render_popup(alert, f, area);
            })
            .unwrap();
        (rect, terminal.backend().to_string())
    }

    #[test]
    fn test_hidden_alert_renders_nothing() {
        let (rect, _) = render(&AlertState::new(), 80, 24);
        assert!(rect.is_none());
    }

    #[test]
    fn test_no_results_alert_is_centered() {
        let mut alert = AlertState::new();
        alert.show(NO_RESULTS_MESSAGE);

        let (rect, output) = render(&alert, 80, 24);
        let rect = rect.unwrap();

        assert!(output.contains(NO_RESULTS_MESSAGE));
        assert!(output.contains("Enter: OK"));
        assert_eq!(rect.x, (80 - rect.width) / 2);
        assert_eq!(rect.y, (24 - rect.height) / 2);
    }

    #[test]
    fn test_long_message_wraps_within_max_width() {
        let mut alert = AlertState::new();
        alert.show(&"network unreachable ".repeat(6));

        let (rect, _) = render(&alert, 120, 30);
        let rect = rect.unwrap();
        assert_eq!(rect.width, MAX_WIDTH);
        assert!(rect.height > 5);
    }
}
