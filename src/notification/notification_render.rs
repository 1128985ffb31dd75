use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

/// Render the notification overlay in the top-right corner of the frame
///
/// Call after the main UI so the notification lands on top.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };
    let colors = notif.kind.colors();

    // message + 2 padding + 2 borders
    let notification_width = Span::raw(notif.message.as_str()).width() as u16 + 4;
    let notification_height = 3;

    let frame_area = frame.area();
    let margin = 2;
    let area = Rect {
        x: frame_area
            .width
            .saturating_sub(notification_width + margin),
        y: margin,
        width: notification_width.min(frame_area.width.saturating_sub(margin * 2)),
        height: notification_height.min(frame_area.height.saturating_sub(margin * 2)),
    };

    if area.width < 5 || area.height < 3 {
        return;
    }

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border).bg(colors.bg))
        .style(Style::default().bg(colors.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(colors.fg).bg(colors.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}
