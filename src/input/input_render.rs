use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

use crate::app::{App, Focus};
use crate::theme;

pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) -> Rect {
    let focused = app.focus == Focus::InputField;
    let border_color = if focused {
        theme::input::BORDER_FOCUSED
    } else {
        theme::input::BORDER_UNFOCUSED
    };

    let mut title = vec![Span::styled(
        " Search ",
        Style::default().fg(theme::input::TITLE),
    )];
    if app.search.is_loading() || app.search.is_submitting() {
        title.push(Span::styled(
            "… ",
            Style::default().fg(theme::input::LOADING),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Line::from(title))
        .border_style(Style::default().fg(border_color));

    let textarea = &mut app.input.textarea;
    textarea.set_block(block);
    textarea.set_cursor_style(if focused {
        theme::input::CURSOR
    } else {
        Style::default()
    });

    frame.render_widget(&*textarea, area);
    area
}
