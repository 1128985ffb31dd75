//! Scrollbar drawn on the right border of a bordered list

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Render a vertical scrollbar on the right border of `area`
///
/// Nothing is drawn when every item fits in the viewport. `area` is the full
/// bordered area; the track skips the corner cells.
pub fn render_vertical_scrollbar(
    frame: &mut Frame,
    area: Rect,
    total_items: usize,
    viewport_size: usize,
    scroll_offset: usize,
    color: Color,
) {
    if total_items <= viewport_size || viewport_size == 0 {
        return;
    }

    let track = Rect {
        x: area.x,
        y: area.y.saturating_add(1),
        width: area.width,
        height: area.height.saturating_sub(2),
    };

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(color))
        .track_style(Style::default().fg(color));

    // Ratatui positions the thumb against content_length - 1, so passing
    // max_scroll + 1 lets the thumb reach the bottom at max scroll.
    let max_scroll = total_items.saturating_sub(viewport_size);
    let mut state = ScrollbarState::new(max_scroll + 1)
        .position(scroll_offset.min(max_scroll))
        .viewport_content_length(viewport_size);

    frame.render_stateful_widget(scrollbar, track, &mut state);
}
