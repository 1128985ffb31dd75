use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::app::{App, Focus};
use crate::flag::country_flag;
use crate::search::SearchResults;
use crate::theme;
use crate::widgets::scrollbar;

pub const PROMPT_MESSAGE: &str = "Search Stocks ...";
pub const NO_MATCHES_MESSAGE: &str = "No Stocks Matching Search";

/// Each result occupies a ticker line and a name line
const ROW_HEIGHT: usize = 2;

const HIGHLIGHT_SYMBOL: &str = "► ";

/// Render the results pane: prompt, no-matches message or the result list
pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) -> Rect {
    let border_color = if app.focus == Focus::ResultsList {
        theme::results::BORDER_FOCUSED
    } else {
        theme::results::BORDER_UNFOCUSED
    };

    let results = app.search.results();
    let title = if app.search.query().is_empty() {
        " Results ".to_string()
    } else {
        format!(" Results ({}) ", results.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(title, Style::default().fg(theme::results::TITLE)))
        .border_style(Style::default().fg(border_color));

    if app.search.query().is_empty() {
        render_message(frame, area, block, PROMPT_MESSAGE);
        return area;
    }
    if results.is_empty() {
        render_message(frame, area, block, NO_MATCHES_MESSAGE);
        return area;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let content_width = inner_width.saturating_sub(HIGHLIGHT_SYMBOL.chars().count() + 1);
    let items: Vec<ListItem> = results
        .iter()
        .map(|result| build_row(result, content_width))
        .collect();
    let total = items.len();

    let list = List::new(items)
        .block(block)
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_style(Style::default().bg(theme::results::SELECTED_BG));

    frame.render_stateful_widget(list, area, app.results_list.list_state_mut());

    let viewport = (area.height.saturating_sub(2) as usize) / ROW_HEIGHT;
    scrollbar::render_vertical_scrollbar(
        frame,
        area,
        total,
        viewport,
        app.results_list.offset(),
        theme::results::SCROLLBAR,
    );

    area
}

/// Build a two-line row: ticker with the flag pushed to the right, then the name
fn build_row(result: &SearchResults, width: usize) -> ListItem<'static> {
    let doc = &result.document;

    let ticker = Span::styled(
        doc.ticker.clone(),
        Style::default()
            .fg(theme::results::TICKER)
            .add_modifier(theme::results::TICKER_MODIFIER),
    );
    let flag = Span::raw(country_flag(&doc.country));
    let padding = width.saturating_sub(ticker.width() + flag.width());

    let first = Line::from(vec![ticker, Span::raw(" ".repeat(padding)), flag]);
    let second = Line::from(Span::styled(
        doc.name.clone(),
        Style::default().fg(theme::results::NAME),
    ));

    ListItem::new(vec![first, second])
}

fn render_message(frame: &mut Frame, area: Rect, block: Block, message: &str) {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Vertically centered in the upper three quarters, like a prompt card
    let target_height = inner.height * 3 / 4;
    let message_area = Rect {
        x: inner.x,
        y: inner.y + target_height.saturating_sub(1) / 2,
        width: inner.width,
        height: 1.min(inner.height),
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default()
            .fg(theme::results::EMPTY_STATE)
            .add_modifier(theme::results::EMPTY_STATE_MODIFIER),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, message_area);
}

#[cfg(test)]
#[path = "results_render_tests.rs"]
mod results_render_tests;
