use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::format_market_cap;
use crate::flag::country_flag;
use crate::navigation::Route;
use crate::theme;

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<16}", label),
            Style::default().fg(theme::detail::LABEL),
        ),
        Span::styled(value, Style::default().fg(theme::detail::VALUE)),
    ])
}

fn flag_field(label: &'static str, value: bool) -> Line<'static> {
    let (text, color) = if value {
        ("yes", theme::detail::YES)
    } else {
        ("no", theme::detail::NO)
    };
    Line::from(vec![
        Span::styled(
            format!("  {:<16}", label),
            Style::default().fg(theme::detail::LABEL),
        ),
        Span::styled(text, Style::default().fg(color)),
    ])
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Render the detail card for `route` into `area`
pub fn render_card(route: &Route, frame: &mut Frame, area: Rect) -> Rect {
    let doc = route.document();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            format!(" {} ", route.path()),
            Style::default().fg(theme::detail::ROUTE),
        ))
        .border_style(Style::default().fg(theme::detail::BORDER));

    let country = if doc.country.is_empty() {
        "-".to_string()
    } else {
        format!("{} {}", country_flag(&doc.country), doc.country.to_uppercase())
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                doc.ticker.clone(),
                Style::default()
                    .fg(theme::detail::TICKER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(doc.name.clone(), Style::default().fg(theme::detail::NAME)),
        ]),
        Line::from(""),
        field("Exchange", or_dash(&doc.exchange)),
        field("Country", country),
        field("Sector", or_dash(&doc.sector)),
        field("Industry", or_dash(&doc.industry)),
        field("Market cap", format_market_cap(doc.market_cap)),
        flag_field("S&P 500", doc.is_sp_500()),
        flag_field("Actively trading", doc.is_actively_trading),
        flag_field("ETF", doc.is_etf),
        flag_field("Fund", doc.is_fund),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
    area
}
