use crate::app::app_state::App;
use crate::app::Focus;
use crate::test_utils::test_helpers::{app_with_results, key, sample_results, test_app};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::KeyCode;

const TEST_WIDTH: u16 = 80;
const TEST_HEIGHT: u16 = 24;

pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_empty_query_shows_prompt() {
    let (mut app, _worker) = test_app();
    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Search Stocks ..."));
    assert!(output.contains("Search stocks ..."));
    assert!(!output.contains("No Stocks Matching Search"));
}

#[test]
fn test_no_matches_message() {
    let (mut app, _worker) = app_with_results("qqqqq", Vec::new());
    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("No Stocks Matching Search"));
    assert!(output.contains("Results (0)"));
}

#[test]
fn test_results_list_rows() {
    let (mut app, _worker) = app_with_results("a", sample_results());
    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Results (3)"));
    for text in ["AAPL", "Apple Inc.", "APP", "AppLovin Corporation", "ASML"] {
        assert!(output.contains(text), "missing {}", text);
    }
    assert!(output.contains("►"));
}

#[test]
fn test_results_render_in_service_order() {
    let (mut app, _worker) = app_with_results("a", sample_results());
    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    let apple = output.find("Apple Inc.").unwrap();
    let applovin = output.find("AppLovin").unwrap();
    let asml = output.find("ASML Holding").unwrap();
    assert!(apple < applovin && applovin < asml);
}

#[test]
fn test_pending_request_shows_loading_marker() {
    let (mut app, _worker) = test_app();
    app.handle_key_event(key(KeyCode::Char('a')));
    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Search …"));
}

#[test]
fn test_detail_view_after_navigation() {
    let (mut app, _worker) = app_with_results("a", sample_results());
    app.select_row(0);
    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("/AAPL"));
    assert!(output.contains("Apple Inc."));
    assert!(!output.contains("AppLovin"));
}

#[test]
fn test_alert_drawn_over_screen() {
    let (mut app, _worker) = test_app();
    app.handle_key_event(key(KeyCode::Enter));
    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("No results were found for search."));
}

#[test]
fn test_help_line_follows_focus() {
    let (mut app, _worker) = app_with_results("a", sample_results());
    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);
    assert!(output.contains("Submit"));

    app.focus = Focus::ResultsList;
    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);
    assert!(output.contains("Open"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let (mut app, _worker) = app_with_results("a", sample_results());
    render_to_string(&mut app, 10, 5);
    app.select_row(0);
    render_to_string(&mut app, 10, 5);
}
