use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use tickr::App;
use tickr::config::{self, ConfigResult};
use tickr::search::{SearchClient, SearchState};

/// Interactive stock ticker search
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive stock ticker search with live results as you type"
)]
struct Args {
    /// Initial search text
    query: Option<String>,

    /// Search endpoint, queried as <ENDPOINT>?query=<text>
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Delay after the last keystroke before searching
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Exit on the first navigation and print its route
    #[arg(long)]
    print_route: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/tickr-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/tickr-debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== TICKR DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    let search_config = config_result
        .config
        .clone()
        .with_overrides(args.endpoint, args.debounce_ms)
        .search;

    // Fails on a bad endpoint before the terminal is touched
    let client = SearchClient::new(&search_config)?;

    let terminal = init_terminal()?;

    // Worker chains its panic hook after the terminal's, so spawn it second
    let search = SearchState::new(client, search_config.debounce_ms);

    let mut app = App::new(search, args.print_route);
    if let Some(query) = args.query.as_deref() {
        app = app.with_initial_query(query);
    }

    let result = run(terminal, app, config_result);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    if let Some(route) = app.output_route() {
        println!("{}", route);
    }

    #[cfg(debug_assertions)]
    log::debug!("=== TICKR DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<App> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
