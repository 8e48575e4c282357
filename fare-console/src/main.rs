//! taxi-billing - terminal client for the fare service
//!
//! Reads `FARE_SERVER_URL`, `CALCULATE_TIMEOUT_SECS` and `SAVE_TIMEOUT_SECS`.

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use fare_client::{ClientConfig, FareApi, FareClient};
use fare_console::{App, Command, ui::ui};
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 文件可选
    let _ = dotenv::dotenv();

    // Initialize TUI Logger with Tracing
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .init();
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    let config = ClientConfig::from_env();
    let client = FareClient::new(&config)?;
    tracing::info!("Fare service: {}", client.base_url());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(client);
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

async fn run_app<A: FareApi>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<A>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        match app.on_key(key) {
            Command::Quit => return Ok(()),
            Command::Run(action) => {
                // Busy indicator is on screen for the whole call
                app.busy = Some(action);
                terminal.draw(|f| ui(f, app))?;
                app.run(action).await;
            }
            Command::None => {}
        }
    }
}
