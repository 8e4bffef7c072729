use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use tracing::info;

use covid_timeline::app::App;
use covid_timeline::cli::{parse_args, run_cli_command};
use covid_timeline::config::AppConfig;
use covid_timeline::data::{load_data, DataPaths};
use covid_timeline::logging::init_logging;
use covid_timeline::terminal::{setup_panic_hook, TerminalManager};
use covid_timeline::ui;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = parse_args(std::env::args());
    let mut config = AppConfig::from_env();
    if let Some(root) = args.data_root {
        config = config.with_data_root(root);
    }

    if let Some(result) = run_cli_command(&args.command, &config) {
        return result;
    }

    init_logging(&config)?;
    info!(data_root = %config.data_root.display(), "Starting covid-timeline");

    // Data errors are fatal; report them before touching the terminal
    let store = Arc::new(load_data(&DataPaths::from_root(&config.data_root))?);
    let mut app = App::new(store)?;

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;

    info!("Exiting covid-timeline");
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    while !app.should_quit {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        match event_stream.next().await {
            Some(Ok(Event::Key(key))) => app.handle_key(key),
            Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
            Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
            Some(Ok(_)) => {}
            Some(Err(e)) => return Err(e.into()),
            None => break,
        }
    }

    Ok(())
}
