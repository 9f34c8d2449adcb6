use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, time::Duration};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sandtui::{
    api::SandmanClient,
    config::Config,
    handlers,
    model::Model,
    services::api::spawn_api_service,
    ui, utils, App,
};

/// Sandman sandbox configuration TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp dir (sandtui-debug.log)
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (j/k, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Backend base URL (overrides config)
    #[arg(short, long)]
    url: Option<String>,

    /// Directory for downloaded .wsb files (overrides config)
    #[arg(long)]
    download_dir: Option<PathBuf>,
}

/// Install the file logger; the guard must live until exit
fn init_logging(debug: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    if !debug {
        return None;
    }

    let log_path = utils::get_debug_log_path();
    let dir = log_path.parent().map(PathBuf::from).unwrap_or_else(std::env::temp_dir);
    let file_name = log_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "sandtui-debug.log".into());

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sandtui=debug")))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    let _log_guard = init_logging(args.debug);
    tracing::info!("sandtui starting");

    // Load configuration
    let (mut config, config_path) = Config::load(args.config.as_deref())?;
    tracing::info!(?config_path, "configuration loaded");

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(url) = args.url {
        config.base_url = url;
    }
    if let Some(dir) = args.download_dir {
        config.download_dir = dir;
    }

    let client = SandmanClient::new(config.base_url.clone(), config.request_timeout())?;
    let (api_tx, api_rx) = spawn_api_service(client);

    let model = Model::new(config.base_url.clone(), config.vim_mode);
    let mut app = App::new(model, api_tx, api_rx, config.download_dir.clone());

    // The Configurations tab is active at startup
    app.load_configs();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Notification dismissal and the delayed post-create tab switch
        app.tick();

        if app.model.ui.should_quit {
            tracing::info!("quitting");
            break;
        }

        // Process API responses (non-blocking)
        app.drain_api_responses();

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }
    }

    Ok(())
}
