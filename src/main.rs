use std::{fs, io, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use katui::config::Config;
use katui::{handlers, logic, ui, utils, App};

/// Terminal browser for card image catalogs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Catalog host; enough on its own when there is no config file
    #[arg(long)]
    base_url: Option<String>,

    /// Where downloaded images are saved
    #[arg(long)]
    download_dir: Option<PathBuf>,

    /// Enable debug logging to katui-debug.log in the temp directory
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, g/G)
    #[arg(long)]
    vim: bool,

    /// Re-fetch the manifest on every navigation instead of caching it
    #[arg(long)]
    no_cache: bool,
}

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_path = utils::get_debug_log_path();
    let log_dir = log_path.parent().map(PathBuf::from).unwrap_or_else(std::env::temp_dir);
    let file_name = log_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "katui-debug.log".to_string());

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,katui=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

/// Determine the config file path with fallback logic
///
/// Returns `None` when no file exists in any default location.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/katui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("katui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match get_config_path(args.config.clone())? {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            let text = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
            Config::from_yaml(&text).with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => {
            let Some(base_url) = &args.base_url else {
                let expected = dirs::config_dir()
                    .map(|dir| dir.join("katui").join("config.yaml").display().to_string())
                    .unwrap_or_else(|| "~/.config/katui/config.yaml".to_string());
                anyhow::bail!(
                    "Config file not found. Expected locations:\n\
                     1. {} (preferred)\n\
                     2. ./config.yaml (fallback)\n\
                     \n\
                     Use --config <path> to specify a custom location, or pass --base-url.",
                    expected
                );
            };
            Config::with_base_url(base_url)
        }
    };

    // Override config with CLI flags
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(dir) = &args.download_dir {
        config.download_dir = Some(dir.clone());
    }
    if args.vim {
        config.vim_mode = true;
    }
    if args.no_cache {
        config.cache_manifest = false;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // The terminal belongs to the UI; logs only go to a file
    let _log_guard = args.debug.then(init_logging);
    tracing::info!("katui starting");

    let config = load_config(&args)?;
    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("exiting with error: {:#}", e);
    }

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.should_quit() {
            break;
        }

        // Service responses and finished previews (non-blocking)
        app.process_responses();

        // A long-press may have reached its deadline while we waited
        app.tick_gestures(Instant::now());

        // Preview only after the selection has settled
        app.maybe_load_preview();

        // Wake up in time for an armed long-press
        let timeout = logic::ui::poll_timeout(app.model.display.press_deadline(), Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => handlers::handle_key(app, key),
                Event::Mouse(mouse) => handlers::handle_mouse(app, mouse, Instant::now()),
                _ => {}
            }
        }
    }

    Ok(())
}
