use anyhow::{Context, Result};
use clap::Parser;
use flashdeck::cli::{self, print_error, Cli, CliContext};
use flashdeck::styles::init_theme;
use flashdeck::utils::get_log_dir;
use flashdeck::{App, DeckError};
use tracing_appender::non_blocking::WorkerGuard;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Log to a file in the cache directory. The TUI owns the terminal, so
/// nothing is logged to stdout or stderr.
fn init_logging() -> Result<WorkerGuard> {
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "flashdeck.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn run_tui(no_colors: bool) -> Result<()> {
    setup_panic_hook();

    let ctx = CliContext::load()?;
    init_theme(ctx.config.theme_type(no_colors));

    let mut app = App::new(ctx.config, ctx.config_path, ctx.deck);
    app.run()
}

fn main() {
    let cli = Cli::parse();

    // Logging is best-effort; the app still works without it
    let guard = match init_logging() {
        Ok(guard) => Some(guard),
        Err(err) => {
            cli::print_warning(&format!("Logging disabled: {:#}", err));
            None
        }
    };

    let result = match cli.command {
        Some(command) => cli::run(command),
        None => run_tui(cli.no_colors),
    };

    if let Err(err) = &result {
        let user_error = err
            .downcast_ref::<DeckError>()
            .is_some_and(DeckError::is_user_error);
        if !user_error {
            tracing::error!("{:#}", err);
        }
    }

    // Flush buffered log lines before a possible process::exit
    drop(guard);

    if let Err(err) = result {
        print_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}
