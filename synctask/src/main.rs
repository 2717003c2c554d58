//! `SyncTask`: terminal group task board.
//!
//! Launches the TUI, restores the saved session and task list from disk,
//! and persists after every change. Configuration via CLI flags,
//! environment variables, or config file (`~/.config/synctask/config.toml`).
//!
//! ```bash
//! # Default data directory
//! cargo run --bin synctask
//!
//! # Explicit data directory and verbose logs
//! cargo run --bin synctask -- --data-dir ./boards/demo --log-level debug
//!
//! # Or via environment variables
//! SYNCTASK_DATA_DIR=./boards/demo cargo run
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;

use synctask::app::App;
use synctask::board::TaskBoard;
use synctask::config::{AppConfig, CliArgs};
use synctask::store::{self, FileStore, MemoryStore, PersistRequest, SnapshotStore};
use synctask::ui;

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > defaults).
    let config = match AppConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            AppConfig::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!("synctask starting");

    // Open the record store and restore the board from it.
    let mut store = open_store(&config);
    let board = TaskBoard::restore(store.as_ref());

    // Seeded or repaired records become durable right away.
    let written = store::persist(
        store.as_mut(),
        board.current_user(),
        board.tasks(),
        PersistRequest::Snapshot,
    );
    if let Err(e) = written {
        tracing::warn!(error = %e, "could not write initial records");
    }

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, board, store.as_mut(), &config);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("synctask exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the
/// terminal). Returns a [`WorkerGuard`] that must be held until shutdown
/// to ensure all buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("synctask.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Open the on-disk record store, falling back to an in-memory one.
fn open_store(config: &AppConfig) -> Box<dyn SnapshotStore> {
    let Some(dir) = config.data_dir.as_ref() else {
        tracing::warn!("no data directory available, records will not survive exit");
        return Box::new(MemoryStore::new());
    };
    match FileStore::open(dir.clone()) {
        Ok(file_store) => {
            tracing::info!(dir = %dir.display(), "using data directory");
            Box::new(file_store)
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not open data directory, records will not survive exit");
            Box::new(MemoryStore::new())
        }
    }
}

/// Main application loop.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    board: TaskBoard,
    store: &mut dyn SnapshotStore,
    config: &AppConfig,
) -> io::Result<()> {
    let mut app = App::new(board)
        .with_max_title_len(config.max_title_len)
        .with_timestamp_format(config.timestamp_format.clone());

    loop {
        // Step 1: Draw the UI frame.
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Step 2: Poll for terminal input events.
        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // handle_key_event reports Some(request) when the action
            // changed durable state. A failed write is logged and the
            // session carries on with its in-memory state.
            if let Some(request) = app.handle_key_event(key) {
                let written = store::persist(
                    store,
                    app.board.current_user(),
                    app.board.tasks(),
                    request,
                );
                if let Err(e) = written {
                    tracing::warn!(error = %e, "could not persist records");
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
