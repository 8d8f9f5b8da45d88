//! Terminal runtime for the product manager.
//!
//! Owns the terminal and the tokio runtime, and wires the library together:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  control loop (this task)    │  ← AppState, rendering
//! │   select! {                  │
//! │     key / resize events ─────┼──▶ handle_event ──▶ actions
//! │     worker responses  ◀──────┼─┐                     │
//! │   }                          │ │                     ▼
//! └──────────────────────────────┘ │        ProductWorker::dispatch
//!                                  └──── tokio task per backend call
//! ```
//!
//! # Keybindings
//!
//! - `Tab` / `Shift+Tab` / `Up` / `Down`: switch between name and price
//! - `Enter`: add product
//! - `F5` / `Ctrl+R`: refresh list
//! - `Esc` / `Ctrl+C`: quit

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{Event as TerminalEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use futures_util::StreamExt;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::mpsc;

use product_manager::api::HttpProductApi;
use product_manager::worker::ProductWorker;
use product_manager::{handle_event, observability, Action, AppState, Config, Event, Result};

/// Command-line arguments. Flags override the configuration file.
#[derive(Debug, Parser)]
#[command(name = "product-manager", version, about = "Terminal client for a products REST backend")]
struct Args {
    /// Configuration file (default: <config dir>/product-manager/config.toml)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Products API base URL, e.g. https://localhost:7054/api
    #[arg(long, env = "PRODUCT_MANAGER_API_URL")]
    api_url: Option<String>,

    /// Accept invalid TLS certificates. Local development only.
    #[arg(long)]
    insecure: bool,

    /// Built-in theme name (ocean, slate)
    #[arg(long)]
    theme: Option<String>,

    /// Custom TOML theme file
    #[arg(long)]
    theme_file: Option<String>,

    /// Trace filter level; RUST_LOG takes precedence
    #[arg(long)]
    trace_level: Option<String>,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(api_url) = self.api_url {
            config.api_base_url = api_url;
        }
        if self.insecure {
            config.accept_invalid_certs = true;
        }
        if self.theme.is_some() {
            config.theme_name = self.theme;
        }
        if self.theme_file.is_some() {
            config.theme_file = self.theme_file;
        }
        if self.trace_level.is_some() {
            config.trace_level = self.trace_level;
        }
    }
}

/// Raw mode plus alternate screen for as long as the guard lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        // restores on drop even if a later step fails
        let guard = Self;
        enable_raw_mode()?;
        io::stdout().execute(EnterAlternateScreen)?.execute(Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = io::stdout().execute(Show).and_then(|out| out.execute(LeaveAlternateScreen));
        let _ = disable_raw_mode();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let args_config = args.config.clone();

    let mut config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("product-manager: {e}");
            return ExitCode::FAILURE;
        }
    };
    args.apply(&mut config);

    if !io::stdout().is_terminal() {
        eprintln!("product-manager: this program requires a terminal");
        return ExitCode::FAILURE;
    }

    if let Some(trace_file) = observability::init_tracing(&config) {
        tracing::info!(trace_file = %trace_file.display(), "tracing initialized");
    }
    tracing::debug!(
        config_file = ?args_config,
        api_base_url = %config.api_base_url,
        accept_invalid_certs = config.accept_invalid_certs,
        "configuration loaded"
    );

    match run(&config).await {
        Ok(()) => {
            tracing::info!("exited normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "exited with error");
            eprintln!("product-manager: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the UI until the user quits.
async fn run(config: &Config) -> Result<()> {
    let api = Arc::new(HttpProductApi::new(config)?);
    tracing::info!(base_url = %api.base_url(), "starting product manager");

    let (responses_tx, mut responses) = mpsc::unbounded_channel();
    let worker = ProductWorker::new(api, responses_tx);
    let mut state = product_manager::initialize(config);

    let _terminal = TerminalGuard::enter()?;
    let mut stdout = io::stdout();
    let mut events = EventStream::new();

    dispatch(&mut state, &worker, &Event::Startup);
    draw(&state, &mut stdout)?;

    while !state.should_quit {
        let event = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(terminal_event)) => match map_terminal_event(&terminal_event) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(response) = responses.recv() => Event::WorkerResponse(response),
        };

        if dispatch(&mut state, &worker, &event) {
            draw(&state, &mut stdout)?;
        }
    }

    Ok(())
}

/// Handles one event and executes the resulting actions. Returns whether
/// the screen needs redrawing.
fn dispatch(state: &mut AppState, worker: &ProductWorker<HttpProductApi>, event: &Event) -> bool {
    let (should_render, actions) = handle_event(state, event);
    tracing::trace!(action_count = actions.len(), should_render, "event handled");

    for action in actions {
        execute_action(worker, action);
    }
    should_render
}

fn execute_action(worker: &ProductWorker<HttpProductApi>, action: Action) {
    match action {
        Action::Quit => tracing::debug!("quit requested"),
        Action::PostToWorker(message) => {
            // detached; completion arrives as a worker response
            drop(worker.dispatch(message));
        }
    }
}

fn draw(state: &AppState, out: &mut impl Write) -> io::Result<()> {
    let (cols, rows) = crossterm::terminal::size()?;
    let frame = product_manager::ui::render(state, usize::from(rows), usize::from(cols));
    out.write_all(frame.as_bytes())?;
    out.flush()
}

fn map_terminal_event(event: &TerminalEvent) -> Option<Event> {
    match event {
        TerminalEvent::Key(key) => map_key_event(key),
        TerminalEvent::Resize(..) => Some(Event::Resize),
        _ => None,
    }
}

fn map_key_event(key: &KeyEvent) -> Option<Event> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    Some(match key.code {
        KeyCode::Char('c') if ctrl => Event::Quit,
        KeyCode::Char('r') if ctrl => Event::Refresh,
        KeyCode::F(5) => Event::Refresh,
        KeyCode::Esc => Event::Quit,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => Event::NextField,
        KeyCode::Enter => Event::SubmitForm,
        KeyCode::Backspace => Event::Backspace,
        KeyCode::Char(c) if !ctrl => Event::Char(c),
        _ => return None,
    })
}
