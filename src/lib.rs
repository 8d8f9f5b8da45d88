//! Product Manager: a terminal client for a products REST backend.
//!
//! It lists the products the backend knows about, re-fetches them on demand
//! and adds new ones through a validated two-field form.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal runtime (main.rs)                         │  ← crossterm + tokio
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling / awaited controller              │
//! │  - Form validation                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ API Layer     │   │ Worker Layer  │
//! │ (ui/)         │   │ (api/)        │   │ (worker/)     │
//! │ - Rendering   │   │ - ProductApi  │   │ - tokio tasks │
//! │ - Theming     │   │ - reqwest     │   │ - responses   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Product, errors (domain/)                        │
//! │  - Config and data paths (infrastructure/)          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing → OpenTelemetry → OTLP JSON file         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Read from `--config PATH`, or `<config dir>/config.toml` when present
//! (`$XDG_CONFIG_HOME/product-manager` or `~/.config/product-manager`):
//!
//! ```toml
//! api_base_url = "https://localhost:7054/api"
//! accept_invalid_certs = false
//! theme_name = "slate"
//! # theme_file = "~/themes/mine.toml"
//! trace_level = "debug"
//! # data_dir = "~/.local/share/product-manager"
//! ```
//!
//! Command line flags override file values.
//!
//! # Example
//!
//! ```rust
//! use product_manager::{handle_event, initialize, Config, Event};
//!
//! let config = Config::from_toml_str("theme_name = \"slate\"").unwrap();
//! let mut state = initialize(&config);
//! assert_eq!(state.theme.name, "slate");
//!
//! let (render, actions) = handle_event(&mut state, &Event::Startup);
//! assert!(render && !actions.is_empty());
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, ProductController};
pub use domain::{Product, ProductManagerError, Result};
pub use ui::Theme;

use infrastructure::paths;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://localhost:7054/api";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the products API, without the `/products` suffix.
    pub api_base_url: String,

    /// Skip TLS certificate validation. Only for local backends with
    /// self-signed certificates.
    pub accept_invalid_certs: bool,

    /// Built-in theme: `ocean` or `slate`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Filter for exported spans: `trace`, `debug`, `info`, `warn`, `error`
    /// or any `EnvFilter` directive. `RUST_LOG` takes precedence.
    pub trace_level: Option<String>,

    /// Where the trace file goes. Defaults to the platform data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            accept_invalid_certs: false,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            data_dir: None,
        }
    }
}

impl Config {
    /// Parses a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ProductManagerError::Config`] on malformed TOML or unknown keys.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(contents).map_err(|e| ProductManagerError::Config(format!("invalid config: {e}")))?;

        if let Some(dir) = config.data_dir.take() {
            config.data_dir = Some(dir.to_str().map_or(dir.clone(), paths::expand_tilde));
        }
        Ok(config)
    }

    /// Loads configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist. The default `<config dir>/config.toml`
    /// is optional; without it the defaults apply.
    ///
    /// # Errors
    ///
    /// Returns [`ProductManagerError::Config`] if the file cannot be read or
    /// parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (paths::config_dir().join("config.toml"), false),
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ProductManagerError::Config(format!("failed to read {}: {e}", path.display()))),
        }
    }

    /// Resolves the theme: file, then built-in name, then the default.
    ///
    /// Failures are logged and fall through to the next option.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            match Theme::from_file(paths::expand_tilde(theme_file)) {
                Ok(theme) => return theme,
                Err(e) => tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file"),
            }
        }

        if let Some(theme_name) = &self.theme_name {
            match Theme::from_name(theme_name) {
                Some(theme) => return theme,
                None => tracing::debug!(theme_name = %theme_name, "unknown theme name"),
            }
        }

        Theme::default()
    }
}

/// Creates the initial application state for `config`.
///
/// No request is issued here; the runtime sends [`Event::Startup`] once the
/// terminal is ready.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_base_url = %config.api_base_url, "initializing product manager");
    AppState::new(config.resolve_theme())
}
