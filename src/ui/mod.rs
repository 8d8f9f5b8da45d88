//! Terminal rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: display-ready view model types
//! - [`renderer`]: top-level rendering entry points
//! - [`components`]: per-section renderers
//! - [`helpers`]: screen buffer and text utilities
//! - [`theme`]: color schemes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use helpers::Frame;
pub use renderer::{render, render_frame};
pub use theme::Theme;
pub use viewmodel::{
    EmptyState, FooterInfo, FormView, HeaderInfo, InputView, ListBody, ListHeader, ListView, ProductRow,
    RefreshControl, UIViewModel,
};
