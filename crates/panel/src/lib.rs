//! `agribase-panel`: the admin panel shell.
//!
//! Wires the domain crates into pages: the login gate decides which page is
//! shown, each page owns its listing and filter inputs, and every simulated
//! server round-trip surfaces through the [`Dialogs`] seam.

pub mod app;
pub mod config;
pub mod dialogs;
pub mod fixtures;
pub mod layout;
pub mod pages;

pub use app::AdminApp;
pub use config::{ConfigError, PanelConfig};
pub use dialogs::{Dialogs, LoggingDialogs, ScriptedDialogs};
pub use fixtures::Catalog;
pub use layout::{ClickTarget, Dropdown, Layout};
