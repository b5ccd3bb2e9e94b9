//! # Webide Shell
//!
//! Line-oriented front end for the webide session.
//!
//! ## Architecture
//!
//! The shell follows the Elm architecture:
//! - **Model**: [`App`] wraps the core `Session` plus prompt state
//! - **Message**: [`app::Message`] values produced by [`input::parse`]
//! - **Update**: `App::update` applies one message
//! - **View**: `app::view` renders text for the terminal
//!
//! Confirmation for rename and delete lives here, as prompt states,
//! so the core operations never ask anything.

pub mod app;
pub mod input;
pub mod surface;

pub use app::{run, App, Flags};
pub use surface::FileSurface;

/// Errors raised by the shell
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Config error: {0}")]
    Config(#[from] webide_core::config::ConfigError),
}
