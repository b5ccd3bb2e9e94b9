//! # Webide Core
//!
//! Session model for the web IDE workbench.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Session                           │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────────────┐ │
//! │  │  FileStore  │ │  Terminal   │ │      EventBus       │ │
//! │  └─────────────┘ └─────────────┘ └─────────────────────┘ │
//! │         │                                                │
//! │  ┌──────┴───────────┐      ┌──────────────────────────┐  │
//! │  │ preview::compose │ ───▶ │ PreviewPipeline ─▶ Surface│ │
//! │  └──────────────────┘      └──────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is owned by one caller and mutated through `&mut`.
//! Only the preview pipeline runs on a background task.

pub mod config;
pub mod document;
pub mod editor;
pub mod event;
pub mod language;
pub mod pipeline;
pub mod preview;
pub mod samples;
pub mod session;
pub mod terminal;

pub use config::Config;
pub use document::{Document, DocumentId, FileStore};
pub use editor::{EditorOptions, EditorView, ThemeMode};
pub use event::{EventBus, EventHandler, SessionEvent};
pub use language::Language;
pub use pipeline::{PreviewFrame, PreviewPipeline, ReadySignal, RenderSurface};
pub use preview::compose;
pub use session::{RunOutcome, Session};
pub use terminal::Terminal;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("A file named {0} already exists")]
    NameTaken(String),

    #[error("No HTML file found to run")]
    NoHtmlFound,

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Render surface error: {0}")]
    Surface(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
