//! Session orchestration.
//!
//! `Session` is the single source of truth for the workbench: documents,
//! the active pointer, the terminal transcript and the UI flags the
//! model cares about. The editor widget and the preview only ever see
//! snapshots taken from it.
//!
//! ## Thread Safety
//!
//! `Session` is owned by one task and mutated through `&mut`. Preview
//! delivery happens elsewhere (see [`crate::pipeline`]); `run` only
//! produces the page.

use crate::config::Config;
use crate::document::{Document, DocumentId, FileStore};
use crate::editor::{EditorOptions, EditorView, ThemeMode};
use crate::event::{EventBus, SessionEvent};
use crate::language::Language;
use crate::preview;
use crate::samples::sample_documents;
use crate::terminal::{Terminal, TerminalCommand};
use crate::{CoreError, CoreResult};

/// Result of the `run` action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// A page was composed and should be sent to the surface
    Page(String),
    /// No HTML document exists; nothing to render
    NoHtml,
}

/// The main session state.
pub struct Session {
    /// Documents and the active pointer
    files: FileStore,

    /// Terminal transcript
    terminal: Terminal,

    /// Language used by `create_file`
    selected_language: Language,

    /// Whether the preview panel is visible
    show_preview: bool,

    /// Current theme
    theme: ThemeMode,

    /// Options applied when the editor mounts
    editor_options: EditorOptions,

    /// Event bus for notifications
    event_bus: EventBus,
}

impl Session {
    /// Creates a session with default configuration and sample documents.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates a session from configuration.
    pub fn with_config(config: &Config) -> Self {
        let files = if config.session.seed_samples {
            FileStore::from_documents(sample_documents())
        } else {
            FileStore::new()
        };

        Self {
            files,
            terminal: Terminal::new(&config.terminal),
            selected_language: config.session.language,
            show_preview: config.ui.show_preview,
            theme: config.ui.theme,
            editor_options: config.editor.clone(),
            event_bus: EventBus::new(),
        }
    }

    // ==================== Documents ====================

    /// Creates a new file in the selected language and focuses it.
    pub fn create_file(&mut self) -> DocumentId {
        let id = self.files.create(self.selected_language).id();
        self.emit(SessionEvent::DocumentCreated(id));
        self.emit(SessionEvent::ActiveChanged(Some(id)));
        id
    }

    /// Renames a file. The caller has already confirmed.
    pub fn rename_file(&mut self, id: DocumentId, new_name: &str) -> CoreResult<bool> {
        let previous_active = self.files.active_id();
        let renamed = self.files.rename(id, new_name)?;
        if renamed {
            self.emit(SessionEvent::DocumentRenamed {
                id,
                name: new_name.trim().to_string(),
            });
            if previous_active != Some(id) {
                self.emit(SessionEvent::ActiveChanged(Some(id)));
            }
        }
        Ok(renamed)
    }

    /// Deletes a file. The caller has already confirmed.
    pub fn delete_file(&mut self, id: DocumentId) -> CoreResult<Document> {
        let previous_active = self.files.active_id();
        let removed = self.files.delete(id)?;
        self.emit(SessionEvent::DocumentDeleted(id));
        if self.files.active_id() != previous_active {
            self.emit(SessionEvent::ActiveChanged(self.files.active_id()));
        }
        Ok(removed)
    }

    /// Focuses a file.
    pub fn select_file(&mut self, id: DocumentId) -> CoreResult<()> {
        if self.files.select(id)? {
            self.emit(SessionEvent::ActiveChanged(Some(id)));
        }
        Ok(())
    }

    /// Replaces a file's content.
    pub fn edit_file(&mut self, id: DocumentId, content: impl Into<String>) -> CoreResult<()> {
        self.files.edit(id, content)?;
        self.emit(SessionEvent::DocumentChanged(id));
        Ok(())
    }

    /// Looks a file up by name.
    pub fn find(&self, name: &str) -> CoreResult<DocumentId> {
        self.files
            .find_by_name(name)
            .map(Document::id)
            .ok_or_else(|| CoreError::FileNotFound(name.to_string()))
    }

    /// Returns the document store.
    pub fn files(&self) -> &FileStore {
        &self.files
    }

    // ==================== Editor ====================

    /// Returns what the editor widget should display.
    pub fn editor_view(&self) -> Option<EditorView> {
        self.files
            .active()
            .map(|doc| EditorView::of(doc, self.theme))
    }

    /// Applies a change reported by the editor widget to the active file.
    ///
    /// Ignored when nothing is active.
    pub fn apply_editor_change(&mut self, text: impl Into<String>) {
        if let Some(id) = self.files.active_id() {
            // active ids always resolve
            let _ = self.edit_file(id, text);
        }
    }

    /// Returns the options applied when the editor mounts.
    pub fn editor_options(&self) -> &EditorOptions {
        &self.editor_options
    }

    // ==================== Terminal ====================

    /// Runs one terminal line.
    pub fn submit_terminal(&mut self, input: &str) -> TerminalCommand {
        self.terminal.set_input(input);
        let command = self.terminal.submit(self.files.names());
        if command == TerminalCommand::Clear {
            self.emit(SessionEvent::TranscriptCleared);
        } else {
            self.emit(SessionEvent::TranscriptAppended);
        }
        command
    }

    /// Returns the terminal.
    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    // ==================== Preview ====================

    /// Composes the preview and records the attempt in the transcript.
    ///
    /// Shows the preview panel in both cases.
    pub fn run(&mut self) -> RunOutcome {
        self.set_preview_visible(true);

        let outcome = match preview::compose(self.files.documents()) {
            Ok(page) => RunOutcome::Page(page),
            Err(CoreError::NoHtmlFound) => RunOutcome::NoHtml,
            Err(e) => {
                tracing::warn!("Preview composition failed: {}", e);
                RunOutcome::NoHtml
            }
        };

        self.terminal
            .record_run(matches!(outcome, RunOutcome::Page(_)));
        self.emit(SessionEvent::TranscriptAppended);
        outcome
    }

    /// Records that the pipeline accepted a page.
    pub fn note_preview_queued(&self, generation: u64) {
        self.emit(SessionEvent::PreviewComposed(generation));
    }

    /// Flips preview panel visibility.
    pub fn toggle_preview(&mut self) -> bool {
        self.set_preview_visible(!self.show_preview);
        self.show_preview
    }

    /// Returns true if the preview panel is visible.
    pub fn preview_visible(&self) -> bool {
        self.show_preview
    }

    fn set_preview_visible(&mut self, visible: bool) {
        if self.show_preview != visible {
            self.show_preview = visible;
            self.emit(SessionEvent::PreviewToggled(visible));
        }
    }

    // ==================== UI State ====================

    /// Picks the language for new files.
    pub fn select_language(&mut self, language: Language) {
        if self.selected_language != language {
            self.selected_language = language;
            self.emit(SessionEvent::LanguageSelected(language));
        }
    }

    /// Returns the language for new files.
    pub fn selected_language(&self) -> Language {
        self.selected_language
    }

    /// Sets the theme.
    pub fn set_theme(&mut self, theme: ThemeMode) {
        if self.theme != theme {
            self.theme = theme;
            self.emit(SessionEvent::ThemeChanged(theme));
        }
    }

    /// Returns the theme.
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    // ==================== Events ====================

    /// Subscribes to session events.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<SessionEvent> {
        self.event_bus.subscribe()
    }

    fn emit(&self, event: SessionEvent) {
        self.event_bus.emit(event);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
