//! Session event notifications.
//!
//! Events are broadcast values; subscribers (the shell's log task, tests)
//! receive clones and never hold references into the session.

use crate::document::DocumentId;
use crate::editor::ThemeMode;
use crate::language::Language;
use tokio::sync::broadcast;

/// Events emitted by the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    // Document events
    /// A document was created
    DocumentCreated(DocumentId),
    /// A document was renamed
    DocumentRenamed { id: DocumentId, name: String },
    /// A document was deleted
    DocumentDeleted(DocumentId),
    /// A document's content changed
    DocumentChanged(DocumentId),
    /// The active document changed (None once the store is empty)
    ActiveChanged(Option<DocumentId>),

    // Terminal events
    /// Lines were appended to the transcript
    TranscriptAppended,
    /// The transcript was cleared
    TranscriptCleared,

    // Preview events
    /// A preview page was composed for the given generation
    PreviewComposed(u64),
    /// The preview panel was shown or hidden
    PreviewToggled(bool),

    // UI events
    /// The language picked for new files changed
    LanguageSelected(Language),
    /// Theme changed
    ThemeChanged(ThemeMode),
}

/// Event bus for broadcasting session events.
pub struct EventBus {
    sender: broadcast::Sender<SessionEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(256);
        Self { sender }
    }

    /// Emits an event to all subscribers.
    pub fn emit(&self, event: SessionEvent) {
        // No receivers is fine
        let _ = self.sender.send(event);
    }

    /// Subscribes to all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

/// Helper for consuming events on a task.
///
/// ```ignore
/// let mut handler = EventHandler::new(session.subscribe());
///
/// tokio::spawn(async move {
///     while let Some(event) = handler.next().await {
///         tracing::debug!("{:?}", event);
///     }
/// });
/// ```
pub struct EventHandler {
    receiver: broadcast::Receiver<SessionEvent>,
}

impl EventHandler {
    /// Creates a new event handler.
    pub fn new(receiver: broadcast::Receiver<SessionEvent>) -> Self {
        Self { receiver }
    }

    /// Waits for the next event; `None` once the bus is gone.
    pub async fn next(&mut self) -> Option<SessionEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!("Event handler lagged, missed {} events", n);
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
