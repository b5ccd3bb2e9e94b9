//! Preview delivery.
//!
//! A worker task owns the rendering surface. It waits once for the
//! surface's ready signal, then writes the newest submitted page on the
//! blocking pool. Submissions go
//! through a `watch` channel, which only holds the latest value: a page
//! submitted before the previous one was written replaces it, so two
//! quick runs never race each other onto the surface.
//!
//! ```text
//!  submit(html) ──▶ watch<Option<PreviewFrame>> ──▶ worker ──▶ RenderSurface
//!                                                     ▲
//!                        ReadySignal ── watch<bool> ──┘
//! ```

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::CoreResult;

/// One composed page on its way to the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFrame {
    /// Increases by one per submission, starting at 1
    pub generation: u64,
    /// The complete page markup
    pub html: Arc<str>,
}

/// Something that can display a composed page.
///
/// `render` replaces the whole surface content. It may block; the
/// pipeline calls it off the async runtime.
pub trait RenderSurface: Send + 'static {
    fn render(&mut self, frame: &PreviewFrame) -> CoreResult<()>;
}

/// The surface's side of the readiness handshake.
#[derive(Debug)]
pub struct ReadySignal {
    sender: watch::Sender<bool>,
}

impl ReadySignal {
    /// Creates an unready signal and the receiver the pipeline waits on.
    pub fn new() -> (Self, watch::Receiver<bool>) {
        let (sender, receiver) = watch::channel(false);
        (Self { sender }, receiver)
    }

    /// Lets the pipeline start writing.
    pub fn mark_ready(&self) {
        self.sender.send_replace(true);
    }
}

/// Serializes preview pages onto a surface.
pub struct PreviewPipeline {
    jobs: watch::Sender<Option<PreviewFrame>>,
    delivered: watch::Receiver<u64>,
    generation: u64,
    worker: JoinHandle<()>,
}

impl PreviewPipeline {
    /// Spawns the worker on the current tokio runtime.
    pub fn spawn<S: RenderSurface>(surface: S, ready: watch::Receiver<bool>) -> Self {
        let (jobs, job_rx) = watch::channel(None);
        let (delivered_tx, delivered) = watch::channel(0);
        let worker = tokio::spawn(run_worker(surface, job_rx, ready, delivered_tx));

        Self {
            jobs,
            delivered,
            generation: 0,
            worker,
        }
    }

    /// Queues a page, superseding any page not yet written.
    ///
    /// Returns the page's generation.
    pub fn submit(&mut self, html: impl Into<Arc<str>>) -> u64 {
        self.generation += 1;
        let frame = PreviewFrame {
            generation: self.generation,
            html: html.into(),
        };
        self.jobs.send_replace(Some(frame));
        tracing::debug!("Queued preview generation {}", self.generation);
        self.generation
    }

    /// Returns the generation of the last submitted page (0 if none).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns false once the worker has stopped, e.g. because the
    /// surface was dropped before becoming ready.
    pub fn is_running(&self) -> bool {
        !self.jobs.is_closed()
    }

    /// Returns a receiver tracking the last generation written.
    pub fn delivered(&self) -> watch::Receiver<u64> {
        self.delivered.clone()
    }

    /// Stops accepting pages and waits for the worker to finish.
    ///
    /// A page already queued is still written if the surface is ready.
    pub async fn shutdown(self) {
        drop(self.jobs);
        if let Err(e) = self.worker.await {
            tracing::warn!("Preview worker ended abnormally: {}", e);
        }
    }
}

async fn run_worker<S: RenderSurface>(
    mut surface: S,
    mut jobs: watch::Receiver<Option<PreviewFrame>>,
    mut ready: watch::Receiver<bool>,
    delivered: watch::Sender<u64>,
) {
    if ready.wait_for(|ready| *ready).await.is_err() {
        tracing::warn!("Render surface went away before becoming ready");
        return;
    }

    while jobs.changed().await.is_ok() {
        // Newest page only; undelivered ones are superseded
        let frame = jobs.borrow_and_update().clone();
        let Some(frame) = frame else { continue };

        let rendered = tokio::task::spawn_blocking(move || {
            let result = surface.render(&frame);
            (surface, frame, result)
        })
        .await;

        let (returned, frame, result) = match rendered {
            Ok(parts) => parts,
            Err(e) => {
                tracing::warn!("Render surface panicked: {}", e);
                return;
            }
        };
        surface = returned;

        match result {
            Ok(()) => {
                tracing::debug!("Rendered preview generation {}", frame.generation);
                delivered.send_replace(frame.generation);
            }
            Err(e) => tracing::warn!("Preview generation {} failed: {}", frame.generation, e),
        }
    }
}
