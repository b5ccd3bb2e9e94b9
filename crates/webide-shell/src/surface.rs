//! File-backed rendering surface.
//!
//! Every frame replaces the whole file, the way a preview frame's
//! document is rewritten wholesale. Open the file in a browser to see
//! the page.

use std::path::{Path, PathBuf};

use webide_core::{CoreResult, PreviewFrame, RenderSurface};

/// Writes each preview frame to one HTML file.
#[derive(Debug, Clone)]
pub struct FileSurface {
    path: PathBuf,
}

impl FileSurface {
    /// Creates a surface writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the output path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RenderSurface for FileSurface {
    fn render(&mut self, frame: &PreviewFrame) -> CoreResult<()> {
        std::fs::write(&self.path, frame.html.as_bytes())?;
        tracing::info!(
            "Preview generation {} written to {}",
            frame.generation,
            self.path.display()
        );
        Ok(())
    }
}

/// Creates the directory the surface writes into.
///
/// The surface reports ready once this has completed.
pub async fn prepare_output(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => tokio::fs::create_dir_all(parent).await,
        _ => Ok(()),
    }
}
