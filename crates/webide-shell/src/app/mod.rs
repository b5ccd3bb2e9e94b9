use std::io::Write;
use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, BufReader};
use webide_core::{Config, EventHandler, PreviewPipeline, ReadySignal, Session, ThemeMode};

use crate::input::{self, Mode};
use crate::surface::{self, FileSurface};
use crate::ShellError;

pub mod messages;
pub mod update;
pub mod view;

pub use messages::*;

/// Launch options collected by the binary.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Config file to load instead of the default location
    pub config: Option<PathBuf>,
    /// Where preview pages are written
    pub preview_out: Option<PathBuf>,
    /// Start without the sample documents
    pub empty: bool,
    /// Start with the light theme
    pub light: bool,
}

impl Flags {
    /// Loads the configuration and applies command-line overrides.
    pub fn load_config(&self) -> Result<Config, ShellError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load(),
        };

        if let Some(out) = &self.preview_out {
            config.preview.output = out.clone();
        }
        if self.empty {
            config.session.seed_samples = false;
        }
        if self.light {
            config.ui.theme = ThemeMode::Light;
        }

        Ok(config)
    }
}

pub struct App {
    pub session: Session,
    pub mode: Mode,
    pub status_message: String,
    pub rename_input: String,
    pub capture: Vec<String>,
    pub preview: PreviewPipeline,
    pub preview_path: PathBuf,
    /// Transcript lines already shown
    printed_transcript: usize,
    /// Terminal clear count when `printed_transcript` was taken
    printed_clears: u64,
    /// Lines produced by the last updates, not yet shown
    output: Vec<String>,
    /// Whether the editor pane has been shown once
    editor_mounted: bool,
}

impl App {
    pub fn new(config: &Config, preview: PreviewPipeline) -> Self {
        let session = Session::with_config(config);
        Self {
            printed_clears: session.terminal().clear_count(),
            session,
            mode: Mode::default(),
            status_message: "Ready | :help for commands".to_string(),
            rename_input: String::new(),
            capture: Vec::new(),
            preview,
            preview_path: config.preview.output.clone(),
            printed_transcript: 0,
            output: Vec::new(),
            editor_mounted: false,
        }
    }

    /// Queues a line for display.
    pub fn say(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }

    /// Takes everything that should be printed since the last call:
    /// new transcript lines first, then shell output.
    pub fn drain_output(&mut self) -> Vec<String> {
        let terminal = self.session.terminal();
        if terminal.clear_count() != self.printed_clears {
            self.printed_clears = terminal.clear_count();
            self.printed_transcript = 0;
        }

        let transcript = terminal.transcript();
        let mut lines: Vec<String> = transcript[self.printed_transcript..].to_vec();
        self.printed_transcript = transcript.len();
        lines.append(&mut self.output);
        lines
    }

    /// Announces the editor options the first time the pane is shown.
    fn mount_editor(&mut self) {
        if !self.editor_mounted && self.session.editor_view().is_some() {
            self.editor_mounted = true;
            let options = self.view_editor_options();
            self.say(options);
        }
    }

    /// Feeds one input line through parse and update.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        for message in input::parse(&self.mode, line) {
            if self.update(message) == Flow::Quit {
                return Flow::Quit;
            }
        }
        Flow::Continue
    }
}

/// Runs the shell on stdin/stdout until `:quit` or end of input.
pub async fn run(flags: Flags) -> anyhow::Result<()> {
    let config = flags.load_config()?;

    let (ready_signal, ready) = ReadySignal::new();
    let preview = PreviewPipeline::spawn(FileSurface::new(&config.preview.output), ready);

    // Writes wait until the output directory exists
    let output_path = config.preview.output.clone();
    tokio::spawn(async move {
        match surface::prepare_output(&output_path).await {
            Ok(()) => ready_signal.mark_ready(),
            Err(e) => tracing::warn!("Preview output unavailable: {}", e),
        }
    });

    let mut app = App::new(&config, preview);

    let mut events = EventHandler::new(app.session.subscribe());
    tokio::spawn(async move {
        while let Some(event) = events.next().await {
            tracing::debug!("Session event: {:?}", event);
        }
    });

    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", app.view_files())?;
    for line in app.drain_output() {
        writeln!(stdout, "{line}")?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(stdout, "{}", app.view_prompt())?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let flow = app.handle_line(&line);
        for line in app.drain_output() {
            writeln!(stdout, "{line}")?;
        }
        if flow == Flow::Quit {
            break;
        }
    }

    tracing::info!("Shutting down");
    app.preview.shutdown().await;
    Ok(())
}
