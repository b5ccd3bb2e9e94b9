//! Toy terminal.
//!
//! A transcript of lines plus an interpreter for four verbs:
//! `help`, `clear`, `ls` and `echo <text>`. Nothing is executed.
//! Submissions are evaluated synchronously, so the processing state is
//! never observable from outside.

use serde::{Deserialize, Serialize};

/// Line printed by `help`.
pub const HELP_TEXT: &str = "Available commands: help, clear, ls, echo [text]";

/// Printed after `run` when a preview page was produced.
pub const RUN_STARTED: &str = "Running HTML in preview panel...";

/// Printed after `run` when no HTML document exists.
pub const RUN_NO_HTML: &str = "Error: No HTML file found to run";

/// A recognized terminal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    Help,
    Clear,
    Ls,
    Echo(String),
    Empty,
    Unknown(String),
}

impl TerminalCommand {
    /// Parses one submitted line.
    ///
    /// Verbs are matched case-insensitively on the trimmed input; the
    /// text after `echo ` keeps its original case.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return TerminalCommand::Empty;
        }

        if trimmed.eq_ignore_ascii_case("help") {
            TerminalCommand::Help
        } else if trimmed.eq_ignore_ascii_case("clear") {
            TerminalCommand::Clear
        } else if trimmed.eq_ignore_ascii_case("ls") {
            TerminalCommand::Ls
        } else if let Some(text) = strip_prefix_ignore_case(trimmed, "echo ") {
            TerminalCommand::Echo(text.to_string())
        } else {
            TerminalCommand::Unknown(trimmed.to_string())
        }
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

/// Terminal appearance and greeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Prompt marker prefixed to echoed input
    pub prompt: String,

    /// Lines shown in a fresh transcript
    pub greeting: Vec<String>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "$".to_string(),
            greeting: vec![
                "Welcome to Web IDE Terminal".to_string(),
                "Type 'help' for a list of commands".to_string(),
            ],
        }
    }
}

/// The terminal transcript and input line.
#[derive(Debug, Clone)]
pub struct Terminal {
    prompt: String,
    transcript: Vec<String>,
    input: String,
    /// Bumped by every `clear`
    clears: u64,
}

impl Terminal {
    /// Creates a terminal showing the configured greeting.
    pub fn new(config: &TerminalConfig) -> Self {
        Self {
            prompt: config.prompt.clone(),
            transcript: config.greeting.clone(),
            input: String::new(),
            clears: 0,
        }
    }

    /// Returns the transcript lines.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Returns how many times the transcript has been cleared.
    ///
    /// Readers that remember a position in the transcript restart from
    /// zero when this changes.
    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    /// Returns the pending input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the pending input.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Returns the prompt marker.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Submits the pending input and clears it.
    ///
    /// `names` backs the `ls` command.
    pub fn submit<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) -> TerminalCommand {
        let input = std::mem::take(&mut self.input);
        self.execute(&input, names)
    }

    /// Evaluates one line against the transcript.
    pub fn execute<'a>(
        &mut self,
        input: &str,
        names: impl IntoIterator<Item = &'a str>,
    ) -> TerminalCommand {
        let command = TerminalCommand::parse(input);
        tracing::debug!("terminal: {:?}", command);

        if command == TerminalCommand::Clear {
            self.clear();
            return command;
        }

        self.echo_input(input);
        match &command {
            TerminalCommand::Help => self.push(HELP_TEXT),
            TerminalCommand::Ls => {
                let listing = names.into_iter().collect::<Vec<_>>().join("\n");
                self.push(listing);
            }
            TerminalCommand::Echo(text) => self.push(text.clone()),
            TerminalCommand::Unknown(input) => self.push(format!("Command not found: {input}")),
            TerminalCommand::Empty | TerminalCommand::Clear => {}
        }

        command
    }

    /// Appends the `run` record for a preview attempt.
    pub fn record_run(&mut self, produced_page: bool) {
        self.echo_input("run");
        self.push(if produced_page { RUN_STARTED } else { RUN_NO_HTML });
    }

    /// Empties the transcript.
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.clears += 1;
    }

    fn echo_input(&mut self, input: &str) {
        let line = format!("{} {}", self.prompt, input);
        self.transcript.push(line);
    }

    fn push(&mut self, line: impl Into<String>) {
        self.transcript.push(line.into());
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(&TerminalConfig::default())
    }
}
