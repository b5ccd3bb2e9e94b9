use webide_core::{CoreError, Language, RunOutcome};

use super::{App, Flow, Message};
use crate::input::Mode;

impl App {
    pub fn update(&mut self, message: Message) -> Flow {
        match message {
            Message::CreateFile => {
                let id = self.session.create_file();
                if let Some(doc) = self.session.files().get(id) {
                    self.status_message = format!("Created {}", doc.name());
                }
                let status = self.status_message.clone();
                self.say(status);
            }

            Message::SelectFile(name) => match self.session.find(&name) {
                Ok(id) => {
                    if let Err(e) = self.session.select_file(id) {
                        self.report(e);
                    } else {
                        self.status_message = format!("Editing {name}");
                        self.mount_editor();
                        let view = self.view_editor();
                        self.say(view);
                    }
                }
                Err(e) => self.report(e),
            },

            Message::ShowFiles => {
                let files = self.view_files();
                self.say(files);
            }

            // Rename
            Message::RequestRename(name) => {
                if self.session.files().find_by_name(&name).is_some() {
                    self.rename_input = name.clone();
                    self.mode = Mode::Rename { current: name };
                } else {
                    self.report(CoreError::FileNotFound(name));
                }
            }
            Message::RenameInputChanged(value) => {
                self.rename_input = value;
            }
            Message::RenameConfirm => {
                if let Mode::Rename { current } = std::mem::take(&mut self.mode) {
                    let new_name = std::mem::take(&mut self.rename_input);
                    let result = self
                        .session
                        .find(&current)
                        .and_then(|id| self.session.rename_file(id, &new_name));
                    match result {
                        Ok(true) => {
                            self.status_message = format!("Renamed {current} to {}", new_name.trim());
                            let status = self.status_message.clone();
                            self.say(status);
                        }
                        Ok(false) => {}
                        Err(e) => self.report(e),
                    }
                }
            }
            Message::RenameCancel => {
                self.mode = Mode::Normal;
                self.rename_input.clear();
            }

            // Delete
            Message::RequestDelete(name) => {
                if self.session.files().find_by_name(&name).is_some() {
                    self.mode = Mode::ConfirmDelete { name };
                } else {
                    self.report(CoreError::FileNotFound(name));
                }
            }
            Message::ConfirmDeleteYes => {
                if let Mode::ConfirmDelete { name } = std::mem::take(&mut self.mode) {
                    let result = self
                        .session
                        .find(&name)
                        .and_then(|id| self.session.delete_file(id));
                    match result {
                        Ok(removed) => {
                            self.status_message = format!("Deleted {}", removed.name());
                            let status = self.status_message.clone();
                            self.say(status);
                        }
                        Err(e) => self.report(e),
                    }
                }
            }
            Message::ConfirmDeleteCancel => {
                self.mode = Mode::Normal;
            }

            // Editor
            Message::BeginEdit => match self.session.editor_view() {
                Some(view) => {
                    self.mount_editor();
                    self.capture.clear();
                    self.mode = Mode::Capture;
                    self.say(format!(
                        "Replacing {} ({}). End with '.' on its own line, ':abort' to cancel.",
                        view.name,
                        view.language.display_name()
                    ));
                }
                None => self.say("No file is open"),
            },
            Message::EditLine(line) => {
                if self.mode == Mode::Capture {
                    self.capture.push(line);
                }
            }
            Message::FinishEdit => {
                if self.mode == Mode::Capture {
                    self.mode = Mode::Normal;
                    let text = std::mem::take(&mut self.capture).join("\n");
                    self.session.apply_editor_change(text);
                    self.status_message = "Saved to session".to_string();
                }
            }
            Message::AbortEdit => {
                self.mode = Mode::Normal;
                self.capture.clear();
            }
            Message::ShowActive => {
                self.mount_editor();
                let view = self.view_editor();
                self.say(view);
            }

            // Header controls
            Message::SelectLanguage(name) => match name.parse::<Language>() {
                Ok(language) => {
                    self.session.select_language(language);
                    self.say(format!("New files will be {}", language.display_name()));
                }
                Err(e) => self.report(e),
            },
            Message::ToggleTheme => {
                let theme = self.session.theme().toggled();
                self.session.set_theme(theme);
                self.say(format!("Theme: {}", theme.editor_theme()));
            }
            Message::Run => {
                if let RunOutcome::Page(page) = self.session.run() {
                    if !self.preview.is_running() {
                        self.status_message = "Preview unavailable".to_string();
                        self.say(format!(
                            "Preview unavailable: {} cannot be written",
                            self.preview_path.display()
                        ));
                        return Flow::Continue;
                    }
                    let generation = self.preview.submit(page);
                    self.session.note_preview_queued(generation);
                    self.status_message = format!(
                        "Preview #{generation} -> {}",
                        self.preview_path.display()
                    );
                    let status = self.status_message.clone();
                    self.say(status);
                }
            }
            Message::TogglePreview => {
                let visible = self.session.toggle_preview();
                self.say(if visible { "Preview shown" } else { "Preview hidden" });
            }

            // Terminal
            Message::TerminalSubmit(line) => {
                self.session.submit_terminal(&line);
            }

            // App
            Message::Help => {
                self.say(Self::view_help());
            }
            Message::Quit => return Flow::Quit,
            Message::Invalid(line) => {
                self.say(format!("Unknown command: {line} (try :help)"));
            }
        }

        Flow::Continue
    }

    fn report(&mut self, error: CoreError) {
        tracing::debug!("{}", error);
        self.status_message = error.to_string();
        self.say(format!("Error: {error}"));
    }
}
