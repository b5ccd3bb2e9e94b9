//! Turns input lines into messages.
//!
//! What a line means depends on the prompt the shell is showing. In the
//! normal prompt, lines starting with `:` drive the workbench and every
//! other line goes to the toy terminal.

use crate::app::Message;

/// The prompt the shell is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Terminal prompt; `:` commands available
    #[default]
    Normal,
    /// Asking for a new name for the named file
    Rename { current: String },
    /// Asking whether to delete the named file
    ConfirmDelete { name: String },
    /// Collecting replacement content for the active file
    Capture,
}

/// Ends a capture.
pub const CAPTURE_END: &str = ".";

/// Abandons a capture.
pub const CAPTURE_ABORT: &str = ":abort";

/// Parses one line read in `mode`.
pub fn parse(mode: &Mode, line: &str) -> Vec<Message> {
    match mode {
        Mode::Normal => parse_normal(line),
        Mode::Rename { .. } => {
            let name = line.trim();
            if name.is_empty() {
                vec![Message::RenameCancel]
            } else {
                vec![
                    Message::RenameInputChanged(name.to_string()),
                    Message::RenameConfirm,
                ]
            }
        }
        Mode::ConfirmDelete { .. } => match line.trim().to_lowercase().as_str() {
            "y" | "yes" => vec![Message::ConfirmDeleteYes],
            _ => vec![Message::ConfirmDeleteCancel],
        },
        Mode::Capture => match line.trim_end_matches(['\r', '\n']) {
            CAPTURE_END => vec![Message::FinishEdit],
            CAPTURE_ABORT => vec![Message::AbortEdit],
            text => vec![Message::EditLine(text.to_string())],
        },
    }
}

fn parse_normal(line: &str) -> Vec<Message> {
    let Some(command) = line.trim_start().strip_prefix(':') else {
        return vec![Message::TerminalSubmit(line.to_string())];
    };

    let mut words = command.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let message = match (verb, args.as_slice()) {
        ("new" | "n", []) => Message::CreateFile,
        ("open" | "o", [name]) => Message::SelectFile(name.to_string()),
        ("files" | "ls", []) => Message::ShowFiles,
        ("rename" | "mv", [name]) => Message::RequestRename(name.to_string()),
        ("rename" | "mv", [name, new_name]) => {
            return vec![
                Message::RequestRename(name.to_string()),
                Message::RenameInputChanged(new_name.to_string()),
                Message::RenameConfirm,
            ];
        }
        ("rm" | "delete", [name]) => Message::RequestDelete(name.to_string()),
        ("edit" | "e", []) => Message::BeginEdit,
        ("cat" | "show", []) => Message::ShowActive,
        ("lang", [language]) => Message::SelectLanguage(language.to_string()),
        ("lang", many) if !many.is_empty() => Message::SelectLanguage(many.join(" ")),
        ("theme", []) => Message::ToggleTheme,
        ("run" | "r", []) => Message::Run,
        ("preview" | "p", []) => Message::TogglePreview,
        ("help" | "h", []) => Message::Help,
        ("quit" | "q", []) => Message::Quit,
        _ => Message::Invalid(line.trim().to_string()),
    };

    vec![message]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_lines_pass_through() {
        assert_eq!(
            parse(&Mode::Normal, "echo :hi"),
            [Message::TerminalSubmit("echo :hi".to_string())]
        );
        assert_eq!(parse(&Mode::Normal, ""), [Message::TerminalSubmit(String::new())]);
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse(&Mode::Normal, ":new"), [Message::CreateFile]);
        assert_eq!(parse(&Mode::Normal, "  :run "), [Message::Run]);
        assert_eq!(
            parse(&Mode::Normal, ":open styles.css"),
            [Message::SelectFile("styles.css".to_string())]
        );
        assert_eq!(
            parse(&Mode::Normal, ":lang C#"),
            [Message::SelectLanguage("C#".to_string())]
        );
        assert_eq!(
            parse(&Mode::Normal, ":open"),
            [Message::Invalid(":open".to_string())]
        );
    }

    #[test]
    fn test_inline_rename() {
        assert_eq!(
            parse(&Mode::Normal, ":mv a.js b.js"),
            [
                Message::RequestRename("a.js".to_string()),
                Message::RenameInputChanged("b.js".to_string()),
                Message::RenameConfirm,
            ]
        );
    }

    #[test]
    fn test_prompt_modes() {
        let rename = Mode::Rename {
            current: "a.js".to_string(),
        };
        assert_eq!(parse(&rename, "  "), [Message::RenameCancel]);
        assert_eq!(
            parse(&rename, " b.js "),
            [
                Message::RenameInputChanged("b.js".to_string()),
                Message::RenameConfirm
            ]
        );

        let delete = Mode::ConfirmDelete {
            name: "a.js".to_string(),
        };
        assert_eq!(parse(&delete, "Y"), [Message::ConfirmDeleteYes]);
        assert_eq!(parse(&delete, ""), [Message::ConfirmDeleteCancel]);
    }

    #[test]
    fn test_capture() {
        assert_eq!(
            parse(&Mode::Capture, "  indented"),
            [Message::EditLine("  indented".to_string())]
        );
        assert_eq!(parse(&Mode::Capture, "."), [Message::FinishEdit]);
        assert_eq!(parse(&Mode::Capture, ":abort"), [Message::AbortEdit]);
    }
}
