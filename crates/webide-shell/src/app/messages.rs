#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // File operations
    CreateFile,
    SelectFile(String),
    ShowFiles,

    // Rename prompt
    RequestRename(String),
    RenameInputChanged(String),
    RenameConfirm,
    RenameCancel,

    // Delete confirmation
    RequestDelete(String),
    ConfirmDeleteYes,
    ConfirmDeleteCancel,

    // Editor
    BeginEdit,
    EditLine(String),
    FinishEdit,
    AbortEdit,
    ShowActive,

    // Header controls
    SelectLanguage(String),
    ToggleTheme,
    Run,
    TogglePreview,

    // Terminal
    TerminalSubmit(String),

    // App
    Help,
    Quit,
    Invalid(String),
}

/// What the input loop does after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}
