//! Editor widget binding.
//!
//! The text-editing widget is external. The session hands it a snapshot
//! of the active document plus a theme name, applies a fixed set of
//! cosmetic options once when the widget mounts, and takes full-content
//! replacements back on every change.

use serde::{Deserialize, Serialize};

use crate::document::{Document, DocumentId};
use crate::language::Language;

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Returns the editor widget's theme name.
    pub fn editor_theme(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "vs-dark",
            ThemeMode::Light => "vs-light",
        }
    }

    /// Returns the opposite mode.
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// What the editor widget displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub document: DocumentId,
    pub name: String,
    pub text: String,
    pub language: Language,
    pub theme: &'static str,
}

impl EditorView {
    /// Snapshots a document for display.
    pub fn of(doc: &Document, theme: ThemeMode) -> Self {
        Self {
            document: doc.id(),
            name: doc.name().to_string(),
            text: doc.content().to_string(),
            language: doc.language(),
            theme: theme.editor_theme(),
        }
    }
}

/// Options applied when the editor widget mounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Font stack
    pub font_family: String,

    /// Font size in points
    pub font_size: f32,

    /// Line height multiplier
    pub line_height: f32,

    /// Show minimap
    pub minimap: bool,

    /// Soft-wrap long lines
    pub word_wrap: bool,

    /// Allow scrolling past the last line
    pub scroll_beyond_last_line: bool,

    /// Animate scrolling
    pub smooth_scrolling: bool,

    /// Cursor blink style
    pub cursor_blinking: CursorBlinking,

    /// Animate caret movement
    pub smooth_caret_animation: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            font_family: "'Fira Code', 'Consolas', 'Monaco', monospace".to_string(),
            font_size: 14.0,
            line_height: 1.5,
            minimap: true,
            word_wrap: true,
            scroll_beyond_last_line: false,
            smooth_scrolling: true,
            cursor_blinking: CursorBlinking::Smooth,
            smooth_caret_animation: true,
        }
    }
}

/// Cursor blink style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorBlinking {
    Blink,
    #[default]
    Smooth,
    Phase,
    Expand,
    Solid,
}

impl CursorBlinking {
    /// Returns the widget's name for the style.
    pub fn as_str(&self) -> &'static str {
        match self {
            CursorBlinking::Blink => "blink",
            CursorBlinking::Smooth => "smooth",
            CursorBlinking::Phase => "phase",
            CursorBlinking::Expand => "expand",
            CursorBlinking::Solid => "solid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_names() {
        assert_eq!(ThemeMode::Dark.editor_theme(), "vs-dark");
        assert_eq!(ThemeMode::Light.editor_theme(), "vs-light");
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_view_snapshot() {
        let doc = Document::new("main.py", Language::Python, "print(1)");
        let view = EditorView::of(&doc, ThemeMode::Light);
        assert_eq!(view.document, doc.id());
        assert_eq!(view.text, "print(1)");
        assert_eq!(view.language.id(), "python");
        assert_eq!(view.theme, "vs-light");
    }

    #[test]
    fn test_default_options() {
        let options = EditorOptions::default();
        assert_eq!(options.font_size, 14.0);
        assert_eq!(options.line_height, 1.5);
        assert!(options.minimap);
        assert!(!options.scroll_beyond_last_line);
    }
}
