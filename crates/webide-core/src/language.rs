//! Language registry.
//!
//! A static table of the languages the editor widget is asked to
//! highlight. Each entry carries the widget's language id, a display
//! name for the picker and the extension used for new file names.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::CoreError;

/// A language the workbench knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    JavaScript,
    TypeScript,
    Html,
    Css,
    Python,
    Java,
    CSharp,
    Cpp,
    Go,
    Ruby,
    Rust,
    Php,
    Swift,
    Kotlin,
}

impl Language {
    /// All languages, in picker order.
    pub const ALL: [Language; 14] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Html,
        Language::Css,
        Language::Python,
        Language::Java,
        Language::CSharp,
        Language::Cpp,
        Language::Go,
        Language::Ruby,
        Language::Rust,
        Language::Php,
        Language::Swift,
        Language::Kotlin,
    ];

    /// Returns the identifier understood by the editor widget.
    pub fn id(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Html => "html",
            Language::Css => "css",
            Language::Python => "python",
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::Cpp => "cpp",
            Language::Go => "go",
            Language::Ruby => "ruby",
            Language::Rust => "rust",
            Language::Php => "php",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
        }
    }

    /// Returns the display name shown in the language picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::CSharp => "C#",
            Language::Cpp => "C++",
            Language::Go => "Go",
            Language::Ruby => "Ruby",
            Language::Rust => "Rust",
            Language::Php => "PHP",
            Language::Swift => "Swift",
            Language::Kotlin => "Kotlin",
        }
    }

    /// Returns the file extension (without the dot).
    pub fn extension(&self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
            Language::Html => "html",
            Language::Css => "css",
            Language::Python => "py",
            Language::Java => "java",
            Language::CSharp => "cs",
            Language::Cpp => "cpp",
            Language::Go => "go",
            Language::Ruby => "rb",
            Language::Rust => "rs",
            Language::Php => "php",
            Language::Swift => "swift",
            Language::Kotlin => "kt",
        }
    }

    /// Looks a language up by its widget id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.id() == id)
    }

    /// Looks a language up by file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        Self::ALL.into_iter().find(|lang| lang.extension() == ext)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    /// Accepts an id (`csharp`), a display name (`C#`) or an extension (`cs`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::from_id(&needle.to_lowercase())
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|lang| lang.display_name().eq_ignore_ascii_case(needle))
            })
            .or_else(|| Self::from_extension(needle))
            .ok_or_else(|| CoreError::UnknownLanguage(needle.to_string()))
    }
}
