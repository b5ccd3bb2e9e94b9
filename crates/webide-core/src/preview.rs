//! Preview composition.
//!
//! Builds one standalone HTML page out of the first `.html`, `.css` and
//! `.js` documents in the store. The splice is a literal substring
//! search: the style block lands before the first `</head>`, the script
//! block before the first `</body>`. Markup is never parsed, and a
//! missing marker means the block is dropped.

use crate::document::Document;
use crate::{CoreError, CoreResult};

const HEAD_CLOSE: &str = "</head>";
const BODY_CLOSE: &str = "</body>";

/// The documents a preview is built from.
#[derive(Debug, Clone, Copy)]
pub struct PreviewSources<'a> {
    pub html: &'a Document,
    pub css: Option<&'a Document>,
    pub js: Option<&'a Document>,
}

impl<'a> PreviewSources<'a> {
    /// Picks the first HTML, CSS and JS documents by name suffix.
    ///
    /// The JS match is a plain `.js` suffix test that excludes `.json`.
    pub fn select(documents: &'a [Document]) -> CoreResult<Self> {
        let html = documents
            .iter()
            .find(|doc| doc.has_suffix(".html"))
            .ok_or(CoreError::NoHtmlFound)?;
        let css = documents.iter().find(|doc| doc.has_suffix(".css"));
        let js = documents
            .iter()
            .find(|doc| doc.has_suffix(".js") && !doc.has_suffix(".json"));

        Ok(Self { html, css, js })
    }

    /// Splices the sources into one page.
    pub fn render(&self) -> String {
        let mut page = self.html.content().to_string();

        if let Some(css) = self.css {
            let style = format!("<style>\n{}\n</style>\n", css.content());
            match insert_before(&page, HEAD_CLOSE, &style) {
                Some(spliced) => page = spliced,
                None => tracing::debug!("{} has no {HEAD_CLOSE}, dropping {}", self.html.name(), css.name()),
            }
        }

        if let Some(js) = self.js {
            let script = format!("\n<script>\n{}\n</script>\n", js.content());
            match insert_before(&page, BODY_CLOSE, &script) {
                Some(spliced) => page = spliced,
                None => tracing::debug!("{} has no {BODY_CLOSE}, dropping {}", self.html.name(), js.name()),
            }
        }

        page
    }
}

/// Composes the preview page for a document set.
///
/// Fails with [`CoreError::NoHtmlFound`] when no document name ends in
/// `.html`.
pub fn compose(documents: &[Document]) -> CoreResult<String> {
    PreviewSources::select(documents).map(|sources| sources.render())
}

/// Inserts `insert` before the first occurrence of `marker`.
fn insert_before(haystack: &str, marker: &str, insert: &str) -> Option<String> {
    let at = haystack.find(marker)?;
    let mut out = String::with_capacity(haystack.len() + insert.len());
    out.push_str(&haystack[..at]);
    out.push_str(insert);
    out.push_str(&haystack[at..]);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn doc(name: &str, content: &str) -> Document {
        let language = name
            .rsplit('.')
            .next()
            .and_then(Language::from_extension)
            .unwrap_or_default();
        Document::new(name, language, content)
    }

    #[test]
    fn test_compose_all_three() {
        let docs = [
            doc("a.html", "<head></head><body></body>"),
            doc("b.css", "x{}"),
            doc("c.js", "y();"),
        ];
        assert_eq!(
            compose(&docs).unwrap(),
            "<head><style>\nx{}\n</style>\n</head><body>\n<script>\ny();\n</script>\n</body>"
        );
    }

    #[test]
    fn test_no_html() {
        let docs = [doc("b.css", "x{}"), doc("c.js", "y();")];
        assert!(matches!(compose(&docs), Err(CoreError::NoHtmlFound)));
        assert!(matches!(compose(&[]), Err(CoreError::NoHtmlFound)));
    }

    #[test]
    fn test_html_only_is_verbatim() {
        let html = "<!DOCTYPE html><html><head></head><body><p>hi</p></body></html>";
        assert_eq!(compose(&[doc("index.html", html)]).unwrap(), html);
    }

    #[test]
    fn test_missing_markers_drop_blocks() {
        let docs = [
            doc("a.html", "<p>fragment</p>"),
            doc("b.css", "x{}"),
            doc("c.js", "y();"),
        ];
        assert_eq!(compose(&docs).unwrap(), "<p>fragment</p>");
    }

    #[test]
    fn test_only_first_marker_used() {
        let docs = [
            doc("a.html", "</head></head>"),
            doc("b.css", "x{}"),
        ];
        assert_eq!(
            compose(&docs).unwrap(),
            "<style>\nx{}\n</style>\n</head></head>"
        );
    }

    #[test]
    fn test_first_match_wins() {
        let docs = [
            doc("one.css", "first{}"),
            doc("page.html", "<head></head>"),
            doc("two.css", "second{}"),
            doc("other.html", "<head>other</head>"),
        ];
        let page = compose(&docs).unwrap();
        assert!(page.contains("first{}"));
        assert!(!page.contains("second{}"));
        assert!(!page.contains("other"));
    }

    #[test]
    fn test_json_is_not_script() {
        let docs = [
            doc("data.json", "{}"),
            doc("a.html", "<body></body>"),
            doc("app.jsx", "<X/>"),
        ];
        assert_eq!(compose(&docs).unwrap(), "<body></body>");

        let docs = [doc("data.json", "{}"), doc("a.html", "<body></body>"), doc("z.js", "z();")];
        let sources = PreviewSources::select(&docs).unwrap();
        assert_eq!(sources.js.unwrap().name(), "z.js");
    }
}
