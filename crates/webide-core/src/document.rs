//! Document management.
//!
//! Documents are plain in-memory text buffers. The editor widget owns
//! cursors, selections and undo; the store only ever sees full-content
//! replacements.
//!
//! Callers address documents through `DocumentId` handles, while the
//! user-facing key is the name. The store keeps names unique.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::language::Language;
use crate::{CoreError, CoreResult};

/// Stem used for names synthesized by [`FileStore::create`].
const NEW_FILE_STEM: &str = "new_file";

/// Unique identifier for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Creates a new unique document ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One named text buffer with a language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    id: DocumentId,
    name: String,
    language: Language,
    content: String,
}

impl Document {
    /// Creates a document with the given name, language and content.
    pub fn new(name: impl Into<String>, language: Language, content: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new(),
            name: name.into(),
            language,
            content: content.into(),
        }
    }

    /// Returns the document ID.
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Returns the file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the language tag.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns true if the name ends with `suffix` (e.g. `.html`).
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.name.ends_with(suffix)
    }
}

/// Ordered collection of documents with a single active pointer.
///
/// ## Invariant
///
/// `active` is `Some` and refers to a stored document whenever the
/// store is non-empty, and `None` when it is empty.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    /// Documents in display order
    documents: Vec<Document>,

    /// Currently active document
    active: Option<DocumentId>,
}

impl FileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `documents`, the first one active.
    ///
    /// Later documents whose name repeats an earlier one are dropped.
    pub fn from_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        let mut store = Self::new();
        for doc in documents {
            if store.find_by_name(doc.name()).is_some() {
                tracing::warn!("Skipping duplicate seed document {}", doc.name());
                continue;
            }
            store.documents.push(doc);
        }
        store.active = store.documents.first().map(Document::id);
        store
    }

    // ==================== Operations ====================

    /// Creates an empty `new_file.<ext>` document and makes it active.
    ///
    /// If that name is taken the first free `new_file_<n>.<ext>`
    /// (n >= 2) is used instead.
    pub fn create(&mut self, language: Language) -> &Document {
        let name = self.unique_new_file_name(language.extension());
        let doc = Document::new(name, language, String::new());
        let id = doc.id();

        tracing::debug!("Created document {} ({})", doc.name(), language.id());

        self.documents.push(doc);
        self.active = Some(id);
        &self.documents[self.documents.len() - 1]
    }

    /// Renames a document and makes it active.
    ///
    /// Returns `Ok(false)` without changing anything when `new_name` is
    /// blank or equal to the current name. A name already used by
    /// another document is rejected.
    pub fn rename(&mut self, id: DocumentId, new_name: &str) -> CoreResult<bool> {
        let new_name = new_name.trim();
        let index = self.index_of(id)?;

        if new_name.is_empty() || self.documents[index].name == new_name {
            return Ok(false);
        }

        if self.find_by_name(new_name).is_some() {
            return Err(CoreError::NameTaken(new_name.to_string()));
        }

        let doc = &mut self.documents[index];
        tracing::debug!("Renamed {} -> {}", doc.name, new_name);
        doc.name = new_name.to_string();
        self.active = Some(id);

        Ok(true)
    }

    /// Removes a document and returns it.
    ///
    /// If it was active, the first remaining document becomes active.
    pub fn delete(&mut self, id: DocumentId) -> CoreResult<Document> {
        let index = self.index_of(id)?;
        let removed = self.documents.remove(index);

        if self.active == Some(id) {
            self.active = self.documents.first().map(Document::id);
        }

        tracing::debug!("Deleted document {}", removed.name);
        Ok(removed)
    }

    /// Replaces a document's content.
    pub fn edit(&mut self, id: DocumentId, content: impl Into<String>) -> CoreResult<()> {
        let index = self.index_of(id)?;
        self.documents[index].content = content.into();
        Ok(())
    }

    /// Sets the active document.
    ///
    /// Returns true if the active pointer moved.
    pub fn select(&mut self, id: DocumentId) -> CoreResult<bool> {
        self.index_of(id)?;
        if self.active == Some(id) {
            return Ok(false);
        }
        self.active = Some(id);
        Ok(true)
    }

    // ==================== Queries ====================

    /// Returns a document by ID.
    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    /// Finds a document by name.
    pub fn find_by_name(&self, name: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.name == name)
    }

    /// Returns the active document.
    pub fn active(&self) -> Option<&Document> {
        self.active.and_then(|id| self.get(id))
    }

    /// Returns the active document's ID.
    pub fn active_id(&self) -> Option<DocumentId> {
        self.active
    }

    /// Returns all documents in display order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Returns an iterator over document names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|doc| doc.name.as_str())
    }

    /// Returns the number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn index_of(&self, id: DocumentId) -> CoreResult<usize> {
        self.documents
            .iter()
            .position(|doc| doc.id == id)
            .ok_or(CoreError::DocumentNotFound(id))
    }

    fn unique_new_file_name(&self, ext: &str) -> String {
        let base = format!("{NEW_FILE_STEM}.{ext}");
        if self.find_by_name(&base).is_none() {
            return base;
        }
        (2..)
            .map(|n| format!("{NEW_FILE_STEM}_{n}.{ext}"))
            .find(|name| self.find_by_name(name).is_none())
            .unwrap_or(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn store_with(names: &[&str]) -> FileStore {
        FileStore::from_documents(
            names
                .iter()
                .map(|name| Document::new(*name, Language::JavaScript, "")),
        )
    }

    fn id_of(store: &FileStore, name: &str) -> DocumentId {
        store.find_by_name(name).unwrap().id()
    }

    #[test]
    fn test_create_appends_and_activates() {
        let mut store = store_with(&["a.js"]);
        let created = store.create(Language::Python).id();

        assert_eq!(store.len(), 2);
        assert_eq!(store.active_id(), Some(created));
        let active = store.active().unwrap();
        assert_eq!(active.name(), "new_file.py");
        assert_eq!(active.language(), Language::Python);
        assert!(active.content().is_empty());
    }

    #[test]
    fn test_create_disambiguates_names() {
        let mut store = FileStore::new();
        store.create(Language::JavaScript);
        store.create(Language::JavaScript);
        store.create(Language::JavaScript);
        store.create(Language::Css);

        let names: Vec<_> = store.names().collect();
        assert_eq!(
            names,
            ["new_file.js", "new_file_2.js", "new_file_3.js", "new_file.css"]
        );
    }

    #[test]
    fn test_rename() {
        let mut store = store_with(&["a.js", "b.css"]);
        let b = id_of(&store, "b.css");
        let a = id_of(&store, "a.js");

        assert!(store.rename(a, "main.js").unwrap());
        assert_eq!(store.get(a).unwrap().name(), "main.js");
        // renaming activates the renamed document
        assert_eq!(store.active_id(), Some(a));

        store.select(b).unwrap();
        assert!(!store.rename(a, "  ").unwrap());
        assert!(!store.rename(a, "main.js").unwrap());
        assert_eq!(store.active_id(), Some(b));
    }

    #[test]
    fn test_rename_rejects_collision() {
        let mut store = store_with(&["a.js", "b.css"]);
        let a = id_of(&store, "a.js");

        let err = store.rename(a, "b.css").unwrap_err();
        assert!(matches!(err, CoreError::NameTaken(name) if name == "b.css"));
        assert_eq!(store.get(a).unwrap().name(), "a.js");
    }

    #[test]
    fn test_delete_active_moves_to_first() {
        let mut store = store_with(&["a.js", "b.css", "c.html"]);
        let c = id_of(&store, "c.html");
        store.select(c).unwrap();

        store.delete(c).unwrap();
        assert_eq!(store.active().unwrap().name(), "a.js");
    }

    #[test]
    fn test_delete_inactive_keeps_active() {
        let mut store = store_with(&["a.js", "b.css"]);
        let b = id_of(&store, "b.css");
        store.select(b).unwrap();

        store.delete(id_of(&store, "a.js")).unwrap();
        assert_eq!(store.active_id(), Some(b));
    }

    #[test]
    fn test_delete_last_then_create() {
        let mut store = store_with(&["a.js"]);
        store.delete(id_of(&store, "a.js")).unwrap();
        assert!(store.is_empty());
        assert!(store.active().is_none());

        let id = store.create(Language::Html).id();
        assert_eq!(store.active_id(), Some(id));
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut store = store_with(&["a.js", "b.css"]);
        let a = id_of(&store, "a.js");
        let before = store.clone();

        assert!(!store.select(a).unwrap());
        assert_eq!(store.active_id(), before.active_id());
        assert_eq!(store.documents(), before.documents());
    }

    #[test]
    fn test_edit_replaces_content() {
        let mut store = store_with(&["a.js"]);
        let a = id_of(&store, "a.js");
        store.edit(a, "let x = 1;").unwrap();
        store.edit(a, "let x = 2;").unwrap();
        assert_eq!(store.get(a).unwrap().content(), "let x = 2;");
    }

    #[test]
    fn test_unknown_id() {
        let mut store = store_with(&["a.js"]);
        let stray = DocumentId::new();
        assert!(matches!(
            store.select(stray),
            Err(CoreError::DocumentNotFound(_))
        ));
        assert!(store.delete(stray).is_err());
        assert!(store.edit(stray, "x").is_err());
    }

    #[test]
    fn test_from_documents_drops_duplicates() {
        let store = store_with(&["a.js", "a.js", "b.js"]);
        assert_eq!(store.names().collect::<Vec<_>>(), ["a.js", "b.js"]);
        assert_eq!(store.active().unwrap().name(), "a.js");
    }

    #[derive(Debug, Clone)]
    enum Op {
        Create(usize),
        Delete(usize),
        Rename(usize, String),
        Select(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..Language::ALL.len()).prop_map(Op::Create),
            any::<usize>().prop_map(Op::Delete),
            (any::<usize>(), "[a-c]{1,2}\\.(js|css)").prop_map(|(i, n)| Op::Rename(i, n)),
            any::<usize>().prop_map(Op::Select),
        ]
    }

    proptest! {
        #[test]
        fn prop_active_pointer_and_unique_names(ops in prop::collection::vec(op_strategy(), 0..64)) {
            let mut store = FileStore::new();
            for op in ops {
                let pick = |i: usize, store: &FileStore| {
                    (!store.is_empty()).then(|| store.documents()[i % store.len()].id())
                };
                match op {
                    Op::Create(lang) => {
                        store.create(Language::ALL[lang]);
                    }
                    Op::Delete(i) => {
                        if let Some(id) = pick(i, &store) {
                            store.delete(id).unwrap();
                        }
                    }
                    Op::Rename(i, name) => {
                        if let Some(id) = pick(i, &store) {
                            let _ = store.rename(id, &name);
                        }
                    }
                    Op::Select(i) => {
                        if let Some(id) = pick(i, &store) {
                            store.select(id).unwrap();
                        }
                    }
                }

                prop_assert_eq!(store.is_empty(), store.active_id().is_none());
                if let Some(id) = store.active_id() {
                    prop_assert!(store.get(id).is_some());
                }
                let mut names: Vec<_> = store.names().collect();
                let total = names.len();
                names.sort();
                names.dedup();
                prop_assert_eq!(names.len(), total);
            }
        }
    }
}
