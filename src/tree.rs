use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Whether an entry being inserted should become a folder or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File,
}

/// A single node of the canonical tree.
///
/// Serializes to the wire shape shared with the JSON input format:
/// `{"type": "folder", "contents": {...}}` or `{"type": "file"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Folder {
        #[serde(default)]
        contents: Structure,
    },
    File,
}
impl Entry {
    pub fn empty_folder() -> Self {
        Entry::Folder {
            contents: Structure::new(),
        }
    }
    pub fn is_file(&self) -> bool {
        matches!(self, Entry::File)
    }
}

/// The canonical, format-independent tree: an ordered mapping from entry name
/// to [`Entry`], unique within its parent.
///
/// Insertion order is preserved and drives preview and materialization order;
/// it carries no other meaning.
// https://www.howtocodeit.com/articles/ultimate-guide-rust-newtypes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Structure(pub IndexMap<String, Entry>);

impl Structure {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Inserts `name` as `kind` beneath the folder chain named by `path`.
    ///
    /// Missing intermediate segments are created as empty folders; existing
    /// ones are descended into untouched, so re-inserting a path is
    /// idempotent. Empty segments are skipped. This never fails:
    ///
    /// - a terminal folder that already exists keeps its contents,
    /// - a terminal file always overwrites (a path declared as both file and
    ///   folder across lines resolves to whichever came last),
    /// - descending through a name previously declared as a file replaces it
    ///   with an empty folder.
    pub fn insert(&mut self, path: &[String], kind: EntryKind, name: &str) {
        let mut current = &mut self.0;

        for segment in path.iter().filter(|segment| !segment.is_empty()) {
            let entry = current
                .entry(segment.clone())
                .or_insert_with(Entry::empty_folder);

            if entry.is_file() {
                *entry = Entry::empty_folder();
            }

            match entry {
                Entry::Folder { contents } => current = &mut contents.0,
                Entry::File => unreachable!("file entries are replaced before descending"),
            }
        }

        if name.is_empty() {
            return;
        }

        match kind {
            EntryKind::File => {
                current.insert(name.to_string(), Entry::File);
            }
            EntryKind::Folder => {
                current
                    .entry(name.to_string())
                    .or_insert_with(Entry::empty_folder);
            }
        }
    }
}
