//! `TOC.toml` index parsing.
//!
//! The index lists directories, their files and standalone pages in display
//! order:
//!
//! ```toml
//! getting-started = "howto"
//! advanced = "advanced-usage"
//!
//! [howto]
//! intro = "README"
//! install = "installation"
//!
//! [pages]
//! faq = "faq"
//! ```
//!
//! Root-level string values name directories. Each directory's files are
//! listed in the table named after it; the first file is the directory's own
//! document. Keys are labels only, values are names on disk without `.md`.
//! Since TOML forbids a key and a table of the same name, a directory key
//! must differ from the directory name it points to.

use std::path::Path;

use toml::{Table, Value};

use crate::TocError;

/// Index file name at the documentation root.
pub const INDEX_FILENAME: &str = "TOC.toml";

/// Table holding standalone pages.
const PAGES_SECTION: &str = "pages";

/// A directory entry and its files, in index order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    /// Directory name on disk.
    pub name: String,
    /// File names without `.md`. The first is the directory's document.
    pub files: Vec<String>,
}

/// Parsed index file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TocIndex {
    /// Directories in declaration order.
    pub dirs: Vec<DirEntry>,
    /// Standalone page names in declaration order.
    pub pages: Vec<String>,
}

impl TocIndex {
    /// Read and parse `TOC.toml` under `root`.
    ///
    /// # Errors
    ///
    /// Returns `TocError::Index` if the file is missing, unreadable or
    /// malformed.
    pub fn load(root: &Path) -> Result<Self, TocError> {
        let path = root.join(INDEX_FILENAME);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TocError::index(path, "TOC not found"));
            }
            Err(e) => return Err(TocError::index(path, e.to_string())),
        };
        Self::parse(&content, &path)
    }

    /// Parse index content. `path` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns `TocError::Index` if the content is not valid TOML or a name
    /// is not a string.
    pub fn parse(content: &str, path: &Path) -> Result<Self, TocError> {
        let table: Table =
            toml::from_str(content).map_err(|e| TocError::index(path, e.to_string()))?;

        let mut dirs = Vec::new();
        for (key, value) in &table {
            match value {
                Value::String(name) => {
                    let files = dir_files(&table, name, path)?;
                    dirs.push(DirEntry {
                        name: name.clone(),
                        files,
                    });
                }
                Value::Table(_) => {}
                _ => {
                    return Err(TocError::index(
                        path,
                        format!("directory '{key}' must be a string"),
                    ));
                }
            }
        }

        let pages = section_names(&table, PAGES_SECTION, path)?;

        Ok(Self { dirs, pages })
    }
}

/// Files of directory `name`. A missing table, or a root key of the same
/// name shadowing it, means no files.
fn dir_files(table: &Table, name: &str, path: &Path) -> Result<Vec<String>, TocError> {
    match table.get(name) {
        Some(Value::Table(entries)) => names_in(entries, name, path),
        _ => Ok(Vec::new()),
    }
}

/// String values of table `section`, in order. A missing table is empty.
fn section_names(table: &Table, section: &str, path: &Path) -> Result<Vec<String>, TocError> {
    match table.get(section) {
        None => Ok(Vec::new()),
        Some(Value::Table(entries)) => names_in(entries, section, path),
        Some(_) => Err(TocError::index(
            path,
            format!("section '{section}' must be a table"),
        )),
    }
}

fn names_in(entries: &Table, section: &str, path: &Path) -> Result<Vec<String>, TocError> {
    entries
        .iter()
        .map(|(key, value)| match value {
            Value::String(name) => Ok(name.clone()),
            _ => Err(TocError::index(
                path,
                format!("'{section}.{key}' must be a string"),
            )),
        })
        .collect()
}
