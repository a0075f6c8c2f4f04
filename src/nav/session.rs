use std::path::PathBuf;

/// Per-editor record of the file, directory, revision, and row being viewed.
///
/// Replaced wholesale on each successful navigation, never patched in place,
/// so a failed operation leaves the previous session intact. The `rev` field
/// always holds a canonical commit id, never a relative expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionContext {
    pub file: String,
    pub dir: PathBuf,
    pub rev: String,
    pub row: Option<usize>,
}
