//! Extraction of revision and file name from a line of blame output.
//!
//! `git blame -f` prefixes each line with the commit id and the file name,
//! so the first two whitespace-separated tokens of the selected line are all
//! the navigator needs. Nothing is validated here; a malformed line simply
//! yields empty fields, which callers treat as "no value supplied".

/// Revision and file named by one line of annotated text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineRef {
    pub rev: Option<String>,
    pub file: Option<String>,
}

/// Split a line on whitespace: first token is the revision, second the file.
pub fn rev_and_file_at_line(line: &str) -> LineRef {
    let mut tokens = line.split_whitespace();
    LineRef {
        rev: tokens.next().map(str::to_string),
        file: tokens.next().map(str::to_string),
    }
}

/// The revision named by a line, when there is one.
pub fn rev_at_line(line: &str) -> Option<String> {
    rev_and_file_at_line(line).rev
}
