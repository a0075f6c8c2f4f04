use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    /// The VCS rejected the revision expression.
    #[error("Cannot resolve revision '{rev}' (exit code {code}):\n{output}")]
    Resolution {
        rev: String,
        code: i32,
        output: String,
    },

    /// The branch or ancestry query for forward navigation failed.
    #[error("Cannot navigate forward from '{rev}' (exit code {code}):\n{output}")]
    Navigation {
        rev: String,
        code: i32,
        output: String,
    },

    /// A required value was not supplied (empty field or declined prompt).
    #[error("Missing {0}")]
    MissingInput(&'static str),

    /// Any other git invocation exited non-zero.
    #[error("git exited with code {code}:\n{output}")]
    Command { code: i32, output: String },

    #[error("Shell error: {0}")]
    Shell(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NavError>;
