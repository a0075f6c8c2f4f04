use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::nav::annotate::{AnnotateRequest, try_annotate_rev};
use crate::shared::config::load_config;
use crate::shell::{ShellRunner, SystemShell};
use crate::term::TermEditor;

#[derive(Args, Clone, PartialEq, Eq)]
pub struct BlameArgs {
    /// File to annotate, relative to the repository directory
    pub file: String,

    /// Revision to annotate at (defaults to `default_rev` from the config)
    #[arg(long)]
    pub rev: Option<String>,

    /// Line to select after annotating (1-based)
    #[arg(long)]
    pub row: Option<usize>,

    /// Repository directory (defaults to the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Annotate a file once and print the result.
#[tokio::main]
pub async fn run(args: &BlameArgs) -> Result<()> {
    let config = load_config()?;
    let shell = SystemShell;
    let mut editor = TermEditor::new();

    let dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => shell.cwd()?,
    };
    let request = AnnotateRequest {
        file: Some(args.file.clone()),
        dir: Some(dir),
        rev: Some(args.rev.clone().unwrap_or(config.default_rev)),
        row: args.row.map(|row| row.saturating_sub(1)),
    };
    try_annotate_rev(&shell, &mut editor, request).await?;
    editor.print()?;

    Ok(())
}
