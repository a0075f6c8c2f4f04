use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::nav::resolve::normalize_rev;
use crate::shell::{ShellRunner, SystemShell};

#[derive(Args, Clone, PartialEq, Eq)]
pub struct ResolveArgs {
    /// Revision to resolve
    pub rev: String,

    /// Repository directory (defaults to the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Print the full commit id a revision resolves to.
#[tokio::main]
pub async fn run(args: &ResolveArgs) -> Result<()> {
    let shell = SystemShell;
    let dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => shell.cwd()?,
    };
    let id = normalize_rev(&shell, &dir, &args.rev).await?;
    println!("{id}");

    Ok(())
}
