use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::editor::ViewExtent;
use crate::nav::annotate::{self, AnnotateRequest};
use crate::nav::viewers::{self, DiffScope};
use crate::shared::config::load_config;
use crate::shell::{ShellRunner, SystemShell};
use crate::term::{TermEditor, TermWorkspace};

#[derive(Args, Clone, PartialEq, Eq)]
pub struct WalkArgs {
    /// File to annotate, relative to the repository directory
    pub file: String,

    /// Revision to start from (defaults to `default_rev` from the config)
    #[arg(long)]
    pub rev: Option<String>,

    /// Repository directory (defaults to the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WalkCommand {
    Quit,
    Back,
    Forward,
    Show,
    Log,
    DiffFile,
    DiffAll,
    Jump,
    Redraw,
    Goto(usize),
    Help,
}

/// Annotate a file and walk its history interactively.
#[tokio::main]
pub async fn run(args: &WalkArgs) -> Result<()> {
    let config = load_config()?;
    let shell = SystemShell;
    let mut editor = TermEditor::new();
    let mut workspace = TermWorkspace::new();

    let dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => shell.cwd()?,
    };
    annotate::try_annotate_rev(
        &shell,
        &mut editor,
        AnnotateRequest {
            file: Some(args.file.clone()),
            dir: Some(dir),
            rev: Some(args.rev.clone().unwrap_or(config.default_rev)),
            row: None,
        },
    )
    .await?;
    editor.print()?;

    let extent = ViewExtent {
        width: config.view.width,
        height: config.view.height,
    };
    let stdin = io::stdin();
    loop {
        print!("walk> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(line.trim()) {
            WalkCommand::Quit => break,
            WalkCommand::Back => {
                annotate::rev_back(&shell, &mut editor).await;
                editor.print()?;
            }
            WalkCommand::Forward => {
                annotate::rev_fwd(&shell, &mut editor).await;
                editor.print()?;
            }
            WalkCommand::Show => {
                viewers::show_file_version_at_line(&shell, &mut workspace, &mut editor, extent)
                    .await;
            }
            WalkCommand::Log => {
                viewers::show_log_at_line(&shell, &mut workspace, &mut editor, extent).await;
            }
            WalkCommand::DiffFile => {
                viewers::show_diff_at_line(
                    &shell,
                    &mut workspace,
                    &mut editor,
                    DiffScope::File,
                    extent,
                )
                .await;
            }
            WalkCommand::DiffAll => {
                viewers::show_diff_at_line(
                    &shell,
                    &mut workspace,
                    &mut editor,
                    DiffScope::AllFiles,
                    extent,
                )
                .await;
            }
            WalkCommand::Jump => {
                annotate::query_annotate_rev(&shell, &mut workspace, &mut editor).await;
                editor.print()?;
            }
            WalkCommand::Goto(row) => {
                editor.move_cursor(row.saturating_sub(1));
                editor.print()?;
            }
            WalkCommand::Redraw => editor.print()?,
            WalkCommand::Help => print_help(),
        }
    }

    Ok(())
}

fn parse_command(input: &str) -> WalkCommand {
    match input {
        "q" | "quit" => WalkCommand::Quit,
        "b" | "back" => WalkCommand::Back,
        "f" | "forward" => WalkCommand::Forward,
        "s" | "show" => WalkCommand::Show,
        "l" | "log" => WalkCommand::Log,
        "d" | "diff" => WalkCommand::DiffFile,
        "D" => WalkCommand::DiffAll,
        "j" | "jump" => WalkCommand::Jump,
        "" => WalkCommand::Redraw,
        _ => input
            .strip_prefix(':')
            .and_then(|row| row.parse::<usize>().ok())
            .map_or(WalkCommand::Help, WalkCommand::Goto),
    }
}

fn print_help() {
    println!("commands:");
    println!("  b, back      annotate the parent of the current revision");
    println!("  f, forward   annotate the child revision toward the branch tip");
    println!("  s, show      print the file as of the revision on the cursor line");
    println!("  l, log       print the log entry for the revision on the cursor line");
    println!("  d, diff      print the diff of the cursor line's revision for this file");
    println!("  D            print the diff of the cursor line's revision for all files");
    println!("  j, jump      prompt for a revision and file to annotate");
    println!("  :N           move the cursor to line N");
    println!("  q, quit      exit");
}
