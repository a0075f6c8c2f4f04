//! Read-only views on historical content: file versions, logs, and diffs.
//!
//! Each viewer takes its revision (and sometimes file) from the line under
//! the cursor, resolves it against the session's repository, runs one git
//! command, and opens a fresh view with the raw output. Viewers never touch
//! the session; a failure is reported and nothing opens.

use super::error::{NavError, Result};
use super::line::{rev_and_file_at_line, rev_at_line};
use super::resolve::normalize_rev;
use crate::editor::{ContentKind, Editor, ViewExtent, ViewSpec, Workspace};
use crate::shell::ShellRunner;

/// Which files a diff view covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiffScope {
    /// Only the file named on the current line plus the session's file.
    File,
    /// Every file touched by the commit.
    AllFiles,
}

/// Open the version of the file named on the current line at that line's
/// revision (`git show rev:file`).
pub async fn show_file_version_at_line(
    shell: &dyn ShellRunner,
    workspace: &mut dyn Workspace,
    ed: &mut dyn Editor,
    extent: ViewExtent,
) {
    if let Err(error) = try_show_file_version(shell, workspace, &*ed, extent).await {
        ed.show_error(&error);
    }
}

async fn try_show_file_version(
    shell: &dyn ShellRunner,
    workspace: &mut dyn Workspace,
    ed: &dyn Editor,
    extent: ViewExtent,
) -> Result<()> {
    let line = rev_and_file_at_line(&ed.current_line_text());
    let rev = line.rev.ok_or(NavError::MissingInput("revision"))?;
    let file = line.file.ok_or(NavError::MissingInput("file"))?;
    let dir = ed
        .session()
        .map(|session| session.dir.clone())
        .ok_or(NavError::MissingInput("session"))?;

    let rev = normalize_rev(shell, &dir, &rev).await?;

    let out = shell.run(&format!("git show {rev}:{file}"), &dir).await?;
    if !out.success() {
        return Err(NavError::Command {
            code: out.code,
            output: out.output,
        });
    }

    open(
        workspace,
        ViewSpec {
            title: format!("{rev}:{file}"),
            content: out.output,
            kind: ContentKind::Text,
            extent,
        },
    );
    Ok(())
}

/// Open the log entry (with patch) of the current line's revision for the
/// session's file, following renames.
pub async fn show_log_at_line(
    shell: &dyn ShellRunner,
    workspace: &mut dyn Workspace,
    ed: &mut dyn Editor,
    extent: ViewExtent,
) {
    if let Err(error) = try_show_log(shell, workspace, &*ed, extent).await {
        ed.show_error(&error);
    }
}

async fn try_show_log(
    shell: &dyn ShellRunner,
    workspace: &mut dyn Workspace,
    ed: &dyn Editor,
    extent: ViewExtent,
) -> Result<()> {
    let rev = rev_at_line(&ed.current_line_text()).ok_or(NavError::MissingInput("revision"))?;
    let (file, dir) = ed
        .session()
        .map(|session| (session.file.clone(), session.dir.clone()))
        .ok_or(NavError::MissingInput("session"))?;

    let rev = normalize_rev(shell, &dir, &rev).await?;

    let out = shell
        .run(
            &format!("git log {rev}~1...{rev} -p --follow -- {file}"),
            &dir,
        )
        .await?;
    if !out.success() {
        return Err(NavError::Command {
            code: out.code,
            output: out.output,
        });
    }

    open(
        workspace,
        ViewSpec {
            title: format!("log {rev}"),
            content: out.output,
            kind: ContentKind::Diff,
            extent,
        },
    );
    Ok(())
}

/// Open the diff introduced by the current line's revision, either narrowed
/// to the file on that line (with rename detection against the session's
/// file) or across all files.
pub async fn show_diff_at_line(
    shell: &dyn ShellRunner,
    workspace: &mut dyn Workspace,
    ed: &mut dyn Editor,
    scope: DiffScope,
    extent: ViewExtent,
) {
    if let Err(error) = try_show_diff(shell, workspace, &*ed, scope, extent).await {
        ed.show_error(&error);
    }
}

async fn try_show_diff(
    shell: &dyn ShellRunner,
    workspace: &mut dyn Workspace,
    ed: &dyn Editor,
    scope: DiffScope,
    extent: ViewExtent,
) -> Result<()> {
    let line = rev_and_file_at_line(&ed.current_line_text());
    let rev = line.rev.ok_or(NavError::MissingInput("revision"))?;
    let file = match scope {
        DiffScope::File => Some(line.file.ok_or(NavError::MissingInput("file"))?),
        DiffScope::AllFiles => None,
    };
    let (real_file, dir) = ed
        .session()
        .map(|session| (session.file.clone(), session.dir.clone()))
        .ok_or(NavError::MissingInput("session"))?;

    let rev = normalize_rev(shell, &dir, &rev).await?;

    let (command, title) = match file {
        Some(file) => (
            format!("git diff {rev}~1...{rev} -C {file} {real_file}"),
            format!("diff {rev} {file}"),
        ),
        None => (format!("git diff {rev}~1...{rev}"), format!("diff {rev}")),
    };

    let out = shell.run(&command, &dir).await?;
    if !out.success() {
        return Err(NavError::Command {
            code: out.code,
            output: out.output,
        });
    }

    open(
        workspace,
        ViewSpec {
            title,
            content: out.output,
            kind: ContentKind::Diff,
            extent,
        },
    );
    Ok(())
}

fn open(workspace: &mut dyn Workspace, spec: ViewSpec) {
    let mut view = workspace.open_view(spec);
    view.bring_to_front();
}
