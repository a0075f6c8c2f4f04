//! Blame annotation rendering and history stepping against an editor.

use tracing::debug;

use super::error::{NavError, Result};
use super::line::rev_and_file_at_line;
use super::resolve::{next_rev, normalize_rev, prev_rev};
use super::session::SessionContext;
use crate::editor::{Editor, PromptOptions, Workspace};
use crate::shell::ShellRunner;

/// Length of the abbreviated commit id shown in window titles.
const SHORT_REV_LEN: usize = 7;

/// Inputs for one annotate call. Empty or absent fields fall back to the
/// editor's current session; a missing revision is an error before any VCS
/// call is made.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnnotateRequest {
    pub file: Option<String>,
    pub dir: Option<std::path::PathBuf>,
    pub rev: Option<String>,
    pub row: Option<usize>,
}

/// Annotate a revision of a file into the editor, reporting any failure
/// through the editor's error display.
pub async fn annotate_rev(shell: &dyn ShellRunner, ed: &mut dyn Editor, request: AnnotateRequest) {
    if let Err(error) = try_annotate_rev(shell, ed, request).await {
        ed.show_error(&error);
    }
}

/// Fallible form of [`annotate_rev`] for callers that handle errors
/// themselves.
///
/// On success the editor's session is replaced wholesale with the new
/// context, the buffer shows the blame text, the requested row is centered,
/// and the window title names the file and the abbreviated commit id. On
/// failure nothing is touched.
pub async fn try_annotate_rev(
    shell: &dyn ShellRunner,
    ed: &mut dyn Editor,
    request: AnnotateRequest,
) -> Result<()> {
    let rev = request
        .rev
        .filter(|rev| !rev.is_empty())
        .ok_or(NavError::MissingInput("revision"))?;

    let (session_file, session_dir) = match ed.session() {
        Some(session) => (Some(session.file.clone()), Some(session.dir.clone())),
        None => (None, None),
    };
    let file = request
        .file
        .filter(|file| !file.is_empty())
        .or(session_file)
        .ok_or(NavError::MissingInput("file"))?;
    let dir = request
        .dir
        .filter(|dir| !dir.as_os_str().is_empty())
        .or(session_dir)
        .ok_or(NavError::MissingInput("repository directory"))?;

    let full_rev = normalize_rev(shell, &dir, &rev).await?;

    let out = shell
        .run(&format!("git blame -f {full_rev} -- {file}"), &dir)
        .await?;
    if !out.success() {
        return Err(NavError::Command {
            code: out.code,
            output: out.output,
        });
    }

    debug!(file, rev = full_rev, "annotated");

    ed.set_session(SessionContext {
        file: file.clone(),
        dir,
        rev: full_rev.clone(),
        row: request.row,
    });
    ed.set_content(&out.output);
    if let Some(row) = request.row {
        ed.select_and_center_row(row);
    }
    if let Some(window) = ed.window() {
        window.set_title(&format!("git blame - {file} {}", short_rev(&full_rev)));
    }
    ed.focus();

    Ok(())
}

/// Prompt for a revision and file (seeded from the current line) and
/// annotate. A declined prompt is reported as missing input.
pub async fn query_annotate_rev(
    shell: &dyn ShellRunner,
    workspace: &mut dyn Workspace,
    ed: &mut dyn Editor,
) {
    if let Err(error) = try_query_annotate_rev(shell, workspace, ed).await {
        ed.show_error(&error);
    }
}

async fn try_query_annotate_rev(
    shell: &dyn ShellRunner,
    workspace: &mut dyn Workspace,
    ed: &mut dyn Editor,
) -> Result<()> {
    let dir = match ed.session() {
        Some(session) => session.dir.clone(),
        None => shell.cwd()?,
    };
    let seed = rev_and_file_at_line(&ed.current_line_text());

    let rev = workspace
        .prompt(
            "Jump to revision",
            PromptOptions {
                history_id: "git-blame-rev",
                default_value: seed.rev,
            },
        )
        .await
        .filter(|rev| !rev.is_empty())
        .ok_or(NavError::MissingInput("revision"))?;

    let file = workspace
        .prompt(
            "File",
            PromptOptions {
                history_id: "git-blame-file",
                default_value: seed.file,
            },
        )
        .await
        .filter(|file| !file.is_empty())
        .ok_or(NavError::MissingInput("file"))?;

    try_annotate_rev(
        shell,
        ed,
        AnnotateRequest {
            file: Some(file),
            dir: Some(dir),
            rev: Some(rev),
            row: None,
        },
    )
    .await
}

/// Step the annotated view one commit back in history. Without a session
/// there is nothing to step from, so this is a no-op.
pub async fn rev_back(shell: &dyn ShellRunner, ed: &mut dyn Editor) {
    let Some(session) = ed.session() else {
        return;
    };
    let rev = prev_rev(&session.rev);
    let row = ed.selection_start_row();

    annotate_rev(
        shell,
        ed,
        AnnotateRequest {
            rev: Some(rev),
            row: Some(row),
            ..AnnotateRequest::default()
        },
    )
    .await;
}

/// Step the annotated view one commit toward the checked-out branch tip.
/// Without a session this is a no-op.
pub async fn rev_fwd(shell: &dyn ShellRunner, ed: &mut dyn Editor) {
    let Some(session) = ed.session() else {
        return;
    };
    let dir = session.dir.clone();
    let rev = session.rev.clone();
    let row = ed.selection_start_row();

    let next = match next_rev(shell, &dir, &rev).await {
        Ok(next) => next,
        Err(error) => {
            ed.show_error(&error);
            return;
        }
    };

    annotate_rev(
        shell,
        ed,
        AnnotateRequest {
            rev: Some(next),
            row: Some(row),
            ..AnnotateRequest::default()
        },
    )
    .await;
}

fn short_rev(rev: &str) -> &str {
    rev.get(..SHORT_REV_LEN).unwrap_or(rev)
}
