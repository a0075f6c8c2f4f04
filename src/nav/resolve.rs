//! Revision resolution and history stepping.
//!
//! Moving "forward" in a commit DAG is ambiguous (a commit can have several
//! children), so [`next_rev`] commits to one policy: follow the ancestry path
//! toward the tip of the currently checked-out branch and take the first
//! commit after `rev`. When the path is empty the branch tip itself is next,
//! and when no branch is checked out (detached HEAD) navigation stays put.

use std::path::Path;

use lazy_regex::regex_replace;
use tracing::debug;

use super::error::{NavError, Result};
use crate::shell::ShellRunner;

/// Resolve `rev` to a canonical commit id via `git rev-parse`.
///
/// The returned id is safe to store in a session and to use in range
/// expressions such as `A~1...A`.
pub async fn normalize_rev(shell: &dyn ShellRunner, dir: &Path, rev: &str) -> Result<String> {
    let out = shell.run(&format!("git rev-parse {rev}"), dir).await?;
    if !out.success() {
        return Err(NavError::Resolution {
            rev: rev.to_string(),
            code: out.code,
            output: out.output,
        });
    }
    Ok(out.output.trim().to_string())
}

/// The expression one step back in history. Never invokes the VCS;
/// resolution happens lazily at the next annotate call.
pub fn prev_rev(rev: &str) -> String {
    format!("{rev}~1")
}

/// The commit one step toward the tip of the checked-out branch.
///
/// Exactly two VCS invocations: one to find the checked-out branch
/// containing `rev`, one to list the ancestry path up to it. Falls back to
/// the branch name when the path is empty (the caller resolves it to the
/// tip), and to `rev` itself when no branch is checked out.
pub async fn next_rev(shell: &dyn ShellRunner, dir: &Path, rev: &str) -> Result<String> {
    let out = shell.run(&format!("git branch --contains {rev}"), dir).await?;
    if !out.success() {
        return Err(NavError::Navigation {
            rev: rev.to_string(),
            code: out.code,
            output: out.output,
        });
    }

    let Some(branch) = checked_out_branch(&out.output) else {
        debug!(rev, "no branch checked out, staying on the current revision");
        return Ok(rev.to_string());
    };

    let out = shell
        .run(
            &format!("git rev-list --reverse --ancestry-path {rev}..{branch} | head -1"),
            dir,
        )
        .await?;
    if !out.success() {
        return Err(NavError::Navigation {
            rev: rev.to_string(),
            code: out.code,
            output: out.output,
        });
    }

    let next = out.output.trim();
    if next.is_empty() {
        debug!(rev, branch, "ancestry path exhausted, falling back to the branch tip");
        Ok(branch)
    } else {
        Ok(next.to_string())
    }
}

/// The branch marked with `*` in `git branch` output, if it is a real
/// branch. A detached HEAD shows up as `* (HEAD detached at ...)`, which is
/// no use as a navigation target.
fn checked_out_branch(listing: &str) -> Option<String> {
    let line = listing.lines().find(|line| line.starts_with('*'))?;
    let name = regex_replace!(r"^\*\s*", line, "");
    if name.starts_with('(') {
        return None;
    }
    Some(name.into_owned())
}
