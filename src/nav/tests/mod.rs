//! Scenario tests against real repositories, exercising the full pipeline
//! from revision resolution through rendering.

use crate::editor::ViewExtent;
use crate::editor::mock::{MockEditor, MockWorkspace};
use crate::nav::annotate::{AnnotateRequest, annotate_rev, rev_back, rev_fwd, try_annotate_rev};
use crate::nav::resolve::{next_rev, normalize_rev};
use crate::nav::session::SessionContext;
use crate::nav::viewers::{show_file_version_at_line, show_log_at_line};
use crate::shell::SystemShell;
use crate::testing::TestRepo;

const EXTENT: ViewExtent = ViewExtent {
    width: 600,
    height: 800,
};

#[tokio::test]
async fn normalize_is_idempotent() {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "one\n", "first");
    let shell = SystemShell;

    let once = normalize_rev(&shell, &repo.path(), "HEAD").await.unwrap();
    let twice = normalize_rev(&shell, &repo.path(), &once).await.unwrap();

    assert_eq!(once, twice);
    assert_eq!(once, repo.rev_parse("HEAD"));
}

#[tokio::test]
async fn normalize_resolves_head_to_the_commit_git2_sees() {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "one\n", "first");
    let shell = SystemShell;

    let resolved = normalize_rev(&shell, &repo.path(), "HEAD").await.unwrap();

    let opened = git2::Repository::open(repo.path()).unwrap();
    let head = opened.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(resolved, head.id().to_string());
}

#[tokio::test]
async fn normalize_rejects_unknown_revisions() {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "one\n", "first");
    let shell = SystemShell;

    let err = normalize_rev(&shell, &repo.path(), "no-such-rev")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("no-such-rev"));
}

#[tokio::test]
async fn next_rev_steps_through_a_linear_history() {
    let repo = TestRepo::new();
    let a = repo.commit_file("a.txt", "one\n", "A");
    let b = repo.commit_file("a.txt", "two\n", "B");
    let c = repo.commit_file("a.txt", "three\n", "C");
    let shell = SystemShell;

    assert_eq!(next_rev(&shell, &repo.path(), &a).await.unwrap(), b);
    assert_eq!(next_rev(&shell, &repo.path(), &b).await.unwrap(), c);
}

#[tokio::test]
async fn next_rev_at_the_tip_falls_back_to_the_branch() {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "one\n", "A");
    let tip = repo.commit_file("a.txt", "two\n", "B");
    let shell = SystemShell;

    let next = next_rev(&shell, &repo.path(), &tip).await.unwrap();

    // The ancestry path is empty, so the branch name comes back; resolving
    // it lands on the tip commit itself.
    assert_eq!(next, "main");
    let resolved = normalize_rev(&shell, &repo.path(), &next).await.unwrap();
    assert_eq!(resolved, tip);
}

#[tokio::test]
async fn next_rev_follows_the_checked_out_branch() {
    let repo = TestRepo::new();
    let a = repo.commit_file("a.txt", "one\n", "A");
    repo.commit_file("a.txt", "two\n", "B");
    repo.branch_at("feature", &a);
    repo.checkout("feature");
    let c = repo.commit_file("b.txt", "x\n", "C");
    let shell = SystemShell;

    // Both main and feature contain A; the path follows the checked-out one.
    assert_eq!(next_rev(&shell, &repo.path(), &a).await.unwrap(), c);
}

#[tokio::test]
async fn next_rev_with_detached_head_stays_put() {
    let repo = TestRepo::new();
    let a = repo.commit_file("a.txt", "one\n", "A");
    repo.commit_file("a.txt", "two\n", "B");
    repo.checkout_detached(&a);
    let shell = SystemShell;

    let next = next_rev(&shell, &repo.path(), &a).await.unwrap();

    assert_eq!(next, a);
}

#[tokio::test]
async fn annotate_produces_a_canonical_session_and_titled_window() {
    let repo = TestRepo::new();
    repo.commit_file(
        "src/lib.rs",
        "pub fn answer() -> u32 {\n    42\n}\n",
        "add answer",
    );
    let shell = SystemShell;
    let mut ed = MockEditor::new().with_window();

    try_annotate_rev(
        &shell,
        &mut ed,
        AnnotateRequest {
            file: Some("src/lib.rs".to_string()),
            dir: Some(repo.path()),
            rev: Some("HEAD".to_string()),
            row: Some(1),
        },
    )
    .await
    .unwrap();

    let session = ed.session.clone().unwrap();
    assert!(
        session.rev.len() == 40 || session.rev.len() == 64,
        "expected a full commit id, got: {}",
        session.rev
    );
    assert!(session.rev.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(session.rev, repo.rev_parse("HEAD"));
    assert_eq!(session.file, "src/lib.rs");
    assert_eq!(session.dir, repo.path());
    assert_eq!(session.row, Some(1));

    assert_eq!(ed.contents.len(), 1);
    assert!(ed.contents[0].contains("answer"));
    assert_eq!(ed.centered_rows, vec![1]);
    assert_eq!(ed.focus_count, 1);

    let title = ed.view.unwrap().last_title().unwrap();
    assert!(title.contains(&session.rev[..7]));
    assert!(title.contains("src/lib.rs"));
}

#[tokio::test]
async fn stepping_back_then_forward_round_trips() {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "one\n", "A");
    let b = repo.commit_file("a.txt", "two\n", "B");
    let shell = SystemShell;
    let mut ed = MockEditor::new();

    try_annotate_rev(
        &shell,
        &mut ed,
        AnnotateRequest {
            file: Some("a.txt".to_string()),
            dir: Some(repo.path()),
            rev: Some("HEAD".to_string()),
            row: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(ed.session.as_ref().unwrap().rev, b);

    rev_back(&shell, &mut ed).await;
    assert_eq!(ed.session.as_ref().unwrap().rev, repo.rev_parse("HEAD~1"));
    assert!(ed.errors.is_empty());

    rev_fwd(&shell, &mut ed).await;
    assert_eq!(ed.session.as_ref().unwrap().rev, b);
    assert!(ed.errors.is_empty());
}

#[tokio::test]
async fn annotate_failure_with_real_git_keeps_the_editor_clean() {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "one\n", "A");
    let shell = SystemShell;
    let mut ed = MockEditor::new();

    annotate_rev(
        &shell,
        &mut ed,
        AnnotateRequest {
            file: Some("missing.txt".to_string()),
            dir: Some(repo.path()),
            rev: Some("HEAD".to_string()),
            row: None,
        },
    )
    .await;

    assert_eq!(ed.session, None);
    assert!(ed.contents.is_empty());
    assert_eq!(ed.errors.len(), 1);
}

#[tokio::test]
async fn show_file_version_renders_historic_content() {
    let repo = TestRepo::new();
    let a = repo.commit_file("a.txt", "old content\n", "A");
    repo.commit_file("a.txt", "new content\n", "B");
    let shell = SystemShell;
    let mut ws = MockWorkspace::new();
    let mut ed = MockEditor::new()
        .with_session(SessionContext {
            file: "a.txt".to_string(),
            dir: repo.path(),
            rev: repo.rev_parse("HEAD"),
            row: None,
        })
        .with_line(&format!("{a} a.txt"));

    show_file_version_at_line(&shell, &mut ws, &mut ed, EXTENT).await;

    assert!(ed.errors.is_empty(), "unexpected errors: {:?}", ed.errors);
    assert_eq!(ws.opened.len(), 1);
    assert_eq!(ws.opened[0].content, "old content\n");
    assert_eq!(ws.opened[0].title, format!("{a}:a.txt"));
}

#[tokio::test]
async fn show_log_includes_the_patch_for_that_commit() {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "one\n", "A");
    let b = repo.commit_file("a.txt", "one\ntwo\n", "B");
    let shell = SystemShell;
    let mut ws = MockWorkspace::new();
    let mut ed = MockEditor::new()
        .with_session(SessionContext {
            file: "a.txt".to_string(),
            dir: repo.path(),
            rev: b.clone(),
            row: None,
        })
        .with_line(&format!("{b} a.txt"));

    show_log_at_line(&shell, &mut ws, &mut ed, EXTENT).await;

    assert!(ed.errors.is_empty(), "unexpected errors: {:?}", ed.errors);
    assert_eq!(ws.opened.len(), 1);
    let content = &ws.opened[0].content;
    assert!(content.contains("+two"));
    assert!(content.contains(&b[..7]) || content.contains(&b));
}
