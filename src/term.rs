//! Terminal implementations of the editor and workspace surfaces.
//!
//! "Windows" in a terminal are just printed blocks: the annotated buffer is
//! rendered with a cursor marker, and each opened view prints a titled block
//! (colorized for diffs when stdout is a tty).

use std::collections::HashMap;
use std::io::{self, Write};

use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::tty::IsTty;
use tracing::{debug, warn};

use crate::editor::{ContentKind, Editor, PromptOptions, ViewHandle, ViewSpec, Workspace};
use crate::nav::error::NavError;
use crate::nav::session::SessionContext;

/// A printed block standing in for a window. Only the title is retained.
#[derive(Default)]
pub struct TermView {
    title: Option<String>,
}

impl ViewHandle for TermView {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn bring_to_front(&mut self) {}
}

/// Editor surface over a line buffer with a movable cursor.
#[derive(Default)]
pub struct TermEditor {
    session: Option<SessionContext>,
    lines: Vec<String>,
    cursor: usize,
    view: TermView,
}

impl TermEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the cursor to a 0-based row, clamped to the buffer.
    pub fn move_cursor(&mut self, row: usize) {
        self.cursor = row.min(self.lines.len().saturating_sub(1));
    }

    /// Write the title and the buffer with line numbers and a cursor marker.
    pub fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        if let Some(title) = &self.view.title {
            writeln!(writer, "== {title} ==")?;
        }
        for (idx, line) in self.lines.iter().enumerate() {
            let marker = if idx == self.cursor { '>' } else { ' ' };
            writeln!(writer, "{marker}{:>5}  {line}", idx + 1)?;
        }
        Ok(())
    }

    /// Print the buffer to stdout.
    /// Ignores BrokenPipe errors (e.g., when piped to `head`).
    pub fn print(&self) -> anyhow::Result<()> {
        if let Err(e) = self.render(&mut io::stdout())
            && e.kind() != io::ErrorKind::BrokenPipe
        {
            return Err(e.into());
        }
        Ok(())
    }
}

impl Editor for TermEditor {
    fn session(&self) -> Option<&SessionContext> {
        self.session.as_ref()
    }

    fn set_session(&mut self, session: SessionContext) {
        if let Some(row) = session.row {
            self.move_cursor(row);
        }
        self.session = Some(session);
    }

    fn set_content(&mut self, content: &str) {
        self.lines = content.lines().map(str::to_string).collect();
        if self.cursor >= self.lines.len() {
            self.cursor = self.lines.len().saturating_sub(1);
        }
    }

    fn current_line_text(&self) -> String {
        self.lines.get(self.cursor).cloned().unwrap_or_default()
    }

    fn selection_start_row(&self) -> usize {
        self.cursor
    }

    fn select_and_center_row(&mut self, row: usize) {
        self.move_cursor(row);
    }

    fn focus(&mut self) {}

    fn show_error(&mut self, error: &NavError) {
        if io::stderr().is_tty() {
            eprintln!(
                "{}error: {error}{}",
                SetForegroundColor(Color::Red),
                ResetColor
            );
        } else {
            eprintln!("error: {error}");
        }
    }

    fn window(&mut self) -> Option<&mut dyn ViewHandle> {
        Some(&mut self.view)
    }
}

/// Workspace surface that prints views to stdout and prompts on stdin.
#[derive(Default)]
pub struct TermWorkspace {
    /// Last accepted answer per prompt history id, used as the fallback
    /// default when a prompt carries none of its own.
    history: HashMap<&'static str, String>,
}

impl TermWorkspace {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Workspace for TermWorkspace {
    fn open_view(&mut self, spec: ViewSpec) -> Box<dyn ViewHandle> {
        debug!(
            title = %spec.title,
            width = spec.extent.width,
            height = spec.extent.height,
            "opening view"
        );

        let use_color = io::stdout().is_tty();
        if let Err(e) = write_view(&mut io::stdout(), &spec, use_color)
            && e.kind() != io::ErrorKind::BrokenPipe
        {
            warn!(error = %e, "failed to print view");
        }
        Box::new(TermView {
            title: Some(spec.title),
        })
    }

    async fn prompt(&mut self, label: &str, options: PromptOptions) -> Option<String> {
        let default = options
            .default_value
            .or_else(|| self.history.get(options.history_id).cloned());

        match default.as_deref() {
            Some(default) => print!("{label} [{default}]: "),
            None => print!("{label}: "),
        }
        io::stdout().flush().ok();

        let mut input = String::new();
        // EOF declines the prompt
        if io::stdin().read_line(&mut input).ok()? == 0 {
            return None;
        }
        let input = input.trim();

        let answer = if input.is_empty() {
            default?
        } else {
            input.to_string()
        };
        self.history.insert(options.history_id, answer.clone());
        Some(answer)
    }
}

/// Write a view block: a title line, then the content.
fn write_view<W: Write>(writer: &mut W, spec: &ViewSpec, use_color: bool) -> io::Result<()> {
    writeln!(writer, "== {} ==", spec.title)?;
    match spec.kind {
        ContentKind::Text => write!(writer, "{}", spec.content)?,
        ContentKind::Diff => write_colored_diff(writer, &spec.content, use_color)?,
    }
    if !spec.content.ends_with('\n') {
        writeln!(writer)?;
    }
    Ok(())
}

/// Color diff lines the way git does: deletions red, insertions green,
/// hunk headers cyan.
fn write_colored_diff<W: Write>(writer: &mut W, content: &str, use_color: bool) -> io::Result<()> {
    for line in content.split_inclusive('\n') {
        let color = match line.as_bytes().first() {
            Some(b'-') => Some(Color::Red),
            Some(b'+') => Some(Color::Green),
            Some(b'@') => Some(Color::Cyan),
            _ => None,
        };

        if use_color && let Some(color) = color {
            write!(writer, "{}{line}{}", SetForegroundColor(color), ResetColor)?;
        } else {
            write!(writer, "{line}")?;
        }
    }
    Ok(())
}
