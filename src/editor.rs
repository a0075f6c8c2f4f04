//! Surfaces the navigator drives: the editor being annotated, the workspace
//! that opens views and prompts for input, and the view windows themselves.
//!
//! Everything here is a trait so hosts can plug in their own UI; the crate
//! ships a terminal host and tests use the recording mocks below.

use crate::nav::error::NavError;
use crate::nav::session::SessionContext;

/// Width and height of a newly opened view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewExtent {
    pub width: u32,
    pub height: u32,
}

/// How a view's content should be rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    Diff,
}

/// Everything needed to open a read-only view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewSpec {
    pub title: String,
    pub content: String,
    pub kind: ContentKind,
    pub extent: ViewExtent,
}

/// Options for a workspace prompt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PromptOptions {
    /// Identifier under which the host keeps per-prompt input history.
    pub history_id: &'static str,
    /// Pre-filled input.
    pub default_value: Option<String>,
}

/// A window holding rendered output.
pub trait ViewHandle {
    fn set_title(&mut self, title: &str);
    fn bring_to_front(&mut self);
}

/// The editor buffer the navigator annotates.
pub trait Editor {
    fn session(&self) -> Option<&SessionContext>;
    fn set_session(&mut self, session: SessionContext);

    fn set_content(&mut self, content: &str);
    fn current_line_text(&self) -> String;
    fn selection_start_row(&self) -> usize;
    fn select_and_center_row(&mut self, row: usize);
    fn focus(&mut self);

    fn show_error(&mut self, error: &NavError);

    /// The window hosting this editor, when there is one.
    fn window(&mut self) -> Option<&mut dyn ViewHandle>;
}

/// Opens new views and asks the user for input.
#[async_trait::async_trait]
pub trait Workspace: Send {
    fn open_view(&mut self, spec: ViewSpec) -> Box<dyn ViewHandle>;

    /// Ask the user for one line of input. `None` means the prompt was
    /// declined.
    async fn prompt(&mut self, label: &str, options: PromptOptions) -> Option<String>;
}
