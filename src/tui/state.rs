//! TUI state algebra: pages, the page stack, actions and transitions.
//!
//! Design principle: a [`Page`] is only a tag. The mutable state of each
//! tool lives in its session, owned by [`App`], and is reached by matching
//! on the tag. Only the page on top of the stack receives events.

use crossterm::event::KeyEvent;

use crate::types::Tool;

use super::color_tool::ColorSession;
use super::hash_tool::HashSession;
use super::menu::MenuSession;
use super::uuid_tool::UuidSession;

// ============================================================================
// PAGES
// ============================================================================

/// Program name, shown as the root of the breadcrumb.
pub const APP_NAME: &str = "btox";

/// Separator between breadcrumb labels.
pub const CRUMB_SEPARATOR: &str = " > ";

/// A navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Menu,
    Uuid,
    Hash,
    Color,
}

impl Page {
    /// Label used in the breadcrumb.
    pub const fn label(self) -> &'static str {
        match self {
            Page::Menu => APP_NAME,
            Page::Uuid => Tool::Uuid.label(),
            Page::Hash => Tool::Hash.label(),
            Page::Color => Tool::Color.label(),
        }
    }
}

impl From<Tool> for Page {
    fn from(tool: Tool) -> Self {
        match tool {
            Tool::Uuid => Page::Uuid,
            Tool::Hash => Page::Hash,
            Tool::Color => Page::Color,
        }
    }
}

/// Linear navigation history. Never empty; the bottom is always Menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStack {
    pages: Vec<Page>,
}

impl Default for PageStack {
    fn default() -> Self {
        Self::new()
    }
}

impl PageStack {
    pub fn new() -> Self {
        Self {
            pages: vec![Page::Menu],
        }
    }

    pub fn push(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Remove the top page. `None` (and no change) when only Menu remains.
    pub fn pop(&mut self) -> Option<Page> {
        if self.pages.len() <= 1 {
            return None;
        }
        self.pages.pop()
    }

    /// The active page.
    pub fn current(&self) -> Page {
        // The constructor seeds Menu and pop never removes the last page.
        self.pages.last().copied().unwrap_or(Page::Menu)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Labels from root to the active page.
    pub fn crumbs(&self) -> Vec<&'static str> {
        self.pages.iter().map(|p| p.label()).collect()
    }

    /// The breadcrumb line.
    pub fn breadcrumb(&self) -> String {
        self.crumbs().join(CRUMB_SEPARATOR)
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions; each page decides what
/// an Action means for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Focus the next field (menu: move down).
    FocusNext,
    /// Focus the previous field (menu: move up).
    FocusPrev,
    /// Adjust the focused value to the left.
    AdjustLeft,
    /// Adjust the focused value to the right.
    AdjustRight,
    /// Press the focused button / open the selected menu entry.
    Activate,
    /// Return to the previous page.
    Back,
    /// Copy the page's output to the clipboard.
    Copy,
    /// Replace the page's input with the clipboard contents.
    Paste,
    /// Edit the page's text in the external editor.
    EditExternally,
    /// Scroll the result list.
    ScrollUp,
    ScrollDown,
    /// A character typed into the focused text field.
    Input(char),
    /// Delete the character before the cursor.
    DeleteChar,
    /// Delete the word before the cursor.
    EraseWord,
    /// Pick a menu entry by number (1-based).
    NumberKey(u8),
    /// Quit the application.
    Quit,
}

// ============================================================================
// EVENTS, TRANSITIONS, EFFECTS
// ============================================================================

/// Everything the controller can be asked to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A user action for the active page.
    Action(Action),
    /// The terminal was resized.
    Resize { width: u16, height: u16 },
    /// Re-issue the last known size so layouts recompute.
    Redraw,
    /// Open a page on top of the stack.
    Push(Page),
    /// Return to the previous page.
    Pop,
    /// Result of an effect previously returned by `dispatch`.
    Outcome(EffectOutcome),
}

/// What a page asks the controller to do after handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Nothing beyond the page's own state change.
    Stay,
    Push(Page),
    Pop,
    Redraw,
    Quit,
    /// Run a side effect outside the pure core.
    Effect(Effect),
}

/// Side effect requested by a page.
///
/// Pure code never executes these; the effects boundary does and reports
/// back with an [`EffectOutcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CopyToClipboard(String),
    PasteFromClipboard,
    EditExternally(String),
}

/// Result of an executed [`Effect`]. Errors are carried as messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectOutcome {
    Copied(Result<(), String>),
    Pasted(Result<String, String>),
    Edited(Result<String, String>),
}

// ============================================================================
// STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// One-line message shown in the footer until the next action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub level: StatusLevel,
    pub message: String,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            message: message.into(),
        }
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Raw input the event loop hands to the controller.
#[derive(Debug)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Top-level TUI model: the page stack plus one session per page.
///
/// Sessions are created once and reset each time their page is pushed.
#[derive(Debug)]
pub struct App {
    pub stack: PageStack,
    pub menu: MenuSession,
    pub uuid: UuidSession,
    pub hash: HashSession,
    pub color: ColorSession,
    /// Last known terminal size (columns, rows).
    pub size: (u16, u16),
    pub status: Option<Status>,
    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        App {
            stack: PageStack::new(),
            menu: MenuSession::new(),
            uuid: UuidSession::new(),
            hash: HashSession::new(),
            color: ColorSession::new(),
            size: (0, 0),
            status: None,
            should_quit: false,
        }
    }

    pub fn current_page(&self) -> Page {
        self.stack.current()
    }

    /// Whether a free-text field has focus, so printable keys are input.
    pub fn text_entry_active(&self) -> bool {
        match self.current_page() {
            Page::Color => self.color.text_entry_active(),
            Page::Menu | Page::Uuid | Page::Hash => false,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_starts_at_menu() {
        let stack = PageStack::new();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.current(), Page::Menu);
        assert!(!stack.is_empty());
    }

    #[test]
    fn menu_can_never_be_popped() {
        let mut stack = PageStack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.pages(), &[Page::Menu]);
    }

    #[test]
    fn push_then_pop_returns_top() {
        let mut stack = PageStack::new();
        stack.push(Page::Hash);
        assert_eq!(stack.current(), Page::Hash);
        assert_eq!(stack.pop(), Some(Page::Hash));
        assert_eq!(stack.current(), Page::Menu);
    }

    #[test]
    fn breadcrumb_joins_labels() {
        let mut stack = PageStack::new();
        stack.push(Page::Color);
        assert_eq!(stack.crumbs(), vec!["btox", "Color"]);
        assert_eq!(stack.breadcrumb(), "btox > Color");
    }

    #[test]
    fn pages_map_from_tools() {
        assert_eq!(Page::from(Tool::Uuid), Page::Uuid);
        assert_eq!(Page::from(Tool::Hash), Page::Hash);
        assert_eq!(Page::from(Tool::Color), Page::Color);
        assert_eq!(Page::Uuid.label(), "UUID");
    }

    #[test]
    fn app_starts_on_menu_without_status() {
        let app = App::new();
        assert_eq!(app.current_page(), Page::Menu);
        assert!(app.status.is_none());
        assert!(!app.should_quit);
        assert!(!app.text_entry_active());
    }

    #[test]
    fn status_constructors() {
        assert_eq!(Status::info("ok").level, StatusLevel::Info);
        assert_eq!(Status::error("bad").level, StatusLevel::Error);
    }

    #[test]
    fn transition_variants_are_distinguishable() {
        let t1 = Transition::Push(Page::Uuid);
        let t2 = Transition::Pop;
        let t3 = Transition::Effect(Effect::PasteFromClipboard);
        assert_ne!(t1, t2);
        assert_ne!(t2, t3);
    }
}
