//! Root page: a list of the available tools.

use crate::types::Tool;

use super::state::{Action, Page, Transition};

#[derive(Debug, Clone, Default)]
pub struct MenuSession {
    /// Index into [`Tool::ALL`].
    pub cursor: usize,
}

impl MenuSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn selected(&self) -> Tool {
        Tool::ALL[self.cursor.min(Tool::ALL.len() - 1)]
    }

    pub fn update(&mut self, action: Action) -> Transition {
        match action {
            Action::FocusNext => {
                if self.cursor + 1 < Tool::ALL.len() {
                    self.cursor += 1;
                }
                Transition::Stay
            }
            Action::FocusPrev => {
                self.cursor = self.cursor.saturating_sub(1);
                Transition::Stay
            }
            Action::Activate | Action::AdjustRight => Transition::Push(self.selected().into()),
            Action::NumberKey(n) => match Tool::ALL.get(usize::from(n).wrapping_sub(1)) {
                Some(tool) => {
                    self.cursor = usize::from(n) - 1;
                    Transition::Push(Page::from(*tool))
                }
                None => Transition::Stay,
            },
            Action::Quit => Transition::Quit,
            _ => Transition::Stay,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
