//! Hash page: digest of the current input under the selected algorithm.
//!
//! `output` is derived state. Every path that changes `input` or
//! `algorithm` goes through [`HashSession::recompute`].

use crate::hash::digest_hex;
use crate::types::HashAlgorithm;

use super::focus::{Cyclic, Direction, advance_index};
use super::state::{Action, Effect, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashField {
    Algorithm,
}

impl HashField {
    pub const ALL: [HashField; 1] = [HashField::Algorithm];
}

#[derive(Debug, Clone)]
pub struct HashSession {
    pub algorithm: HashAlgorithm,
    pub focus: HashField,
    pub input: String,
    pub output: String,
}

impl Default for HashSession {
    fn default() -> Self {
        let mut session = Self {
            algorithm: HashAlgorithm::Md5,
            focus: HashField::Algorithm,
            input: String::new(),
            output: String::new(),
        };
        session.recompute();
        session
    }
}

impl HashSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The layout does not depend on size; only the digest is refreshed.
    pub fn resized(&mut self) {
        self.recompute();
    }

    pub fn recompute(&mut self) {
        self.output = digest_hex(self.algorithm, self.input.as_bytes());
    }

    pub fn set_input(&mut self, input: String) {
        self.input = input;
        self.recompute();
    }

    pub fn advance_focus(&mut self, forward: bool) {
        let i = HashField::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = HashField::ALL[advance_index(i, HashField::ALL.len(), forward)];
    }

    pub fn adjust_focused_value(&mut self, direction: Direction) {
        match self.focus {
            HashField::Algorithm => {
                self.algorithm = self.algorithm.cycle_toward(direction);
                self.recompute();
            }
        }
    }

    pub fn update(&mut self, action: Action) -> Transition {
        match action {
            Action::FocusNext => self.advance_focus(true),
            Action::FocusPrev => self.advance_focus(false),
            Action::AdjustLeft => self.adjust_focused_value(Direction::Left),
            Action::AdjustRight => self.adjust_focused_value(Direction::Right),
            Action::Copy => return Transition::Effect(Effect::CopyToClipboard(self.output.clone())),
            Action::Paste => return Transition::Effect(Effect::PasteFromClipboard),
            Action::EditExternally => {
                return Transition::Effect(Effect::EditExternally(self.input.clone()));
            }
            Action::Back => return Transition::Pop,
            Action::Quit => return Transition::Quit,
            _ => {}
        }
        Transition::Stay
    }
}

// ============================================================================
// TESTS
// ============================================================================
