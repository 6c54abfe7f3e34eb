//! UUID generator page.

use crate::ids::{self, IdFormat};
use crate::types::UuidVersion;

use super::focus::{Cyclic, Direction, advance_index, step_bounded};
use super::state::{Action, Effect, Transition};
use super::theme::CHROME_ROWS;

pub const COUNT_MIN: u8 = 1;
pub const COUNT_MAX: u8 = 100;

/// Rows above the id list: five controls, a gap before the button, then a spacer.
pub const CONTROL_ROWS: u16 = 7;

/// Focusable controls, in cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidField {
    Dash,
    Upper,
    Version,
    Count,
    Generate,
}

impl UuidField {
    pub const ALL: [UuidField; 5] = [
        UuidField::Dash,
        UuidField::Upper,
        UuidField::Version,
        UuidField::Count,
        UuidField::Generate,
    ];
}

#[derive(Debug, Clone)]
pub struct UuidSession {
    pub include_dash: bool,
    pub uppercase: bool,
    pub version: UuidVersion,
    pub count: u8,
    pub focus: UuidField,
    /// Displayed ids. May hold invalid lines after an external edit.
    pub ids: Vec<String>,
    pub scroll: usize,
    pub size: (u16, u16),
}

impl Default for UuidSession {
    fn default() -> Self {
        let format = IdFormat::default();
        Self {
            include_dash: format.dash,
            uppercase: format.upper,
            version: UuidVersion::default(),
            count: COUNT_MIN,
            focus: UuidField::Generate,
            ids: Vec::new(),
            scroll: 0,
            size: (0, 0),
        }
    }
}

impl UuidSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore defaults. The size is kept.
    pub fn reset(&mut self) {
        *self = Self {
            size: self.size,
            ..Self::default()
        };
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.clamp_scroll();
    }

    pub fn format(&self) -> IdFormat {
        IdFormat {
            dash: self.include_dash,
            upper: self.uppercase,
        }
    }

    pub fn advance_focus(&mut self, forward: bool) {
        let i = UuidField::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = UuidField::ALL[advance_index(i, UuidField::ALL.len(), forward)];
    }

    pub fn adjust_focused_value(&mut self, direction: Direction) {
        match self.focus {
            UuidField::Dash => {
                self.include_dash = !self.include_dash;
                self.reformat();
            }
            UuidField::Upper => {
                self.uppercase = !self.uppercase;
                self.reformat();
            }
            UuidField::Version => self.version = self.version.cycle_toward(direction),
            UuidField::Count => {
                self.count = step_bounded(self.count, COUNT_MIN, COUNT_MAX, direction);
            }
            UuidField::Generate => {}
        }
    }

    /// Replace `ids` with `count` fresh ids.
    pub fn generate(&mut self) {
        self.ids = match self.version {
            UuidVersion::V4 => ids::generate_v4(usize::from(self.count), self.format()),
        };
        self.scroll = 0;
        tracing::debug!(count = self.ids.len(), "generated ids");
    }

    /// Re-render every id with the current format, dropping invalid lines.
    pub fn reformat(&mut self) {
        self.ids = ids::reformat(&self.ids, self.format());
        self.clamp_scroll();
    }

    pub fn clipboard_text(&self) -> String {
        self.ids.join("\n")
    }

    /// Take the editor's result, one id per line, unvalidated.
    pub fn apply_edit(&mut self, text: &str) {
        self.ids = text.lines().map(str::to_string).collect();
        self.clamp_scroll();
    }

    /// Replace `ids` with the clipboard's parsable lines in the current format.
    ///
    /// Blank lines are skipped. Returns how many non-blank lines were dropped.
    pub fn apply_paste(&mut self, text: &str) -> usize {
        let format = self.format();
        let mut dropped = 0;
        let mut pasted = Vec::new();
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            match ids::parse_id(line) {
                Some(id) => pasted.push(ids::format_uuid(&id, format)),
                None => dropped += 1,
            }
        }
        tracing::debug!(pasted = pasted.len(), dropped, "pasted ids");
        self.ids = pasted;
        self.scroll = 0;
        dropped
    }

    /// Height of the id list for the last known terminal size.
    pub fn list_rows(&self) -> usize {
        usize::from(self.size.1.saturating_sub(CHROME_ROWS + CONTROL_ROWS))
    }

    /// Keep the last page of ids filling the list.
    fn clamp_scroll(&mut self) {
        let max = self.ids.len().saturating_sub(self.list_rows().max(1));
        self.scroll = self.scroll.min(max);
    }

    pub fn update(&mut self, action: Action) -> Transition {
        match action {
            Action::FocusNext => self.advance_focus(true),
            Action::FocusPrev => self.advance_focus(false),
            Action::AdjustLeft => self.adjust_focused_value(Direction::Left),
            Action::AdjustRight => self.adjust_focused_value(Direction::Right),
            Action::Activate if self.focus == UuidField::Generate => self.generate(),
            Action::Copy => {
                return Transition::Effect(Effect::CopyToClipboard(self.clipboard_text()));
            }
            Action::Paste => return Transition::Effect(Effect::PasteFromClipboard),
            Action::EditExternally => {
                return Transition::Effect(Effect::EditExternally(self.clipboard_text()));
            }
            Action::ScrollDown => {
                self.scroll += 1;
                self.clamp_scroll();
            }
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
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

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";

    #[test]
    fn defaults() {
        let s = UuidSession::new();
        assert!(s.include_dash);
        assert!(!s.uppercase);
        assert_eq!(s.version, UuidVersion::V4);
        assert_eq!(s.count, 1);
        assert_eq!(s.focus, UuidField::Generate);
        assert!(s.ids.is_empty());
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut s = UuidSession::new();
        s.advance_focus(true);
        assert_eq!(s.focus, UuidField::Dash);
        s.advance_focus(false);
        assert_eq!(s.focus, UuidField::Generate);
    }

    #[test]
    fn activate_only_generates_on_button() {
        let mut s = UuidSession::new();
        s.focus = UuidField::Count;
        s.update(Action::Activate);
        assert!(s.ids.is_empty());
        s.focus = UuidField::Generate;
        s.update(Action::Activate);
        assert_eq!(s.ids.len(), 1);
    }

    #[test]
    fn count_is_bounded() {
        let mut s = UuidSession::new();
        s.focus = UuidField::Count;
        s.update(Action::AdjustLeft);
        assert_eq!(s.count, COUNT_MIN);
        s.count = COUNT_MAX;
        s.update(Action::AdjustRight);
        assert_eq!(s.count, COUNT_MAX);
        s.update(Action::AdjustLeft);
        assert_eq!(s.count, COUNT_MAX - 1);
    }

    #[test]
    fn toggling_dash_reformats_existing_ids() {
        let mut s = UuidSession::new();
        s.count = 4;
        s.generate();
        s.focus = UuidField::Dash;
        s.update(Action::AdjustRight);
        assert!(!s.include_dash);
        assert_eq!(s.ids.len(), 4);
        assert!(s.ids.iter().all(|id| id.len() == 32 && !id.contains('-')));
    }

    #[test]
    fn version_adjust_is_a_noop() {
        let mut s = UuidSession::new();
        s.focus = UuidField::Version;
        s.update(Action::AdjustLeft);
        assert_eq!(s.version, UuidVersion::V4);
    }

    #[test]
    fn edit_keeps_invalid_lines_until_reformat() {
        let mut s = UuidSession::new();
        s.apply_edit(&format!("{ID}\nnot an id\n"));
        assert_eq!(s.ids.len(), 2);
        s.reformat();
        assert_eq!(s.ids, vec![ID.to_string()]);
    }

    #[test]
    fn copy_joins_with_newlines() {
        let mut s = UuidSession::new();
        s.ids = vec!["a".into(), "b".into()];
        assert_eq!(
            s.update(Action::Copy),
            Transition::Effect(Effect::CopyToClipboard("a\nb".into()))
        );
    }

    #[test]
    fn edit_requests_editor_with_current_ids() {
        let mut s = UuidSession::new();
        s.ids = vec!["x".into()];
        assert_eq!(
            s.update(Action::EditExternally),
            Transition::Effect(Effect::EditExternally("x".into()))
        );
    }

    #[test]
    fn reset_discards_ids_but_keeps_size() {
        let mut s = UuidSession::new();
        s.set_size(80, 24);
        s.generate();
        s.uppercase = true;
        s.reset();
        assert!(s.ids.is_empty());
        assert!(!s.uppercase);
        assert_eq!(s.size, (80, 24));
    }

    #[test]
    fn paste_requests_clipboard() {
        let mut s = UuidSession::new();
        assert_eq!(
            s.update(Action::Paste),
            Transition::Effect(Effect::PasteFromClipboard)
        );
    }

    #[test]
    fn paste_keeps_parsable_lines_in_current_format() {
        let mut s = UuidSession::new();
        s.uppercase = true;
        s.include_dash = false;
        let text = "67E55044-10B1-426F-9247-BB680E5FE0C8\r\nnope\n\n 67e55044 \n";
        let dropped = s.apply_paste(text);
        assert_eq!(dropped, 2);
        assert_eq!(s.ids, vec!["67E5504410B1426F9247BB680E5FE0C8".to_string()]);
    }

    #[test]
    fn paste_of_only_blank_lines_clears_ids() {
        let mut s = UuidSession::new();
        s.generate();
        assert_eq!(s.apply_paste("\n  \n"), 0);
        assert!(s.ids.is_empty());
    }

    #[test]
    fn scroll_stops_when_last_id_reaches_bottom() {
        let mut s = UuidSession::new();
        s.set_size(80, 24);
        s.count = 30;
        s.generate();
        let rows = s.list_rows();
        assert_eq!(rows, 14);
        for _ in 0..100 {
            s.update(Action::ScrollDown);
        }
        assert_eq!(s.scroll, 30 - rows);
        s.update(Action::ScrollUp);
        assert_eq!(s.scroll, 30 - rows - 1);
    }

    #[test]
    fn short_list_does_not_scroll() {
        let mut s = UuidSession::new();
        s.set_size(80, 24);
        s.count = 3;
        s.generate();
        s.update(Action::ScrollDown);
        assert_eq!(s.scroll, 0);
    }

    #[test]
    fn back_pops() {
        let mut s = UuidSession::new();
        assert_eq!(s.update(Action::Back), Transition::Pop);
    }
}
