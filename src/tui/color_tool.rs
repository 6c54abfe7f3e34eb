//! Nearest 256-color lookup page.
//!
//! The query is typed into a hex field; the search only runs when the
//! Filter button is activated.

use crate::catalog::{CATALOG, Color};
use crate::matcher::{ColorMatcher, parse_hex};
use crate::types::DistanceMetric;

use super::focus::{Cyclic, Direction, advance_index, step_bounded};
use super::state::{Action, Transition};
use super::theme::CHROME_ROWS;

pub const COUNT_MIN: u8 = 1;
pub const COUNT_MAX: u8 = 10;
pub const COUNT_DEFAULT: u8 = 5;

/// Longest accepted query, `RRGGBB`.
pub const QUERY_MAX_LEN: usize = 6;

/// Shown in the empty input.
pub const QUERY_PLACEHOLDER: &str = "000000";

/// Rows above the result list: four controls, a gap before the button, then a spacer.
pub const CONTROL_ROWS: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorField {
    Input,
    Metric,
    Count,
    Filter,
}

impl ColorField {
    pub const ALL: [ColorField; 4] = [
        ColorField::Input,
        ColorField::Metric,
        ColorField::Count,
        ColorField::Filter,
    ];
}

/// Whether `c` may be typed into the query field.
pub fn is_query_char(c: char) -> bool {
    matches!(c, '0'..='9' | 'a'..='f')
}

#[derive(Debug, Clone)]
pub struct ColorSession {
    pub query: String,
    pub metric: DistanceMetric,
    pub result_count: u8,
    pub focus: ColorField,
    pub results: Vec<&'static Color>,
    /// Outcome of the last filter: `None` before any filter ran.
    pub query_valid: Option<bool>,
    pub scroll: usize,
    pub size: (u16, u16),
}

impl Default for ColorSession {
    fn default() -> Self {
        Self {
            query: String::new(),
            metric: DistanceMetric::Ciede2000,
            result_count: COUNT_DEFAULT,
            focus: ColorField::Input,
            results: CATALOG.iter().collect(),
            query_valid: None,
            scroll: 0,
            size: (0, 0),
        }
    }
}

impl ColorSession {
    pub fn new() -> Self {
        Self::default()
    }

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

    pub fn text_entry_active(&self) -> bool {
        self.focus == ColorField::Input
    }

    pub fn advance_focus(&mut self, forward: bool) {
        let i = ColorField::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = ColorField::ALL[advance_index(i, ColorField::ALL.len(), forward)];
    }

    pub fn adjust_focused_value(&mut self, direction: Direction) {
        match self.focus {
            ColorField::Metric => self.metric = self.metric.cycle_toward(direction),
            ColorField::Count => {
                self.result_count =
                    step_bounded(self.result_count, COUNT_MIN, COUNT_MAX, direction);
            }
            ColorField::Input | ColorField::Filter => {}
        }
    }

    /// Append a typed character. Anything outside `0-9a-f` is ignored.
    pub fn input_char(&mut self, c: char) {
        if is_query_char(c) && self.query.len() < QUERY_MAX_LEN {
            self.query.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        self.query.pop();
    }

    /// Remove the last word and any whitespace after it.
    pub fn erase_word(&mut self) {
        let trimmed = self.query.trim_end().len();
        self.query.truncate(trimmed);
        let start = self
            .query
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        self.query.truncate(start);
    }

    /// Rank the catalog against the query, falling back to the full list.
    pub fn filter(&mut self) {
        let matcher = ColorMatcher::new(&CATALOG);
        self.query_valid = Some(parse_hex(&self.query).is_some());
        self.results = matcher.search(&self.query, self.metric, usize::from(self.result_count));
        self.scroll = 0;
        tracing::info!(
            query = %self.query,
            metric = self.metric.label(),
            results = self.results.len(),
            "filter"
        );
    }

    /// Height of the result list for the last known terminal size.
    pub fn list_rows(&self) -> usize {
        let note = u16::from(self.query_valid == Some(false));
        usize::from(self.size.1.saturating_sub(CHROME_ROWS + CONTROL_ROWS + note))
    }

    /// Keep the last page of results filling the list.
    fn clamp_scroll(&mut self) {
        let max = self.results.len().saturating_sub(self.list_rows().max(1));
        self.scroll = self.scroll.min(max);
    }

    pub fn update(&mut self, action: Action) -> Transition {
        match action {
            Action::FocusNext => self.advance_focus(true),
            Action::FocusPrev => self.advance_focus(false),
            Action::AdjustLeft => self.adjust_focused_value(Direction::Left),
            Action::AdjustRight => self.adjust_focused_value(Direction::Right),
            Action::Activate if self.focus == ColorField::Filter => self.filter(),
            Action::Input(c) if self.text_entry_active() => self.input_char(c),
            Action::DeleteChar if self.text_entry_active() => self.delete_char(),
            Action::EraseWord if self.text_entry_active() => self.erase_word(),
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
