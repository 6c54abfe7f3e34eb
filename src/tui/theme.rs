//! TUI color semantics and style constants.
//!
//! Process-wide read-only styling consumed by the rendering layer.
//!
//! Color semantics:
//! - Blue: breadcrumb and headings
//! - Light blue, bold: the focused control
//! - Gray: unfocused or unavailable controls
//! - Green / red: status line outcome

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Breadcrumb / page header.
pub const STYLE_HEADER: Style = Style::new()
    .fg(Color::Indexed(39))
    .add_modifier(Modifier::BOLD);

/// Focused control or menu cursor.
pub const STYLE_FOCUSED: Style = Style::new()
    .fg(Color::Indexed(117))
    .add_modifier(Modifier::BOLD);

/// Unfocused control.
pub const STYLE_NORMAL: Style = Style::new().fg(Color::Indexed(252));

/// A selector arrow that cannot move further.
pub const STYLE_DISABLED: Style = Style::new().fg(Color::Indexed(240));

/// De-emphasized text: descriptions, placeholders, notes.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important values such as digests and ids.
pub const STYLE_VALUE: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// FOOTER
// ============================================================================

/// Help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Status: success.
pub const STYLE_INFO: Style = Style::new().fg(Color::Green);

/// Status: collaborator failure.
pub const STYLE_ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Left padding of page content, in columns.
pub const PADDING: u16 = 2;

/// Rows outside the page area: breadcrumb, spacer and footer.
pub const CHROME_ROWS: u16 = 3;

// ============================================================================
// TESTS
// ============================================================================
