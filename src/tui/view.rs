//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each page has a dedicated render function. The main `render()` draws
//! the breadcrumb, dispatches on the active page and draws the footer.
//! Widget-building functions are pure (state in, widgets out).

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::catalog;
use crate::types::{Tool, UuidVersion};

use super::color_tool::{self, ColorField, ColorSession};
use super::hash_tool::HashSession;
use super::menu::MenuSession;
use super::state::{App, Page, PageStack, Status, StatusLevel};
use super::theme;
use super::uuid_tool::{self, UuidField, UuidSession};

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the active page to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // breadcrumb
        Constraint::Length(1), // spacer
        Constraint::Min(0),    // page
        Constraint::Length(1), // status / help
    ])
    .split(frame.area());

    frame.render_widget(render_breadcrumb(&app.stack), chunks[0]);

    let [_, content] =
        Layout::horizontal([Constraint::Length(theme::PADDING), Constraint::Min(0)])
            .areas(chunks[2]);

    match app.current_page() {
        Page::Menu => render_menu(&app.menu, frame, content),
        Page::Uuid => render_uuid(&app.uuid, frame, content),
        Page::Hash => render_hash(&app.hash, frame, content),
        Page::Color => render_color(&app.color, frame, content),
    }

    let footer = match &app.status {
        Some(status) => render_status(status),
        None => render_help(app.current_page()),
    };
    frame.render_widget(footer, chunks[3]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_breadcrumb(stack: &PageStack) -> Paragraph<'static> {
    Paragraph::new(Span::styled(stack.breadcrumb(), theme::STYLE_HEADER))
}

fn render_help(page: Page) -> Paragraph<'static> {
    let help_text = match page {
        Page::Menu => "[j/k] move  [Enter] open  [1-3] pick  [q] quit",
        Page::Uuid => {
            "[Tab] next  [h/l] adjust  [Enter] run  [c] copy  [v] paste  [x] edit  [Esc] back"
        }
        Page::Hash => "[h/l] algorithm  [c] copy  [v] paste  [x] edit input  [Esc] back",
        Page::Color => {
            "[Tab] next  [h/l] adjust  [Enter] filter  [PgUp/PgDn] scroll  [Esc] back"
        }
    };
    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

fn render_status(status: &Status) -> Paragraph<'static> {
    let style = match status.level {
        StatusLevel::Info => theme::STYLE_INFO,
        StatusLevel::Error => theme::STYLE_ERROR,
    };
    Paragraph::new(Span::styled(status.message.clone(), style))
}

fn label_style(focused: bool) -> Style {
    if focused {
        theme::STYLE_FOCUSED
    } else {
        theme::STYLE_NORMAL
    }
}

/// `Label     < value >`, with arrows dimmed where the value cannot move.
fn selector(
    label: &str,
    value: String,
    focused: bool,
    can_left: bool,
    can_right: bool,
) -> Line<'static> {
    let arrow = |enabled: bool, symbol: &'static str| {
        if enabled && focused {
            Span::styled(symbol, theme::STYLE_FOCUSED)
        } else if enabled {
            Span::styled(symbol, theme::STYLE_NORMAL)
        } else {
            Span::styled(symbol, theme::STYLE_DISABLED)
        }
    };
    Line::from(vec![
        Span::styled(format!("{label:<10}"), label_style(focused)),
        arrow(can_left, "< "),
        Span::styled(value, label_style(focused)),
        arrow(can_right, " >"),
    ])
}

fn toggle(label: &str, on: bool, focused: bool) -> Line<'static> {
    let value = if on { "on" } else { "off" };
    selector(label, value.to_string(), focused, true, true)
}

fn button(label: &str, focused: bool) -> Line<'static> {
    Line::from(Span::styled(format!("[ {label} ]"), label_style(focused)))
}

/// Items visible from `scroll` within `height`.
fn window<T>(items: &[T], scroll: usize, height: u16) -> &[T] {
    let start = scroll.min(items.len());
    let end = (start + usize::from(height)).min(items.len());
    &items[start..end]
}

// ============================================================================
// PAGE: MENU
// ============================================================================

fn render_menu(menu: &MenuSession, frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for (i, tool) in Tool::ALL.iter().enumerate() {
        let focused = i == menu.cursor;
        let marker = if focused { "> " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{marker}{}. {}", i + 1, tool.label()),
                label_style(focused),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", tool.description()),
            theme::STYLE_DIM,
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

// ============================================================================
// PAGE: UUID
// ============================================================================

fn render_uuid(session: &UuidSession, frame: &mut Frame, area: Rect) {
    let focus = session.focus;
    let controls = vec![
        toggle("Dash", session.include_dash, focus == UuidField::Dash),
        toggle("Uppercase", session.uppercase, focus == UuidField::Upper),
        selector(
            "Version",
            session.version.label().to_string(),
            focus == UuidField::Version,
            UuidVersion::ALL.len() > 1,
            UuidVersion::ALL.len() > 1,
        ),
        selector(
            "Count",
            session.count.to_string(),
            focus == UuidField::Count,
            session.count > uuid_tool::COUNT_MIN,
            session.count < uuid_tool::COUNT_MAX,
        ),
        Line::from(""),
        button("Generate", focus == UuidField::Generate),
    ];

    let [controls_area, _, list_area] = Layout::vertical([
        Constraint::Length(controls.len() as u16),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(controls), controls_area);

    let ids: Vec<Line> = window(&session.ids, session.scroll, list_area.height)
        .iter()
        .map(|id| Line::from(Span::styled(id.clone(), theme::STYLE_VALUE)))
        .collect();
    frame.render_widget(Paragraph::new(ids), list_area);
}

// ============================================================================
// PAGE: HASH
// ============================================================================

fn render_hash(session: &HashSession, frame: &mut Frame, area: Rect) {
    let input = if session.input.is_empty() {
        Span::styled("(empty)", theme::STYLE_DIM)
    } else {
        let first = session.input.lines().next().unwrap_or_default();
        let more = session.input.lines().count().saturating_sub(1);
        let text = if more > 0 {
            format!("{first} (+{more} lines, {} bytes)", session.input.len())
        } else {
            first.to_string()
        };
        Span::styled(text, theme::STYLE_NORMAL)
    };

    let lines = vec![
        selector("Algorithm", session.algorithm.label().to_string(), true, true, true),
        Line::from(""),
        Line::from(vec![Span::styled("Input     ", theme::STYLE_NORMAL), input]),
        Line::from(""),
        Line::from(Span::styled("Output", theme::STYLE_NORMAL)),
        Line::from(Span::styled(session.output.clone(), theme::STYLE_VALUE)),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

// ============================================================================
// PAGE: COLOR
// ============================================================================

fn render_color(session: &ColorSession, frame: &mut Frame, area: Rect) {
    let focus = session.focus;
    let input_focused = focus == ColorField::Input;

    let query = if session.query.is_empty() {
        Span::styled(color_tool::QUERY_PLACEHOLDER, theme::STYLE_DIM)
    } else {
        Span::styled(session.query.clone(), label_style(input_focused))
    };
    let cursor = if input_focused {
        Span::styled("_", theme::STYLE_FOCUSED)
    } else {
        Span::raw("")
    };

    let mut controls = vec![
        Line::from(vec![
            Span::styled(format!("{:<10}", "Hex"), label_style(input_focused)),
            Span::styled("#", theme::STYLE_DIM),
            query,
            cursor,
        ]),
        selector(
            "Metric",
            session.metric.label().to_string(),
            focus == ColorField::Metric,
            true,
            true,
        ),
        selector(
            "Count",
            session.result_count.to_string(),
            focus == ColorField::Count,
            session.result_count > color_tool::COUNT_MIN,
            session.result_count < color_tool::COUNT_MAX,
        ),
        Line::from(""),
        button("Filter", focus == ColorField::Filter),
    ];
    if session.query_valid == Some(false) {
        controls.push(Line::from(Span::styled(
            "not a hex color, showing full catalog",
            theme::STYLE_DIM,
        )));
    }

    let [controls_area, _, list_area] = Layout::vertical([
        Constraint::Length(controls.len() as u16),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(controls), controls_area);

    let rows: Vec<Line> = window(&session.results, session.scroll, list_area.height)
        .iter()
        .map(|c| color_row(c))
        .collect();
    frame.render_widget(Paragraph::new(rows), list_area);
}

/// `id  swatch  name-or-hex`.
fn color_row(color: &catalog::Color) -> Line<'static> {
    let detail = match color.name16() {
        Some(name) => name.to_string(),
        None => format!(
            "#{}  rgb({}, {}, {})",
            color.hex, color.rgb.r, color.rgb.g, color.rgb.b
        ),
    };
    Line::from(vec![
        Span::styled(format!("{:>3}  ", color.id), theme::STYLE_DIM),
        Span::styled("    ", Style::new().bg(Color::Indexed(color.id))),
        Span::raw("  "),
        Span::styled(detail, theme::STYLE_NORMAL),
    ])
}

// ============================================================================
// TESTS
// ============================================================================
