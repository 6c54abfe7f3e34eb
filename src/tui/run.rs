//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui,
//! and executes the clipboard and editor effects pages request.
//!
//! The loop is single-threaded and reads events directly: the external
//! editor needs exclusive use of stdin while it runs, so no reader thread
//! may be left polling the terminal.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::{Config, EditorCommand};
use crate::system;

use super::state::{Action, App, AppEvent, Effect, EffectOutcome, InputEvent, Page};
use super::view::render;

type Tty = Terminal<CrosstermBackend<io::Stdout>>;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// With `text_entry` set, printable characters are input and Backspace
/// deletes instead of going back. Returns None for unmapped keys.
pub fn map_key(key: KeyEvent, text_entry: bool) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    // Ctrl+C always quits
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('w') if ctrl => Some(Action::EraseWord),
        KeyCode::Backspace if alt => Some(Action::EraseWord),
        KeyCode::Backspace if text_entry => Some(Action::DeleteChar),
        KeyCode::Char('h') if ctrl && text_entry => Some(Action::DeleteChar),
        KeyCode::Backspace => Some(Action::Back),
        KeyCode::Char('h') if ctrl => Some(Action::Back),

        // Focus and adjustment
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
        KeyCode::Left => Some(Action::AdjustLeft),
        KeyCode::Right => Some(Action::AdjustRight),
        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::PageUp => Some(Action::ScrollUp),
        KeyCode::PageDown => Some(Action::ScrollDown),

        KeyCode::Char(_) if ctrl || alt => None,
        KeyCode::Char(c) if text_entry => Some(Action::Input(c)),

        KeyCode::Char('j') => Some(Action::FocusNext),
        KeyCode::Char('k') => Some(Action::FocusPrev),
        KeyCode::Char('h') => Some(Action::AdjustLeft),
        KeyCode::Char('l') => Some(Action::AdjustRight),
        KeyCode::Char('c') | KeyCode::Char('y') => Some(Action::Copy),
        KeyCode::Char('v') | KeyCode::Char('p') => Some(Action::Paste),
        KeyCode::Char('x') => Some(Action::EditExternally),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='9') => Some(Action::NumberKey(c as u8 - b'0')),

        _ => None,
    }
}

/// Translate a raw input into a controller event.
pub fn to_app_event(input: InputEvent, text_entry: bool) -> Option<AppEvent> {
    match input {
        InputEvent::Key(key) if key.kind == KeyEventKind::Press => {
            map_key(key, text_entry).map(AppEvent::Action)
        }
        InputEvent::Key(_) => None,
        InputEvent::Resize(width, height) => Some(AppEvent::Resize { width, height }),
    }
}

fn read_input() -> io::Result<Option<InputEvent>> {
    Ok(match event::read()? {
        Event::Key(key) => Some(InputEvent::Key(key)),
        Event::Resize(width, height) => Some(InputEvent::Resize(width, height)),
        _ => None,
    })
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Tty> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive session until the user quits.
pub fn run(config: Config) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &config);
    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Tty, config: &Config) -> io::Result<()> {
    let mut app = App::new();

    let size = terminal.size()?;
    app.dispatch(AppEvent::Resize {
        width: size.width,
        height: size.height,
    });
    if let Some(tool) = config.start {
        app.dispatch(AppEvent::Push(Page::from(tool)));
    }

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            tracing::info!("quit");
            return Ok(());
        }

        let Some(input) = read_input()? else {
            continue;
        };
        let Some(event) = to_app_event(input, app.text_entry_active()) else {
            continue;
        };

        let mut effect = app.dispatch(event);
        while let Some(requested) = effect.take() {
            let outcome = handle_effect(requested, terminal, &config.editor)?;
            effect = app.dispatch(AppEvent::Outcome(outcome));
        }
    }
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Execute a side effect requested by a page.
///
/// Collaborator failures become part of the outcome; only terminal I/O
/// errors abort the session.
fn handle_effect(
    effect: Effect,
    terminal: &mut Tty,
    editor: &EditorCommand,
) -> io::Result<EffectOutcome> {
    tracing::debug!(?effect, "executing effect");
    let outcome = match effect {
        Effect::CopyToClipboard(text) => {
            EffectOutcome::Copied(system::copy_to_clipboard(&text).map_err(|e| e.to_string()))
        }
        Effect::PasteFromClipboard => {
            EffectOutcome::Pasted(system::paste_from_clipboard().map_err(|e| e.to_string()))
        }
        Effect::EditExternally(text) => {
            // Hand the terminal to the editor, then take it back.
            restore_terminal()?;
            let edited = system::edit_externally(editor, &text).map_err(|e| e.to_string());
            enable_raw_mode()?;
            io::stdout().execute(EnterAlternateScreen)?;
            terminal.clear()?;
            EffectOutcome::Edited(edited)
        }
    };
    Ok(outcome)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, false), Some(Action::Quit));
        assert_eq!(map_key(key, true), Some(Action::Quit));
    }

    #[test]
    fn vim_keys_map_to_focus_and_adjust() {
        assert_eq!(map_key(key(KeyCode::Char('j')), false), Some(Action::FocusNext));
        assert_eq!(map_key(key(KeyCode::Char('k')), false), Some(Action::FocusPrev));
        assert_eq!(map_key(key(KeyCode::Char('h')), false), Some(Action::AdjustLeft));
        assert_eq!(map_key(key(KeyCode::Char('l')), false), Some(Action::AdjustRight));
    }

    #[test]
    fn tab_and_arrows() {
        assert_eq!(map_key(key(KeyCode::Tab), true), Some(Action::FocusNext));
        assert_eq!(map_key(key(KeyCode::BackTab), true), Some(Action::FocusPrev));
        assert_eq!(map_key(key(KeyCode::Left), false), Some(Action::AdjustLeft));
        assert_eq!(map_key(key(KeyCode::Right), false), Some(Action::AdjustRight));
    }

    #[test]
    fn backspace_depends_on_text_entry() {
        assert_eq!(map_key(key(KeyCode::Backspace), false), Some(Action::Back));
        assert_eq!(map_key(key(KeyCode::Backspace), true), Some(Action::DeleteChar));
        let ctrl_h = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_h, false), Some(Action::Back));
        assert_eq!(map_key(ctrl_h, true), Some(Action::DeleteChar));
    }

    #[test]
    fn erase_word_bindings() {
        let ctrl_w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
        let alt_bs = KeyEvent::new(KeyCode::Backspace, KeyModifiers::ALT);
        assert_eq!(map_key(ctrl_w, true), Some(Action::EraseWord));
        assert_eq!(map_key(alt_bs, true), Some(Action::EraseWord));
    }

    #[test]
    fn printable_keys_are_input_while_typing() {
        assert_eq!(map_key(key(KeyCode::Char('q')), true), Some(Action::Input('q')));
        assert_eq!(map_key(key(KeyCode::Char('c')), true), Some(Action::Input('c')));
        assert_eq!(map_key(key(KeyCode::Char('q')), false), Some(Action::Quit));
    }

    #[test]
    fn clipboard_and_editor_keys() {
        assert_eq!(map_key(key(KeyCode::Char('c')), false), Some(Action::Copy));
        assert_eq!(map_key(key(KeyCode::Char('y')), false), Some(Action::Copy));
        assert_eq!(map_key(key(KeyCode::Char('v')), false), Some(Action::Paste));
        assert_eq!(map_key(key(KeyCode::Char('p')), false), Some(Action::Paste));
        assert_eq!(map_key(key(KeyCode::Char('x')), false), Some(Action::EditExternally));
    }

    #[test]
    fn number_keys_map_to_number_actions() {
        for n in 1..=3u8 {
            let k = key(KeyCode::Char((b'0' + n) as char));
            assert_eq!(map_key(k, false), Some(Action::NumberKey(n)));
        }
    }

    #[test]
    fn unmapped_key_returns_none() {
        assert_eq!(map_key(key(KeyCode::Char('z')), false), None);
        assert_eq!(map_key(key(KeyCode::F(1)), false), None);
    }

    #[test]
    fn enter_and_esc() {
        assert_eq!(map_key(key(KeyCode::Enter), true), Some(Action::Activate));
        assert_eq!(map_key(key(KeyCode::Esc), true), Some(Action::Back));
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(to_app_event(InputEvent::Key(release), false), None);
        assert_eq!(
            to_app_event(InputEvent::Key(key(KeyCode::Enter)), false),
            Some(AppEvent::Action(Action::Activate))
        );
    }

    #[test]
    fn resize_becomes_controller_event() {
        assert_eq!(
            to_app_event(InputEvent::Resize(100, 30), false),
            Some(AppEvent::Resize {
                width: 100,
                height: 30
            })
        );
    }
}
