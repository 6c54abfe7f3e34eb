//! Runtime configuration, resolved once in `main`.

use crate::logging::LogConfig;
use crate::types::Tool;

/// Fallback when neither `--editor`, `$VISUAL` nor `$EDITOR` is set.
pub const DEFAULT_EDITOR: &str = "vi";

/// An external editor invocation: program plus leading arguments.
///
/// The file to edit is appended as the final argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl EditorCommand {
    /// Split a command line on whitespace. `None` if it is blank.
    pub fn parse(command: &str) -> Option<Self> {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }

    /// Resolve from the process environment.
    pub fn from_env(explicit: Option<&str>) -> Self {
        Self::resolve(
            explicit,
            std::env::var("VISUAL").ok().as_deref(),
            std::env::var("EDITOR").ok().as_deref(),
        )
    }

    /// First non-blank of `explicit`, `visual`, `editor`, then [`DEFAULT_EDITOR`].
    pub fn resolve(explicit: Option<&str>, visual: Option<&str>, editor: Option<&str>) -> Self {
        [explicit, visual, editor]
            .into_iter()
            .flatten()
            .find_map(Self::parse)
            .unwrap_or_else(|| Self {
                program: DEFAULT_EDITOR.to_string(),
                args: Vec::new(),
            })
    }

    /// The command as typed, for messages.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for EditorCommand {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

/// Configuration for an interactive session.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub editor: EditorCommand,
    pub log: LogConfig,
    /// Tool to open on startup, above the menu.
    pub start: Option<Tool>,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_arguments() {
        let cmd = EditorCommand::parse("code --wait").unwrap();
        assert_eq!(cmd.program, "code");
        assert_eq!(cmd.args, vec!["--wait".to_string()]);
        assert_eq!(cmd.display(), "code --wait");
    }

    #[test]
    fn parse_blank_is_none() {
        assert!(EditorCommand::parse("").is_none());
        assert!(EditorCommand::parse("   ").is_none());
    }

    #[test]
    fn explicit_wins() {
        let cmd = EditorCommand::resolve(Some("nano"), Some("emacs"), Some("vim"));
        assert_eq!(cmd.program, "nano");
    }

    #[test]
    fn visual_before_editor() {
        let cmd = EditorCommand::resolve(None, Some("emacs"), Some("vim"));
        assert_eq!(cmd.program, "emacs");
    }

    #[test]
    fn blank_values_are_skipped() {
        let cmd = EditorCommand::resolve(Some(" "), Some(""), Some("vim"));
        assert_eq!(cmd.program, "vim");
    }

    #[test]
    fn falls_back_to_vi() {
        let cmd = EditorCommand::resolve(None, None, None);
        assert_eq!(cmd.program, DEFAULT_EDITOR);
        assert!(cmd.args.is_empty());
        assert_eq!(EditorCommand::default(), cmd);
    }
}
