//! Side-effecting collaborators: clipboard and external editor.
//!
//! Only the TUI effects layer calls into this module. Every
//! function blocks until the operation finishes or fails.

use std::io::{self, Read, Write};
use std::process::{Command, ExitStatus};

use thiserror::Error;

use crate::config::EditorCommand;

/// Failure of a clipboard or editor operation.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("could not start editor `{command}`: {source}")]
    EditorSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("editor `{command}` exited with {status}")]
    EditorExit { command: String, status: ExitStatus },

    #[error("temporary file: {0}")]
    TempFile(#[from] io::Error),
}

/// Replace the system clipboard contents with `text`.
pub fn copy_to_clipboard(text: &str) -> Result<(), ToolError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_owned())?;
    Ok(())
}

/// Read text from the system clipboard.
pub fn paste_from_clipboard() -> Result<String, ToolError> {
    let mut clipboard = arboard::Clipboard::new()?;
    Ok(clipboard.get_text()?)
}

/// Open `text` in the external editor and return what was saved.
///
/// The caller must release the terminal first: the editor inherits stdio.
/// The temporary file is removed on return.
pub fn edit_externally(editor: &EditorCommand, text: &str) -> Result<String, ToolError> {
    let mut file = tempfile::Builder::new().prefix("btox-").tempfile()?;
    file.write_all(text.as_bytes())?;
    file.flush()?;

    let status = Command::new(&editor.program)
        .args(&editor.args)
        .arg(file.path())
        .status()
        .map_err(|source| ToolError::EditorSpawn {
            command: editor.display(),
            source,
        })?;

    if !status.success() {
        return Err(ToolError::EditorExit {
            command: editor.display(),
            status,
        });
    }

    // Editors usually replace the file rather than write in place, so
    // reopen by path instead of reading the original handle.
    let mut edited = String::new();
    file.reopen()?.read_to_string(&mut edited)?;
    Ok(edited)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(command: &str) -> EditorCommand {
        EditorCommand::parse(command).unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn editor_that_saves_nothing_returns_original_text() {
        let out = edit_externally(&editor("true"), "line one\nline two\n").unwrap();
        assert_eq!(out, "line one\nline two\n");
    }

    #[cfg(unix)]
    #[test]
    fn editor_that_rewrites_the_file() {
        // sh -c '<script>' <name> <file>: the file path lands in $1.
        let cmd = EditorCommand {
            program: "sh".into(),
            args: vec!["-c".into(), "printf 'edited' > \"$1\"".into(), "sh".into()],
        };
        let out = edit_externally(&cmd, "original").unwrap();
        assert_eq!(out, "edited");
    }

    #[cfg(unix)]
    #[test]
    fn failing_editor_is_an_error() {
        let err = edit_externally(&editor("false"), "x").unwrap_err();
        assert!(matches!(err, ToolError::EditorExit { .. }), "{err}");
    }

    #[test]
    fn missing_editor_is_a_spawn_error() {
        let err = edit_externally(&editor("btox-no-such-editor-binary"), "x").unwrap_err();
        match err {
            ToolError::EditorSpawn { command, .. } => {
                assert_eq!(command, "btox-no-such-editor-binary");
            }
            other => panic!("Expected EditorSpawn, got {other:?}"),
        }
    }
}
