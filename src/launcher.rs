use crate::*;
use std::path::Path;
use tracing::info;

/// Hands `path` to the application named `editor` through the platform's
/// "open with" mechanism. Returns once the hand-off finishes, not when the
/// editor exits.
#[throws]
pub fn launch(editor: &str, path: &Path) {
    info!("Opening {} with {}", path.display(), editor);
    open::with(path, editor).map_err(|source| Error::Launch {
        editor: editor.to_string(),
        path: path.to_path_buf(),
        source,
    })?;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn unknown_editor_is_launch_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("payload.json");
        std::fs::write(&path, "{}\n").unwrap();

        match launch("no-such-editor-xyz", &path) {
            Err(Error::Launch { editor, path: target, .. }) => {
                assert_eq!(editor, "no-such-editor-xyz");
                assert_eq!(target, path);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }
}
