use std::fs;
use std::io::Read;
use tracing::debug;

use crate::error::{MetadataError, Result};

/// Path argument that reads entries from stdin
pub const STDIN_PATH: &str = "-";

/// Collect raw entries from an optional JSON array file (`-` for stdin)
/// followed by entries given directly.
///
/// File entries come first so direct entries can correct them.
pub fn read_entries(input: Option<&str>, entries: Vec<String>) -> Result<Vec<String>> {
    read_entries_from(input, entries, std::io::stdin())
}

/// Same as [`read_entries`] with an explicit reader standing in for stdin
pub fn read_entries_from<R: Read>(
    input: Option<&str>,
    mut entries: Vec<String>,
    mut stdin: R,
) -> Result<Vec<String>> {
    let Some(path) = input else {
        return Ok(entries);
    };

    let content = if path == STDIN_PATH {
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)
            .map_err(|e| MetadataError::Input(format!("Failed to read '{}': {}", path, e)))?
    };

    let mut from_file: Vec<String> = serde_json::from_str(&content)?;
    debug!("read {} entries from {}", from_file.len(), path);
    from_file.append(&mut entries);
    Ok(from_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn strings(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_without_input_returns_direct_entries() {
        let entries = read_entries_from(None, strings(&["K|V"]), Cursor::new("")).unwrap();
        assert_eq!(entries, strings(&["K|V"]));
    }

    #[test]
    fn test_file_entries_come_before_direct_entries() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("entries.json");
        fs::write(&path, r#"["K|from file", "TEXT_FORMAT|HTML"]"#).unwrap();

        let entries = read_entries_from(
            path.to_str(),
            strings(&["K|from args"]),
            Cursor::new(""),
        )
        .unwrap();

        assert_eq!(entries, strings(&["K|from file", "TEXT_FORMAT|HTML", "K|from args"]));
    }

    #[test]
    fn test_dash_reads_stdin() {
        let stdin = Cursor::new(r#"["AUTHORS|Jane Doe"]"#);

        let entries = read_entries_from(Some(STDIN_PATH), Vec::new(), stdin).unwrap();

        assert_eq!(entries, strings(&["AUTHORS|Jane Doe"]));
    }

    #[test]
    fn test_missing_file_is_an_input_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("absent.json");

        let result = read_entries_from(path.to_str(), Vec::new(), Cursor::new(""));

        assert!(matches!(result, Err(MetadataError::Input(_))));
    }

    #[test]
    fn test_non_array_json_is_a_json_error() {
        let result = read_entries_from(Some(STDIN_PATH), Vec::new(), Cursor::new(r#"{"K":"V"}"#));
        assert!(matches!(result, Err(MetadataError::Json(_))));
    }
}
