//! Label files
//!
//! A label file persists one label set in class index order, either as a JSON
//! array of strings (`.json`) or as plain text with one label per line.

use std::path::Path;

use tracing::debug;

use crate::error::{LabelError, LoadError};
use crate::registry::LabelRegistry;

/// Load a registry from a label file, picking the format from the extension.
pub fn load(path: impl AsRef<Path>) -> Result<LabelRegistry, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let registry = if is_json {
        parse_json(&text)?
    } else {
        parse_lines(&text)?
    };

    debug!(path = %path.display(), labels = registry.len(), "loaded label file");
    Ok(registry)
}

/// Parse one label per line.
///
/// A leading byte-order mark and a single trailing newline are allowed, and
/// CRLF line endings are accepted. Every other line is a label, so a blank
/// line is rejected rather than silently shifting the indices that follow it.
pub fn parse_lines(text: &str) -> Result<LabelRegistry, LabelError> {
    let text = strip_bom(text);
    let body = text.strip_suffix('\n').unwrap_or(text);
    let body = body.strip_suffix('\r').unwrap_or(body);
    if body.is_empty() {
        return Err(LabelError::Empty);
    }
    LabelRegistry::new(
        body.split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line)),
    )
}

/// Parse a JSON array of strings, ignoring a leading byte-order mark.
pub fn parse_json(text: &str) -> Result<LabelRegistry, LoadError> {
    let labels: Vec<String> = serde_json::from_str(strip_bom(text))?;
    Ok(LabelRegistry::new(labels)?)
}

/// Drop one leading U+FEFF.
fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_lines() {
        let reg = parse_lines("abseiling\nair_drumming\nzumba\n").unwrap();
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.index_of("zumba").unwrap(), 2);

        let no_trailing = parse_lines("abseiling\nair_drumming\nzumba").unwrap();
        assert_eq!(no_trailing, reg);
    }

    #[test]
    fn test_parse_lines_crlf() {
        let reg = parse_lines("abseiling\r\nair_drumming\r\n").unwrap();
        assert_eq!(reg.all(), ["abseiling", "air_drumming"]);
    }

    #[test]
    fn test_parse_lines_rejects_blank_lines() {
        assert!(matches!(
            parse_lines("abseiling\n\nzumba\n"),
            Err(LabelError::InvalidLabel { index: 1, .. })
        ));
        assert!(matches!(
            parse_lines("abseiling\n\n"),
            Err(LabelError::InvalidLabel { index: 1, .. })
        ));
        assert_eq!(parse_lines(""), Err(LabelError::Empty));
        assert_eq!(parse_lines("\n"), Err(LabelError::Empty));
        assert_eq!(parse_lines("\r\n"), Err(LabelError::Empty));
    }

    #[test]
    fn test_byte_order_mark_is_not_part_of_first_label() {
        let reg = parse_lines("\u{feff}abseiling\r\nzumba\r\n").unwrap();
        assert_eq!(reg.name_at(0).unwrap(), "abseiling");
        assert_eq!(reg.index_of("abseiling").unwrap(), 0);

        let reg = parse_json("\u{feff}[\"abseiling\", \"zumba\"]").unwrap();
        assert_eq!(reg.index_of("abseiling").unwrap(), 0);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.txt");
        std::fs::write(&path, "\u{feff}yoga\nzumba\n").unwrap();
        assert_eq!(load(&path).unwrap().index_of("yoga").unwrap(), 0);
    }

    #[test]
    fn test_parse_json() {
        let reg = parse_json(r#"["abseiling", "air_drumming", "zumba"]"#).unwrap();
        assert_eq!(reg.name_at(1).unwrap(), "air_drumming");

        assert!(matches!(parse_json("[1, 2]"), Err(LoadError::Json(_))));
        assert!(matches!(
            parse_json(r#"["a", "b", "a"]"#),
            Err(LoadError::Label(LabelError::DuplicateLabel { .. }))
        ));
        assert!(matches!(
            parse_json("[]"),
            Err(LoadError::Label(LabelError::Empty))
        ));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("labels.json");
        std::fs::write(&json_path, r#"["yoga", "zumba"]"#).unwrap();
        assert_eq!(load(&json_path).unwrap().len(), 2);

        let txt_path = dir.path().join("labels.txt");
        let mut f = std::fs::File::create(&txt_path).unwrap();
        writeln!(f, "yoga").unwrap();
        writeln!(f, "zumba").unwrap();
        writeln!(f, "hurling_-sport-").unwrap();
        drop(f);
        let reg = load(&txt_path).unwrap();
        assert_eq!(reg.index_of("hurling_-sport-").unwrap(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        match load(&missing) {
            Err(LoadError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
