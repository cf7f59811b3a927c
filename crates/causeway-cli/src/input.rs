//! Reading command input from arguments, files, or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Contents of `path`, or all of stdin when `path` is `-`.
pub fn read_path(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Inline text if given, else the file, else stdin.
pub fn text_or_file(text: Option<String>, file: Option<&Path>) -> Result<String> {
    match (text, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => read_path(path),
        (None, None) => read_path(Path::new("-")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn inline_text_wins() {
        assert_eq!(text_or_file(Some("{}".into()), None).unwrap(), "{}");
    }

    #[test]
    fn reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{'a': ['b']}}").unwrap();
        assert_eq!(
            text_or_file(None, Some(file.path())).unwrap(),
            "{'a': ['b']}"
        );
    }

    #[test]
    fn missing_file_names_path() {
        let err = read_path(Path::new("/nonexistent/dag.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dag.txt"));
    }
}
