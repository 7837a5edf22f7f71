//! Filename sanitization.

use crate::error::{Error, Result};

/// Validate and sanitize a filename.
///
/// Returns an error for path traversal patterns, path separators, and null
/// bytes; replaces other problematic characters with underscores.
pub fn sanitize_filename(name: &str) -> Result<String> {
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

/// Sanitize a path component (e.g. an author directory name).
///
/// Author names come from the remote service and may contain anything, so
/// separators are replaced rather than rejected.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename_valid() {
        assert_eq!(sanitize_filename("12345_p0.png").unwrap(), "12345_p0.png");
        assert_eq!(sanitize_filename("file:name.png").unwrap(), "file_name.png");
    }

    #[test]
    fn test_sanitize_filename_path_traversal() {
        assert!(sanitize_filename("../etc/passwd").is_err());
        assert!(sanitize_filename("foo/../bar").is_err());
    }

    #[test]
    fn test_sanitize_filename_path_separators() {
        assert!(sanitize_filename("path/to/file.png").is_err());
        assert!(sanitize_filename("path\\to\\file.png").is_err());
    }

    #[test]
    fn test_sanitize_filename_empty() {
        assert!(sanitize_filename("").is_err());
        assert!(sanitize_filename("   ").is_err());
    }

    #[test]
    fn test_sanitize_path_component_replaces_separators() {
        assert_eq!(
            sanitize_path_component("some/artist").unwrap(),
            "some_artist"
        );
        assert_eq!(sanitize_path_component("作家さん").unwrap(), "作家さん");
    }

    #[test]
    fn test_sanitize_path_component_traversal() {
        assert!(sanitize_path_component("../evil").is_err());
        assert!(sanitize_path_component("name\0").is_err());
    }
}
