//! Built-in course catalog.
//!
//! The catalog text ships inside the binary so the tool works without any
//! input file.

use std::borrow::Cow;
use std::path::Path;

/// The bundled catalog text.
pub static CATALOG: &str = include_str!("../../data/catalog.txt");

/// Read catalog text from `path`, or fall back to the bundled catalog.
pub fn read_catalog(path: Option<&Path>) -> crate::Result<Cow<'static, str>> {
    match path {
        Some(path) => Ok(Cow::Owned(std::fs::read_to_string(path)?)),
        None => Ok(Cow::Borrowed(CATALOG)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_present() {
        assert!(CATALOG.contains("Course Code: CSE1102"));
    }

    #[test]
    fn test_read_catalog_sources() {
        assert!(matches!(read_catalog(None).unwrap(), Cow::Borrowed(_)));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.txt");
        std::fs::write(&path, "Course Code: X1").unwrap();
        assert_eq!(read_catalog(Some(&path)).unwrap(), "Course Code: X1");

        let missing = dir.path().join("missing.txt");
        assert!(matches!(
            read_catalog(Some(&missing)),
            Err(crate::SyllabusError::Io(_))
        ));
    }
}
