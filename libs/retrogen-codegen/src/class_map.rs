//! Class map: caller-supplied field type overrides
//!
//! A class map file holds one override per line, `<field_name>\t<class_name>`.
//! Lines that do not split into exactly two tab-separated fields, ignoring
//! trailing empty fields, are skipped.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Mapping from model property name to the type emitted for it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassMap {
    entries: HashMap<String, String>,
}

impl ClassMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a class map from text lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let mut fields: Vec<&str> = line.split('\t').collect();
            // Trailing empty fields do not count
            while fields.last() == Some(&"") {
                fields.pop();
            }
            match fields.as_slice() {
                [field, class] => map.insert(*field, *class),
                _ => {
                    debug!(line = index + 1, "skipping malformed class map line");
                }
            }
        }
        map
    }

    /// Parse class map text
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Read a class map from a buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
        Ok(Self::from_lines(lines))
    }

    /// Load a class map file
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let map = Self::from_reader(BufReader::new(file)).map_err(|e| Error::io(path, e))?;
        debug!(path = %path.display(), entries = map.len(), "loaded class map");
        Ok(map)
    }

    /// Add or replace an override
    pub fn insert(&mut self, field: impl Into<String>, class: impl Into<String>) {
        self.entries.insert(field.into(), class.into());
    }

    /// Override type for a property, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ClassMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (field, class) in iter {
            map.insert(field, class);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_well_formed_lines() {
        let map = ClassMap::parse("id\tLong\ncreated\tjava.util.Date\n");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("id"), Some("Long"));
        assert_eq!(map.get("created"), Some("java.util.Date"));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let map = ClassMap::parse(
            "id\tLong\nno tab here\n\ntoo\tmany\tfields\nupdated\tjava.util.Date",
        );
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("id"), Some("Long"));
        assert_eq!(map.get("updated"), Some("java.util.Date"));
        assert_eq!(map.get("too"), None);
    }

    #[test]
    fn test_trailing_tabs_are_ignored() {
        let map = ClassMap::parse("id\t\nn\tLong\t\nkind\tString\t\t\n");
        assert_eq!(map.get("id"), None);
        assert_eq!(map.get("n"), Some("Long"));
        assert_eq!(map.get("kind"), Some("String"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_windows_line_endings() {
        let map = ClassMap::parse("id\tLong\r\netag\tString\r\n");
        assert_eq!(map.get("id"), Some("Long"));
        assert_eq!(map.get("etag"), Some("String"));
    }

    #[test]
    fn test_later_entry_wins() {
        let map = ClassMap::parse("id\tLong\nid\tInteger\n");
        assert_eq!(map.get("id"), Some("Integer"));
    }

    #[test]
    fn test_from_reader() {
        let map = ClassMap::from_reader(Cursor::new("id\tLong\n")).unwrap();
        assert_eq!(map.get("id"), Some("Long"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ClassMap::load(Path::new("/nonexistent/classmap.tsv")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_from_iterator() {
        let map: ClassMap = [("id", "Long")].into_iter().collect();
        assert_eq!(map.get("id"), Some("Long"));
    }
}
