use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Logical file name to direct download URL. A `None` value marks a file
/// that is only reachable through a protocol with no usable URL form.
pub type FileMap = BTreeMap<String, Option<String>>;

/// One published version of one data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub version: Option<String>,
    pub files: FileMap,
    pub latest: bool,
}

/// Full per-run snapshot: data source id to its versions, newest first.
/// The BTreeMap keeps keys lexicographically sorted so serialized
/// snapshots diff cleanly across runs.
pub type SourceStatus = BTreeMap<String, Vec<Entry>>;

/// Empty version sequence for a source that produced nothing this run.
pub fn no_entries() -> Vec<Entry> {
    Vec::new()
}

pub fn file_map<const N: usize>(pairs: [(&str, &str); N]) -> FileMap {
    pairs
        .into_iter()
        .map(|(name, url)| (name.to_string(), Some(url.to_string())))
        .collect()
}

pub fn single_file(name: &str, url: String) -> FileMap {
    let mut files = FileMap::new();
    files.insert(name.to_string(), Some(url));
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_entries_is_fresh_and_empty() {
        let first = no_entries();
        let mut second = no_entries();
        second.push(Entry {
            version: None,
            files: FileMap::new(),
            latest: true,
        });
        assert!(first.is_empty());
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn file_map_keeps_sorted_keys() {
        let files = file_map([
            ("b.txt", "https://example.org/b.txt"),
            ("a.txt", "https://example.org/a.txt"),
        ]);
        let keys: Vec<&str> = files.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a.txt", "b.txt"]);
        assert_eq!(files["a.txt"].as_deref(), Some("https://example.org/a.txt"));
    }
}
