use regex::Regex;

use crate::domain::{Entry, FileMap};
use crate::error::StatusError;
use crate::fetch::HttpClient;
use crate::sources::SourceExtractor;

const ARCHIVE_URL: &str = "https://www.pathwaycommons.org/archives/PC2/";

/// Releases below v9 predate the current archive layout and are skipped.
const OLDEST_SUPPORTED_VERSION: u64 = 9;

/// Pathway Commons keeps one `vN/` directory per release in its archive
/// listing; versions are bare integers.
pub struct PathwayCommons {
    http: HttpClient,
}

impl PathwayCommons {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl SourceExtractor for PathwayCommons {
    fn id(&self) -> &'static str {
        "PathwayCommons"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let source = self.http.fetch_text(ARCHIVE_URL)?;
        Ok(parse_archive_listing(&source))
    }
}

fn parse_archive_listing(source: &str) -> Vec<Entry> {
    let pattern = Regex::new(r#"<a href="v([0-9]+)/">v([0-9]+)/</a>"#).unwrap();
    let mut versions: Vec<u64> = pattern
        .captures_iter(source)
        .filter_map(|captures| captures[1].parse().ok())
        .collect();
    versions.sort_unstable_by(|a, b| b.cmp(a));
    versions.dedup();

    versions
        .iter()
        .take_while(|version| **version >= OLDEST_SUPPORTED_VERSION)
        .enumerate()
        .map(|(index, version)| Entry {
            version: Some(version.to_string()),
            files: release_files(*version),
            latest: index == 0,
        })
        .collect()
}

fn release_files(version: u64) -> FileMap {
    let prefix = format!("{ARCHIVE_URL}v{version}/");
    let mut files = FileMap::new();
    files.insert(
        "pathways.txt.gz".to_string(),
        Some(format!("{prefix}pathways.txt.gz")),
    );
    files.insert(
        "datasources.txt".to_string(),
        Some(format!("{prefix}datasources.txt")),
    );
    files.insert(
        "PathwayCommons.All.uniprot.gmt.gz".to_string(),
        Some(format!("{prefix}PathwayCommons{version}.All.uniprot.gmt.gz")),
    );
    files.insert(
        "PathwayCommons.All.hgnc.txt.gz".to_string(),
        Some(format!("{prefix}PathwayCommons{version}.All.hgnc.txt.gz")),
    );
    files.insert(
        "PathwayCommons.All.hgnc.sif.gz".to_string(),
        Some(format!("{prefix}PathwayCommons{version}.All.hgnc.sif.gz")),
    );
    files.insert(
        "PathwayCommons.All.hgnc.gmt.gz".to_string(),
        Some(format!("{prefix}PathwayCommons{version}.All.hgnc.gmt.gz")),
    );
    files.insert(
        "PathwayCommons.All.BIOPAX.owl.gz".to_string(),
        Some(format!("{prefix}PathwayCommons{version}.All.BIOPAX.owl.gz")),
    );
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <a href="v8/">v8/</a>
        <a href="v11/">v11/</a>
        <a href="v9/">v9/</a>
        <a href="v12/">v12/</a>
    "#;

    #[test]
    fn versions_sorted_numerically_descending() {
        let entries = parse_archive_listing(LISTING);
        let versions: Vec<&str> = entries
            .iter()
            .filter_map(|entry| entry.version.as_deref())
            .collect();
        // Numeric, not lexicographic: v12 outranks v9, v8 is cut off.
        assert_eq!(versions, vec!["12", "11", "9"]);
        let latest: Vec<bool> = entries.iter().map(|entry| entry.latest).collect();
        assert_eq!(latest, vec![true, false, false]);
    }

    #[test]
    fn release_files_embed_the_version() {
        let entries = parse_archive_listing(LISTING);
        assert_eq!(
            entries[0].files["PathwayCommons.All.hgnc.sif.gz"].as_deref(),
            Some(
                "https://www.pathwaycommons.org/archives/PC2/v12/PathwayCommons12.All.hgnc.sif.gz"
            )
        );
        assert_eq!(
            entries[0].files["pathways.txt.gz"].as_deref(),
            Some("https://www.pathwaycommons.org/archives/PC2/v12/pathways.txt.gz")
        );
    }

    #[test]
    fn empty_listing_yields_no_entries() {
        assert!(parse_archive_listing("<html></html>").is_empty());
    }
}
