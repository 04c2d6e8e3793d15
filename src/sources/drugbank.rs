use serde::Deserialize;

use crate::domain::{Entry, FileMap};
use crate::error::StatusError;
use crate::fetch::HttpClient;
use crate::sources::SourceExtractor;

const RELEASES_URL: &str = "http://go.drugbank.com/releases.json";

/// DrugBank enumerates every release through a JSON API; all releases are
/// kept as historical entries, with the lexicographic maximum marked latest.
pub struct DrugBank {
    http: HttpClient,
}

impl DrugBank {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl SourceExtractor for DrugBank {
    fn id(&self) -> &'static str {
        "DrugBank"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let payload = self.http.fetch_text(RELEASES_URL)?;
        parse_releases(&payload)
    }
}

#[derive(Debug, Deserialize)]
struct Release {
    version: String,
    url: String,
}

fn parse_releases(payload: &str) -> Result<Vec<Entry>, StatusError> {
    let mut releases: Vec<Release> =
        serde_json::from_str(payload).map_err(|err| StatusError::Json(err.to_string()))?;
    releases.sort_by(|a, b| b.version.cmp(&a.version));

    let entries = releases
        .iter()
        .enumerate()
        .map(|(index, release)| {
            let mut files = FileMap::new();
            files.insert(
                "drugbank_all_full_database.xml.zip".to_string(),
                Some(format!("{}/downloads/all-full-database", release.url)),
            );
            files.insert(
                "drugbank_all_structures.sdf.zip".to_string(),
                Some(format!("{}/downloads/all-structures", release.url)),
            );
            files.insert(
                "drugbank_all_metabolite-structures.sdf.zip".to_string(),
                Some(format!("{}/downloads/all-metabolite-structures", release.url)),
            );
            Entry {
                version: Some(release.version.clone()),
                files,
                latest: index == 0,
            }
        })
        .collect();
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const PAYLOAD: &str = r#"[
        {"version": "5.1.10", "url": "https://go.drugbank.com/releases/5-1-10"},
        {"version": "5.1.11", "url": "https://go.drugbank.com/releases/5-1-11"},
        {"version": "5.1.9", "url": "https://go.drugbank.com/releases/5-1-9"}
    ]"#;

    #[test]
    fn releases_sorted_newest_first_with_single_latest() {
        let entries = parse_releases(PAYLOAD).unwrap();
        let versions: Vec<&str> = entries
            .iter()
            .filter_map(|entry| entry.version.as_deref())
            .collect();
        assert_eq!(versions, vec!["5.1.9", "5.1.11", "5.1.10"]);
        let latest: Vec<bool> = entries.iter().map(|entry| entry.latest).collect();
        assert_eq!(latest, vec![true, false, false]);
    }

    #[test]
    fn release_urls_expand_to_download_endpoints() {
        let entries = parse_releases(PAYLOAD).unwrap();
        assert_eq!(
            entries[1].files["drugbank_all_full_database.xml.zip"].as_deref(),
            Some("https://go.drugbank.com/releases/5-1-11/downloads/all-full-database")
        );
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        let err = parse_releases("<html>not json</html>").unwrap_err();
        assert_matches!(err, StatusError::Json(_));
    }
}
