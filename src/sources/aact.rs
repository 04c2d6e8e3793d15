use regex::Regex;

use crate::domain::{Entry, single_file};
use crate::error::StatusError;
use crate::fetch::HttpClient;
use crate::sources::SourceExtractor;

const PIPE_FILES_URL: &str = "https://aact.ctti-clinicaltrials.org/pipe_files";

/// AACT publishes one pipe-delimited export of ClinicalTrials.gov per
/// month; the export path carries a `YYYYMMDD` stamp.
pub struct Aact {
    http: HttpClient,
}

impl Aact {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl SourceExtractor for Aact {
    fn id(&self) -> &'static str {
        "AACT"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let source = self.http.fetch_text(PIPE_FILES_URL)?;
        Ok(vec![parse_pipe_files(&source)?])
    }
}

fn parse_pipe_files(source: &str) -> Result<Entry, StatusError> {
    let pattern =
        Regex::new(r"(/static/exported_files/monthly/([0-9]{8})_pipe-delimited-export\.zip)")
            .unwrap();
    let captures = pattern.captures(source).ok_or(StatusError::NoMatch("AACT"))?;
    let stamp = &captures[2];
    let version = format!("{}.{}.{}", &stamp[0..4], &stamp[4..6], &stamp[6..8]);
    Ok(Entry {
        version: Some(version),
        files: single_file(
            "pipe-delimited-export.zip",
            format!("https://aact.ctti-clinicaltrials.org{}", &captures[1]),
        ),
        latest: true,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_monthly_export_link() {
        let source = r#"<a href="/static/exported_files/monthly/20240401_pipe-delimited-export.zip">Download</a>"#;
        let entry = parse_pipe_files(source).unwrap();
        assert_eq!(entry.version.as_deref(), Some("2024.04.01"));
        assert!(entry.latest);
        assert_eq!(
            entry.files["pipe-delimited-export.zip"].as_deref(),
            Some(
                "https://aact.ctti-clinicaltrials.org/static/exported_files/monthly/20240401_pipe-delimited-export.zip"
            )
        );
    }

    #[test]
    fn parse_without_export_link_fails() {
        let err = parse_pipe_files("<html>maintenance page</html>").unwrap_err();
        assert_matches!(err, StatusError::NoMatch("AACT"));
    }
}
