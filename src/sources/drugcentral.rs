use regex::Regex;

use crate::domain::{Entry, single_file};
use crate::error::StatusError;
use crate::fetch::HttpClient;
use crate::sources::SourceExtractor;

const DOWNLOAD_PAGE_URL: &str = "https://drugcentral.org/ActiveDownload";

/// DrugCentral links one SQL dump per release, named
/// `drugcentral.dump.M_D_YYYY.sql.gz` with unpadded month and day.
pub struct DrugCentral {
    http: HttpClient,
}

impl DrugCentral {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl SourceExtractor for DrugCentral {
    fn id(&self) -> &'static str {
        "DrugCentral"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let source = self.http.fetch_text(DOWNLOAD_PAGE_URL)?;
        Ok(vec![parse_download_page(&source)?])
    }
}

fn parse_download_page(source: &str) -> Result<Entry, StatusError> {
    let pattern = Regex::new(
        r"(https://unmtid-shinyapps\.net/download/drugcentral\.dump\.([0-9]+)_([0-9]+)_([0-9]{4})\.sql\.gz)",
    )
    .unwrap();
    let captures = pattern
        .captures(source)
        .ok_or(StatusError::NoMatch("DrugCentral"))?;
    let version = format!("{}.{}.{}", &captures[4], &captures[2], &captures[3]);
    Ok(Entry {
        version: Some(version),
        files: single_file("drugcentral.dump.sql.gz", captures[1].to_string()),
        latest: true,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn dump_name_reorders_to_year_month_day() {
        let source = r#"<a href="https://unmtid-shinyapps.net/download/drugcentral.dump.8_22_2023.sql.gz">dump</a>"#;
        let entry = parse_download_page(source).unwrap();
        assert_eq!(entry.version.as_deref(), Some("2023.8.22"));
        assert_eq!(
            entry.files["drugcentral.dump.sql.gz"].as_deref(),
            Some("https://unmtid-shinyapps.net/download/drugcentral.dump.8_22_2023.sql.gz")
        );
    }

    #[test]
    fn page_without_dump_link_is_no_match() {
        let err = parse_download_page("<html>downloads moved</html>").unwrap_err();
        assert_matches!(err, StatusError::NoMatch("DrugCentral"));
    }
}
