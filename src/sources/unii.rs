use regex::Regex;

use crate::domain::{Entry, file_map};
use crate::error::StatusError;
use crate::fetch::HttpClient;
use crate::sources::SourceExtractor;
use crate::version::month_number;

const DOWNLOAD_PAGE_URL: &str = "https://fdasis.nlm.nih.gov/srs/jsp/srs/uniiListDownload.jsp";

/// The FDA SRS page only dates its UNII list to a month, so the version
/// is `YYYY.M` with an unpadded month number.
pub struct Unii {
    http: HttpClient,
}

impl Unii {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl SourceExtractor for Unii {
    fn id(&self) -> &'static str {
        "UNII"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let source = self.http.fetch_text(DOWNLOAD_PAGE_URL)?;
        Ok(vec![Entry {
            version: Some(parse_download_page(&source)?),
            files: file_map([
                ("UNIIs.zip", "https://fdasis.nlm.nih.gov/srs/download/srs/UNIIs.zip"),
                (
                    "UNII_Data.zip",
                    "https://fdasis.nlm.nih.gov/srs/download/srs/UNII_Data.zip",
                ),
            ]),
            latest: true,
        }])
    }
}

fn parse_download_page(source: &str) -> Result<String, StatusError> {
    let pattern = Regex::new(
        r"Last updated: (Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec) ([0-9]{4})",
    )
    .unwrap();
    let captures = pattern.captures(source).ok_or(StatusError::NoMatch("UNII"))?;
    let month = month_number(&captures[1])?;
    Ok(format!("{}.{}", &captures[2], month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_resolution_version() {
        let source = "Last updated: Nov 2023";
        assert_eq!(parse_download_page(source).unwrap(), "2023.11");
    }

    #[test]
    fn single_digit_month_is_unpadded() {
        let source = "Last updated: Mar 2024";
        assert_eq!(parse_download_page(source).unwrap(), "2024.3");
    }
}
