use regex::Regex;

use crate::domain::{Entry, single_file};
use crate::error::StatusError;
use crate::fetch::HttpClient;
use crate::sources::SourceExtractor;
use crate::version::month_number;

const DOWNLOADS_URL: &str = "https://www.itis.gov/downloads/index.html";

/// ITIS dates its download set as `DD-Mon-YYYY`; the version keeps the
/// captured day but renders the month as its unpadded number.
pub struct Itis {
    http: HttpClient,
}

impl Itis {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl SourceExtractor for Itis {
    fn id(&self) -> &'static str {
        "ITIS"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let source = self.http.fetch_text(DOWNLOADS_URL)?;
        Ok(vec![Entry {
            version: Some(parse_downloads_page(&source)?),
            files: single_file(
                "itisMySQLTables.tar.gz",
                "https://www.itis.gov/downloads/itisMySQLTables.tar.gz".to_string(),
            ),
            latest: true,
        }])
    }
}

fn parse_downloads_page(source: &str) -> Result<String, StatusError> {
    let pattern = Regex::new(
        r"files are currently from the <b>([0-9]{2})-(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)-([0-9]{4})</b>",
    )
    .unwrap();
    let captures = pattern.captures(source).ok_or(StatusError::NoMatch("ITIS"))?;
    let month = month_number(&captures[2])?;
    Ok(format!("{}.{}.{}", &captures[3], month, &captures[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_date_uses_numeric_month() {
        let source = "The files are currently from the <b>30-Apr-2024</b> database snapshot.";
        assert_eq!(parse_downloads_page(source).unwrap(), "2024.4.30");
    }

    #[test]
    fn day_keeps_leading_zero() {
        let source = "files are currently from the <b>05-Dec-2023</b>";
        assert_eq!(parse_downloads_page(source).unwrap(), "2023.12.05");
    }
}
