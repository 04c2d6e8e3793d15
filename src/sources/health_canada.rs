use regex::Regex;

use crate::domain::{Entry, single_file};
use crate::error::StatusError;
use crate::fetch::HttpClient;
use crate::sources::SourceExtractor;

const DOWNLOAD_PAGE_URL: &str = "https://www.canada.ca/en/health-canada/services/food-nutrition/healthy-eating/nutrient-data/canadian-nutrient-file-2015-download-files.html";
const CSV_ARCHIVE_URL: &str = "https://www.canada.ca/content/dam/hc-sc/migration/hc-sc/fn-an/alt_formats/zip/nutrition/fiche-nutri-data/cnf-fcen-csv.zip";

/// Health Canada stamps the Canadian Nutrient File download page with a
/// `dateModified` element in `YYYY-MM-DD` form.
pub struct CanadianNutrientFile {
    http: HttpClient,
}

impl CanadianNutrientFile {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl SourceExtractor for CanadianNutrientFile {
    fn id(&self) -> &'static str {
        "CanadianNutrientFile"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let source = self.http.fetch_text(DOWNLOAD_PAGE_URL)?;
        Ok(vec![Entry {
            version: Some(parse_date_modified(&source)?),
            files: single_file("cnf-fcen-csv.zip", CSV_ARCHIVE_URL.to_string()),
            latest: true,
        }])
    }
}

fn parse_date_modified(source: &str) -> Result<String, StatusError> {
    let pattern =
        Regex::new(r#"dateModified">\s*([0-9]{4})-([0-9]{2})-([0-9]{2})\s*</time>"#).unwrap();
    let captures = pattern
        .captures(source)
        .ok_or(StatusError::NoMatch("CanadianNutrientFile"))?;
    Ok(format!("{}.{}.{}", &captures[1], &captures[2], &captures[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_modified_becomes_dotted_version() {
        let source = r#"<time property="dateModified"> 2015-07-27 </time>"#;
        assert_eq!(parse_date_modified(source).unwrap(), "2015.07.27");
    }
}
