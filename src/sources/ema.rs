use crate::domain::{Entry, file_map};
use crate::error::StatusError;
use crate::sources::SourceExtractor;
use crate::version::today_version;

/// EMA regenerates its medicine data tables once a day; the run date is
/// the version.
pub struct Ema;

impl Ema {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Ema {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceExtractor for Ema {
    fn id(&self) -> &'static str {
        "EMA"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        Ok(vec![Entry {
            version: Some(today_version()),
            files: file_map([
                (
                    "Medicines_output_european_public_assessment_reports.xlsx",
                    "https://www.ema.europa.eu/sites/default/files/Medicines_output_european_public_assessment_reports.xlsx",
                ),
                (
                    "Medicines_output_herbal_medicines.xlsx",
                    "https://www.ema.europa.eu/sites/default/files/Medicines_output_herbal_medicines.xlsx",
                ),
            ]),
            latest: true,
        }])
    }
}
