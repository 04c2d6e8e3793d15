use regex::Regex;

use crate::domain::{Entry, single_file};
use crate::error::StatusError;
use crate::fetch::HttpClient;
use crate::sources::SourceExtractor;

const CANCER_DRUGS_URL: &str = "https://www.anticancerfund.org/en/cancerdrugs-db";
const REDO_DB_URL: &str = "https://www.anticancerfund.org/en/redo-db";
const REDO_TRIALS_URL: &str = "https://www.anticancerfund.org/en/redo-trials-db";

/// The anticancerfund.org database pages stamp their builds as
/// `Database build date: DD/MM/YY`; the stamp is reordered into the
/// sortable `YY.MM.DD` form.
fn build_date_version(source: &str, id: &'static str) -> Result<String, StatusError> {
    let pattern =
        Regex::new(r"(?i)Database build date:\s+([0-9]{2})/([0-9]{2})/([0-9]{2})").unwrap();
    let captures = pattern.captures(source).ok_or(StatusError::NoMatch(id))?;
    Ok(format!("{}.{}.{}", &captures[3], &captures[2], &captures[1]))
}

pub struct CancerDrugsDb {
    http: HttpClient,
}

impl CancerDrugsDb {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl SourceExtractor for CancerDrugsDb {
    fn id(&self) -> &'static str {
        "CancerDrugsDB"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let source = self.http.fetch_text(CANCER_DRUGS_URL)?;
        Ok(vec![Entry {
            version: Some(build_date_version(&source, self.id())?),
            files: single_file(
                "cancerdrugsdb.txt",
                "https://acfdata.coworks.be/cancerdrugsdb.txt".to_string(),
            ),
            latest: true,
        }])
    }
}

pub struct RedoDb {
    http: HttpClient,
}

impl RedoDb {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl SourceExtractor for RedoDb {
    fn id(&self) -> &'static str {
        "ReDO-DB"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let source = self.http.fetch_text(REDO_DB_URL)?;
        Ok(vec![Entry {
            version: Some(build_date_version(&source, self.id())?),
            files: single_file(
                "redo_db.txt",
                "https://acfdata.coworks.be/redo_db.txt".to_string(),
            ),
            latest: true,
        }])
    }
}

pub struct RedoTrialsDb {
    http: HttpClient,
}

impl RedoTrialsDb {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl SourceExtractor for RedoTrialsDb {
    fn id(&self) -> &'static str {
        "ReDOTrialsDB"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let source = self.http.fetch_text(REDO_TRIALS_URL)?;
        Ok(vec![Entry {
            version: Some(last_import_version(&source)?),
            files: single_file(
                "ReDO_Trials_DB.txt",
                "https://acfdata.coworks.be/ReDO_Trials_DB.txt".to_string(),
            ),
            latest: true,
        }])
    }
}

/// The trials page stamps imports as `DD/MM/YYYY` instead.
fn last_import_version(source: &str) -> Result<String, StatusError> {
    let pattern =
        Regex::new(r"(?i)<span id='Last_Import'>\s*([0-9]{2})/([0-9]{2})/([0-9]{4})").unwrap();
    let captures = pattern
        .captures(source)
        .ok_or(StatusError::NoMatch("ReDOTrialsDB"))?;
    Ok(format!("{}.{}.{}", &captures[3], &captures[2], &captures[1]))
}
