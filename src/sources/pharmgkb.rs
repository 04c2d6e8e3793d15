use std::io::Cursor;

use regex::Regex;
use zip::ZipArchive;

use crate::domain::{Entry, file_map};
use crate::error::StatusError;
use crate::fetch::HttpClient;
use crate::sources::SourceExtractor;

const DRUG_LABELS_URL: &str = "https://s3.pgkb.org/data/drugLabels.zip";

/// PharmGKB exposes no version anywhere public; the drug labels archive
/// carries a `CREATED_YYYY-MM-DD` marker member whose name is inspected
/// without extracting the archive.
pub struct PharmGkb {
    http: HttpClient,
}

impl PharmGkb {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl SourceExtractor for PharmGkb {
    fn id(&self) -> &'static str {
        "PharmGKB"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let bytes = self.http.fetch_bytes(DRUG_LABELS_URL)?;
        let names = archive_member_names(&bytes)?;
        Ok(vec![Entry {
            version: created_stamp(&names)?,
            files: file_map([
                ("genes.zip", "https://s3.pgkb.org/data/genes.zip"),
                ("drugs.zip", "https://s3.pgkb.org/data/drugs.zip"),
                ("chemicals.zip", "https://s3.pgkb.org/data/chemicals.zip"),
                ("variants.zip", "https://s3.pgkb.org/data/variants.zip"),
                ("phenotypes.zip", "https://s3.pgkb.org/data/phenotypes.zip"),
                (
                    "clinicalAnnotations.zip",
                    "https://s3.pgkb.org/data/clinicalAnnotations.zip",
                ),
                (
                    "variantAnnotations.zip",
                    "https://s3.pgkb.org/data/variantAnnotations.zip",
                ),
                (
                    "relationships.zip",
                    "https://s3.pgkb.org/data/relationships.zip",
                ),
                (
                    "dosingGuidelines.json.zip",
                    "https://s3.pgkb.org/data/dosingGuidelines.json.zip",
                ),
                ("drugLabels.zip", DRUG_LABELS_URL),
                ("pathways-tsv.zip", "https://s3.pgkb.org/data/pathways-tsv.zip"),
                (
                    "clinicalVariants.zip",
                    "https://s3.pgkb.org/data/clinicalVariants.zip",
                ),
                ("occurrences.zip", "https://s3.pgkb.org/data/occurrences.zip"),
                (
                    "automated_annotations.zip",
                    "https://s3.pgkb.org/data/automated_annotations.zip",
                ),
            ]),
            latest: true,
        }])
    }
}

fn archive_member_names(bytes: &[u8]) -> Result<Vec<String>, StatusError> {
    let archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|err| StatusError::Archive(err.to_string()))?;
    Ok(archive.file_names().map(|name| name.to_string()).collect())
}

/// Version from the first `CREATED*` member, `None` when the archive has
/// no such marker.
fn created_stamp(names: &[String]) -> Result<Option<String>, StatusError> {
    let pattern = Regex::new(r"([0-9]{4})-([0-9]{2})-([0-9]{2})").unwrap();
    for name in names {
        if !name.starts_with("CREATED") {
            continue;
        }
        let captures = pattern
            .captures(name)
            .ok_or(StatusError::NoMatch("PharmGKB"))?;
        return Ok(Some(format!(
            "{}.{}.{}",
            &captures[1], &captures[2], &captures[3]
        )));
    }
    Ok(None)
}
