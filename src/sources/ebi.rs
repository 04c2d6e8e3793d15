use regex::Regex;

use crate::domain::{Entry, file_map, single_file};
use crate::error::StatusError;
use crate::fetch::HttpClient;
use crate::ftp::FtpClient;
use crate::sources::SourceExtractor;
use crate::version::date_version;

const G2P_URL: &str = "https://www.ebi.ac.uk/gene2phenotype";
const GWAS_ASSOCIATIONS_URL: &str = "https://www.ebi.ac.uk/gwas/api/search/downloads/alternative";
const EBI_FTP_HOST: &str = "ftp.ebi.ac.uk";
const HGNC_COMPLETE_SET: &str = "pub/databases/genenames/new/tsv/hgnc_complete_set.txt";

/// Gene2Phenotype shows its last-update date in a `<strong>` element on
/// the landing page.
pub struct Gene2Phenotype {
    http: HttpClient,
}

impl Gene2Phenotype {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl SourceExtractor for Gene2Phenotype {
    fn id(&self) -> &'static str {
        "Gene2Phenotype"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let source = self.http.fetch_text(G2P_URL)?;
        Ok(vec![Entry {
            version: Some(parse_landing_page(&source)?),
            files: file_map([
                (
                    "CancerG2P.csv.gz",
                    "https://www.ebi.ac.uk/gene2phenotype/downloads/CancerG2P.csv.gz",
                ),
                (
                    "DDG2P.csv.gz",
                    "https://www.ebi.ac.uk/gene2phenotype/downloads/DDG2P.csv.gz",
                ),
                (
                    "EyeG2P.csv.gz",
                    "https://www.ebi.ac.uk/gene2phenotype/downloads/EyeG2P.csv.gz",
                ),
                (
                    "SkinG2P.csv.gz",
                    "https://www.ebi.ac.uk/gene2phenotype/downloads/SkinG2P.csv.gz",
                ),
            ]),
            latest: true,
        }])
    }
}

fn parse_landing_page(source: &str) -> Result<String, StatusError> {
    let pattern = Regex::new(r"<strong>([0-9]{4})-([0-9]{2})-([0-9]{2})</strong>").unwrap();
    let captures = pattern
        .captures(source)
        .ok_or(StatusError::NoMatch("Gene2Phenotype"))?;
    Ok(format!("{}.{}.{}", &captures[1], &captures[2], &captures[3]))
}

/// The GWAS Catalog download endpoint advertises its release date in the
/// attachment file name, not in any page body.
pub struct GwasCatalog {
    http: HttpClient,
}

impl GwasCatalog {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl SourceExtractor for GwasCatalog {
    fn id(&self) -> &'static str {
        "GWASCatalog"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let file_name = self.http.attachment_file_name(GWAS_ASSOCIATIONS_URL)?;
        Ok(vec![Entry {
            version: Some(version_from_file_name(&file_name)?),
            files: file_map([
                ("gwas_catalog_associations.tsv", GWAS_ASSOCIATIONS_URL),
                (
                    "gwas_catalog_studies.tsv",
                    "https://www.ebi.ac.uk/gwas/api/search/downloads/studies_alternative",
                ),
                (
                    "gwas_catalog_ancestry.tsv",
                    "https://www.ebi.ac.uk/gwas/api/search/downloads/ancestry",
                ),
            ]),
            latest: true,
        }])
    }
}

fn version_from_file_name(file_name: &str) -> Result<String, StatusError> {
    let pattern = Regex::new(r"([0-9]{4})-([0-9]{2})-([0-9]{2})").unwrap();
    let captures = pattern
        .captures(file_name)
        .ok_or(StatusError::NoMatch("GWASCatalog"))?;
    Ok(format!("{}.{}.{}", &captures[1], &captures[2], &captures[3]))
}

/// HGNC has no versioned landing page; the FTP modification time of the
/// complete gene set is the release date.
pub struct Hgnc {
    ftp: FtpClient,
}

impl Hgnc {
    pub fn new(ftp: FtpClient) -> Self {
        Self { ftp }
    }
}

impl SourceExtractor for Hgnc {
    fn id(&self) -> &'static str {
        "HGNC"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let modified = self.ftp.modified_time(EBI_FTP_HOST, HGNC_COMPLETE_SET)?;
        Ok(vec![Entry {
            version: Some(date_version(&modified)),
            files: single_file(
                "hgnc_complete_set.txt",
                format!("https://{EBI_FTP_HOST}/{HGNC_COMPLETE_SET}"),
            ),
            latest: true,
        }])
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn landing_page_date_becomes_dotted_version() {
        let source = "<p>Data last updated: <strong>2024-03-18</strong></p>";
        assert_eq!(parse_landing_page(source).unwrap(), "2024.03.18");
    }

    #[test]
    fn landing_page_without_date_fails() {
        let err = parse_landing_page("<p>no date here</p>").unwrap_err();
        assert_matches!(err, StatusError::NoMatch("Gene2Phenotype"));
    }

    #[test]
    fn gwas_version_from_attachment_name() {
        let name = "gwas_catalog_v1.0-associations_e110_r2024-01-30.tsv";
        assert_eq!(version_from_file_name(name).unwrap(), "2024.01.30");
    }
}
