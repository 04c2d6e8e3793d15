use regex::Regex;

use crate::domain::{Entry, file_map, single_file};
use crate::error::StatusError;
use crate::fetch::HttpClient;
use crate::sources::SourceExtractor;

const GO_OBO_URL: &str = "http://current.geneontology.org/ontology/go.obo";
const HPO_OBO_URL: &str =
    "https://raw.githubusercontent.com/obophenotype/human-phenotype-ontology/master/hp.obo";
const MONDO_OBO_URL: &str = "http://purl.obolibrary.org/obo/mondo.obo";

/// Version from an OBO `data-version:` header line, taken from its first
/// `YYYY-MM-DD` token.
fn obo_date_version(line: &str, id: &'static str) -> Result<String, StatusError> {
    let pattern = Regex::new(r"([0-9]{4})-([0-9]{2})-([0-9]{2})").unwrap();
    let captures = pattern.captures(line).ok_or(StatusError::NoMatch(id))?;
    Ok(format!("{}.{}.{}", &captures[1], &captures[2], &captures[3]))
}

pub struct GeneOntology {
    http: HttpClient,
}

impl GeneOntology {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl SourceExtractor for GeneOntology {
    fn id(&self) -> &'static str {
        "GeneOntology"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let line = self
            .http
            .fetch_obo_version_line(GO_OBO_URL)?
            .ok_or(StatusError::NoMatch(self.id()))?;
        Ok(vec![Entry {
            version: Some(obo_date_version(&line, self.id())?),
            files: file_map([
                ("go.obo", GO_OBO_URL),
                (
                    "goa_human.gaf.gz",
                    "http://current.geneontology.org/annotations/goa_human.gaf.gz",
                ),
                (
                    "goa_human_complex.gaf.gz",
                    "http://current.geneontology.org/annotations/goa_human_complex.gaf.gz",
                ),
                (
                    "goa_human_isoform.gaf.gz",
                    "http://current.geneontology.org/annotations/goa_human_isoform.gaf.gz",
                ),
                (
                    "goa_human_rna.gaf.gz",
                    "http://current.geneontology.org/annotations/goa_human_rna.gaf.gz",
                ),
            ]),
            latest: true,
        }])
    }
}

pub struct Hpo {
    http: HttpClient,
}

impl Hpo {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl SourceExtractor for Hpo {
    fn id(&self) -> &'static str {
        "HPO"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let line = self
            .http
            .fetch_obo_version_line(HPO_OBO_URL)?
            .ok_or(StatusError::NoMatch(self.id()))?;
        Ok(vec![Entry {
            version: Some(obo_date_version(&line, self.id())?),
            files: file_map([
                ("hp.obo", HPO_OBO_URL),
                (
                    "phenotype.hpoa",
                    "http://purl.obolibrary.org/obo/hp/hpoa/phenotype.hpoa",
                ),
                (
                    "genes_to_phenotype.txt",
                    "http://purl.obolibrary.org/obo/hp/hpoa/genes_to_phenotype.txt",
                ),
                (
                    "phenotype_to_genes.txt",
                    "http://purl.obolibrary.org/obo/hp/hpoa/phenotype_to_genes.txt",
                ),
            ]),
            latest: true,
        }])
    }
}

pub struct Mondo {
    http: HttpClient,
}

impl Mondo {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl SourceExtractor for Mondo {
    fn id(&self) -> &'static str {
        "Mondo"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let line = self
            .http
            .fetch_obo_version_line(MONDO_OBO_URL)?
            .ok_or(StatusError::NoMatch(self.id()))?;
        Ok(vec![Entry {
            version: Some(obo_date_version(&line, self.id())?),
            files: single_file("mondo.obo", MONDO_OBO_URL.to_string()),
            latest: true,
        }])
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn release_path_style_header() {
        let line = "data-version: releases/2024-01-17";
        assert_eq!(obo_date_version(line, "GeneOntology").unwrap(), "2024.01.17");
    }

    #[test]
    fn purl_style_header() {
        let line = "data-version: http://purl.obolibrary.org/obo/mondo/releases/2023-08-02/mondo.obo";
        assert_eq!(obo_date_version(line, "Mondo").unwrap(), "2023.08.02");
    }

    #[test]
    fn undated_header_is_no_match() {
        let err = obo_date_version("data-version: unreleased", "HPO").unwrap_err();
        assert_matches!(err, StatusError::NoMatch("HPO"));
    }
}
