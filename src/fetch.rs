use std::io::{BufRead, BufReader};
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_DISPOSITION, HeaderMap, HeaderValue, USER_AGENT};

use crate::error::StatusError;

/// Shared blocking HTTP client with an identifying User-Agent.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, StatusError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!(
                "biodata-source-status/",
                env!("CARGO_PKG_VERSION")
            )),
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| StatusError::Client(err.to_string()))?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, StatusError> {
        let response = self.client.get(url).send().map_err(|err| StatusError::Http {
            url: url.to_string(),
            message: err.to_string(),
        })?;
        if !response.status().is_success() {
            return Err(StatusError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response)
    }

    pub fn fetch_text(&self, url: &str) -> Result<String, StatusError> {
        self.get(url)?.text().map_err(|err| StatusError::Http {
            url: url.to_string(),
            message: err.to_string(),
        })
    }

    pub fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, StatusError> {
        let bytes = self.get(url)?.bytes().map_err(|err| StatusError::Http {
            url: url.to_string(),
            message: err.to_string(),
        })?;
        Ok(bytes.to_vec())
    }

    /// First line of a streamed OBO file whose trimmed content starts with
    /// the `data-version:` tag, or `None` when the stream ends without one.
    /// OBO ontologies run to tens of megabytes; the response is dropped as
    /// soon as the header line is found.
    pub fn fetch_obo_version_line(&self, url: &str) -> Result<Option<String>, StatusError> {
        let response = self.get(url)?;
        let reader = BufReader::new(response);
        for line in reader.lines() {
            let line = line.map_err(|err| StatusError::Http {
                url: url.to_string(),
                message: err.to_string(),
            })?;
            if line.trim().starts_with("data-version:") {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    /// Attachment file name advertised in the content-disposition header.
    pub fn attachment_file_name(&self, url: &str) -> Result<String, StatusError> {
        let response = self.get(url)?;
        let header = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .ok_or(StatusError::NoMatch("content-disposition"))?;
        parse_attachment_file_name(header).ok_or(StatusError::NoMatch("content-disposition"))
    }
}

pub fn parse_attachment_file_name(header: &str) -> Option<String> {
    let name = header.split("filename=").nth(1)?;
    let name = name.trim().trim_matches('"').trim();
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_name_plain() {
        let name = parse_attachment_file_name("attachment; filename=gwas_catalog_v1.0-associations_e110_r2024-01-30.tsv");
        assert_eq!(
            name.as_deref(),
            Some("gwas_catalog_v1.0-associations_e110_r2024-01-30.tsv")
        );
    }

    #[test]
    fn attachment_name_quoted() {
        let name = parse_attachment_file_name(r#"attachment; filename="report 2024-05-01.tsv""#);
        assert_eq!(name.as_deref(), Some("report 2024-05-01.tsv"));
    }

    #[test]
    fn attachment_name_missing() {
        assert_eq!(parse_attachment_file_name("attachment"), None);
        assert_eq!(parse_attachment_file_name("attachment; filename="), None);
    }
}
