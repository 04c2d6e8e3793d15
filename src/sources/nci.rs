use regex::Regex;

use crate::domain::{Entry, single_file};
use crate::error::StatusError;
use crate::ftp::FtpClient;
use crate::sources::SourceExtractor;

const NCI_FTP_HOST: &str = "ftp1.nci.nih.gov";
const MED_RT_ARCHIVE_DIR: &str = "/pub/cacore/EVS/MED-RT/Archive";
const NDF_RT_ARCHIVE_DIR: &str = "/pub/cacore/EVS/NDF-RT/Archive";

/// File names surviving the prefix/suffix filter, sorted descending so
/// the newest archive comes first.
fn archive_file_names(paths: &[String], prefix: &str, suffix: &str) -> Vec<String> {
    let mut names: Vec<String> = paths
        .iter()
        .filter_map(|path| path.rsplit('/').next())
        .filter(|name| name.starts_with(prefix) && name.ends_with(suffix))
        .map(|name| name.to_string())
        .collect();
    names.sort();
    names.reverse();
    names
}

/// The NCI EVS archive keeps every MED-RT release as
/// `Core_MEDRT_YYYY.MM.DD_XML.zip`.
pub struct MedRt {
    ftp: FtpClient,
}

impl MedRt {
    pub fn new(ftp: FtpClient) -> Self {
        Self { ftp }
    }
}

impl SourceExtractor for MedRt {
    fn id(&self) -> &'static str {
        "MED-RT"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let paths = self.ftp.list_names(NCI_FTP_HOST, MED_RT_ARCHIVE_DIR)?;
        med_rt_entries(&paths)
    }
}

fn med_rt_entries(paths: &[String]) -> Result<Vec<Entry>, StatusError> {
    let pattern = Regex::new(r"([0-9]{4}\.[0-9]{2}\.[0-9]{2})").unwrap();
    let names = archive_file_names(paths, "Core_MEDRT_", "_XML.zip");
    let mut entries = Vec::with_capacity(names.len());
    for (index, name) in names.iter().enumerate() {
        let captures = pattern.captures(name).ok_or(StatusError::NoMatch("MED-RT"))?;
        entries.push(Entry {
            version: Some(captures[1].to_string()),
            files: single_file(
                "Core_MEDRT_XML.zip",
                format!("https://evs.nci.nih.gov/ftp1/MED-RT/Archive/{name}"),
            ),
            latest: index == 0,
        });
    }
    Ok(entries)
}

/// NDF-RT was frozen in 2018 but its archive listing is still served;
/// releases are named `NDFRT_Public_All_YYYY-MM-DD...`.
pub struct NdfRt {
    ftp: FtpClient,
}

impl NdfRt {
    pub fn new(ftp: FtpClient) -> Self {
        Self { ftp }
    }
}

impl SourceExtractor for NdfRt {
    fn id(&self) -> &'static str {
        "NDF-RT"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let paths = self.ftp.list_names(NCI_FTP_HOST, NDF_RT_ARCHIVE_DIR)?;
        ndf_rt_entries(&paths)
    }
}

fn ndf_rt_entries(paths: &[String]) -> Result<Vec<Entry>, StatusError> {
    let pattern = Regex::new(r"([0-9]{4})-([0-9]{2})-([0-9]{2})").unwrap();
    let names = archive_file_names(paths, "NDFRT_Public_All", "");
    let mut entries = Vec::with_capacity(names.len());
    for (index, name) in names.iter().enumerate() {
        let captures = pattern.captures(name).ok_or(StatusError::NoMatch("NDF-RT"))?;
        entries.push(Entry {
            version: Some(format!("{}.{}.{}", &captures[1], &captures[2], &captures[3])),
            files: single_file(
                "NDFRT_Public_All.zip",
                format!("https://evs.nci.nih.gov/ftp1/NDF-RT/Archive/{name}"),
            ),
            latest: index == 0,
        });
    }
    Ok(entries)
}
