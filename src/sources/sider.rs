use crate::domain::{Entry, file_map};
use crate::error::StatusError;
use crate::ftp::FtpClient;
use crate::sources::SourceExtractor;
use crate::version::date_version;

const SIDER_FTP_HOST: &str = "xi.embl.de";
const LABEL_SE_PATH: &str = "/SIDER/latest/meddra_all_label_se.tsv.gz";

/// SIDER has not cut a numbered release since 4.1; the modification time
/// of the side-effects table under `latest/` stands for the version.
pub struct Sider {
    ftp: FtpClient,
}

impl Sider {
    pub fn new(ftp: FtpClient) -> Self {
        Self { ftp }
    }
}

impl SourceExtractor for Sider {
    fn id(&self) -> &'static str {
        "Sider"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let modified = self.ftp.modified_time(SIDER_FTP_HOST, LABEL_SE_PATH)?;
        Ok(vec![Entry {
            version: Some(date_version(&modified)),
            files: file_map([
                (
                    "drug_names.tsv",
                    "http://sideeffects.embl.de/media/download/drug_names.tsv",
                ),
                (
                    "drug_atc.tsv",
                    "http://sideeffects.embl.de/media/download/drug_atc.tsv",
                ),
                (
                    "meddra_all_label_indications.tsv.gz",
                    "ftp://xi.embl.de/SIDER/latest/meddra_all_label_indications.tsv.gz",
                ),
                (
                    "meddra_all_label_se.tsv.gz",
                    "ftp://xi.embl.de/SIDER/latest/meddra_all_label_se.tsv.gz",
                ),
                (
                    "meddra_freq.tsv.gz",
                    "ftp://xi.embl.de/SIDER/latest/meddra_freq.tsv.gz",
                ),
            ]),
            latest: true,
        }])
    }
}
