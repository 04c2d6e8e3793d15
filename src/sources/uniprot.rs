use crate::domain::{Entry, single_file};
use crate::error::StatusError;
use crate::ftp::FtpClient;
use crate::sources::SourceExtractor;
use crate::version::date_version;

const UNIPROT_FTP_HOST: &str = "ftp.uniprot.org";
const SPROT_HUMAN_PATH: &str =
    "pub/databases/uniprot/current_release/knowledgebase/taxonomic_divisions/uniprot_sprot_human.xml.gz";

/// UniProt republishes `current_release` in place, so the modification
/// time of the human Swiss-Prot division dates the release.
pub struct UniProt {
    ftp: FtpClient,
}

impl UniProt {
    pub fn new(ftp: FtpClient) -> Self {
        Self { ftp }
    }
}

impl SourceExtractor for UniProt {
    fn id(&self) -> &'static str {
        "UniProt"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let modified = self.ftp.modified_time(UNIPROT_FTP_HOST, SPROT_HUMAN_PATH)?;
        Ok(vec![Entry {
            version: Some(date_version(&modified)),
            files: single_file(
                "uniprot_sprot_human.xml.gz",
                format!("https://{UNIPROT_FTP_HOST}/{SPROT_HUMAN_PATH}"),
            ),
            latest: true,
        }])
    }
}
