use crate::domain::{Entry, file_map};
use crate::error::StatusError;
use crate::ftp::FtpClient;
use crate::sources::SourceExtractor;
use crate::version::date_version;

const KEGG_FTP_HOST: &str = "ftp.genome.jp";

/// The four MEDICUS flat files move independently; the newest
/// modification time among them stands for the release.
const MEDICUS_PATHS: [&str; 4] = [
    "pub/kegg/medicus/dgroup/dgroup",
    "pub/kegg/medicus/disease/disease",
    "pub/kegg/medicus/drug/drug",
    "pub/kegg/medicus/network/network",
];

pub struct Kegg {
    ftp: FtpClient,
}

impl Kegg {
    pub fn new(ftp: FtpClient) -> Self {
        Self { ftp }
    }
}

impl SourceExtractor for Kegg {
    fn id(&self) -> &'static str {
        "KEGG"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        let times = self.ftp.modified_times(KEGG_FTP_HOST, &MEDICUS_PATHS)?;
        let newest = times
            .iter()
            .max()
            .ok_or(StatusError::NoMatch("KEGG"))?;
        Ok(vec![Entry {
            version: Some(date_version(newest)),
            files: file_map([
                ("dgroup", "ftp://ftp.genome.jp/pub/kegg/medicus/dgroup/dgroup"),
                ("drug", "ftp://ftp.genome.jp/pub/kegg/medicus/drug/drug"),
                (
                    "disease",
                    "ftp://ftp.genome.jp/pub/kegg/medicus/disease/disease",
                ),
                (
                    "network",
                    "ftp://ftp.genome.jp/pub/kegg/medicus/network/network",
                ),
                (
                    "variant",
                    "ftp://ftp.genome.jp/pub/kegg/medicus/network/variant",
                ),
                ("human_genes_list.tsv", "http://rest.kegg.jp/list/hsa"),
                ("compounds_list.tsv", "http://rest.kegg.jp/list/compound"),
                ("organisms_list.tsv", "http://rest.kegg.jp/list/organism"),
            ]),
            latest: true,
        }])
    }
}
