use crate::domain::{Entry, no_entries};
use crate::error::StatusError;
use crate::fetch::HttpClient;
use crate::ftp::FtpClient;

mod aact;
mod anticancerfund;
mod drugbank;
mod drugcentral;
mod ebi;
mod ema;
mod health_canada;
mod itis;
mod kegg;
mod nci;
mod ontologies;
mod pathway_commons;
mod pharmgkb;
mod sider;
mod unii;
mod uniprot;
mod usda;

pub use aact::Aact;
pub use anticancerfund::{CancerDrugsDb, RedoDb, RedoTrialsDb};
pub use drugbank::DrugBank;
pub use drugcentral::DrugCentral;
pub use ebi::{Gene2Phenotype, GwasCatalog, Hgnc};
pub use ema::Ema;
pub use health_canada::CanadianNutrientFile;
pub use itis::Itis;
pub use kegg::Kegg;
pub use nci::{MedRt, NdfRt};
pub use ontologies::{GeneOntology, Hpo, Mondo};
pub use pathway_commons::PathwayCommons;
pub use pharmgkb::PharmGkb;
pub use sider::Sider;
pub use unii::Unii;
pub use uniprot::UniProt;
pub use usda::UsdaPlants;

/// One data-source extraction strategy: derive the published versions,
/// newest first, from whatever the source exposes (a page, an API, an FTP
/// listing, an archive member name).
pub trait SourceExtractor {
    /// Stable registry key for this data source.
    fn id(&self) -> &'static str;

    fn produce(&self) -> Result<Vec<Entry>, StatusError>;
}

/// Placeholder for catalog entries without an extraction strategy yet.
/// Produces an empty sequence, not an error.
pub struct Unimplemented {
    id: &'static str,
}

impl Unimplemented {
    pub fn new(id: &'static str) -> Self {
        Self { id }
    }
}

impl SourceExtractor for Unimplemented {
    fn id(&self) -> &'static str {
        self.id
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        Ok(no_entries())
    }
}

/// The static source catalog, in registry-key order.
pub fn registry(http: &HttpClient, ftp: &FtpClient) -> Vec<Box<dyn SourceExtractor>> {
    vec![
        Box::new(Aact::new(http.clone())),
        Box::new(CanadianNutrientFile::new(http.clone())),
        Box::new(CancerDrugsDb::new(http.clone())),
        Box::new(Unimplemented::new("DGIdb")),
        Box::new(DrugBank::new(http.clone())),
        Box::new(DrugCentral::new(http.clone())),
        Box::new(Ema::new()),
        Box::new(Gene2Phenotype::new(http.clone())),
        Box::new(GeneOntology::new(http.clone())),
        Box::new(GwasCatalog::new(http.clone())),
        Box::new(Hgnc::new(ftp.clone())),
        Box::new(Hpo::new(http.clone())),
        Box::new(Itis::new(http.clone())),
        Box::new(Kegg::new(ftp.clone())),
        Box::new(MedRt::new(ftp.clone())),
        Box::new(Mondo::new(http.clone())),
        Box::new(NdfRt::new(ftp.clone())),
        Box::new(Unimplemented::new("OpenTargets")),
        Box::new(PathwayCommons::new(http.clone())),
        Box::new(PharmGkb::new(http.clone())),
        Box::new(RedoDb::new(http.clone())),
        Box::new(RedoTrialsDb::new(http.clone())),
        Box::new(Sider::new(ftp.clone())),
        Box::new(Unii::new(http.clone())),
        Box::new(UniProt::new(ftp.clone())),
        Box::new(UsdaPlants::new()),
    ]
}
