use crate::domain::{Entry, single_file};
use crate::error::StatusError;
use crate::sources::SourceExtractor;

const PLANT_LIST_URL: &str =
    "https://plants.sc.egov.usda.gov/assets/docs/CompletePLANTSList/plantlst.txt";

/// The complete PLANTS checklist carries no published version marker
/// anywhere; the entry is emitted with the version absent.
pub struct UsdaPlants;

impl UsdaPlants {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UsdaPlants {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceExtractor for UsdaPlants {
    fn id(&self) -> &'static str {
        "USDA-PLANTS"
    }

    fn produce(&self) -> Result<Vec<Entry>, StatusError> {
        Ok(vec![Entry {
            version: None,
            files: single_file("plantlst.txt", PLANT_LIST_URL.to_string()),
            latest: true,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versionless_entry_is_still_latest() {
        let entries = UsdaPlants::new().produce().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].version, None);
        assert!(entries[0].latest);
    }
}
