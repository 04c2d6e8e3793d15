use tracing::warn;

use crate::domain::{Entry, SourceStatus, no_entries};
use crate::report::RunLog;
use crate::sources::SourceExtractor;

/// Run every registered extractor in order and assemble the snapshot.
/// Every registered id ends up as a key, whatever its extractor did.
pub fn run_all(registry: &[Box<dyn SourceExtractor>], log: &mut RunLog) -> SourceStatus {
    let mut status = SourceStatus::new();
    for extractor in registry {
        let entries = guarded(extractor.as_ref(), log);
        status.insert(extractor.id().to_string(), entries);
    }
    status
}

/// Failure boundary around one extractor: an error becomes an empty
/// sequence plus a logged diagnostic, never an aborted run.
fn guarded(extractor: &dyn SourceExtractor, log: &mut RunLog) -> Vec<Entry> {
    match extractor.produce() {
        Ok(entries) => {
            log.success(extractor.id(), entries.len());
            entries
        }
        Err(err) => {
            warn!("extraction for {} failed: {err}", extractor.id());
            log.failure(extractor.id(), &err);
            no_entries()
        }
    }
}
