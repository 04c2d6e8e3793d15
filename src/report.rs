use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::domain::SourceStatus;
use crate::error::StatusError;

/// Indented snapshot for human review and diffing.
pub const SNAPSHOT_FILE: &str = "result.json";
/// Compact snapshot for machine consumption.
pub const MINIFIED_SNAPSHOT_FILE: &str = "result.min.json";
pub const RUN_LOG_FILE: &str = "update-log.txt";

/// Plain-text run log: one line for the run start, then one line per
/// source with its version count or failure message.
#[derive(Debug)]
pub struct RunLog {
    lines: Vec<String>,
}

impl RunLog {
    pub fn begin(started_at: DateTime<Local>) -> Self {
        Self {
            lines: vec![format!(
                "Updating data sources at {}",
                started_at.to_rfc3339()
            )],
        }
    }

    pub fn success(&mut self, id: &str, count: usize) {
        self.lines
            .push(format!("Retrieved {count} versions for data source \"{id}\""));
    }

    pub fn failure(&mut self, id: &str, error: &StatusError) {
        self.lines
            .push(format!("Failed to retrieve data source \"{id}\" status: {error}"));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn save(&self, path: &Path) -> Result<(), StatusError> {
        let mut content = self.lines.join("\n");
        content.push('\n');
        fs::write(path, content).map_err(|err| StatusError::Filesystem(err.to_string()))
    }
}

/// Write the indented and the minified snapshot. Both carry the same
/// structure with lexicographically sorted keys.
pub fn write_snapshots(
    status: &SourceStatus,
    pretty_path: &Path,
    minified_path: &Path,
) -> Result<(), StatusError> {
    let pretty =
        serde_json::to_string_pretty(status).map_err(|err| StatusError::Json(err.to_string()))?;
    let minified =
        serde_json::to_string(status).map_err(|err| StatusError::Json(err.to_string()))?;
    fs::write(pretty_path, pretty).map_err(|err| StatusError::Filesystem(err.to_string()))?;
    fs::write(minified_path, minified).map_err(|err| StatusError::Filesystem(err.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Local;

    use super::*;
    use crate::domain::{Entry, SourceStatus, single_file};

    fn sample_status() -> SourceStatus {
        let mut status = SourceStatus::new();
        status.insert(
            "HPO".to_string(),
            vec![Entry {
                version: Some("2024.01.16".to_string()),
                files: single_file(
                    "hp.obo",
                    "http://purl.obolibrary.org/obo/hp.obo".to_string(),
                ),
                latest: true,
            }],
        );
        status.insert("DGIdb".to_string(), Vec::new());
        status
    }

    #[test]
    fn snapshots_round_trip_to_identical_data() {
        let status = sample_status();
        let dir = tempfile::tempdir().unwrap();
        let pretty_path = dir.path().join("result.json");
        let minified_path = dir.path().join("result.min.json");
        write_snapshots(&status, &pretty_path, &minified_path).unwrap();

        let pretty_text = fs::read_to_string(&pretty_path).unwrap();
        let minified_text = fs::read_to_string(&minified_path).unwrap();
        let from_pretty: SourceStatus = serde_json::from_str(&pretty_text).unwrap();
        let from_minified: SourceStatus = serde_json::from_str(&minified_text).unwrap();
        assert_eq!(from_pretty, from_minified);
        assert_eq!(from_pretty, status);
        assert!(pretty_text.contains('\n'));
        assert!(!minified_text.contains('\n'));
    }

    #[test]
    fn snapshot_keys_are_sorted() {
        let status = sample_status();
        let minified = serde_json::to_string(&status).unwrap();
        let dgidb = minified.find("DGIdb").unwrap();
        let hpo = minified.find("HPO").unwrap();
        assert!(dgidb < hpo);
    }

    #[test]
    fn run_log_saves_one_line_per_event() {
        let mut log = RunLog::begin(Local::now());
        log.success("HPO", 1);
        log.failure("AACT", &StatusError::NoMatch("AACT"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("update-log.txt");
        log.save(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Updating data sources at "));
        assert_eq!(lines[1], "Retrieved 1 versions for data source \"HPO\"");
        assert!(lines[2].starts_with("Failed to retrieve data source \"AACT\" status:"));
    }
}
