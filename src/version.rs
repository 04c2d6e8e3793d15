use chrono::{Local, NaiveDateTime};

use crate::error::StatusError;

pub const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// 1-based month number for a three-letter English abbreviation.
pub fn month_number(abbr: &str) -> Result<u32, StatusError> {
    MONTHS_SHORT
        .iter()
        .position(|month| *month == abbr)
        .map(|index| index as u32 + 1)
        .ok_or_else(|| StatusError::Timestamp(format!("unknown month abbreviation: {abbr}")))
}

/// Calendar version in the period-delimited, lexicographically sortable
/// `YYYY.MM.DD` form.
pub fn date_version(moment: &NaiveDateTime) -> String {
    moment.format("%Y.%m.%d").to_string()
}

/// Version for sources republished daily, defined as the run date.
pub fn today_version() -> String {
    Local::now().format("%Y.%m.%d").to_string()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::NaiveDateTime;

    use super::*;

    #[test]
    fn month_number_maps_abbreviations() {
        assert_eq!(month_number("Jan").unwrap(), 1);
        assert_eq!(month_number("Jul").unwrap(), 7);
        assert_eq!(month_number("Dec").unwrap(), 12);
    }

    #[test]
    fn month_number_rejects_unknown_token() {
        let err = month_number("Julember").unwrap_err();
        assert_matches!(err, StatusError::Timestamp(_));
    }

    #[test]
    fn date_version_from_mdtm_reply() {
        // MDTM replies carry a bare `YYYYMMDDhhmmss` stamp.
        let moment = NaiveDateTime::parse_from_str("20240115013000", "%Y%m%d%H%M%S").unwrap();
        assert_eq!(date_version(&moment), "2024.01.15");
    }

    #[test]
    fn today_version_is_calendar_shaped() {
        let version = today_version();
        let bytes = version.as_bytes();
        assert_eq!(version.len(), 10);
        assert_eq!(bytes[4], b'.');
        assert_eq!(bytes[7], b'.');
    }
}
