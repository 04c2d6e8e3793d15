use chrono::NaiveDateTime;

use biodata_source_status::fetch::parse_attachment_file_name;
use biodata_source_status::version::{date_version, month_number, today_version};

#[test]
fn ftp_modification_time_becomes_zero_padded_version() {
    let stamp = NaiveDateTime::parse_from_str("20240115013000", "%Y%m%d%H%M%S").unwrap();
    assert_eq!(date_version(&stamp), "2024.01.15");
}

#[test]
fn month_abbreviations_cover_the_year() {
    assert_eq!(month_number("Jan").unwrap(), 1);
    assert_eq!(month_number("Dec").unwrap(), 12);
    assert!(month_number("Foo").is_err());
}

#[test]
fn today_version_has_dotted_date_shape() {
    let version = today_version();
    let parts: Vec<&str> = version.split('.').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].len(), 4);
    assert_eq!(parts[1].len(), 2);
    assert_eq!(parts[2].len(), 2);
}

#[test]
fn attachment_header_yields_file_name() {
    assert_eq!(
        parse_attachment_file_name("attachment; filename=gwas_catalog_v1.0.2-associations_e111_r2024-01-18.tsv"),
        Some("gwas_catalog_v1.0.2-associations_e111_r2024-01-18.tsv".to_string())
    );
    assert_eq!(parse_attachment_file_name("inline"), None);
}
