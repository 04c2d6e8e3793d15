pub mod aggregate;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod ftp;
pub mod report;
pub mod sources;
pub mod version;
