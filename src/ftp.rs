use std::fmt::Display;

use chrono::NaiveDateTime;
use suppaftp::{FtpStream, Mode};
use tracing::warn;

use crate::error::StatusError;

/// Anonymous FTP helper. Every operation opens a fresh session, runs its
/// commands, and closes the session before returning.
#[derive(Debug, Clone, Default)]
pub struct FtpClient;

impl FtpClient {
    pub fn new() -> Self {
        Self
    }

    /// Server-side modification time (MDTM) of one remote file.
    pub fn modified_time(&self, host: &str, path: &str) -> Result<NaiveDateTime, StatusError> {
        let times = self.modified_times(host, &[path])?;
        times
            .into_iter()
            .next()
            .ok_or_else(|| ftp_error(host, "empty MDTM reply"))
    }

    /// Modification times for several remote files over one session.
    pub fn modified_times(
        &self,
        host: &str,
        paths: &[&str],
    ) -> Result<Vec<NaiveDateTime>, StatusError> {
        let mut ftp = self.connect(host)?;
        let mut times = Vec::with_capacity(paths.len());
        let mut failure = None;
        for path in paths {
            match ftp.mdtm(path) {
                Ok(moment) => times.push(moment),
                Err(err) => {
                    failure = Some(ftp_error(host, err));
                    break;
                }
            }
        }
        close(ftp, host);
        match failure {
            Some(err) => Err(err),
            None => Ok(times),
        }
    }

    /// Bare name listing (NLST) of one remote directory.
    pub fn list_names(&self, host: &str, dir: &str) -> Result<Vec<String>, StatusError> {
        let mut ftp = self.connect(host)?;
        let listing = ftp.nlst(Some(dir));
        close(ftp, host);
        listing.map_err(|err| ftp_error(host, err))
    }

    fn connect(&self, host: &str) -> Result<FtpStream, StatusError> {
        let mut ftp =
            FtpStream::connect(format!("{host}:21")).map_err(|err| ftp_error(host, err))?;
        ftp.set_mode(Mode::ExtendedPassive);
        ftp.login("anonymous", "anonymous")
            .map_err(|err| ftp_error(host, err))?;
        Ok(ftp)
    }
}

fn close(mut ftp: FtpStream, host: &str) {
    if let Err(err) = ftp.quit() {
        warn!("failed to close ftp session on {host}: {err}");
    }
}

fn ftp_error(host: &str, err: impl Display) -> StatusError {
    StatusError::Ftp {
        host: host.to_string(),
        message: err.to_string(),
    }
}
