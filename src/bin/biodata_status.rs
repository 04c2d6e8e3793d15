use std::path::Path;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use biodata_source_status::aggregate::run_all;
use biodata_source_status::error::StatusError;
use biodata_source_status::fetch::HttpClient;
use biodata_source_status::ftp::FtpClient;
use biodata_source_status::report::{
    MINIFIED_SNAPSHOT_FILE, RUN_LOG_FILE, RunLog, SNAPSHOT_FILE, write_snapshots,
};
use biodata_source_status::sources::registry;

#[derive(Parser)]
#[command(name = "biodata-status")]
#[command(about = "Report the latest published version of each tracked biomedical data source")]
#[command(version, author)]
struct Cli {}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(status) = report.downcast_ref::<StatusError>() {
            return ExitCode::from(map_exit_code(status));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &StatusError) -> u8 {
    match error {
        StatusError::Http { .. } | StatusError::HttpStatus { .. } | StatusError::Ftp { .. } => 3,
        StatusError::Filesystem(_) => 2,
        _ => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Cli::parse();

    let http = HttpClient::new().into_diagnostic()?;
    let ftp = FtpClient::new();
    let registry = registry(&http, &ftp);

    let mut log = RunLog::begin(Local::now());
    let status = run_all(&registry, &mut log);

    write_snapshots(
        &status,
        Path::new(SNAPSHOT_FILE),
        Path::new(MINIFIED_SNAPSHOT_FILE),
    )
    .into_diagnostic()?;
    log.save(Path::new(RUN_LOG_FILE)).into_diagnostic()?;
    Ok(())
}
