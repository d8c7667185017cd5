use clap::Parser;
use env_logger::{Env, Target};
use snafu::ResultExt;
use std::fs::File;
use std::path::PathBuf;

use crate::error::{LogFileSnafu, LoggerInitSnafu, Result};

/// Interactive shell for object storage directories and objects.
///
/// The storage backend is configured through `STORAGE_*` environment
/// variables; commands are read from standard input.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// File receiving the diagnostic log. Truncated on start.
    #[arg(long, env = "BUCKETSH_LOG_FILE", default_value = "output.log")]
    pub log_file: PathBuf,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "debug")]
    pub log_level: String,
}

/// Send `log` records to the configured log file with millisecond timestamps.
pub fn init_logging(args: &Args) -> Result<()> {
    let file = File::create(&args.log_file).context(LogFileSnafu {
        path: args.log_file.clone(),
    })?;

    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str()));
    builder
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)));
    builder.try_init().context(LoggerInitSnafu)?;
    Ok(())
}
