use clap::Parser;
use std::io;

use bucketsh::cli::{self, Args};
use bucketsh::config::load_storage_config;
use bucketsh::dispatch::Dispatcher;
use bucketsh::error::Result;
use bucketsh::shell::Shell;
use bucketsh::storage::StorageClient;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run_app(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_app(args: Args) -> Result<()> {
    cli::init_logging(&args)?;
    let config = load_storage_config()?;
    log::info!(
        "starting shell provider={:?} bucket={}",
        config.provider,
        config.bucket
    );
    let client = StorageClient::new(config).await?;
    let shell = Shell::new(Dispatcher::new(client));
    shell.run(io::stdin().lock(), io::stdout()).await?;
    Ok(())
}
