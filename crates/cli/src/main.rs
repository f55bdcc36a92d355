use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod merge;

#[derive(Parser)]
#[command(name = "chat-merge")]
#[command(about = "Merge VS Code chat-session indexes between workspace state databases", long_about = None)]
struct Cli {
    /// Old workspace state.vscdb, read-only source of sessions
    old_store: PathBuf,
    /// New workspace state.vscdb, updated in place
    new_store: PathBuf,
    /// Read and merge but write nothing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    merge::run(&cli.old_store, &cli.new_store, cli.dry_run)
}
