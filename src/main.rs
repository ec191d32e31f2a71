use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[macro_use]
mod testutil;

mod filespec;
mod journal;
mod merge;
mod tags;

#[derive(Debug, Parser)]
#[command(name = "journalmerge")]
/// Merges hledger journals into one, dropping transactions whose txid was
/// already seen and ordering the rest by date.
struct Command {
    #[command(flatten)]
    merge: merge::cmd::Cmd,
}

/// Logs to stderr, filtered by `RUST_LOG` (warnings and above by default).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    Command::parse().merge.run()
}
