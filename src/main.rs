use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use castellan_console::{ConsoleConfig, Session};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
    info!("castellan starting");

    let mut session = Session::new(ConsoleConfig::default());
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
