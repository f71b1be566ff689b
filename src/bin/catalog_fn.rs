//! One-shot function entry point.
//!
//! Reads an event (`{"action": ..., "data": ...}`) from the file named by the
//! first argument, or from stdin when the argument is absent or `-`, applies it
//! to the file store at `CATALOG_FILE` and prints the result envelope.

use std::io::Read;

use anyhow::Context;
use tracing::debug;

use catalog_service::{catalog::Catalog, config::Config, lambda, logging, store::FileStore};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_function();

    let config = Config::from_env()?;

    let input = match std::env::args().nth(1).filter(|a| a != "-") {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read event file {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read event from stdin")?;
            buf
        }
    };
    let event: serde_json::Value = serde_json::from_str(&input).context("event is not valid JSON")?;

    let mut catalog = Catalog::new(FileStore::new(&config.catalog_file)?);
    let envelope = lambda::handle_value(&mut catalog, event);
    debug!(success = envelope.is_success(), "Event handled");

    println!("{}", serde_json::to_string(&envelope)?);
    Ok(())
}
