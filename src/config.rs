use std::path::PathBuf;

use anyhow::{bail, Context};

/// Default location of the JSON store, shared with the function entry point.
pub const DEFAULT_CATALOG_FILE: &str = "/tmp/product.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    File,
}

impl std::str::FromStr for StoreKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            other => bail!("unknown store kind '{}', expected 'memory' or 'file'", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store: StoreKind,
    pub catalog_file: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            store: std::env::var("CATALOG_STORE")
                .unwrap_or_else(|_| "memory".to_string())
                .parse()
                .context("CATALOG_STORE must be 'memory' or 'file'")?,
            catalog_file: std::env::var("CATALOG_FILE")
                .unwrap_or_else(|_| DEFAULT_CATALOG_FILE.to_string())
                .into(),
        })
    }
}
