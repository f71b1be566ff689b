use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::error::AppResult;
use crate::models::{NewProduct, Product};
use crate::store::ProductStore;

/// JSON-array file store. The file is the source of truth: every call reads
/// it in full and every mutation writes it back in full. There is no locking,
/// so two processes writing at once can lose an update.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create the parent directory if needed. The file itself is created lazily.
    pub fn new<P: Into<PathBuf>>(path: P) -> AppResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole list. A missing or unparsable file is reset to `[]`.
    fn load(&self) -> AppResult<Vec<Product>> {
        match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(products) => Ok(products),
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "Catalog file unreadable, resetting to empty");
                    self.save(&[])?;
                    Ok(Vec::new())
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Catalog file missing, creating");
                self.save(&[])?;
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, products: &[Product]) -> AppResult<()> {
        let data = serde_json::to_vec_pretty(products)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl ProductStore for FileStore {
    fn products(&self) -> AppResult<Vec<Product>> {
        self.load()
    }

    fn insert(&mut self, product: NewProduct) -> AppResult<Product> {
        let mut products = self.load()?;
        // The array carries no counter, so the high-water mark is the largest stored id.
        let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let product = product.with_id(id);
        products.push(product.clone());
        self.save(&products)?;
        Ok(product)
    }

    fn replace(&mut self, product: Product) -> AppResult<bool> {
        let mut products = self.load()?;
        let Some(slot) = products.iter_mut().find(|p| p.id == product.id) else {
            return Ok(false);
        };
        *slot = product;
        self.save(&products)?;
        Ok(true)
    }

    fn remove(&mut self, id: u64) -> AppResult<bool> {
        let products = self.load()?;
        let before = products.len();
        let kept: Vec<Product> = products.into_iter().filter(|p| p.id != id).collect();
        if kept.len() == before {
            return Ok(false);
        }
        self.save(&kept)?;
        Ok(true)
    }
}
