//! Persistence boundary for catalog records.
//!
//! Two backends share the [`ProductStore`] trait: an in-process ordered map
//! ([`MemoryStore`]) and a JSON file that is re-read and re-written on every
//! call ([`FileStore`]). Neither reuses an id that a stored record still holds.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::AppResult;
use crate::models::{NewProduct, Product};

pub trait ProductStore: Send + Sync {
    /// Every stored record, in insertion order.
    fn products(&self) -> AppResult<Vec<Product>>;

    /// Assign an id to `product`, store it and return the stored record.
    fn insert(&mut self, product: NewProduct) -> AppResult<Product>;

    /// Overwrite the record with the same id. Returns `false` when absent.
    fn replace(&mut self, product: Product) -> AppResult<bool>;

    /// Returns `false` when no record had this id.
    fn remove(&mut self, id: u64) -> AppResult<bool>;

    fn find(&self, id: u64) -> AppResult<Option<Product>> {
        Ok(self.products()?.into_iter().find(|p| p.id == id))
    }
}
