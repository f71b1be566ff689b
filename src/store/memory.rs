use indexmap::IndexMap;

use crate::error::AppResult;
use crate::models::{NewProduct, Product};
use crate::store::ProductStore;

/// Process-lifetime store. Contents are lost on restart.
///
/// `IndexMap` keeps listing order equal to insertion order, and `next_id`
/// only ever grows so a deleted id is never handed out again.
#[derive(Debug)]
pub struct MemoryStore {
    products: IndexMap<u64, Product>,
    next_id: u64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            products: IndexMap::new(),
            next_id: 1,
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for MemoryStore {
    fn products(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.values().cloned().collect())
    }

    fn insert(&mut self, product: NewProduct) -> AppResult<Product> {
        let id = self.next_id;
        self.next_id += 1;
        let product = product.with_id(id);
        self.products.insert(id, product.clone());
        Ok(product)
    }

    fn replace(&mut self, product: Product) -> AppResult<bool> {
        match self.products.get_mut(&product.id) {
            Some(slot) => {
                *slot = product;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove(&mut self, id: u64) -> AppResult<bool> {
        // shift_remove keeps the remaining records in insertion order
        Ok(self.products.shift_remove(&id).is_some())
    }

    fn find(&self, id: u64) -> AppResult<Option<Product>> {
        Ok(self.products.get(&id).cloned())
    }
}
