use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::{validate_product, Product};
use crate::store::ProductStore;

/// Fields a partial update may overwrite.
const EDITABLE_FIELDS: [&str; 3] = ["name", "price", "category"];

/// Catalog operations over an injected store. Both transports go through here,
/// so validation and id assignment behave the same on either entry point.
pub struct Catalog {
    store: Box<dyn ProductStore>,
}

impl Catalog {
    pub fn new(store: impl ProductStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    pub fn add(&mut self, fields: &Map<String, Value>) -> AppResult<Product> {
        let draft = validate_product(fields)?;
        let product = self.store.insert(draft)?;
        info!(id = product.id, name = %product.name, "Created product");
        Ok(product)
    }

    /// Full update: all three fields must be supplied and valid.
    pub fn update(&mut self, id: u64, fields: &Map<String, Value>) -> AppResult<Product> {
        let mut product = self.get(id)?;
        product.apply(validate_product(fields)?);
        self.store_replacement(product)
    }

    /// Partial update: supplied fields are laid over the stored record and the
    /// merged result must still pass validation.
    pub fn patch(&mut self, id: u64, partial: &Map<String, Value>) -> AppResult<Product> {
        let mut product = self.get(id)?;
        let mut merged = product.to_fields();
        for key in EDITABLE_FIELDS {
            if let Some(value) = partial.get(key) {
                merged.insert(key.to_string(), value.clone());
            }
        }
        product.apply(validate_product(&merged)?);
        self.store_replacement(product)
    }

    pub fn delete(&mut self, id: u64) -> AppResult<()> {
        if !self.store.remove(id)? {
            return Err(AppError::not_found(id));
        }
        info!(id, "Deleted product");
        Ok(())
    }

    /// All records. An empty catalog is reported as an error, not an empty list.
    pub fn list(&self) -> AppResult<Vec<Product>> {
        let products = self.store.products()?;
        if products.is_empty() {
            return Err(AppError::NoProducts);
        }
        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Exact, case-sensitive category match.
    pub fn list_by_category(&self, category: &str) -> AppResult<Vec<Product>> {
        let products: Vec<Product> = self
            .store
            .products()?
            .into_iter()
            .filter(|p| p.category == category)
            .collect();
        if products.is_empty() {
            return Err(AppError::CategoryEmpty(category.to_string()));
        }
        debug!(category, count = products.len(), "Listed products by category");
        Ok(products)
    }

    /// Every record keyed by id, empty or not.
    pub fn snapshot(&self) -> AppResult<IndexMap<u64, Product>> {
        Ok(self
            .store
            .products()?
            .into_iter()
            .map(|p| (p.id, p))
            .collect())
    }

    pub fn get(&self, id: u64) -> AppResult<Product> {
        self.store.find(id)?.ok_or_else(|| AppError::not_found(id))
    }

    fn store_replacement(&mut self, product: Product) -> AppResult<Product> {
        if !self.store.replace(product.clone())? {
            // removed between lookup and write
            return Err(AppError::not_found(product.id));
        }
        info!(id = product.id, "Updated product");
        Ok(product)
    }
}
