use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Catalog entry. `id` is assigned by the store and never supplied by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub category: String,
}

/// A validated product that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl NewProduct {
    pub fn with_id(self, id: u64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
        }
    }
}

impl Product {
    /// Overwrite the editable fields, keeping the id.
    pub fn apply(&mut self, fields: NewProduct) {
        self.name = fields.name;
        self.price = fields.price;
        self.category = fields.category;
    }

    /// The editable fields as a loose JSON object, the shape the validator reads.
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::from(self.name.clone()));
        fields.insert("price".to_string(), Value::from(self.price));
        fields.insert("category".to_string(), Value::from(self.category.clone()));
        fields
    }
}
