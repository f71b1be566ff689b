use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::models::NewProduct;

pub const NAME_REQUIRED: &str = "Product name is required and must be a non-empty string.";
pub const PRICE_REQUIRED: &str = "Price is required and must be a non-negative number.";
pub const CATEGORY_REQUIRED: &str = "Category is required and must be a non-empty string.";

/// Check a candidate record and turn it into a [`NewProduct`].
///
/// Constraints are checked in order (name, price, category) and the first
/// failure is reported. Unknown fields are ignored.
pub fn validate_product(fields: &Map<String, Value>) -> AppResult<NewProduct> {
    let name = non_empty_str(fields.get("name"))
        .ok_or_else(|| AppError::Validation(NAME_REQUIRED.to_string()))?;

    let price = fields
        .get("price")
        .and_then(Value::as_f64)
        .filter(|p| *p >= 0.0)
        .ok_or_else(|| AppError::Validation(PRICE_REQUIRED.to_string()))?;

    let category = non_empty_str(fields.get("category"))
        .ok_or_else(|| AppError::Validation(CATEGORY_REQUIRED.to_string()))?;

    Ok(NewProduct {
        name: name.to_string(),
        price,
        category: category.to_string(),
    })
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}
