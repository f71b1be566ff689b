//! Function-style entry point: one call per event, `{ "action", "data" }` in,
//! a `{ "status", ... }` envelope out. Errors never escape; they become
//! `status: "error"` envelopes carrying the error's message.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::{AppError, AppResult};
use crate::models::Product;

#[derive(Debug, Default, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope {
    Success(Payload),
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Product { product: Product },
    Products { products: Vec<Product> },
    Deleted { deleted: bool },
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<AppResult<Payload>> for Envelope {
    fn from(result: AppResult<Payload>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(e) => {
                if matches!(e, AppError::Io(_) | AppError::Json(_)) {
                    warn!(error = %e, "Store failure while handling event");
                }
                Self::Error {
                    message: e.to_string(),
                }
            }
        }
    }
}

/// Decode a raw event value. Anything that is not an event object dispatches
/// as an event without an action.
pub fn handle_value(catalog: &mut Catalog, raw: Value) -> Envelope {
    let event = serde_json::from_value(raw).unwrap_or_default();
    handle(catalog, event)
}

pub fn handle(catalog: &mut Catalog, event: Event) -> Envelope {
    debug!(action = ?event.action, "Handling event");
    dispatch(catalog, event).into()
}

fn dispatch(catalog: &mut Catalog, event: Event) -> AppResult<Payload> {
    let data = event.data.as_ref().and_then(Value::as_object);

    match event.action.as_deref() {
        Some("add") => {
            let data = data
                .filter(|d| !d.is_empty())
                .ok_or(AppError::MissingInput("Product data is required to add a product"))?;
            let product = catalog.add(data)?;
            Ok(Payload::Product { product })
        }
        Some("update") => {
            let (data, id) = data
                .and_then(|d| d.get("id").map(|id| (d, id)))
                .ok_or(AppError::MissingInput("Product ID and data are required for update"))?;
            let product = catalog.update(record_id(id)?, data)?;
            Ok(Payload::Product { product })
        }
        Some("delete") => {
            let id = data
                .and_then(|d| d.get("id"))
                .ok_or(AppError::MissingInput("Product ID is required for delete"))?;
            catalog.delete(record_id(id)?)?;
            Ok(Payload::Deleted { deleted: true })
        }
        Some("list") => Ok(Payload::Products {
            products: catalog.list()?,
        }),
        Some("list_by_category") => {
            let category = data
                .and_then(|d| d.get("category"))
                .ok_or(AppError::MissingInput("Category is required to filter products"))?;
            let products = match category.as_str() {
                Some(c) => catalog.list_by_category(c)?,
                // a non-string can never equal a stored category
                None => return Err(AppError::CategoryEmpty(display_raw(category))),
            };
            Ok(Payload::Products { products })
        }
        _ => Err(AppError::InvalidAction),
    }
}

/// Ids are non-negative whole numbers; `1.0` names the same record as `1`.
/// Any other value matches no record.
fn record_id(value: &Value) -> AppResult<u64> {
    value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        })
        .ok_or_else(|| AppError::not_found(display_raw(value)))
}

fn display_raw(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
