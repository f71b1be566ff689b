pub mod product;
pub mod validation;

pub use product::{NewProduct, Product};
pub use validation::validate_product;
