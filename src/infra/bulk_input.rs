//! Input gate for the calculator: the core never rejects prices, so
//! everything arriving from users is checked here first.

use std::{fs, io, path::Path};

use thiserror::Error;
use tracing::warn;

use crate::domain::ProductRecord;

#[derive(Debug, Error)]
pub enum BulkInputError {
    #[error("failed to read product list: {0}")]
    Io(#[from] io::Error),
    #[error("invalid product list format, expected a JSON array of products: {0}")]
    Format(#[from] serde_json::Error),
    #[error("product {index}: {source}")]
    Product {
        index: usize,
        #[source]
        source: InvalidPrice,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("supplier price must be a positive number, got {0}")]
pub struct InvalidPrice(pub f64);

pub fn validate_supplier_price(price: f64) -> Result<f64, InvalidPrice> {
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        Err(InvalidPrice(price))
    }
}

/// Parses a JSON array of product records and checks every supplier price.
/// Indices in errors are 1-based, matching what a user sees in the list.
pub fn parse_products(json: &str) -> Result<Vec<ProductRecord>, BulkInputError> {
    let products: Vec<ProductRecord> = serde_json::from_str(json)?;

    for (index, product) in products.iter().enumerate() {
        validate_supplier_price(product.supplier_price).map_err(|source| {
            warn!(index = index + 1, price = product.supplier_price, "rejected product");
            BulkInputError::Product {
                index: index + 1,
                source,
            }
        })?;
    }

    Ok(products)
}

/// Reads products from `path`, or from stdin when `path` is `-`.
pub fn read_products(path: &Path) -> Result<Vec<ProductRecord>, BulkInputError> {
    let data = if path == Path::new("-") {
        io::read_to_string(io::stdin())?
    } else {
        fs::read_to_string(path)?
    };
    parse_products(&data)
}
