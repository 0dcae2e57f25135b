//! Catalog types and JSON loading.

use std::path::Path;

use serde::{Deserialize, Serialize};
use styleloop_core::{Error, Result};

/// A purchasable product with descriptive tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Display price, kept as a string ("899.99 TL" style).
    pub price: String,
    /// Image path served by the storefront.
    pub image: String,
    #[serde(default)]
    pub style_tags: Vec<String>,
    #[serde(default)]
    pub color_tags: Vec<String>,
}

/// The static product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog from a JSON file (an array of products).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            Error::Catalog(format!("cannot read {}: {}", path.display(), e))
        })?;
        let products: Vec<Product> = serde_json::from_str(&data).map_err(|e| {
            Error::Catalog(format!("cannot parse {}: {}", path.display(), e))
        })?;
        Ok(Self { products })
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
