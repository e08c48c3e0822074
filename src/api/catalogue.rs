// Standard paths
use std::collections::HashMap;

// External paths
use serde::Deserialize;
use serde_json::Value;

// Crate paths
use self::error::CatalogueError;

// Crate modules
pub mod error;

#[derive(Debug, Deserialize)]
pub struct PriceEntry {
    pub title: String,
    pub price: f64,
}

/// Prices rekeyed by product title for the engine lookups.
pub struct PriceIndex {
    prices: HashMap<String, f64>,
}

impl PriceIndex {
    pub fn new() -> Self {
        PriceIndex {
            prices: HashMap::new(),
        }
    }

    /// Indexes one catalogue entry. A title seen before is silently
    /// overwritten, the last occurrence in the catalogue wins.
    pub fn add(&mut self, entry: Value) -> Result<(), CatalogueError> {
        let entry: PriceEntry = serde_json::from_value(entry)
            .map_err(|err| CatalogueError::CannotDeserializeEntry(err))?;

        self.prices.insert(entry.title, entry.price);

        Ok(())
    }

    pub fn price_of(&self, title: &str) -> Option<f64> {
        self.prices.get(title).copied()
    }
}
