// External paths
use serde_json::Value;

// Crate paths
use self::error::EngineError;
use crate::api::catalogue::PriceIndex;
use crate::api::sales::Sale;

// Crate modules
pub mod error;

pub struct Engine {
    prices: PriceIndex,
    total: f64,
}

impl Engine {
    pub fn new(prices: PriceIndex) -> Self {
        Engine { prices, total: 0.0 }
    }

    /// Applies one sales record to the running total. The record must
    /// carry both fields before the catalogue lookup happens, so a
    /// record without a quantity never reports a missing product.
    /// Quantities are not validated, a negative one lowers the total.
    pub fn charge(&mut self, record: Value) -> Result<(), EngineError> {
        let sale: Sale = serde_json::from_value(record)
            .map_err(|err| EngineError::CannotDeserializeRecord(err))?;

        let price = match self.prices.price_of(&sale.product) {
            Some(price) => price,
            None => return Err(EngineError::ProductNotFound(sale.product)),
        };

        self.total += price * sale.quantity;

        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}
