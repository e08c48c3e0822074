// External paths
use serde::Deserialize;

/// One transaction from the sales record. Input field names are
/// capitalized and matched case sensitively; extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct Sale {
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
}
