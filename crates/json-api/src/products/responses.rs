//! Product Responses

use serde::{Deserialize, Serialize};

use inventory_app::domain::products::records::ProductRecord;

/// Product as written to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ProductResponse {
    /// Store-assigned identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Units in stock
    pub quantity: i32,

    /// Unit price
    pub price: f64,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_i64(),
            name: product.name,
            quantity: product.quantity,
            price: product.price,
        }
    }
}
