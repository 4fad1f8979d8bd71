//! Test Helpers

use crate::domain::products::data::NewProduct;

pub(crate) fn new_product(name: &str, quantity: i32, price: f64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        quantity,
        price,
    }
}
