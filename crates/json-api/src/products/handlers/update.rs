//! Update Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use inventory_app::domain::products::data::ProductUpdate;

use crate::{
    errors::ApiError, extensions::*, products::ProductResponse, response::JsonResponse,
    state::State,
};

/// Update Product Request
///
/// All three fields are overwritten; the id comes from the path only.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct UpdateProductRequest {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            quantity: request.quantity,
            price: request.price,
        }
    }
}

/// Product Update Handler
#[handler]
#[tracing::instrument(
    name = "products.update",
    skip(req, depot),
    fields(product_id = tracing::field::Empty, quantity = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<JsonResponse<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = req.product_id()?;
    let request: UpdateProductRequest = json_body(req).await?;

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(product));
    span.record("quantity", request.quantity);

    let updated = state
        .app
        .products
        .update_product(product, request.into())
        .await?;

    tracing::info!(product_id = %product, "updated product");

    Ok(JsonResponse::ok(updated.into()))
}
