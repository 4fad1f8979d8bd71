//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};
use serde::{Deserialize, Serialize};

use inventory_app::domain::products::data::NewProduct;

use crate::{
    errors::ApiError, extensions::*, products::ProductResponse, response::JsonResponse,
    state::State,
};

/// Create Product Request
///
/// The id is always assigned by the store, so an `id` field is rejected.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CreateProductRequest {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            name: request.name,
            quantity: request.quantity,
            price: request.price,
        }
    }
}

/// Create Product Handler
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<JsonResponse<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request: CreateProductRequest = json_body(req).await?;

    let product = state.app.products.create_product(request.into()).await?;

    res.add_header(LOCATION, format!("/product/{}", product.id), true)
        .or_500("failed to set location header")?;

    tracing::info!(product_id = %product.id, "created product");

    Ok(JsonResponse::created(product.into()))
}
