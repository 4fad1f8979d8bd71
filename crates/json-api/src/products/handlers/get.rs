//! Get Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError, extensions::*, products::ProductResponse, response::JsonResponse,
    state::State,
};

/// Get Product Handler
///
/// Returns a product.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<JsonResponse<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = req.product_id()?;

    let product = state.app.products.get_product(product).await?;

    Ok(JsonResponse::ok(product.into()))
}
