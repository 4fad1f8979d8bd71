//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError, extensions::*, products::ProductResponse, response::JsonResponse,
    state::State,
};

/// Product Index Handler
///
/// Returns up to `count` products starting at offset `start`, ordered by id.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<JsonResponse<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let window = req.list_window();

    let products = state.app.products.list_products(window).await?;

    Ok(JsonResponse::ok(
        products.into_iter().map(Into::into).collect(),
    ))
}
