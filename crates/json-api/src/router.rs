//! App Router

use salvo::Router;

use crate::products;

/// Product routes. Each method and pattern pair is registered once; anything
/// else falls through to the default not-found response.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("products").get(products::index::handler))
        .push(
            Router::with_path("product")
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
}
