//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use inventory_app::{
    context::AppContext,
    domain::products::{
        MockProductsService,
        records::{ProductId, ProductRecord},
    },
};

use crate::{errors, state::State};

pub(crate) fn make_product(id: ProductId) -> ProductRecord {
    ProductRecord {
        id,
        name: "keyboard".to_string(),
        quantity: 100,
        price: 500.0,
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(products)))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
    .catcher(errors::catcher())
}
