//! Delete Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, response::JsonResponse, state::State};

/// Outcome marker written after a delete.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct DeleteResponse {
    pub result: String,
}

/// Delete Product Handler
///
/// Succeeds whether or not the product existed.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<JsonResponse<DeleteResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = req.product_id()?;

    state.app.products.delete_product(product).await?;

    Ok(JsonResponse::ok(DeleteResponse {
        result: "success".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use inventory_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductId,
    };

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("product/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_product_success() -> TestResult {
        let id = ProductId::from_i64(1);

        let mut repo = MockProductsService::new();

        repo.expect_delete_product()
            .once()
            .withf(move |requested| *requested == id)
            .return_once(|_| Ok(()));

        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_list_products().never();
        repo.expect_update_product().never();

        let mut res = TestClient::delete("http://example.com/product/1")
            .send(&make_service(repo))
            .await;

        let body: DeleteResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.result, "success");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_twice_succeeds_both_times() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_delete_product().times(2).returning(|_| Ok(()));

        let service = make_service(repo);

        for _ in 0..2 {
            let res = TestClient::delete("http://example.com/product/5")
                .send(&service)
                .await;

            assert_eq!(res.status_code, Some(StatusCode::OK));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_invalid_id_returns_400() -> TestResult {
        let res = TestClient::delete("http://example.com/product/one")
            .send(&make_service(MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_storage_error_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_delete_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::delete("http://example.com/product/1")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
