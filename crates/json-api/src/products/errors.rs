//! Product Errors

use tracing::error;

use inventory_app::domain::products::ProductsServiceError;

use crate::errors::ApiError;

impl From<ProductsServiceError> for ApiError {
    fn from(error: ProductsServiceError) -> Self {
        match error {
            ProductsServiceError::NotFound => ApiError::NotFound,
            ProductsServiceError::Sql(source) => {
                error!("product storage failure: {source}");

                ApiError::Internal
            }
        }
    }
}
