//! Products service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = ProductsServiceError::from(Error::RowNotFound);

        assert!(
            matches!(error, ProductsServiceError::NotFound),
            "expected NotFound, got {error:?}"
        );
    }

    #[test]
    fn other_driver_errors_map_to_sql() {
        let error = ProductsServiceError::from(Error::PoolTimedOut);

        assert!(
            matches!(error, ProductsServiceError::Sql(Error::PoolTimedOut)),
            "expected Sql, got {error:?}"
        );
    }
}
