//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::products::{
        data::{ListWindow, NewProduct, ProductUpdate},
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        window: ListWindow,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let products = self
            .repository
            .list_products(self.db.pool(), window)
            .await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        let product = self
            .repository
            .get_product(self.db.pool(), product)
            .await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let created = self
            .repository
            .create_product(self.db.pool(), &product)
            .await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let updated = self
            .repository
            .update_product(self.db.pool(), product, &update)
            .await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        let rows_affected = self
            .repository
            .delete_product(self.db.pool(), product)
            .await?;

        if rows_affected == 0 {
            debug!(product_id = %product, "delete matched no rows");
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves a window of products ordered by id.
    async fn list_products(
        &self,
        window: ListWindow,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Inserts a product and returns it with its assigned id.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Overwrites name, quantity and price of an existing product.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product. Deleting an unknown id succeeds.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}
