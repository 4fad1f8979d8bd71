//! Products Repository

use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::products::{
    data::{ListWindow, NewProduct, ProductUpdate},
    records::{ProductId, ProductRecord},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

/// Single-statement persistence for product rows. Every call runs outside
/// any explicit transaction.
#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        pool: &PgPool,
        window: ListWindow,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(window.count())
            .bind(window.start())
            .fetch_all(pool)
            .await
    }

    /// Fails with [`sqlx::Error::RowNotFound`] when no row has this id.
    pub(crate) async fn get_product(
        &self,
        pool: &PgPool,
        product: ProductId,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_one(pool)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        pool: &PgPool,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(&product.name)
            .bind(product.quantity)
            .bind(product.price)
            .fetch_one(pool)
            .await
    }

    /// Fails with [`sqlx::Error::RowNotFound`] when no row has this id.
    pub(crate) async fn update_product(
        &self,
        pool: &PgPool,
        product: ProductId,
        update: &ProductUpdate,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_i64())
            .bind(&update.name)
            .bind(update.quantity)
            .bind(update.price)
            .fetch_one(pool)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        pool: &PgPool,
        product: ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_i64())
            .execute(pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            quantity: row.try_get("quantity")?,
            price: row.try_get("price")?,
        })
    }
}
