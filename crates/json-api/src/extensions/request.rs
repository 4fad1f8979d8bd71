//! Path, query, and body decoding for product routes.

use salvo::Request;
use serde::de::DeserializeOwned;

use inventory_app::domain::products::{data::ListWindow, records::ProductId};

use crate::errors::ApiError;

/// Name of the positional path parameter carrying a product id.
pub(crate) const PRODUCT_ID_PARAM: &str = "id";

pub(crate) trait RequestExt {
    /// Parse the `{id}` path segment as an integer product id.
    fn product_id(&self) -> Result<ProductId, ApiError>;

    /// Read `count` and `start` query values; unparseable values are ignored.
    fn list_window(&self) -> ListWindow;
}

impl RequestExt for Request {
    fn product_id(&self) -> Result<ProductId, ApiError> {
        let raw = self
            .params()
            .get(PRODUCT_ID_PARAM)
            .map(String::as_str)
            .unwrap_or_default();

        raw.parse()
            .map_err(|_not_an_integer| ApiError::InvalidId(raw.to_owned()))
    }

    fn list_window(&self) -> ListWindow {
        let query_i64 = |key: &str| {
            self.queries()
                .get(key)
                .and_then(|value| value.trim().parse::<i64>().ok())
        };

        ListWindow::new(query_i64("count"), query_i64("start"))
    }
}

/// Decode the request body as JSON, whatever its declared content type.
pub(crate) async fn json_body<T>(req: &mut Request) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let payload = req
        .payload()
        .await
        .map_err(|error| ApiError::InvalidBody(error.to_string()))?;

    serde_json::from_slice(payload).map_err(|error| ApiError::InvalidBody(error.to_string()))
}
