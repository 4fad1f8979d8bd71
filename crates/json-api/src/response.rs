//! JSON response writer

use salvo::{
    Response,
    http::StatusCode,
    writing::{Json, Scribe},
};
use serde::Serialize;

/// Set the status code and write `body` as a JSON document.
///
/// Handlers write each response exactly once, either directly or by
/// returning a [`JsonResponse`].
pub(crate) fn respond_json<T>(res: &mut Response, status: StatusCode, body: T)
where
    T: Serialize + Send,
{
    res.status_code(status);
    res.render(Json(body));
}

/// A serializable body paired with the status it should be written with.
#[derive(Debug)]
pub(crate) struct JsonResponse<T> {
    status: StatusCode,
    body: T,
}

impl<T> JsonResponse<T> {
    pub(crate) fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub(crate) fn created(body: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            body,
        }
    }
}

impl<T> Scribe for JsonResponse<T>
where
    T: Serialize + Send,
{
    fn render(self, res: &mut Response) {
        respond_json(res, self.status, self.body);
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::CONTENT_TYPE,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn accepted(res: &mut Response) {
        respond_json(res, StatusCode::ACCEPTED, json!({ "result": "queued" }));
    }

    #[handler]
    async fn created() -> JsonResponse<Value> {
        JsonResponse::created(json!({ "id": 1 }))
    }

    #[tokio::test]
    async fn test_respond_json_sets_status_content_type_and_body() -> TestResult {
        let service = Service::new(Router::with_path("accepted").get(accepted));

        let mut res = TestClient::get("http://example.com/accepted")
            .send(&service)
            .await;

        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::ACCEPTED));
        assert!(
            content_type.is_some_and(|value| value.starts_with("application/json")),
            "expected a JSON content type"
        );
        assert_eq!(body, json!({ "result": "queued" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_json_response_renders_with_its_status() -> TestResult {
        let service = Service::new(Router::with_path("created").post(created));

        let mut res = TestClient::post("http://example.com/created")
            .send(&service)
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body, json!({ "id": 1 }));

        Ok(())
    }
}
