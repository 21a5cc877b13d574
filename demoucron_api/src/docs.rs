use std::sync::Arc;

use aide::{
    axum::{ApiRouter, IntoApiResponse, routing::get},
    openapi::OpenApi,
    scalar::Scalar,
    swagger::Swagger,
};
use axum::{Extension, Json, response::IntoResponse};

pub const API_TITLE: &str = "Demoucron API";

const OPENAPI_JSON: &str = "/docs/private/api.json";

/// Scalar under `/docs`, Swagger UI under `/docs/swagger` and the generated
/// document itself. The pages are left out of the document.
pub fn docs_routes() -> ApiRouter {
    ApiRouter::new()
        .route(
            "/",
            get(Scalar::new(OPENAPI_JSON).with_title(API_TITLE).axum_handler()),
        )
        .route(
            "/swagger",
            get(Swagger::new(OPENAPI_JSON).with_title(API_TITLE).axum_handler()),
        )
        .route("/private/api.json", get(serve_openapi))
}

async fn serve_openapi(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api).into_response()
}

#[cfg(test)]
mod tests {
    use aide::transform::TransformOpenApi;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        let mut api = OpenApi::default();
        let router: Router = ApiRouter::new()
            .nest_api_service("/docs", docs_routes())
            .finish_api_with(&mut api, |api: TransformOpenApi| api.title(API_TITLE));

        router.layer(Extension(Arc::new(api)))
    }

    async fn get_page(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let (status, body) = get_page(OPENAPI_JSON).await;
        let document: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(document["info"]["title"], API_TITLE);
        assert!(document["paths"].get("/docs/swagger").is_none());
    }

    #[tokio::test]
    async fn test_swagger_page_points_at_the_document() {
        let (status, body) = get_page("/docs/swagger").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(OPENAPI_JSON));
    }
}
