use std::sync::Arc;

use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::error::AppError;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::wilayah::{routes as wilayah_routes, WilayahService};
use crate::shared::constants::ROUTE_NOT_FOUND_DETAIL;

/// Build the full application router around an already-initialised service.
pub fn build_app(
    service: Arc<WilayahService>,
    app_config: &AppConfig,
    swagger_config: &SwaggerConfig,
) -> Router {
    Router::new()
        .merge(docs_router(swagger_config))
        .merge(wilayah_routes::routes(service))
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(middleware::cors_layer(
                    app_config.cors_allowed_origins.clone(),
                )),
        )
}

/// Swagger UI at `/docs`, document at `/openapi.json`.
fn docs_router(config: &SwaggerConfig) -> Router {
    let mut openapi = ApiDoc::openapi();
    SwaggerInfoModifier {
        title: config.title.clone(),
        version: config.version.clone(),
        description: config.description.clone(),
    }
    .modify(&mut openapi);

    let docs = Router::new().merge(SwaggerUi::new("/docs").url("/openapi.json", openapi));

    match config.credentials() {
        Some(credentials) => {
            tracing::info!("API docs basic auth enabled");
            docs.layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
        }
        None => {
            tracing::info!("API docs basic auth disabled (no credentials configured)");
            docs
        }
    }
}

async fn route_not_found() -> AppError {
    AppError::NotFound(ROUTE_NOT_FOUND_DETAIL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::wilayah::models::Wilayah;
    use crate::shared::constants::NOT_FOUND_MESSAGE;
    use crate::shared::test_helpers::{
        sample_wilayah, InMemoryWilayahRepository, UnreachableWilayahRepository,
        UNREACHABLE_DETAIL,
    };
    use crate::shared::types::ErrorBody;
    use axum::http::{header, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use base64::prelude::*;

    fn app_config() -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }

    fn swagger_config(username: Option<&str>, password: Option<&str>) -> SwaggerConfig {
        SwaggerConfig {
            username: username.map(str::to_string),
            password: password.map(str::to_string),
            title: "Kode Wilayah API".to_string(),
            version: "test".to_string(),
            description: "test".to_string(),
        }
    }

    fn server_with(records: Vec<Wilayah>) -> TestServer {
        let service = Arc::new(WilayahService::new(Arc::new(
            InMemoryWilayahRepository::new(records),
        )));
        TestServer::new(build_app(service, &app_config(), &swagger_config(None, None))).unwrap()
    }

    fn sample_server() -> TestServer {
        server_with(sample_wilayah())
    }

    fn unreachable_server() -> TestServer {
        let service = Arc::new(WilayahService::new(Arc::new(UnreachableWilayahRepository)));
        TestServer::new(build_app(service, &app_config(), &swagger_config(None, None))).unwrap()
    }

    #[tokio::test]
    async fn test_index_lists_routes() {
        let server = sample_server();
        let response = server.get("/").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(
            body["/{nama_wilayah}"],
            "mendapatkan kode wilayah (Kecamatan & Desa)"
        );
        assert_eq!(
            body["/adm2/{nama_wilayah}"],
            "mendapatkan kode wilayah (Provinsi & Kabupaten)"
        );
        assert_eq!(
            body["/kode/{kode_wilayah}"],
            "mendapatkan nama wilayah (Kecamatan & Desa)"
        );
    }

    #[tokio::test]
    async fn test_adm2_lookup_ignores_case() {
        let server = sample_server();

        for path in ["/adm2/jawa%20tengah", "/adm2/Jawa%20Tengah", "/adm2/JAWA%20TENGAH"] {
            let response = server.get(path).await;
            response.assert_status_ok();
            assert_eq!(response.json::<String>(), "33", "path: {}", path);
        }
    }

    #[tokio::test]
    async fn test_name_lookup() {
        let server = sample_server();

        let response = server.get("/Example%20Subdistrict").await;
        response.assert_status_ok();
        assert_eq!(response.json::<String>(), "33.01.01");

        let response = server.get("/Nonexistent").await;
        response.assert_status_ok();
        assert_eq!(response.json::<String>(), NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn test_name_lookup_is_case_sensitive_over_http() {
        let server = sample_server();

        let response = server.get("/example%20subdistrict").await;
        response.assert_status_ok();
        assert_eq!(response.json::<String>(), NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn test_code_lookup() {
        let server = sample_server();

        let response = server.get("/kode/33").await;
        response.assert_status_ok();
        assert_eq!(response.json::<String>(), "JAWA TENGAH");

        let response = server.get("/kode/99999").await;
        response.assert_status_ok();
        assert_eq!(response.json::<String>(), NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn test_repeated_requests_are_identical() {
        let server = sample_server();

        let first = server.get("/kode/33.01").await.text();
        let second = server.get("/kode/33.01").await.text();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unreachable_backend_returns_500() {
        let server = unreachable_server();

        for path in ["/Sukamaju", "/adm2/jawa%20tengah", "/kode/33"] {
            let response = server.get(path).expect_failure().await;
            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

            let body: ErrorBody = response.json();
            assert!(!body.detail.is_empty(), "path: {}", path);
            assert!(body.detail.contains(UNREACHABLE_DETAIL), "path: {}", path);
        }
    }

    #[tokio::test]
    async fn test_health_check_skips_database() {
        let server = unreachable_server();
        server.get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let server = sample_server();

        let response = server.get("/kode/33/extra").expect_failure().await;
        response.assert_status_not_found();
        assert_eq!(response.json::<ErrorBody>().detail, ROUTE_NOT_FOUND_DETAIL);
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let server = sample_server();

        let response = server.get("/kode/33").await;
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let server = sample_server();

        let response = server.get("/openapi.json").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["info"]["title"], "Kode Wilayah API");
    }

    #[tokio::test]
    async fn test_docs_basic_auth() {
        let service = Arc::new(WilayahService::new(Arc::new(
            InMemoryWilayahRepository::new(sample_wilayah()),
        )));
        let server = TestServer::new(build_app(
            service,
            &app_config(),
            &swagger_config(Some("admin"), Some("secret")),
        ))
        .unwrap();

        server
            .get("/openapi.json")
            .expect_failure()
            .await
            .assert_status_unauthorized();

        let authorization = format!("Basic {}", BASE64_STANDARD.encode("admin:secret"));
        server
            .get("/openapi.json")
            .add_header(
                header::AUTHORIZATION,
                HeaderValue::from_str(&authorization).unwrap(),
            )
            .await
            .assert_status_ok();

        // Lookups stay public
        server.get("/kode/33").await.assert_status_ok();
    }
}
