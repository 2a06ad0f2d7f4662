use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit, http::StatusCode, middleware::from_fn, routing::get, Router,
};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::context::AppContext;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::captains::routes as captains_routes;
use crate::features::users::routes as users_routes;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Build the full application router from the shared context
pub fn build_router(ctx: &AppContext) -> Router {
    let config = &ctx.config;

    let mut openapi = ApiDoc::openapi();
    SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    }
    .modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    let health_route = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(swagger)
        .merge(captains_routes::routes(Arc::clone(&ctx.captain_service)))
        .merge(users_routes::routes(Arc::clone(&ctx.user_service)))
        .merge(health_route)
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(&config.app.cors_allowed_origins))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{test_config, test_context};
    use axum::http::{header, HeaderValue};
    use axum_test::TestServer;
    use base64::prelude::*;
    use serde_json::{json, Value};

    fn server() -> (
        TestServer,
        Arc<crate::shared::test_helpers::InMemoryCaptainRepository>,
    ) {
        let (ctx, captains, _) = test_context(test_config());
        let server = TestServer::new(build_router(&ctx)).expect("test server");
        (server, captains)
    }

    fn sam() -> Value {
        json!({
            "firstname": "Sam",
            "email": "sam@x.com",
            "password": "p1",
            "color": "red",
            "plate": "AB12",
            "capacity": 4,
            "vehicleType": "car"
        })
    }

    #[tokio::test]
    async fn test_health_check() {
        let (server, _) = server();
        server.get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_register_captain_returns_nested_record() {
        let (server, captains) = server();

        let response = server.post("/captains/register").json(&sam()).await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(
            body["data"]["fullname"],
            json!({ "firstname": "Sam", "lastname": "" })
        );
        assert_eq!(
            body["data"]["vehicle"],
            json!({ "color": "red", "plate": "AB12", "capacity": 4, "vehicleType": "car" })
        );
        assert_eq!(body["data"]["email"], "sam@x.com");
        assert!(body["data"]["id"].is_string());
        assert!(body["data"].get("password").is_none());
        assert_eq!(captains.create_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_register_captain_missing_plate_is_rejected() {
        let (server, captains) = server();
        let mut payload = sam();
        payload.as_object_mut().expect("object").remove("plate");

        let response = server.post("/captains/register").json(&payload).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["errors"], json!(["plate: plate is required"]));
        assert!(captains.create_calls().is_empty());
    }

    #[tokio::test]
    async fn test_register_captain_reports_vehicle_type_by_wire_name() {
        let (server, captains) = server();
        let mut payload = sam();
        payload.as_object_mut().expect("object").remove("vehicleType");

        let response = server.post("/captains/register").json(&payload).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid fields");
        assert_eq!(body["errors"], json!(["vehicleType: vehicleType is required"]));
        assert!(captains.create_calls().is_empty());
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let mut config = test_config();
        config.app.max_request_body_size = 256;
        let (ctx, captains, _) = test_context(config);
        let server = TestServer::new(build_router(&ctx)).expect("test server");
        let mut payload = sam();
        payload["password"] = json!("x".repeat(1024));

        let response = server.post("/captains/register").json(&payload).await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(captains.create_calls().is_empty());
    }

    #[tokio::test]
    async fn test_cors_allows_only_configured_origins() {
        let mut config = test_config();
        config.app.cors_allowed_origins = vec!["http://allowed.test".to_string()];
        let (ctx, _, _) = test_context(config);
        let server = TestServer::new(build_router(&ctx)).expect("test server");

        let allowed = server
            .get("/health")
            .add_header(header::ORIGIN, HeaderValue::from_static("http://allowed.test"))
            .await;
        assert_eq!(
            allowed.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://allowed.test"))
        );

        let denied = server
            .get("/health")
            .add_header(header::ORIGIN, HeaderValue::from_static("http://other.test"))
            .await;
        assert!(denied
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_cors_wildcard_allows_any_origin() {
        let (server, _) = server();

        let response = server
            .get("/health")
            .add_header(header::ORIGIN, HeaderValue::from_static("http://anywhere.test"))
            .await;

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );
    }

    #[tokio::test]
    async fn test_register_captain_accepts_form_body() {
        let (server, captains) = server();

        let response = server
            .post("/captains/register")
            .form(&[
                ("firstname", "Sam"),
                ("lastname", "Lee"),
                ("email", "sam@x.com"),
                ("password", "p1"),
                ("color", "red"),
                ("plate", "AB12"),
                ("capacity", "4"),
                ("vehicleType", "car"),
            ])
            .await;

        response.assert_status(StatusCode::CREATED);
        let calls = captains.create_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].fullname.lastname, "Lee");
        assert_eq!(calls[0].vehicle.capacity, 4);
    }

    #[tokio::test]
    async fn test_register_captain_malformed_json() {
        let (server, captains) = server();

        let response = server
            .post("/captains/register")
            .text("{not json")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(captains.create_calls().is_empty());
    }

    #[tokio::test]
    async fn test_get_captain_after_register() {
        let (server, _) = server();
        let created: Value = server.post("/captains/register").json(&sam()).await.json();
        let id = created["data"]["id"].as_str().expect("id");

        let response = server.get(&format!("/captains/{}", id)).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["vehicle"]["plate"], "AB12");
    }

    #[tokio::test]
    async fn test_get_unknown_captain_is_not_found() {
        let (server, _) = server();

        let response = server
            .get(&format!("/captains/{}", uuid::Uuid::now_v7()))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_register_user() {
        let (ctx, _, users) = test_context(test_config());
        let server = TestServer::new(build_router(&ctx)).expect("test server");

        let response = server
            .post("/users/register")
            .json(&json!({ "firstname": "Ana", "email": "ana@x.com", "password": "pw" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["fullname"]["lastname"], "");
        assert_eq!(users.create_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let (server, _) = server();

        let response = server.get("/health").await;

        let request_id = response.header("x-request-id");
        assert!(uuid::Uuid::parse_str(request_id.to_str().expect("ascii")).is_ok());
    }

    #[tokio::test]
    async fn test_swagger_basic_auth() {
        let mut config = test_config();
        config.swagger.username = Some("admin".to_string());
        config.swagger.password = Some("secret".to_string());
        let (ctx, _, _) = test_context(config);
        let server = TestServer::new(build_router(&ctx)).expect("test server");

        server
            .get("/api-docs/openapi.json")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        let credentials = BASE64_STANDARD.encode("admin:secret");
        server
            .get("/api-docs/openapi.json")
            .add_header(
                header::AUTHORIZATION,
                HeaderValue::from_str(&format!("Basic {}", credentials)).expect("header"),
            )
            .await
            .assert_status_ok();
    }
}
