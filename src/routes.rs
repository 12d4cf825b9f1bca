use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    // Graph and browsing subrouters live under /api/v1
    let api_v1 = Router::new()
        .nest("/graphs", crate::api::routes::graph_routes::graph_routes())
        .nest("/hosts", crate::api::routes::host_routes::host_routes())
        .nest("/services", crate::api::routes::service_routes::service_routes())
        .nest("/metrics", crate::api::routes::metric_routes::metric_routes());

    Router::new()
        // Root route
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        // API v1
        .nest("/api/v1", api_v1)

        // Fallback handler for 404
        .fallback(handler_404)
        .layer(CorsLayer::very_permissive())
}

// Handler for root
async fn root() -> &'static str {
    "Server is running!"
}

// Handler for health check
async fn health_check() -> &'static str {
    "OK"
}

// Handler for 404 Not Found
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::app_state::build_app_state_with;
    use crate::domain::graph::group::mock::MockSource;
    use crate::domain::host::service::fake::StaticDirectory;
    use crate::domain::series::model::fixtures::minute_series;

    fn app() -> Router {
        let source = MockSource::default()
            .with("db01", "cpu/user", minute_series(4, 5, &[1.0, 2.0, 3.0]))
            .with("db02", "cpu/user", minute_series(4, 5, &[1.0, 1.0, 1.0]))
            .with("web01", "cpu/user", minute_series(6, 0, &[1.0, 1.0]));
        app_router().with_state(build_app_state_with(Arc::new(source), Arc::new(StaticDirectory::sample())))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_and_fallback() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("OK".into()));

        let (status, _) = send(get("/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn metric_graph_accepts_slashes_in_identifier() {
        let (status, body) = send(get(
            "/api/v1/graphs/db01/cpu/user?start_time=2016-01-01%2004:00:00&end_time=2016-01-01%2005:00:00",
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["lines"][0]["label"], json!("value"));
        assert_eq!(body["data"]["lines"][0]["points"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn malformed_dates_are_bad_requests() {
        let (status, body) = send(get("/api/v1/graphs/db01/cpu/user?start_time=yesterday")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("Invalid start time"));
    }

    #[tokio::test]
    async fn grouped_graph_over_post() {
        let (status, body) = send(post_json(
            "/api/v1/graphs",
            json!({
                "start_time": "2016-01-01 04:00:00",
                "end_time": "2016-01-01 05:00:00",
                "metrics": [
                    { "hostname": "db01", "identifier": "cpu/user", "attributes": { "role": "db" } },
                    { "hostname": "db02", "identifier": "cpu/user", "attributes": { "role": "db" } }
                ],
                "group_by": ["role"]
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        let line = &body["data"]["lines"][0];
        assert_eq!(line["label"], json!(" db value"));
        assert_eq!(line["points"][2][1], json!(4.0));
    }

    #[tokio::test]
    async fn incompatible_group_is_unprocessable() {
        let (status, _) = send(post_json(
            "/api/v1/graphs",
            json!({
                "start_time": "2016-01-01 00:00:00",
                "end_time": "2016-01-01 23:00:00",
                "metrics": [
                    { "hostname": "db01", "identifier": "cpu/user", "attributes": { "role": "x" } },
                    { "hostname": "web01", "identifier": "cpu/user", "attributes": { "role": "x" } }
                ],
                "group_by": ["role"]
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn empty_metric_list_is_rejected() {
        let (status, _) = send(post_json("/api/v1/graphs", json!({ "metrics": [] }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn fetch_failures_are_bad_gateway() {
        let (status, body) = send(get("/api/v1/graphs/mail01/cpu")).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["message"].as_str().unwrap().contains("mail01.cpu"));
    }

    #[tokio::test]
    async fn host_endpoints() {
        let (status, body) = send(get("/api/v1/hosts")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["name"], json!("db01"));

        let (status, body) = send(get("/api/v1/hosts/db01")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], json!("db01"));

        let (status, _) = send(get("/api/v1/hosts/mail01")).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn service_endpoints() {
        let (status, body) = send(get("/api/v1/services")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][1]["services"][1]["name"], json!("sshd"));
        assert_eq!(body["data"][1]["metrics"], json!([]));

        let (status, body) = send(get("/api/v1/services/db01/postgres")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["services"][0]["name"], json!("postgres"));

        let (status, _) = send(get("/api/v1/services/db01/nginx")).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn metric_endpoints_accept_slashes_in_names() {
        let (status, body) = send(get("/api/v1/metrics")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["metrics"].as_array().unwrap().len(), 2);

        let (status, body) = send(get("/api/v1/metrics/db01/cpu/user")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], json!("db01"));
        assert_eq!(body["data"]["metrics"][0]["name"], json!("cpu/user"));
        assert_eq!(body["data"]["services"], json!([]));
    }
}
