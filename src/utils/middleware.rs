use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// CORS for the API. Also answers the OPTIONS preflight for every route.
pub fn cors_layer() -> CorsLayer {
    let allowed_env = std::env::var("ALLOWED_ORIGINS").unwrap_or_default();
    cors_layer_from(&allowed_env)
}

fn cors_layer_from(allowed: &str) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allow_origin(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// `*` anywhere in the list allows every origin; tower-http refuses a wildcard inside a list.
fn allow_origin(allowed: &str) -> AllowOrigin {
    if allowed.split(',').any(|o| o.trim() == "*") {
        return AllowOrigin::any();
    }

    let origins = parse_origins(allowed);
    if origins.is_empty() {
        AllowOrigin::list([
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("http://127.0.0.1:5173"),
        ])
    } else {
        AllowOrigin::list(origins)
    }
}

fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .filter_map(|o| {
            let trimmed = o.trim();
            if trimmed.is_empty() {
                None
            } else {
                HeaderValue::from_str(trimmed).ok()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    async fn preflight(allowed: &str, origin: &str) -> Option<HeaderValue> {
        let app = Router::new()
            .route("/api/stock", get(|| async { "ok" }))
            .layer(cors_layer_from(allowed));
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/stock")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .cloned()
    }

    #[test]
    fn parses_comma_separated_origins() {
        let origins = parse_origins(" https://a.example , ,https://b.example");
        assert_eq!(
            origins,
            vec![
                HeaderValue::from_static("https://a.example"),
                HeaderValue::from_static("https://b.example"),
            ]
        );
        assert!(parse_origins("").is_empty());
    }

    #[tokio::test]
    async fn wildcard_allows_any_origin() {
        for allowed in ["*", " * ", "https://a.example,*"] {
            let allow = preflight(allowed, "https://anywhere.example").await;
            assert_eq!(allow, Some(HeaderValue::from_static("*")), "{allowed}");
        }
    }

    #[tokio::test]
    async fn listed_origins_only() {
        let allow = preflight("https://a.example", "https://a.example").await;
        assert_eq!(allow, Some(HeaderValue::from_static("https://a.example")));

        let allow = preflight("https://a.example", "https://b.example").await;
        assert_eq!(allow, None);

        let allow = preflight("", "http://localhost:5173").await;
        assert_eq!(allow, Some(HeaderValue::from_static("http://localhost:5173")));
    }
}
