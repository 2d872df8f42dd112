use axum::http::{header, HeaderValue, Method};
use std::env;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Origins allowed to call the API with credentials. Empty means the
/// request's own origin is echoed back.
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::from_list(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref())
    }

    pub fn from_list(raw: Option<&str>) -> Self {
        let allowed_origins = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();
        Self { allowed_origins }
    }

    pub fn create_layer(&self) -> CorsLayer {
        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(v) => Some(v),
                Err(_) => {
                    tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();

        let allow_origin = if origins.is_empty() {
            AllowOrigin::mirror_request()
        } else {
            AllowOrigin::list(origins)
        };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origin_list() {
        let config =
            CorsConfig::from_list(Some(" http://localhost:3000, https://app.example.com ,"));
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "https://app.example.com"]
        );
    }

    #[test]
    fn test_parse_missing_list() {
        assert!(CorsConfig::from_list(None).allowed_origins.is_empty());
    }
}
