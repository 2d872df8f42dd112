use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize)]
pub struct EchoResponse {
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct EchoBody {
    #[serde(default)]
    pub param: Value,
}

#[derive(Debug, Default, Deserialize)]
pub struct Echo2Body {
    #[serde(default)]
    pub body: Value,
}

#[derive(Debug, Default, Deserialize)]
pub struct Echo2Query {
    #[serde(default)]
    pub param: String,
}

/// Strings are shown bare, absent values as "", anything else as JSON text.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub async fn hello_handler() -> Json<EchoResponse> {
    Json(EchoResponse {
        message: "Hello from salesboard!".to_string(),
    })
}

pub async fn echo_handler(Json(body): Json<EchoBody>) -> Json<EchoResponse> {
    Json(EchoResponse {
        message: format!("Parameter is {}", display_value(&body.param)),
    })
}

pub async fn echo2_handler(
    Query(query): Query<Echo2Query>,
    Json(body): Json<Echo2Body>,
) -> Json<EchoResponse> {
    Json(EchoResponse {
        message: format!(
            "Body parameter is {}, query parameter is {}",
            display_value(&body.body),
            query.param
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&Value::Null), "");
        assert_eq!(display_value(&json!("abc")), "abc");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!([1, 2])), "[1,2]");
    }

    #[tokio::test]
    async fn test_echo_defaults_missing_param() {
        let Json(resp) = echo_handler(Json(EchoBody::default())).await;
        assert_eq!(resp.message, "Parameter is ");
    }

    #[tokio::test]
    async fn test_echo2_combines_body_and_query() {
        let Json(resp) = echo2_handler(
            Query(Echo2Query {
                param: "q".to_string(),
            }),
            Json(Echo2Body { body: json!("b") }),
        )
        .await;
        assert_eq!(resp.message, "Body parameter is b, query parameter is q");
    }
}
