//! Success-response bodies shared by all entity handlers.

use axum::{http::StatusCode, Json};
use serde_json::{Map, Value};

/// 201 with the freshly assigned row id under an entity-specific key
/// (e.g. `"projectId"`).
pub fn created(message: &str, id_key: &str, id: u64) -> (StatusCode, Json<Value>) {
    let mut body = Map::new();
    body.insert("message".into(), Value::String(message.to_string()));
    body.insert(id_key.to_string(), Value::Number(id.into()));
    (StatusCode::CREATED, Json(Value::Object(body)))
}

/// 200 acknowledgment for updates and deletes.
pub fn ack(message: &str) -> Json<Value> {
    Json(serde_json::json!({ "message": message }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_carries_id_under_given_key() {
        let (status, Json(body)) = created("Project created", "projectId", 42);
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Project created");
        assert_eq!(body["projectId"], 42);
    }

    #[test]
    fn ack_is_a_bare_message() {
        let Json(body) = ack("Panel deleted");
        assert_eq!(body, serde_json::json!({ "message": "Panel deleted" }));
    }
}
