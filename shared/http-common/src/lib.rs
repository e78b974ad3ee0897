//! Shared HTTP utilities for the clip processor workspace.
//!
//! Framework-agnostic JSON envelope builders so handlers stay consistent
//! about response shapes.

use serde::Serialize;

// ============================================================================
// JSON Response Helpers (framework-agnostic)
// ============================================================================

/// Wrap a successful payload.
///
/// Returns: `{"data": <value>}`. Falls back to `{"data": null}` if the value
/// cannot be represented as JSON (e.g. a map with non-string keys).
pub fn json_data<T: Serialize>(value: &T) -> serde_json::Value {
    let data = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
    serde_json::json!({ "data": data })
}

/// Create a validation failure body.
///
/// Returns: `{"message": "<message>"}`
pub fn json_message(message: &str) -> serde_json::Value {
    serde_json::json!({ "message": message })
}

/// Create a structured error JSON with a default message based on the code.
///
/// Returns: `{"error": {"code": "<code>", "message": "<default message>"}}`
pub fn json_err(code: &str) -> serde_json::Value {
    let message = match code {
        "not_found" => "Resource not found",
        "bad_request" => "Bad request",
        "error" | "internal" => "Internal server error",
        _ => code, // Fallback to code as message for unknown codes
    };
    json_error_with_message(code, message)
}

/// Create a structured error JSON with a custom message.
///
/// Returns: `{"error": {"code": "<code>", "message": "<message>"}}`
pub fn json_error_with_message(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({"error": {"code": code, "message": message}})
}
