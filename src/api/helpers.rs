//! Shared helpers for WASM API operations
//!
//! Logging macros, the API error type and serialization helpers used by
//! every exported function.

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================
//
// These go through the `log` facade; in the browser `console_log` forwards
// them to the console, in native tests they are dropped.

pub fn log_debug(msg: &str) {
    log::debug!("[WASM] {}", msg);
}

pub fn log_info(msg: &str) {
    log::info!("[WASM] {}", msg);
}

pub fn log_warn(msg: &str) {
    log::warn!("[WASM] ⚠️ {}", msg);
}

pub fn log_error(msg: &str) {
    log::error!("[WASM] ❌ {}", msg);
}

// ============================================================================
// Errors
// ============================================================================

/// Failures at the JavaScript boundary. The scoring core itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{context}: {message}")]
    Serialization { context: String, message: String },
}

impl ApiError {
    pub fn serialization(context: &str, err: impl std::fmt::Display) -> Self {
        ApiError::Serialization {
            context: context.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<ApiError> for JsValue {
    fn from(err: ApiError) -> Self {
        let msg = err.to_string();
        log_error(&msg);
        JsValue::from_str(&msg)
    }
}

// ============================================================================
// Serialization Helpers
// ============================================================================

/// Serialize a value to a JSON string
pub fn to_json<T: Serialize>(value: &T, error_context: &str) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::serialization(error_context, e))
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| ApiError::serialization(error_context, e).into())
}
