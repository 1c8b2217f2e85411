use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RegistryError, GENERIC_FAILURE_MESSAGE};
use crate::pagination::Page;

/// Canonical response envelope consumed by the list coordinator.
///
/// Most resources answer with `{ success, data, message, total, ... }`. The
/// agenda endpoint answers with `{ status: "success" | "error", data, message }`
/// and is translated by [`normalize`] before anything else sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

impl<T> ApiResponse<T> {
    /// Fail unless the backend reported success.
    pub fn into_result(self, status: Option<u16>) -> Result<Self, RegistryError> {
        if self.success {
            Ok(self)
        } else {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            Err(RegistryError::server(status, message))
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Convert a list response into a page.
    ///
    /// A successful response without `data` is an empty page. Missing
    /// pagination fields mean a single page holding everything returned.
    pub fn into_page(self, status: Option<u16>) -> Result<Page<T>, RegistryError> {
        let response = self.into_result(status)?;
        let items = response.data.unwrap_or_default();
        let current_page = response.current_page.unwrap_or(1).max(1);
        let last_page = response.last_page.unwrap_or(1).max(current_page);
        let total = response.total.unwrap_or(items.len() as i64);
        Ok(Page::new(items, current_page, last_page, total))
    }
}

/// Translate any backend body into the canonical envelope.
///
/// `http_ok` decides success only when the body carries neither a boolean
/// `success` nor a string `status`. A `data` payload that does not match `T`
/// is a server error rather than a silent empty list.
pub fn normalize<T: DeserializeOwned>(
    http_ok: bool,
    status: Option<u16>,
    body: &str,
) -> Result<ApiResponse<T>, RegistryError> {
    let json: Value = serde_json::from_str(body).unwrap_or(Value::Object(Default::default()));

    let success = match (json.get("success"), json.get("status")) {
        (Some(Value::Bool(ok)), _) => *ok,
        (_, Some(Value::String(s))) => s == "success",
        _ => http_ok,
    };

    let data = match json.get("data") {
        None | Some(Value::Null) => None,
        Some(value) => Some(serde_json::from_value::<T>(value.clone()).map_err(|e| {
            RegistryError::server(status, format!("Format data tidak dikenali: {e}"))
        })?),
    };

    Ok(ApiResponse {
        success,
        data,
        message: json.get("message").and_then(Value::as_str).map(String::from),
        total: json.get("total").and_then(Value::as_i64),
        current_page: json.get("current_page").and_then(Value::as_i64),
        last_page: json.get("last_page").and_then(Value::as_i64),
        per_page: json.get("per_page").and_then(Value::as_i64),
    })
}

fn reject_http_failure<T>(
    response: ApiResponse<T>,
    http_ok: bool,
    status: Option<u16>,
) -> Result<ApiResponse<T>, RegistryError> {
    if http_ok {
        return Ok(response);
    }
    let message = response
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status.unwrap_or_default()));
    Err(RegistryError::server(status, message))
}

/// Normalize a list body and turn it into a page, failing on non-2xx.
pub fn parse_page<T: DeserializeOwned>(
    http_ok: bool,
    status: Option<u16>,
    body: &str,
) -> Result<Page<T>, RegistryError> {
    let response = normalize::<Vec<T>>(http_ok, status, body)?;
    reject_http_failure(response, http_ok, status)?.into_page(status)
}

/// Normalize a single-record or mutation body and return its `data`.
pub fn parse_record<T: DeserializeOwned>(
    http_ok: bool,
    status: Option<u16>,
    body: &str,
) -> Result<Option<T>, RegistryError> {
    let response = normalize::<T>(http_ok, status, body)?;
    Ok(reject_http_failure(response, http_ok, status)?
        .into_result(status)?
        .data)
}
