//! HTTP service for sending the workout export to the charting backend.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::Value;
use web_sys::{File, FormData};

use crate::types::UploadError;

/// Error body returned by the charting backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Shown when the error body does not carry an `error` field.
pub const GENERIC_SERVER_ERROR: &str = "The charting service rejected the upload.";

/// Shown when a 2xx body is not a usable list of plots.
pub const GENERIC_DECODE_ERROR: &str =
    "The charting service returned data that could not be decoded.";

/// Upload the workout export and return the base64-encoded plot images.
///
/// One multipart POST with the export under the `file` field. The
/// exercise bank never travels; the backend keeps its own copy of the
/// bank data server-side. No retry, no timeout, no cancellation.
pub async fn request_charts(file: File, backend_url: &str) -> Result<Vec<String>, UploadError> {
    let form_data = FormData::new()
        .map_err(|e| UploadError::Request(format!("failed to create form data: {:?}", e)))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| UploadError::Request(format!("failed to append file: {:?}", e)))?;

    let request = Request::post(backend_url)
        .body(form_data)
        .map_err(|e| UploadError::Request(format!("failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| UploadError::Request(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(UploadError::Server(extract_error_message(&body)));
    }

    let payload = response
        .json::<Value>()
        .await
        .map_err(|_| UploadError::Payload(GENERIC_DECODE_ERROR.to_string()))?;

    decode_gallery(payload)
}

/// Pull the `error` field out of a failure body.
///
/// The backend is expected to answer failures with `{"error": "..."}`;
/// anything else falls back to a generic message rather than showing
/// raw body text to the user.
pub fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| GENERIC_SERVER_ERROR.to_string())
}

/// Validate a success payload: a JSON array of base64 strings.
///
/// Each entry must decode as base64 once ASCII whitespace is stripped
/// (the backend wraps its output at 76 columns). Entries are kept in
/// their original encoded form; the browser does the actual PNG
/// decoding when the data URI is rendered.
pub fn decode_gallery(payload: Value) -> Result<Vec<String>, UploadError> {
    let entries = payload
        .as_array()
        .ok_or_else(|| UploadError::Payload(GENERIC_DECODE_ERROR.to_string()))?;

    let mut images = Vec::with_capacity(entries.len());
    for entry in entries {
        let encoded = entry
            .as_str()
            .ok_or_else(|| UploadError::Payload(GENERIC_DECODE_ERROR.to_string()))?;
        let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        BASE64
            .decode(compact.as_bytes())
            .map_err(|_| UploadError::Payload(GENERIC_DECODE_ERROR.to_string()))?;
        images.push(encoded.to_string());
    }
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_field_is_extracted_verbatim() {
        assert_eq!(extract_error_message(r#"{"error": "bad csv"}"#), "bad csv");
    }

    #[test]
    fn malformed_error_body_falls_back_to_generic_message() {
        assert_eq!(extract_error_message("<html>502</html>"), GENERIC_SERVER_ERROR);
        assert_eq!(extract_error_message(""), GENERIC_SERVER_ERROR);
        assert_eq!(extract_error_message(r#"{"detail": "nope"}"#), GENERIC_SERVER_ERROR);
    }

    #[test]
    fn valid_payload_keeps_entries_in_order() {
        let images = decode_gallery(json!(["QQ==", "Qg=="])).unwrap();
        assert_eq!(images, vec!["QQ==", "Qg=="]);
    }

    #[test]
    fn empty_payload_is_an_empty_gallery() {
        assert_eq!(decode_gallery(json!([])).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn wrapped_base64_is_accepted() {
        // The backend line-wraps its encoder output, with a trailing newline.
        let images = decode_gallery(json!(["aVZCT1J3\nMEtHZ28=\n"])).unwrap();
        assert_eq!(images, vec!["aVZCT1J3\nMEtHZ28=\n"]);
    }

    #[test]
    fn non_array_payload_is_rejected() {
        let err = decode_gallery(json!({"plots": []})).unwrap_err();
        assert_eq!(err, UploadError::Payload(GENERIC_DECODE_ERROR.to_string()));
    }

    #[test]
    fn non_string_entry_is_rejected() {
        assert!(decode_gallery(json!(["QQ==", 42])).is_err());
    }

    #[test]
    fn non_base64_entry_is_rejected() {
        assert!(decode_gallery(json!(["not base64 at all!!"])).is_err());
    }
}
