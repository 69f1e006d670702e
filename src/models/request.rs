// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Canonical captured request

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::method::{is_valid_method, HttpMethod, INVALID_METHOD};
use super::rules::{self, Rule};
use crate::error::{Result, ValidationError, ViolationKind};

/// Unvalidated request input, with headers already flattened into a map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRequest {
    pub id: String,
    /// Epoch milliseconds
    pub timestamp: i64,
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

fn has_id(raw: &RawRequest) -> bool {
    !raw.id.is_empty()
}

fn has_positive_timestamp(raw: &RawRequest) -> bool {
    raw.timestamp > 0
}

fn has_known_method(raw: &RawRequest) -> bool {
    is_valid_method(&raw.method)
}

fn has_url(raw: &RawRequest) -> bool {
    !raw.url.is_empty()
}

const REQUEST_RULES: &[Rule<RawRequest>] = &[
    Rule {
        field: "id",
        kind: ViolationKind::Empty,
        message: "ID cannot be empty",
        check: has_id,
    },
    Rule {
        field: "timestamp",
        kind: ViolationKind::NotPositive,
        message: "Timestamp must be positive",
        check: has_positive_timestamp,
    },
    Rule {
        field: "method",
        kind: ViolationKind::NotAllowed,
        message: INVALID_METHOD,
        check: has_known_method,
    },
    Rule {
        field: "url",
        kind: ViolationKind::Empty,
        message: "URL cannot be empty",
        check: has_url,
    },
];

/// A validated, immutable captured request.
///
/// The only ways to obtain one are [`NetworkRequest::new`] and
/// deserialization, and both run the same rule table. Fields are read
/// through accessors; there is no way to change them afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRequest", rename_all = "camelCase")]
pub struct NetworkRequest {
    id: String,
    timestamp: i64,
    method: HttpMethod,
    url: String,
    headers: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<Value>,
}

impl NetworkRequest {
    /// Validate raw input into a request, failing on the first broken rule
    pub fn new(raw: RawRequest) -> std::result::Result<Self, ValidationError> {
        rules::validate(&raw, REQUEST_RULES)?;
        let method = raw.method.parse()?;

        Ok(Self {
            id: raw.id,
            timestamp: raw.timestamp,
            method,
            url: raw.url,
            headers: raw.headers,
            body: raw.body,
        })
    }

    /// Validate untyped JSON input
    pub fn from_json(value: &Value) -> Result<Self> {
        let raw: RawRequest = serde_json::from_value(value.clone())?;
        Ok(Self::new(raw)?)
    }

    /// Request identifier, also the correlation key
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Capture time in epoch milliseconds
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Capture time as a UTC datetime
    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp).single()
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Look up a header by its exact name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Turn back into constructor input
    pub fn into_raw(self) -> RawRequest {
        RawRequest {
            id: self.id,
            timestamp: self.timestamp,
            method: self.method.as_str().to_string(),
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl TryFrom<RawRequest> for NetworkRequest {
    type Error = ValidationError;

    fn try_from(raw: RawRequest) -> std::result::Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<NetworkRequest> for RawRequest {
    fn from(request: NetworkRequest) -> Self {
        request.into_raw()
    }
}

/// Validate raw input into a [`NetworkRequest`]
pub fn create_network_request(raw: RawRequest) -> std::result::Result<NetworkRequest, ValidationError> {
    NetworkRequest::new(raw)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::Error;
    use crate::fixtures::{raw_request, TEST_API_URL, TEST_REQUEST_ID, TEST_TIMESTAMP};

    #[test]
    fn test_valid_request() {
        let request = NetworkRequest::new(raw_request()).unwrap();

        assert_eq!(request.id(), TEST_REQUEST_ID);
        assert_eq!(request.timestamp(), TEST_TIMESTAMP);
        assert_eq!(request.method(), HttpMethod::Get);
        assert_eq!(request.url(), TEST_API_URL);
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert!(request.body().is_none());
    }

    #[test]
    fn test_body_is_kept_verbatim() {
        let mut raw = raw_request();
        raw.method = "POST".to_string();
        raw.body = Some(json!({ "name": "test", "tags": [1, 2, 3] }));

        let request = NetworkRequest::new(raw).unwrap();
        assert_eq!(request.method(), HttpMethod::Post);
        assert_eq!(request.body(), Some(&json!({ "name": "test", "tags": [1, 2, 3] })));
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut raw = raw_request();
        raw.id = String::new();

        let err = NetworkRequest::new(raw).unwrap_err();
        assert_eq!(err.field(), "id");
        assert_eq!(err.to_string(), "ID cannot be empty");
    }

    #[test]
    fn test_non_positive_timestamp_rejected() {
        for timestamp in [0, -1, i64::MIN] {
            let mut raw = raw_request();
            raw.timestamp = timestamp;

            let err = NetworkRequest::new(raw).unwrap_err();
            assert_eq!(err.field(), "timestamp");
            assert_eq!(err.kind(), ViolationKind::NotPositive);
        }
    }

    #[test]
    fn test_unknown_method_rejected() {
        for method in ["TRACE", "get", ""] {
            let mut raw = raw_request();
            raw.method = method.to_string();

            let err = NetworkRequest::new(raw).unwrap_err();
            assert_eq!(err.field(), "method");
        }
    }

    #[test]
    fn test_empty_url_rejected() {
        let mut raw = raw_request();
        raw.url = String::new();

        let err = NetworkRequest::new(raw).unwrap_err();
        assert_eq!(err.to_string(), "URL cannot be empty");
    }

    #[test]
    fn test_first_violation_reported() {
        let raw = RawRequest {
            id: String::new(),
            timestamp: 0,
            method: "NOPE".to_string(),
            url: String::new(),
            headers: HashMap::new(),
            body: None,
        };

        let err = NetworkRequest::new(raw).unwrap_err();
        assert_eq!(err.field(), "id");
    }

    #[test]
    fn test_revalidation_is_idempotent() {
        let mut raw = raw_request();
        raw.body = Some(json!("payload"));
        let request = NetworkRequest::new(raw).unwrap();

        let again = NetworkRequest::new(request.clone().into_raw()).unwrap();
        assert_eq!(again, request);
    }

    #[test]
    fn test_serialized_shape() {
        let request = NetworkRequest::new(raw_request()).unwrap();
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["id"], TEST_REQUEST_ID);
        assert_eq!(value["method"], "GET");
        assert_eq!(value["timestamp"], TEST_TIMESTAMP);
        assert!(value.get("body").is_none());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: NetworkRequest = serde_json::from_value(json!({
            "id": "req-1",
            "timestamp": 1,
            "method": "HEAD",
            "url": "https://example.com",
            "headers": {}
        }))
        .unwrap();
        assert_eq!(ok.method(), HttpMethod::Head);

        let bad = serde_json::from_value::<NetworkRequest>(json!({
            "id": "req-1",
            "timestamp": -5,
            "method": "HEAD",
            "url": "https://example.com",
            "headers": {}
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_from_json_errors() {
        let malformed = NetworkRequest::from_json(&json!({ "id": 42 })).unwrap_err();
        assert!(matches!(malformed, Error::Serialization(_)));

        let invalid = NetworkRequest::from_json(&json!({
            "id": "req-1",
            "timestamp": 1,
            "method": "GET",
            "url": "",
            "headers": {}
        }))
        .unwrap_err();
        assert_eq!(invalid.validation().map(|v| v.field()), Some("url"));
    }

    #[test]
    fn test_missing_headers_rejected() {
        let err = NetworkRequest::from_json(&json!({
            "id": "req-1",
            "timestamp": 1,
            "method": "GET",
            "url": "https://example.com"
        }))
        .unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_create_network_request() {
        let request = create_network_request(raw_request()).unwrap();
        assert_eq!(request.id(), TEST_REQUEST_ID);

        let mut raw = raw_request();
        raw.method = "CONNECT".to_string();
        let err = create_network_request(raw).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::NotAllowed);
    }

    #[test]
    fn test_captured_at() {
        let request = NetworkRequest::new(raw_request()).unwrap();
        let at = request.captured_at().unwrap();
        assert_eq!(at.timestamp_millis(), TEST_TIMESTAMP);
    }
}
