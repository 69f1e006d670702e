// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Canonical captured response

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::rules::{self, Rule};
use crate::error::{Result, ValidationError, ViolationKind};
use crate::extract::ExtractedResponse;

/// Lowest status code a response may carry
pub const MIN_STATUS: i64 = 100;
/// Highest status code a response may carry
pub const MAX_STATUS: i64 = 599;

/// Unvalidated response input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResponse {
    pub status: i64,
    pub status_text: String,
    pub headers: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl RawResponse {
    /// Build response input from extractor output.
    ///
    /// The extractor does not carry headers, so the caller supplies them
    /// from wherever it observed them.
    pub fn from_extracted(extracted: ExtractedResponse, headers: HashMap<String, String>) -> Self {
        Self {
            status: extracted.status,
            status_text: extracted.status_text,
            headers,
            body: None,
        }
    }
}

fn has_valid_status(raw: &RawResponse) -> bool {
    (MIN_STATUS..=MAX_STATUS).contains(&raw.status)
}

const RESPONSE_RULES: &[Rule<RawResponse>] = &[Rule {
    field: "status",
    kind: ViolationKind::OutOfRange,
    message: "Invalid status: must be between 100 and 599",
    check: has_valid_status,
}];

/// A validated, immutable captured response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawResponse", rename_all = "camelCase")]
pub struct NetworkResponse {
    status: u16,
    status_text: String,
    headers: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<Value>,
}

impl NetworkResponse {
    /// Validate raw input into a response
    pub fn new(raw: RawResponse) -> std::result::Result<Self, ValidationError> {
        rules::validate(&raw, RESPONSE_RULES)?;

        Ok(Self {
            // range checked by the rule table
            status: raw.status as u16,
            status_text: raw.status_text,
            headers: raw.headers,
            body: raw.body,
        })
    }

    /// Validate untyped JSON input
    pub fn from_json(value: &Value) -> Result<Self> {
        let raw: RawResponse = serde_json::from_value(value.clone())?;
        Ok(Self::new(raw)?)
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
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

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if status is redirect (3xx)
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }

    /// Check if status is an error (4xx or 5xx)
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }

    /// Turn back into constructor input
    pub fn into_raw(self) -> RawResponse {
        RawResponse {
            status: i64::from(self.status),
            status_text: self.status_text,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl TryFrom<RawResponse> for NetworkResponse {
    type Error = ValidationError;

    fn try_from(raw: RawResponse) -> std::result::Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<NetworkResponse> for RawResponse {
    fn from(response: NetworkResponse) -> Self {
        response.into_raw()
    }
}

/// Validate raw input into a [`NetworkResponse`]
pub fn create_network_response(raw: RawResponse) -> std::result::Result<NetworkResponse, ValidationError> {
    NetworkResponse::new(raw)
}
