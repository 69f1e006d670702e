// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Shared test inputs

use std::collections::HashMap;

use crate::extract::{BrowserRequest, BrowserResponse};
use crate::models::{RawRequest, RawResponse};

pub const TEST_REQUEST_ID: &str = "req-123";
pub const TEST_TIMESTAMP: i64 = 1735464000000;
pub const TEST_API_URL: &str = "https://api.example.com/data";

pub const NETWORK_TIMEOUT: &str = "Network timeout";
pub const CONNECTION_REFUSED: &str = "Connection refused";
pub const SSL_CERT_FAILED: &str = "SSL certificate verification failed";

fn json_headers() -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers
}

pub fn raw_request() -> RawRequest {
    RawRequest {
        id: TEST_REQUEST_ID.to_string(),
        timestamp: TEST_TIMESTAMP,
        method: "GET".to_string(),
        url: TEST_API_URL.to_string(),
        headers: json_headers(),
        body: None,
    }
}

pub fn raw_response() -> RawResponse {
    RawResponse {
        status: 200,
        status_text: "OK".to_string(),
        headers: json_headers(),
        body: None,
    }
}

pub fn browser_request() -> BrowserRequest {
    BrowserRequest {
        request_id: TEST_REQUEST_ID.to_string(),
        url: TEST_API_URL.to_string(),
        method: "GET".to_string(),
        time_stamp: TEST_TIMESTAMP as f64,
        request_headers: Vec::new(),
    }
}

pub fn browser_response() -> BrowserResponse {
    BrowserResponse {
        status: 200,
        status_text: "OK".to_string(),
        response_headers: Vec::new(),
    }
}
