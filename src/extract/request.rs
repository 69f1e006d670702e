// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Browser request extraction

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::HeaderEntry;
use crate::models::RawRequest;

/// Request as reported by the browser's webRequest API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserRequest {
    pub request_id: String,
    pub url: String,
    pub method: String,
    /// Fractional epoch milliseconds
    pub time_stamp: f64,
    #[serde(default)]
    pub request_headers: Vec<HeaderEntry>,
}

/// Extractor output, shaped like [`RawRequest`] minus the body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRequest {
    pub id: String,
    pub url: String,
    pub method: String,
    pub timestamp: i64,
    pub headers: HashMap<String, String>,
}

impl From<ExtractedRequest> for RawRequest {
    fn from(extracted: ExtractedRequest) -> Self {
        RawRequest {
            id: extracted.id,
            timestamp: extracted.timestamp,
            method: extracted.method,
            url: extracted.url,
            headers: extracted.headers,
            body: None,
        }
    }
}

/// Flatten a header list into a map.
///
/// Names are used verbatim, so `X-Test` and `x-test` stay distinct. When
/// the same name repeats, the last value wins.
pub fn flatten_headers(entries: &[HeaderEntry]) -> HashMap<String, String> {
    let mut headers = HashMap::with_capacity(entries.len());
    for entry in entries {
        headers.insert(entry.name.clone(), entry.value.clone());
    }
    headers
}

/// Map a browser request onto the canonical request input.
///
/// Nothing is validated here; the method string is copied as-is and the
/// timestamp is truncated to whole milliseconds. A positive timestamp
/// below one millisecond becomes `1` so it stays positive.
pub fn extract_network_request(browser: &BrowserRequest) -> ExtractedRequest {
    ExtractedRequest {
        id: browser.request_id.clone(),
        url: browser.url.clone(),
        method: browser.method.clone(),
        timestamp: whole_millis(browser.time_stamp),
        headers: flatten_headers(&browser.request_headers),
    }
}

fn whole_millis(time_stamp: f64) -> i64 {
    let millis = time_stamp.trunc() as i64;
    if millis == 0 && time_stamp > 0.0 {
        1
    } else {
        millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{browser_request, TEST_API_URL, TEST_TIMESTAMP};

    #[test]
    fn test_request_id_becomes_id() {
        let mut browser = browser_request();
        browser.request_id = "browser-req-123".to_string();

        assert_eq!(extract_network_request(&browser).id, "browser-req-123");
    }

    #[test]
    fn test_url_and_method_preserved() {
        let mut browser = browser_request();
        browser.url = format!("{}?query=test", TEST_API_URL);
        browser.method = "POST".to_string();

        let extracted = extract_network_request(&browser);
        assert_eq!(extracted.url, format!("{}?query=test", TEST_API_URL));
        assert_eq!(extracted.method, "POST");
    }

    #[test]
    fn test_timestamp_truncated() {
        let mut browser = browser_request();
        assert_eq!(extract_network_request(&browser).timestamp, TEST_TIMESTAMP);

        browser.time_stamp = 1735464000000.875;
        assert_eq!(extract_network_request(&browser).timestamp, TEST_TIMESTAMP);
    }

    #[test]
    fn test_sub_millisecond_timestamp_stays_positive() {
        let mut browser = browser_request();
        browser.time_stamp = 0.4;
        let raw: RawRequest = extract_network_request(&browser).into();
        assert_eq!(raw.timestamp, 1);
        assert!(crate::models::NetworkRequest::new(raw).is_ok());

        browser.time_stamp = 0.0;
        assert_eq!(extract_network_request(&browser).timestamp, 0);

        browser.time_stamp = -0.5;
        assert_eq!(extract_network_request(&browser).timestamp, 0);
    }

    #[test]
    fn test_headers_flattened() {
        let mut browser = browser_request();
        browser.request_headers = vec![
            HeaderEntry::new("Content-Type", "application/json"),
            HeaderEntry::new("User-Agent", "Mozilla/5.0"),
            HeaderEntry::new("Authorization", "Bearer token123"),
        ];

        let headers = extract_network_request(&browser).headers;
        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get("User-Agent").map(String::as_str), Some("Mozilla/5.0"));
        assert_eq!(headers.get("Authorization").map(String::as_str), Some("Bearer token123"));
    }

    #[test]
    fn test_empty_header_list() {
        assert!(extract_network_request(&browser_request()).headers.is_empty());
    }

    #[test]
    fn test_duplicate_headers_last_wins() {
        let headers = flatten_headers(&[
            HeaderEntry::new("X-Test", "first"),
            HeaderEntry::new("X-Test", "second"),
            HeaderEntry::new("X-Test", "last"),
        ]);

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("X-Test").map(String::as_str), Some("last"));
    }

    #[test]
    fn test_header_case_preserved() {
        let headers = flatten_headers(&[
            HeaderEntry::new("X-Custom-Header", "upper"),
            HeaderEntry::new("x-custom-header", "lower"),
        ]);

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("X-Custom-Header").map(String::as_str), Some("upper"));
        assert_eq!(headers.get("x-custom-header").map(String::as_str), Some("lower"));
    }

    #[test]
    fn test_browser_json_shape() {
        let browser: BrowserRequest = serde_json::from_value(serde_json::json!({
            "requestId": "42",
            "url": "https://example.com/",
            "method": "GET",
            "timeStamp": 1735464000000.25,
            "requestHeaders": [{ "name": "Accept", "value": "*/*" }]
        }))
        .unwrap();

        let raw: RawRequest = extract_network_request(&browser).into();
        assert_eq!(raw.id, "42");
        assert_eq!(raw.headers.get("Accept").map(String::as_str), Some("*/*"));
        assert!(raw.body.is_none());
    }
}
