// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Browser response extraction

use serde::{Deserialize, Serialize};

use super::HeaderEntry;

/// Response as reported by the browser's webRequest API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserResponse {
    pub status: i64,
    #[serde(default)]
    pub status_text: String,
    #[serde(default)]
    pub response_headers: Vec<HeaderEntry>,
}

/// Extractor output: status line only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedResponse {
    pub status: i64,
    pub status_text: String,
}

/// Map a browser response onto its status line.
///
/// `responseHeaders` are not carried over. Callers that need them attach
/// them with [`crate::models::RawResponse::from_extracted`].
pub fn extract_network_response(browser: &BrowserResponse) -> ExtractedResponse {
    ExtractedResponse {
        status: browser.status,
        status_text: browser.status_text.clone(),
    }
}
