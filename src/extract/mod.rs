// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Extraction from browser-native capture shapes
//!
//! Shape-only mapping. Validation is left to [`crate::models`].

mod request;
mod response;

pub use request::{extract_network_request, flatten_headers, BrowserRequest, ExtractedRequest};
pub use response::{extract_network_response, BrowserResponse, ExtractedResponse};

use serde::{Deserialize, Serialize};

/// Header entry as the browser lists it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub name: String,
    pub value: String,
}

impl HeaderEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
