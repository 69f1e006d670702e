// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Canonical captured request and response models
//!
//! Every model value has passed its rule table; there is no unchecked
//! construction path.

mod method;
mod request;
mod response;
mod rules;

pub use method::{is_valid_method, HttpMethod};
pub use request::{create_network_request, NetworkRequest, RawRequest};
pub use response::{create_network_response, NetworkResponse, RawResponse, MAX_STATUS, MIN_STATUS};
