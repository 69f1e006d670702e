// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # traffic-capture - Browser Traffic Capture Pipeline
//!
//! Normalizes network traffic observed through a browser's extension APIs
//! into validated, immutable models and emits correlated capture events.
//! Interception itself and consumption of the events live outside this
//! crate.
//!
//! ## Pipeline
//!
//! - Extraction: browser-native request/response shapes to canonical input
//! - Validation: rule tables on `NetworkRequest` / `NetworkResponse`
//! - Events: `request-captured`, `response-captured`, `capture-error`,
//!   each tagged with the request id as `correlationId`
//! - Sinks: in-memory recorder and log sink for downstream delivery
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use traffic_capture::{capture_request, RawRequest};
//!
//! let events = capture_request(RawRequest {
//!     id: "req-123".to_string(),
//!     timestamp: 1735464000000,
//!     method: "GET".to_string(),
//!     url: "https://api.example.com/data".to_string(),
//!     headers: HashMap::new(),
//!     body: None,
//! })?;
//!
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].correlation_id(), "req-123");
//! # Ok::<(), traffic_capture::Error>(())
//! ```

pub mod capture;
pub mod error;
pub mod events;
pub mod extract;
pub mod models;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-exports for convenience

// Service
pub use capture::{capture_error, capture_request, capture_response, CaptureConfig, CaptureService};

// Sinks
pub use capture::{EventRecorder, EventSink, SinkChain, TracingSink};

// Errors
pub use error::{Error, ErrorContext, Result, ValidationError, ViolationKind};

// Events
pub use events::{
    create_capture_error_event, create_request_captured_event, create_response_captured_event,
    CaptureErrorEvent, CaptureEvent, Clock, EventType, FixedClock, RequestCapturedEvent,
    ResponseCapturedEvent, SystemClock,
};

// Extraction
pub use extract::{
    extract_network_request, extract_network_response, BrowserRequest, BrowserResponse,
    HeaderEntry,
};

// Models
pub use models::{
    create_network_request, create_network_response, is_valid_method, HttpMethod,
    NetworkRequest, NetworkResponse, RawRequest, RawResponse,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
