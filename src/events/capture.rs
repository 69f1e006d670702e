// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Capture event variants

use serde::Serialize;

use super::clock::{Clock, SystemClock};
use crate::models::{NetworkRequest, NetworkResponse};

/// Payload of a `request-captured` event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestCapturedPayload {
    pub request: NetworkRequest,
}

/// Payload of a `response-captured` event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCapturedPayload {
    pub request_id: String,
    pub response: NetworkResponse,
}

/// Payload of a `capture-error` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureErrorPayload {
    pub request_id: String,
    pub error: String,
}

/// A request was observed and validated
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "request-captured", rename_all = "camelCase")]
pub struct RequestCapturedEvent {
    timestamp: i64,
    correlation_id: String,
    payload: RequestCapturedPayload,
}

impl RequestCapturedEvent {
    /// Wrap a request; the correlation id is the request's own id
    pub fn new(request: NetworkRequest, clock: &dyn Clock) -> Self {
        Self {
            timestamp: clock.now_millis(),
            correlation_id: request.id().to_string(),
            payload: RequestCapturedPayload { request },
        }
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn payload(&self) -> &RequestCapturedPayload {
        &self.payload
    }

    pub fn request(&self) -> &NetworkRequest {
        &self.payload.request
    }
}

/// A response was observed and validated
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "response-captured", rename_all = "camelCase")]
pub struct ResponseCapturedEvent {
    timestamp: i64,
    correlation_id: String,
    payload: ResponseCapturedPayload,
}

impl ResponseCapturedEvent {
    /// Wrap a response under the id of the request it answers
    pub fn new(request_id: impl Into<String>, response: NetworkResponse, clock: &dyn Clock) -> Self {
        let request_id = request_id.into();
        Self {
            timestamp: clock.now_millis(),
            correlation_id: request_id.clone(),
            payload: ResponseCapturedPayload {
                request_id,
                response,
            },
        }
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn payload(&self) -> &ResponseCapturedPayload {
        &self.payload
    }

    pub fn response(&self) -> &NetworkResponse {
        &self.payload.response
    }
}

/// A capture failed for a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "capture-error", rename_all = "camelCase")]
pub struct CaptureErrorEvent {
    timestamp: i64,
    correlation_id: String,
    payload: CaptureErrorPayload,
}

impl CaptureErrorEvent {
    /// Record an error message of any length against a request id
    pub fn new(request_id: impl Into<String>, error: impl Into<String>, clock: &dyn Clock) -> Self {
        let request_id = request_id.into();
        Self {
            timestamp: clock.now_millis(),
            correlation_id: request_id.clone(),
            payload: CaptureErrorPayload {
                request_id,
                error: error.into(),
            },
        }
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn payload(&self) -> &CaptureErrorPayload {
        &self.payload
    }

    pub fn error(&self) -> &str {
        &self.payload.error
    }
}

/// Stamp a request-captured event with the system clock
pub fn create_request_captured_event(request: NetworkRequest) -> RequestCapturedEvent {
    RequestCapturedEvent::new(request, &SystemClock)
}

/// Stamp a response-captured event with the system clock
pub fn create_response_captured_event(
    request_id: impl Into<String>,
    response: NetworkResponse,
) -> ResponseCapturedEvent {
    ResponseCapturedEvent::new(request_id, response, &SystemClock)
}

/// Stamp a capture-error event with the system clock
pub fn create_capture_error_event(
    request_id: impl Into<String>,
    error: impl Into<String>,
) -> CaptureErrorEvent {
    CaptureErrorEvent::new(request_id, error, &SystemClock)
}
