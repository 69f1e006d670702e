// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Capture events
//!
//! Every event carries the id of the request it concerns as its
//! `correlationId`, which is how downstream consumers join a request with
//! its response or failure.

mod capture;
mod clock;

pub use capture::{
    create_capture_error_event, create_request_captured_event, create_response_captured_event,
    CaptureErrorEvent, CaptureErrorPayload, RequestCapturedEvent, RequestCapturedPayload,
    ResponseCapturedEvent, ResponseCapturedPayload,
};
pub use clock::{Clock, FixedClock, SystemClock};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Event discriminator, matching the `type` field on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    RequestCaptured,
    ResponseCaptured,
    CaptureError,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::RequestCaptured => "request-captured",
            EventType::ResponseCaptured => "response-captured",
            EventType::CaptureError => "capture-error",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any capture event.
///
/// Each variant serializes its own `type` tag, so the enum itself is
/// written untagged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CaptureEvent {
    RequestCaptured(RequestCapturedEvent),
    ResponseCaptured(ResponseCapturedEvent),
    CaptureError(CaptureErrorEvent),
}

impl CaptureEvent {
    pub fn event_type(&self) -> EventType {
        match self {
            CaptureEvent::RequestCaptured(_) => EventType::RequestCaptured,
            CaptureEvent::ResponseCaptured(_) => EventType::ResponseCaptured,
            CaptureEvent::CaptureError(_) => EventType::CaptureError,
        }
    }

    /// Emission time in epoch milliseconds
    pub fn timestamp(&self) -> i64 {
        match self {
            CaptureEvent::RequestCaptured(e) => e.timestamp(),
            CaptureEvent::ResponseCaptured(e) => e.timestamp(),
            CaptureEvent::CaptureError(e) => e.timestamp(),
        }
    }

    /// Id of the request this event concerns
    pub fn correlation_id(&self) -> &str {
        match self {
            CaptureEvent::RequestCaptured(e) => e.correlation_id(),
            CaptureEvent::ResponseCaptured(e) => e.correlation_id(),
            CaptureEvent::CaptureError(e) => e.correlation_id(),
        }
    }

    /// Serialize as a single JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<RequestCapturedEvent> for CaptureEvent {
    fn from(event: RequestCapturedEvent) -> Self {
        CaptureEvent::RequestCaptured(event)
    }
}

impl From<ResponseCapturedEvent> for CaptureEvent {
    fn from(event: ResponseCapturedEvent) -> Self {
        CaptureEvent::ResponseCaptured(event)
    }
}

impl From<CaptureErrorEvent> for CaptureEvent {
    fn from(event: CaptureErrorEvent) -> Self {
        CaptureEvent::CaptureError(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{raw_request, raw_response, CONNECTION_REFUSED, TEST_REQUEST_ID};
    use crate::models::{NetworkRequest, NetworkResponse};

    fn all_variants() -> Vec<CaptureEvent> {
        let clock = FixedClock(7);
        let request = NetworkRequest::new(raw_request()).unwrap();
        let response = NetworkResponse::new(raw_response()).unwrap();

        vec![
            RequestCapturedEvent::new(request, &clock).into(),
            ResponseCapturedEvent::new(TEST_REQUEST_ID, response, &clock).into(),
            CaptureErrorEvent::new(TEST_REQUEST_ID, CONNECTION_REFUSED, &clock).into(),
        ]
    }

    #[test]
    fn test_correlation_is_request_id_for_every_variant() {
        for event in all_variants() {
            assert_eq!(event.correlation_id(), TEST_REQUEST_ID);
            assert_eq!(event.timestamp(), 7);
        }
    }

    #[test]
    fn test_type_tag_matches_event_type() {
        for event in all_variants() {
            let value = serde_json::to_value(&event).unwrap();
            assert_eq!(value["type"], event.event_type().as_str());
            assert_eq!(value["correlationId"], TEST_REQUEST_ID);
        }
    }

    #[test]
    fn test_request_event_json() {
        let events = all_variants();
        let value: serde_json::Value = serde_json::from_str(&events[0].to_json().unwrap()).unwrap();

        assert_eq!(value["type"], "request-captured");
        assert_eq!(value["payload"]["request"]["id"], TEST_REQUEST_ID);
        assert_eq!(value["payload"]["request"]["method"], "GET");
    }

    #[test]
    fn test_event_type_serde() {
        assert_eq!(
            serde_json::to_string(&EventType::CaptureError).unwrap(),
            "\"capture-error\""
        );
        assert_eq!(EventType::ResponseCaptured.to_string(), "response-captured");
    }
}
