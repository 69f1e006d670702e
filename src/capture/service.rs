// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Capture service: validate raw input, wrap it in an event

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use super::config::CaptureConfig;
use crate::error::Result;
use crate::events::{
    CaptureErrorEvent, CaptureEvent, Clock, RequestCapturedEvent, ResponseCapturedEvent,
    SystemClock,
};
use crate::extract::{extract_network_request, BrowserRequest};
use crate::models::{NetworkRequest, NetworkResponse, RawRequest, RawResponse};

/// Entry point for the external capture collaborator.
///
/// Each operation yields a one-element `Vec` on success. Validation
/// failures are returned to the caller as-is; turning them into
/// `capture-error` events is the caller's decision.
#[derive(Clone)]
pub struct CaptureService {
    clock: Arc<dyn Clock>,
    config: CaptureConfig,
}

impl Default for CaptureService {
    fn default() -> Self {
        Self::new(CaptureConfig::default())
    }
}

impl std::fmt::Debug for CaptureService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CaptureService {
    /// Create a service stamping events with the system clock
    pub fn new(config: CaptureConfig) -> Self {
        Self {
            clock: Arc::new(SystemClock),
            config,
        }
    }

    /// Replace the clock used to stamp events
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Validate a raw request and emit `request-captured`
    pub fn capture_request(&self, raw: RawRequest) -> Result<Vec<CaptureEvent>> {
        let request_id = raw.id.clone();
        let request = NetworkRequest::new(raw).map_err(|err| {
            warn!(
                request_id = %request_id,
                field = err.field(),
                kind = %err.kind(),
                "Rejected captured request: {}",
                err
            );
            err
        })?;

        debug!(
            correlation_id = request.id(),
            method = %request.method(),
            url = request.url(),
            "Request captured"
        );
        self.log_body(request.body());
        if self.config.log_headers {
            debug!(
                header_count = request.headers().len(),
                headers = ?request.headers(),
                "Request headers"
            );
        }

        let event = RequestCapturedEvent::new(request, self.clock.as_ref());
        Ok(vec![event.into()])
    }

    /// Validate a raw response and emit `response-captured` under `request_id`.
    ///
    /// `request_id` is trusted as given; it is not checked against any
    /// earlier capture.
    pub fn capture_response(
        &self,
        request_id: impl Into<String>,
        raw: RawResponse,
    ) -> Result<Vec<CaptureEvent>> {
        let request_id = request_id.into();
        let response = NetworkResponse::new(raw).map_err(|err| {
            warn!(
                request_id = %request_id,
                field = err.field(),
                kind = %err.kind(),
                "Rejected captured response: {}",
                err
            );
            err
        })?;

        debug!(
            correlation_id = %request_id,
            status = response.status(),
            "Response captured"
        );
        self.log_body(response.body());
        if self.config.log_headers {
            debug!(
                header_count = response.headers().len(),
                headers = ?response.headers(),
                "Response headers"
            );
        }

        let event = ResponseCapturedEvent::new(request_id, response, self.clock.as_ref());
        Ok(vec![event.into()])
    }

    /// Emit `capture-error`; never fails
    pub fn capture_error(
        &self,
        request_id: impl Into<String>,
        error: impl Into<String>,
    ) -> Vec<CaptureEvent> {
        let event = CaptureErrorEvent::new(request_id, error, self.clock.as_ref());
        debug!(
            correlation_id = event.correlation_id(),
            error_len = event.error().len(),
            "Capture error recorded"
        );
        vec![event.into()]
    }

    /// Extract a browser request, then capture it
    pub fn capture_browser_request(&self, browser: &BrowserRequest) -> Result<Vec<CaptureEvent>> {
        self.capture_request(extract_network_request(browser).into())
    }

    fn log_body(&self, body: Option<&Value>) {
        if !self.config.log_bodies {
            return;
        }
        match body {
            Some(body) => {
                let text = body.to_string();
                let shown: String = text.chars().take(self.config.max_logged_body_len).collect();
                debug!(
                    body_len = text.len(),
                    truncated = shown.len() < text.len(),
                    body = %shown,
                    "Captured body"
                );
            }
            None => debug!("No body captured"),
        }
    }
}

/// Capture a request with a default service
pub fn capture_request(raw: RawRequest) -> Result<Vec<CaptureEvent>> {
    CaptureService::default().capture_request(raw)
}

/// Capture a response with a default service
pub fn capture_response(request_id: impl Into<String>, raw: RawResponse) -> Result<Vec<CaptureEvent>> {
    CaptureService::default().capture_response(request_id, raw)
}

/// Capture an error with a default service
pub fn capture_error(request_id: impl Into<String>, error: impl Into<String>) -> Vec<CaptureEvent> {
    CaptureService::default().capture_error(request_id, error)
}
