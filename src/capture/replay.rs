// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Replay of recorded browser captures
//!
//! Reads JSON-lines capture records and feeds them through a
//! [`CaptureService`], acting as the browser-side collaborator. Unlike the
//! service itself, replay turns a rejected record into a `capture-error`
//! event so one bad line does not hide the rest of a timeline.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::service::CaptureService;
use super::sink::SinkChain;
use crate::error::{ErrorContext, Result};
use crate::events::CaptureEvent;
use crate::extract::BrowserRequest;
use crate::models::RawResponse;

/// One line of a replay file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CaptureRecord {
    /// A request in the browser's native shape
    Request(BrowserRequest),
    /// A response for an earlier (or later) request
    #[serde(rename_all = "camelCase")]
    Response {
        request_id: String,
        response: RawResponse,
    },
    /// A failure reported by the browser
    #[serde(rename_all = "camelCase")]
    Error { request_id: String, error: String },
}

impl CaptureRecord {
    /// Id of the request this record concerns
    pub fn request_id(&self) -> &str {
        match self {
            CaptureRecord::Request(browser) => &browser.request_id,
            CaptureRecord::Response { request_id, .. } => request_id,
            CaptureRecord::Error { request_id, .. } => request_id,
        }
    }
}

/// Result of replaying a batch of records
#[derive(Debug, Clone, Default)]
pub struct ReplayOutcome {
    /// Events in record order
    pub events: Vec<CaptureEvent>,
    /// Records that failed validation and became `capture-error` events
    pub rejected: usize,
}

/// Parse JSON-lines records. Blank lines and lines starting with `#` are skipped.
pub fn parse_records(input: &str) -> Result<Vec<CaptureRecord>> {
    let mut records = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let record: CaptureRecord = serde_json::from_str(line).at_line(index + 1)?;
        records.push(record);
    }
    Ok(records)
}

/// Read and parse a replay file
pub async fn read_records(path: impl AsRef<Path>) -> Result<Vec<CaptureRecord>> {
    let input = tokio::fs::read_to_string(path.as_ref()).await?;
    parse_records(&input)
}

/// Run records through the service in order
pub fn replay(service: &CaptureService, records: Vec<CaptureRecord>) -> ReplayOutcome {
    let mut outcome = ReplayOutcome::default();

    for record in records {
        let request_id = record.request_id().to_string();
        let captured = match record {
            CaptureRecord::Request(browser) => service.capture_browser_request(&browser),
            CaptureRecord::Response {
                request_id,
                response,
            } => service.capture_response(request_id, response),
            CaptureRecord::Error { request_id, error } => Ok(service.capture_error(request_id, error)),
        };

        match captured {
            Ok(events) => outcome.events.extend(events),
            Err(err) => {
                warn!(request_id = %request_id, error = %err, "Replayed record rejected");
                outcome.rejected += 1;
                outcome
                    .events
                    .extend(service.capture_error(request_id, err.to_string()));
            }
        }
    }

    info!(
        events = outcome.events.len(),
        rejected = outcome.rejected,
        "Replay finished"
    );
    outcome
}

/// Replay records and publish every resulting event to `sinks`
pub async fn replay_to(
    service: &CaptureService,
    records: Vec<CaptureRecord>,
    sinks: &SinkChain,
) -> Result<ReplayOutcome> {
    let outcome = replay(service, records);
    sinks.publish_all(&outcome.events).await?;
    Ok(outcome)
}
