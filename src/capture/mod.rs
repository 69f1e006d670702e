// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Capture orchestration
//!
//! The service validates raw input and produces events. Sinks and replay
//! sit around it as the collaborators on either side.

mod config;
mod replay;
mod service;
mod sink;

pub use config::CaptureConfig;
pub use replay::{parse_records, read_records, replay, replay_to, CaptureRecord, ReplayOutcome};
pub use service::{capture_error, capture_request, capture_response, CaptureService};
pub use sink::{EventRecorder, EventSink, SinkChain, TracingSink};
