// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Downstream event sinks
//!
//! The capture core only produces events. Sinks are the seam where a
//! consumer receives them: an in-memory recorder, the log, or anything
//! implementing [`EventSink`].

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::Result;
use crate::events::{CaptureEvent, EventType};

/// Receiver of capture events
///
/// # Example
///
/// ```rust,no_run
/// use traffic_capture::capture::EventSink;
/// use traffic_capture::events::CaptureEvent;
/// use async_trait::async_trait;
///
/// struct Stdout;
///
/// #[async_trait]
/// impl EventSink for Stdout {
///     async fn publish(&self, event: &CaptureEvent) -> traffic_capture::Result<()> {
///         println!("{}", event.to_json()?);
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Deliver one event
    async fn publish(&self, event: &CaptureEvent) -> Result<()>;

    /// Filter - return true if this sink wants the event
    fn accepts(&self, _event: &CaptureEvent) -> bool {
        true
    }

    /// Priority - higher priority sinks receive events first
    fn priority(&self) -> i32 {
        0
    }
}

/// Bounded in-memory event store.
///
/// Clones share the same storage. When full, the oldest event is evicted.
#[derive(Clone)]
pub struct EventRecorder {
    events: Arc<RwLock<VecDeque<CaptureEvent>>>,
    max_events: usize,
}

impl Default for EventRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRecorder {
    /// Create a recorder holding up to 1000 events
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(VecDeque::new())),
            max_events: 1000,
        }
    }

    /// Set max events
    pub fn max_events(mut self, max: usize) -> Self {
        self.max_events = max.max(1);
        self
    }

    /// Store an event (with max limit)
    pub fn record(&self, event: CaptureEvent) {
        let mut events = self.events.write();
        while events.len() >= self.max_events {
            events.pop_front();
        }
        events.push_back(event);
    }

    /// Get all recorded events, oldest first
    pub fn events(&self) -> Vec<CaptureEvent> {
        self.events.read().iter().cloned().collect()
    }

    /// Get events by type
    pub fn events_by_type(&self, event_type: EventType) -> Vec<CaptureEvent> {
        self.events
            .read()
            .iter()
            .filter(|e| e.event_type() == event_type)
            .cloned()
            .collect()
    }

    /// Every recorded event for one request, in recording order
    pub fn timeline(&self, correlation_id: &str) -> Vec<CaptureEvent> {
        self.events
            .read()
            .iter()
            .filter(|e| e.correlation_id() == correlation_id)
            .cloned()
            .collect()
    }

    /// Get unique correlation ids
    pub fn correlation_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .events
            .read()
            .iter()
            .map(|e| e.correlation_id().to_string())
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }

    /// Clear all events
    pub fn clear(&self) {
        self.events.write().clear();
    }

    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Export events as a JSON array
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.events())?)
    }
}

#[async_trait]
impl EventSink for EventRecorder {
    async fn publish(&self, event: &CaptureEvent) -> Result<()> {
        self.record(event.clone());
        Ok(())
    }
}

/// Writes a one-line summary of each event to the log
#[derive(Debug, Default)]
pub struct TracingSink {
    /// Only log this event type
    pub type_filter: Option<EventType>,
}

#[async_trait]
impl EventSink for TracingSink {
    fn accepts(&self, event: &CaptureEvent) -> bool {
        self.type_filter
            .map(|t| t == event.event_type())
            .unwrap_or(true)
    }

    async fn publish(&self, event: &CaptureEvent) -> Result<()> {
        match event {
            CaptureEvent::CaptureError(e) => tracing::warn!(
                correlation_id = e.correlation_id(),
                timestamp = e.timestamp(),
                error = e.error(),
                "capture-error"
            ),
            other => tracing::info!(
                event_type = %other.event_type(),
                correlation_id = other.correlation_id(),
                timestamp = other.timestamp(),
                "Capture event"
            ),
        }
        Ok(())
    }

    fn priority(&self) -> i32 {
        -100 // log after delivery
    }
}

/// Sink chain - fans events out to several sinks
#[derive(Default)]
pub struct SinkChain {
    sinks: Vec<Arc<dyn EventSink>>,
}

impl SinkChain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Add a sink
    pub fn add<S: EventSink + 'static>(&mut self, sink: S) {
        self.add_shared(Arc::new(sink));
    }

    /// Add a sink that is also held elsewhere
    pub fn add_shared(&mut self, sink: Arc<dyn EventSink>) {
        self.sinks.push(sink);
        // Sort by priority (highest first)
        self.sinks.sort_by(|a, b| b.priority().cmp(&a.priority()));
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Publish one event to every accepting sink, stopping at the first error
    pub async fn publish(&self, event: &CaptureEvent) -> Result<()> {
        for sink in &self.sinks {
            if !sink.accepts(event) {
                continue;
            }
            sink.publish(event).await?;
        }
        Ok(())
    }

    /// Publish events in order
    pub async fn publish_all(&self, events: &[CaptureEvent]) -> Result<()> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
