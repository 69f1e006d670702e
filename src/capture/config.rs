// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Capture service configuration

/// Controls what the capture service writes to the log.
///
/// None of these settings affect validation or the events produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Log captured headers at debug level
    pub log_headers: bool,
    /// Log captured bodies at debug level
    pub log_bodies: bool,
    /// Bodies longer than this many characters are cut in the log
    pub max_logged_body_len: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            log_headers: false,
            log_bodies: false,
            max_logged_body_len: 1024,
        }
    }
}

impl CaptureConfig {
    /// Create a new capture config
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable header logging
    pub fn log_headers(mut self, enabled: bool) -> Self {
        self.log_headers = enabled;
        self
    }

    /// Enable/disable body logging
    pub fn log_bodies(mut self, enabled: bool) -> Self {
        self.log_bodies = enabled;
        self
    }

    /// Set the body length cut-off for logging
    pub fn max_logged_body_len(mut self, len: usize) -> Self {
        self.max_logged_body_len = len;
        self
    }

    /// Log nothing beyond event summaries
    pub fn quiet() -> Self {
        Self::default()
    }

    /// Log headers and bodies
    pub fn verbose() -> Self {
        Self {
            log_headers: true,
            log_bodies: true,
            max_logged_body_len: 16 * 1024,
        }
    }
}
