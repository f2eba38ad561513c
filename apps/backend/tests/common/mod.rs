//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for building the router with a frozen clock
//! - Helper functions for creating test documents and request bodies

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, TimeZone, Utc};

use quiz_core::FixedClock;
use quiz_import_backend::config::Config;
use quiz_import_backend::{app, AppState};

/// Test context holding the router under test.
pub struct TestContext {
    pub now: DateTime<Utc>,
    app: Router,
}

impl TestContext {
    /// Create a test context with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a test context with the given configuration.
    pub fn with_config(config: Config) -> Self {
        let now = Utc.with_ymd_and_hms(2024, 9, 1, 10, 30, 0).unwrap();
        let state = AppState::with_clock(config, Arc::new(FixedClock(now)));
        Self {
            now,
            app: app(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}
