//! Calculation timing and error counters. Not persisted.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Writable;

/// Samples kept per calculator
pub const MAX_SAMPLES: usize = 10;

/// Slow calculations kept
pub const MAX_SLOW: usize = 20;

/// Calculations slower than this are recorded as slow
pub const SLOW_THRESHOLD_MS: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlowCalculation {
    pub calculator_id: String,
    pub duration_ms: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRecord {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PerformanceState {
    /// Most recent durations (ms) per calculator, oldest first
    pub calculation_times: BTreeMap<String, Vec<f64>>,
    /// Mean of the window of the most recently recorded calculator
    pub average_calculation_time: f64,
    pub slow_calculations: Vec<SlowCalculation>,
    pub error_count: u64,
    pub last_error: Option<ErrorRecord>,
}

/// Summary returned by [`PerformanceStore::metrics`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceMetrics {
    pub total_calculations: usize,
    pub average_time_ms: f64,
    pub slow_calculation_count: usize,
    /// Errors per recorded calculation (at least one calculation assumed)
    pub error_rate: f64,
    pub last_error: Option<ErrorRecord>,
}

#[derive(Debug, Default)]
pub struct PerformanceStore {
    state: Writable<PerformanceState>,
}

impl PerformanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &Writable<PerformanceState> {
        &self.state
    }

    pub fn record_calculation(&self, calculator_id: &str, duration: Duration) {
        let duration_ms = duration.as_secs_f64() * 1000.0;
        let now = Utc::now();

        self.state.update(|state| {
            let times = state
                .calculation_times
                .entry(calculator_id.to_string())
                .or_default();
            times.push(duration_ms);
            if times.len() > MAX_SAMPLES {
                let excess = times.len() - MAX_SAMPLES;
                times.drain(..excess);
            }
            state.average_calculation_time = times.iter().sum::<f64>() / times.len() as f64;

            if duration_ms > SLOW_THRESHOLD_MS {
                state.slow_calculations.push(SlowCalculation {
                    calculator_id: calculator_id.to_string(),
                    duration_ms,
                    timestamp: now,
                });
                if state.slow_calculations.len() > MAX_SLOW {
                    let excess = state.slow_calculations.len() - MAX_SLOW;
                    state.slow_calculations.drain(..excess);
                }
            }
        });

        if duration_ms > SLOW_THRESHOLD_MS {
            tracing::debug!(calculator_id, duration_ms, "slow calculation");
        }
    }

    pub fn record_error(&self, message: impl Into<String>) {
        let record = ErrorRecord {
            message: message.into(),
            timestamp: Utc::now(),
        };
        self.state.update(|state| {
            state.error_count += 1;
            state.last_error = Some(record);
        });
    }

    pub fn metrics(&self) -> PerformanceMetrics {
        self.state.with(|state| {
            let total: usize = state.calculation_times.values().map(Vec::len).sum();
            PerformanceMetrics {
                total_calculations: total,
                average_time_ms: state.average_calculation_time,
                slow_calculation_count: state.slow_calculations.len(),
                error_rate: state.error_count as f64 / total.max(1) as f64,
                last_error: state.last_error.clone(),
            }
        })
    }
}
