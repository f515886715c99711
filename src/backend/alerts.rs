use crate::model::{Alert, SystemSnapshot};
use serde::Serialize;
use std::collections::VecDeque;

pub const DEFAULT_LOG_CAPACITY: usize = 20;
pub const DEFAULT_THRESHOLD: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    CpuPercent,
    MemoryPercent,
}

impl Metric {
    pub fn read(self, snapshot: &SystemSnapshot) -> f64 {
        match self {
            Metric::CpuPercent => snapshot.cpu.total_percent,
            Metric::MemoryPercent => snapshot.memory.percent(),
        }
    }
}

/// Fires when `metric` is strictly above `threshold`.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdRule {
    pub metric: Metric,
    pub threshold: f64,
    pub message: String,
    /// Prefix of the details line; the measured value is appended as `{:.1}%`.
    pub detail_label: String,
}

impl ThresholdRule {
    pub fn new(
        metric: Metric,
        threshold: f64,
        message: impl Into<String>,
        detail_label: impl Into<String>,
    ) -> Self {
        Self {
            metric,
            threshold,
            message: message.into(),
            detail_label: detail_label.into(),
        }
    }

    pub fn check(&self, snapshot: &SystemSnapshot, timestamp: &str) -> Option<Alert> {
        let value = self.metric.read(snapshot);
        if value > self.threshold {
            Some(Alert::warning(
                self.message.clone(),
                format!("{} {:.1}%", self.detail_label, value),
                timestamp.to_string(),
            ))
        } else {
            None
        }
    }
}

/// Threshold rule table evaluated once per tick. Breaches re-fire every tick they persist.
#[derive(Debug, Clone)]
pub struct AlertEngine {
    rules: Vec<ThresholdRule>,
}

impl AlertEngine {
    pub fn new(rules: Vec<ThresholdRule>) -> Self {
        Self { rules }
    }

    pub fn with_thresholds(cpu: f64, memory: f64) -> Self {
        Self::new(vec![
            ThresholdRule::new(Metric::CpuPercent, cpu, "High CPU Usage", "CPU usage is"),
            ThresholdRule::new(
                Metric::MemoryPercent,
                memory,
                "High Memory Usage",
                "Memory usage is",
            ),
        ])
    }

    pub fn add_rule(&mut self, rule: ThresholdRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[ThresholdRule] {
        &self.rules
    }

    pub fn evaluate(&self, snapshot: &SystemSnapshot, timestamp: &str) -> Vec<Alert> {
        self.rules
            .iter()
            .filter_map(|rule| rule.check(snapshot, timestamp))
            .collect()
    }
}

impl Default for AlertEngine {
    fn default() -> Self {
        Self::with_thresholds(DEFAULT_THRESHOLD, DEFAULT_THRESHOLD)
    }
}

/// Append-only alert log holding the most recent `capacity` entries.
#[derive(Debug, Clone, Serialize)]
pub struct AlertLog {
    capacity: usize,
    entries: VecDeque<Alert>,
}

impl AlertLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity + 1),
        }
    }

    pub fn record(&mut self, alert: Alert) {
        self.entries.push_back(alert);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries oldest first.
    pub fn entries(&self) -> Vec<Alert> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AlertLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}
