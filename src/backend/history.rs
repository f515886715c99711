use serde::Serialize;
use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 60; // 2 minutes at one sample every 2s

/// Fixed-capacity series of recent samples; the oldest value is dropped on overflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryBuffer {
    capacity: usize,
    samples: VecDeque<f64>,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity + 1),
        }
    }

    pub fn push(&mut self, value: f64) {
        self.samples.push_back(value);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Samples oldest first, ready for a line chart.
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }

    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// The trend series the dashboard charts: CPU percent and memory percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricHistory {
    pub cpu: HistoryBuffer,
    pub memory: HistoryBuffer,
}

impl MetricHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            cpu: HistoryBuffer::new(capacity),
            memory: HistoryBuffer::new(capacity),
        }
    }

    /// Call once per tick with the fresh snapshot.
    pub fn update(&mut self, snapshot: &crate::model::SystemSnapshot) {
        self.cpu.push(snapshot.cpu.total_percent);
        self.memory.push(snapshot.memory.percent());
    }
}
