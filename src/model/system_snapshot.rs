use super::ProcessInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuInfo {
    pub total_percent: f64,
    pub core_count: usize,
    pub thread_count: usize,
    pub frequency_ghz: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryInfo {
    pub total_gb: f64,
    pub used_gb: f64,
}

impl MemoryInfo {
    pub fn free_gb(&self) -> f64 {
        (self.total_gb - self.used_gb).max(0.0)
    }

    /// Used memory as a percentage of total, rounded to one decimal.
    pub fn percent(&self) -> f64 {
        if self.total_gb <= 0.0 {
            return 0.0;
        }
        (self.used_gb / self.total_gb * 1000.0).round() / 10.0
    }

    /// Simulated page cache share, for the used/free/cached breakdown chart.
    pub fn cached_gb(&self) -> f64 {
        self.total_gb * 0.2
    }
}

/// Header line of the dashboard. Read once at startup, not per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostInfo {
    pub hostname: String,
    pub os: String,
}

impl Default for HostInfo {
    fn default() -> Self {
        Self {
            hostname: "localhost".into(),
            os: "Unknown".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    pub cpu: CpuInfo,
    pub memory: MemoryInfo,
    pub processes: Vec<ProcessInfo>,
    pub taken_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_percent_rounds_to_one_decimal() {
        let mem = MemoryInfo {
            total_gb: 16.0,
            used_gb: 13.0,
        };
        assert_eq!(mem.percent(), 81.3);
        assert_eq!(mem.free_gb(), 3.0);
        assert!((mem.cached_gb() - 3.2).abs() < 1e-9);
    }

    #[test]
    fn zero_total_memory_reports_zero_percent() {
        let mem = MemoryInfo::default();
        assert_eq!(mem.percent(), 0.0);
    }
}
