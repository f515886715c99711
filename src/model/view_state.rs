use super::{ProcessInfo, ProcessState};
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column the process table is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Pid,
    Name,
    User,
    #[default]
    Cpu,
    Memory,
    State,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Pid => "pid",
            SortKey::Name => "name",
            SortKey::User => "user",
            SortKey::Cpu => "cpu",
            SortKey::Memory => "memory",
            SortKey::State => "state",
        }
    }
}

impl FromStr for SortKey {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pid" => Ok(SortKey::Pid),
            "name" => Ok(SortKey::Name),
            "user" => Ok(SortKey::User),
            "cpu" | "cpu%" | "cpu_percent" => Ok(SortKey::Cpu),
            "memory" | "mem" | "memory_mb" => Ok(SortKey::Memory),
            "state" | "status" => Ok(SortKey::State),
            other => Err(DashboardError::UnknownColumn(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheduling priority requested for a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Idle,
    BelowNormal,
    Normal,
    AboveNormal,
    High,
    Realtime,
}

impl FromStr for Priority {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        match normalized.as_str() {
            "idle" | "low" => Ok(Priority::Idle),
            "belownormal" => Ok(Priority::BelowNormal),
            "normal" => Ok(Priority::Normal),
            "abovenormal" => Ok(Priority::AboveNormal),
            "high" => Ok(Priority::High),
            "realtime" => Ok(Priority::Realtime),
            _ => Err(DashboardError::UnknownPriority(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Idle => "Idle",
            Priority::BelowNormal => "Below Normal",
            Priority::Normal => "Normal",
            Priority::AboveNormal => "Above Normal",
            Priority::High => "High",
            Priority::Realtime => "Realtime",
        };
        f.write_str(label)
    }
}

/// User-controlled table state. Survives ticks; only user actions change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub sort_key: SortKey,
    pub sort_descending: bool,
    pub selected_pid: Option<u32>,
    pub search_query: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sort_key: SortKey::Cpu,
            sort_descending: true,
            selected_pid: None,
            search_query: String::new(),
        }
    }
}

impl ViewState {
    /// Clicking the active column flips direction; a new column starts descending.
    pub fn toggle_or_set(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_descending = !self.sort_descending;
        } else {
            self.sort_key = key;
            self.sort_descending = true;
        }
    }
}

/// One projected table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRow {
    pub pid: u32,
    pub name: String,
    pub user: String,
    pub cpu_percent: f64,
    pub memory_mb: f64,
    pub state: ProcessState,
    pub selected: bool,
    pub highlighted: bool,
}

impl ProcessRow {
    pub fn from_process(proc: &ProcessInfo) -> Self {
        Self {
            pid: proc.pid,
            name: proc.name.clone(),
            user: proc.user.clone(),
            cpu_percent: proc.cpu_percent,
            memory_mb: proc.memory_mb,
            state: proc.state,
            selected: false,
            highlighted: false,
        }
    }
}
