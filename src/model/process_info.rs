use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessState {
    Running,
    Sleeping,
    Zombie,
    Stopped,
}

impl ProcessState {
    pub const ALL: [ProcessState; 4] = [
        ProcessState::Running,
        ProcessState::Sleeping,
        ProcessState::Zombie,
        ProcessState::Stopped,
    ];

    /// One-letter code as shown in the state column (ps-style).
    pub fn code(self) -> char {
        match self {
            ProcessState::Running => 'R',
            ProcessState::Sleeping => 'S',
            ProcessState::Zombie => 'Z',
            ProcessState::Stopped => 'T',
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessState::Running => write!(f, "Running"),
            ProcessState::Sleeping => write!(f, "Sleeping"),
            ProcessState::Zombie => write!(f, "Zombie"),
            ProcessState::Stopped => write!(f, "Stopped"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    pub user: String,
    pub cpu_percent: f64,
    pub memory_mb: f64,
    pub state: ProcessState,
}

impl Default for ProcessInfo {
    fn default() -> Self {
        Self {
            pid: 0,
            name: String::new(),
            user: String::new(),
            cpu_percent: 0.0,
            memory_mb: 0.0,
            state: ProcessState::Sleeping,
        }
    }
}

/// Per-state tally of the process table. Zombie and stopped processes fold into `other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessCounts {
    pub total: usize,
    pub running: usize,
    pub sleeping: usize,
    pub other: usize,
}

impl ProcessCounts {
    pub fn tally(processes: &[ProcessInfo]) -> Self {
        let total = processes.len();
        let running = processes
            .iter()
            .filter(|p| p.state == ProcessState::Running)
            .count();
        let sleeping = processes
            .iter()
            .filter(|p| p.state == ProcessState::Sleeping)
            .count();
        Self {
            total,
            running,
            sleeping,
            other: total - running - sleeping,
        }
    }
}
