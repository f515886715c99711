use crate::model::{ProcessCounts, ProcessInfo};

/// Current process table. Replaced wholesale every tick; kills remove entries in between.
#[derive(Debug, Clone, Default)]
pub struct ProcessRegistry {
    processes: Vec<ProcessInfo>,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, processes: Vec<ProcessInfo>) {
        self.processes = processes;
    }

    /// Removes the process with `pid`. Returns the removed entry, or `None` if it was already gone.
    pub fn remove(&mut self, pid: u32) -> Option<ProcessInfo> {
        let idx = self.processes.iter().position(|p| p.pid == pid)?;
        Some(self.processes.remove(idx))
    }

    pub fn find(&self, pid: u32) -> Option<&ProcessInfo> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    pub fn contains(&self, pid: u32) -> bool {
        self.find(pid).is_some()
    }

    pub fn counts(&self) -> ProcessCounts {
        ProcessCounts::tally(&self.processes)
    }

    pub fn processes(&self) -> &[ProcessInfo] {
        &self.processes
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}
