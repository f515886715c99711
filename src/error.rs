use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Process not found (PID {0})")]
    NotFound(u32),

    #[error("Search query is empty")]
    EmptySearch,

    #[error("No matching processes found for '{0}'")]
    NoMatch(String),

    #[error("No process selected")]
    NoSelection,

    #[error("Unknown sort column '{0}'")]
    UnknownColumn(String),

    #[error("Unknown priority level '{0}'")]
    UnknownPriority(String),

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
