pub mod app;
pub mod backend;
pub mod clock;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod scheduler;

pub use command::Command;
pub use config::Config;
pub use controller::{Dashboard, SnapshotUpdate};
pub use error::{DashboardError, Result};
