mod alert;
mod process_info;
mod system_snapshot;
mod view_state;

pub use alert::{Alert, AlertKind};
pub use process_info::{ProcessCounts, ProcessInfo, ProcessState};
pub use system_snapshot::*;
pub use view_state::{Priority, ProcessRow, SortKey, ViewState};
