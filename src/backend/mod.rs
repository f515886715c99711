pub mod alerts;
pub mod history;
pub mod host;
pub mod projector;
pub mod registry;
pub mod sampler;

pub use alerts::{AlertEngine, AlertLog, Metric, ThresholdRule};
pub use history::{HistoryBuffer, MetricHistory};
pub use host::detect_host;
pub use projector::{project, search};
pub use registry::ProcessRegistry;
pub use sampler::{RandomSampler, SamplingProvider};
