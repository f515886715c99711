/// Source of wall-clock labels for snapshots and alerts.
pub trait Clock {
    fn now_label(&self) -> String;
}

/// Local time formatted as `HH:MM:SS`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_label(&self) -> String {
        chrono::Local::now().format("%H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_hh_mm_ss() {
        let label = SystemClock.now_label();
        assert_eq!(label.len(), 8);
        assert_eq!(label.matches(':').count(), 2);
    }
}
