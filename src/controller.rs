use crate::backend::{
    detect_host, project, AlertEngine, AlertLog, MetricHistory, ProcessRegistry, RandomSampler,
    SamplingProvider,
};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::{DashboardError, Result};
use crate::model::{
    Alert, HostInfo, Priority, ProcessCounts, ProcessInfo, ProcessRow, SortKey, SystemSnapshot,
    ViewState,
};

/// Everything a chart/number redraw needs after a tick.
#[derive(Debug)]
pub struct SnapshotUpdate<'a> {
    pub host: &'a HostInfo,
    pub snapshot: &'a SystemSnapshot,
    pub counts: ProcessCounts,
    pub history: &'a MetricHistory,
}

type SnapshotCallback = Box<dyn FnMut(&SnapshotUpdate<'_>)>;
type AlertsCallback = Box<dyn FnMut(&[Alert])>;
type ViewCallback = Box<dyn FnMut(&[ProcessRow])>;
type ThemeCallback = Box<dyn FnMut(bool)>;

#[derive(Default)]
struct Observers {
    snapshot: Vec<SnapshotCallback>,
    alerts: Vec<AlertsCallback>,
    view: Vec<ViewCallback>,
    theme: Vec<ThemeCallback>,
}

/// Owns the whole dashboard state and applies ticks and user commands to it.
/// Every mutation runs to completion before the next one starts.
pub struct Dashboard {
    sampler: Box<dyn SamplingProvider>,
    clock: Box<dyn Clock>,
    host: HostInfo,
    engine: AlertEngine,
    history: MetricHistory,
    registry: ProcessRegistry,
    alerts: AlertLog,
    view: ViewState,
    rows: Vec<ProcessRow>,
    last_snapshot: Option<SystemSnapshot>,
    dark_mode: bool,
    ticks: u64,
    observers: Observers,
}

impl Dashboard {
    pub fn new(
        sampler: Box<dyn SamplingProvider>,
        clock: Box<dyn Clock>,
        config: &Config,
    ) -> Self {
        Self {
            sampler,
            clock,
            host: HostInfo::default(),
            engine: AlertEngine::with_thresholds(
                config.cpu_alert_threshold,
                config.memory_alert_threshold,
            ),
            history: MetricHistory::new(config.history_capacity),
            registry: ProcessRegistry::new(),
            alerts: AlertLog::new(config.alert_log_capacity),
            view: ViewState {
                sort_key: config.sort_key(),
                sort_descending: config.sort_descending,
                ..Default::default()
            },
            rows: Vec::new(),
            last_snapshot: None,
            dark_mode: config.dark_mode,
            ticks: 0,
            observers: Observers::default(),
        }
    }

    /// Simulated host sampled against the local wall clock, labelled with the
    /// real host name and OS.
    pub fn from_config(config: &Config) -> Self {
        let sampler = RandomSampler::new(config.memory_total_gb, config.process_count);
        Self::new(Box::new(sampler), Box::new(SystemClock), config).with_host(detect_host())
    }

    pub fn with_host(mut self, host: HostInfo) -> Self {
        self.host = host;
        self
    }

    pub fn on_snapshot(&mut self, callback: impl FnMut(&SnapshotUpdate<'_>) + 'static) {
        self.observers.snapshot.push(Box::new(callback));
    }

    pub fn on_alerts_changed(&mut self, callback: impl FnMut(&[Alert]) + 'static) {
        self.observers.alerts.push(Box::new(callback));
    }

    pub fn on_view_changed(&mut self, callback: impl FnMut(&[ProcessRow]) + 'static) {
        self.observers.view.push(Box::new(callback));
    }

    pub fn on_theme_changed(&mut self, callback: impl FnMut(bool) + 'static) {
        self.observers.theme.push(Box::new(callback));
    }

    /// Samples, records history, evaluates alert rules and re-projects the table.
    /// Observers see the finished snapshot before alert and view notifications.
    pub fn tick(&mut self) {
        let mut snapshot = self.sampler.sample(self.last_snapshot.as_ref());
        snapshot.taken_at = self.clock.now_label();

        self.history.update(&snapshot);
        self.registry.replace(snapshot.processes.clone());

        let fired = self.engine.evaluate(&snapshot, &snapshot.taken_at);
        for alert in &fired {
            log::warn!(
                "{}: {}",
                alert.message,
                alert.details.as_deref().unwrap_or_default()
            );
        }
        let alerts_changed = !fired.is_empty();
        for alert in fired {
            self.alerts.record(alert);
        }

        let update = SnapshotUpdate {
            host: &self.host,
            snapshot: &snapshot,
            counts: self.registry.counts(),
            history: &self.history,
        };
        for cb in self.observers.snapshot.iter_mut() {
            cb(&update);
        }
        if alerts_changed {
            self.emit_alerts();
        }
        self.reproject();

        log::debug!(
            "Tick {} at {}: cpu {:.1}%, memory {:.1}%, {} processes",
            self.ticks + 1,
            snapshot.taken_at,
            snapshot.cpu.total_percent,
            snapshot.memory.percent(),
            self.registry.len()
        );

        self.last_snapshot = Some(snapshot);
        self.ticks += 1;
    }

    /// Removes the process and logs a confirmation alert. An absent pid changes nothing.
    pub fn kill(&mut self, pid: u32) -> Result<ProcessInfo> {
        let Some(proc) = self.registry.remove(pid) else {
            log::debug!("Kill ignored: PID {} not in process table", pid);
            return Err(DashboardError::NotFound(pid));
        };
        log::info!("Killed PID {} ({})", pid, proc.name);

        if self.view.selected_pid == Some(pid) {
            self.view.selected_pid = None;
        }
        let alert = Alert::success(
            "Process Terminated",
            format!("PID: {}", pid),
            self.clock.now_label(),
        );
        self.alerts.record(alert);
        self.emit_alerts();
        self.reproject();
        Ok(proc)
    }

    pub fn kill_selected(&mut self) -> Result<ProcessInfo> {
        let pid = self.view.selected_pid.ok_or(DashboardError::NoSelection)?;
        self.kill(pid)
    }

    /// Records the requested priority. The process table itself is not modified.
    pub fn set_priority(&mut self, pid: u32, level: Priority) -> Result<()> {
        let Some(proc) = self.registry.find(pid) else {
            log::debug!("Priority change ignored: PID {} not in process table", pid);
            return Err(DashboardError::NotFound(pid));
        };
        log::info!("Set PID {} ({}) priority to {}", pid, proc.name, level);

        let alert = Alert::success(
            "Priority Set",
            format!("PID: {}, Priority: {}", pid, level),
            self.clock.now_label(),
        );
        self.alerts.record(alert);
        self.emit_alerts();
        Ok(())
    }

    pub fn sort(&mut self, key: SortKey) {
        self.view.toggle_or_set(key);
        log::info!(
            "Sorting by {} ({})",
            self.view.sort_key,
            if self.view.sort_descending { "descending" } else { "ascending" }
        );
        self.reproject();
    }

    /// Highlights rows matching `query` and returns their pids in table order.
    /// The table is not filtered.
    pub fn search(&mut self, query: &str) -> Result<Vec<u32>> {
        if query.trim().is_empty() {
            return Err(DashboardError::EmptySearch);
        }
        self.view.search_query = query.trim().to_string();
        self.reproject();

        let matches: Vec<u32> = self
            .rows
            .iter()
            .filter(|row| row.highlighted)
            .map(|row| row.pid)
            .collect();
        if matches.is_empty() {
            log::info!("No processes match '{}'", self.view.search_query);
            return Err(DashboardError::NoMatch(self.view.search_query.clone()));
        }
        Ok(matches)
    }

    pub fn clear_search(&mut self) {
        if self.view.search_query.is_empty() {
            return;
        }
        self.view.search_query.clear();
        self.reproject();
    }

    pub fn select_row(&mut self, pid: u32) -> Result<()> {
        if !self.registry.contains(pid) {
            log::debug!("Select ignored: PID {} not in process table", pid);
            return Err(DashboardError::NotFound(pid));
        }
        self.view.selected_pid = Some(pid);
        self.reproject();
        Ok(())
    }

    pub fn clear_alerts(&mut self) {
        self.alerts.clear();
        self.emit_alerts();
    }

    pub fn toggle_theme(&mut self, is_dark: bool) {
        self.dark_mode = is_dark;
        for cb in self.observers.theme.iter_mut() {
            cb(is_dark);
        }
    }

    pub fn host(&self) -> &HostInfo {
        &self.host
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn rows(&self) -> &[ProcessRow] {
        &self.rows
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.entries()
    }

    pub fn history(&self) -> &MetricHistory {
        &self.history
    }

    pub fn registry(&self) -> &ProcessRegistry {
        &self.registry
    }

    pub fn counts(&self) -> ProcessCounts {
        self.registry.counts()
    }

    pub fn last_snapshot(&self) -> Option<&SystemSnapshot> {
        self.last_snapshot.as_ref()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    fn emit_alerts(&mut self) {
        let entries = self.alerts.entries();
        for cb in self.observers.alerts.iter_mut() {
            cb(&entries);
        }
    }

    fn reproject(&mut self) {
        self.rows = project(&self.registry, &self.view);
        for cb in self.observers.view.iter_mut() {
            cb(&self.rows);
        }
    }
}
