use std::cell::RefCell;
use std::rc::Rc;

use host_dashboard::backend::{RandomSampler, SamplingProvider};
use host_dashboard::clock::Clock;
use host_dashboard::model::{
    AlertKind, CpuInfo, MemoryInfo, ProcessInfo, ProcessState, SortKey, SystemSnapshot,
};
use host_dashboard::{Config, Dashboard, DashboardError};

struct StaticClock;

impl Clock for StaticClock {
    fn now_label(&self) -> String {
        "08:30:00".into()
    }
}

/// Always reports the same host reading.
struct Steady {
    cpu: f64,
    used_gb: f64,
    processes: Vec<ProcessInfo>,
}

impl SamplingProvider for Steady {
    fn sample(&mut self, _previous: Option<&SystemSnapshot>) -> SystemSnapshot {
        SystemSnapshot {
            cpu: CpuInfo {
                total_percent: self.cpu,
                core_count: 4,
                thread_count: 8,
                frequency_ghz: 2.5,
            },
            memory: MemoryInfo {
                total_gb: 16.0,
                used_gb: self.used_gb,
            },
            processes: self.processes.clone(),
            taken_at: String::new(),
        }
    }
}

fn proc(pid: u32, name: &str, cpu: f64, state: ProcessState) -> ProcessInfo {
    ProcessInfo {
        pid,
        name: name.into(),
        user: "user".into(),
        cpu_percent: cpu,
        memory_mb: 2.5,
        state,
    }
}

fn steady(cpu: f64, used_gb: f64) -> Dashboard {
    let sampler = Steady {
        cpu,
        used_gb,
        processes: vec![
            proc(1, "node", 10.0, ProcessState::Running),
            proc(2, "chrome", 50.0, ProcessState::Sleeping),
            proc(3, "bash", 30.0, ProcessState::Zombie),
        ],
    };
    Dashboard::new(Box::new(sampler), Box::new(StaticClock), &Config::default())
}

#[test]
fn random_host_respects_invariants_over_many_ticks() {
    let config = Config::default();
    let sampler = RandomSampler::seeded(2024, config.memory_total_gb, config.process_count);
    let mut dashboard = Dashboard::new(Box::new(sampler), Box::new(StaticClock), &config);

    for tick in 1..=150usize {
        dashboard.tick();
        let snap = dashboard.last_snapshot().unwrap();
        assert!((0.0..=100.0).contains(&snap.cpu.total_percent));
        assert!(snap.memory.used_gb >= 0.0 && snap.memory.used_gb <= snap.memory.total_gb);
        assert_eq!(snap.taken_at, "08:30:00");

        assert_eq!(dashboard.history().cpu.len(), tick.min(60));
        assert_eq!(dashboard.history().memory.len(), tick.min(60));
        assert!(dashboard.alerts().len() <= 20);

        let counts = dashboard.counts();
        assert_eq!(counts.total, 50);
        assert_eq!(counts.running + counts.sleeping + counts.other, counts.total);
        assert_eq!(dashboard.rows().len(), 50);
    }
}

#[test]
fn memory_history_records_percent_not_gigabytes() {
    let mut dashboard = steady(20.0, 13.0);
    dashboard.tick();
    dashboard.tick();

    let history = dashboard.history();
    assert_eq!(history.memory.values(), vec![81.3, 81.3]);
    assert_eq!(history.cpu.values(), vec![20.0, 20.0]);
    // 81.3% is above the 80% memory threshold
    let alerts = dashboard.alerts();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].details.as_deref(), Some("Memory usage is 81.3%"));
}

#[test]
fn sustained_overload_fills_and_caps_alert_log() {
    let mut dashboard = steady(85.0, 14.0);
    for _ in 0..15 {
        dashboard.tick();
    }
    let alerts = dashboard.alerts();
    assert_eq!(alerts.len(), 20);
    assert!(alerts.iter().all(|a| a.kind == AlertKind::Warning));
    assert_eq!(alerts.last().unwrap().message, "High Memory Usage");
    assert_eq!(alerts.last().unwrap().details.as_deref(), Some("Memory usage is 87.5%"));

    dashboard.clear_alerts();
    assert!(dashboard.alerts().is_empty());
}

#[test]
fn kill_scenario_from_table_view() {
    let mut dashboard = steady(20.0, 4.0);
    let views: Rc<RefCell<Vec<Vec<u32>>>> = Rc::default();
    let sink = views.clone();
    dashboard.on_view_changed(move |rows| {
        sink.borrow_mut().push(rows.iter().map(|r| r.pid).collect())
    });

    dashboard.tick();
    dashboard.kill(2).unwrap();
    assert_eq!(dashboard.kill(2).unwrap_err(), DashboardError::NotFound(2));

    assert_eq!(*views.borrow(), vec![vec![2, 3, 1], vec![3, 1]]);
    let alerts = dashboard.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Success);
    assert_eq!(alerts[0].details.as_deref(), Some("PID: 2"));

    // the next sample brings the full table back
    dashboard.tick();
    assert_eq!(dashboard.registry().len(), 3);
}

#[test]
fn view_state_survives_ticks() {
    let mut dashboard = steady(20.0, 4.0);
    dashboard.tick();
    dashboard.sort(SortKey::Name);
    dashboard.select_row(1).unwrap();
    dashboard.search("CHR").unwrap();

    dashboard.tick();
    let view = dashboard.view();
    assert_eq!(view.sort_key, SortKey::Name);
    assert!(view.sort_descending);
    assert_eq!(view.selected_pid, Some(1));
    assert_eq!(view.search_query, "CHR");

    let rows = dashboard.rows();
    let order: Vec<u32> = rows.iter().map(|r| r.pid).collect();
    assert_eq!(order, vec![1, 2, 3]);
    assert!(rows[0].selected);
    assert!(rows[1].highlighted);
}
