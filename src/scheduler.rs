use crate::command::Command;
use crate::config::Config;
use crate::controller::Dashboard;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Drives the dashboard: one tick per refresh interval, commands applied in between.
/// All dashboard mutation happens on the thread calling [`Scheduler::run`].
pub struct Scheduler {
    dashboard: Dashboard,
    commands: flume::Receiver<Command>,
    interval: Duration,
    config: Config,
    config_path: Option<PathBuf>,
}

impl Scheduler {
    pub fn new(dashboard: Dashboard, commands: flume::Receiver<Command>, config: Config) -> Self {
        let interval = Duration::from_millis(config.refresh_interval_ms.max(1));
        Self {
            dashboard,
            commands,
            interval,
            config,
            config_path: None,
        }
    }

    /// Persist theme changes to this file.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Runs until `Command::Quit` arrives or every sender is dropped, then hands the
    /// dashboard back. An in-flight tick or command always completes first.
    pub fn run(mut self) -> Dashboard {
        log::info!("Dashboard started, refreshing every {:?}", self.interval);
        self.dashboard.tick();
        let mut next_tick = Instant::now() + self.interval;

        loop {
            match self.commands.recv_deadline(next_tick) {
                Ok(Command::Quit) => break,
                Ok(Command::Refresh) => {
                    self.dashboard.tick();
                    next_tick = Instant::now() + self.interval;
                }
                Ok(command) => self.apply(command),
                Err(flume::RecvTimeoutError::Timeout) => {
                    self.dashboard.tick();
                    next_tick = Instant::now() + self.interval;
                }
                Err(flume::RecvTimeoutError::Disconnected) => {
                    log::info!("Command channel closed, shutting down");
                    break;
                }
            }
        }

        log::info!("Dashboard stopped after {} ticks", self.dashboard.tick_count());
        self.dashboard
    }

    fn apply(&mut self, command: Command) {
        let outcome = match command {
            Command::Kill(pid) => self.dashboard.kill(pid).map(|_| ()),
            Command::KillSelected => self.dashboard.kill_selected().map(|_| ()),
            Command::SetPriority(pid, level) => self.dashboard.set_priority(pid, level),
            Command::Sort(key) => {
                self.dashboard.sort(key);
                Ok(())
            }
            Command::Search(query) => self.dashboard.search(&query).map(|pids| {
                log::info!("'{}' matched {} processes", query, pids.len());
            }),
            Command::ClearSearch => {
                self.dashboard.clear_search();
                Ok(())
            }
            Command::Select(pid) => self.dashboard.select_row(pid),
            Command::ClearAlerts => {
                self.dashboard.clear_alerts();
                Ok(())
            }
            Command::Theme(is_dark) => {
                self.dashboard.toggle_theme(is_dark);
                self.persist_theme(is_dark);
                Ok(())
            }
            Command::Refresh | Command::Quit => Ok(()),
        };

        if let Err(e) = outcome {
            log::info!("{}", e);
        }
    }

    fn persist_theme(&mut self, is_dark: bool) {
        self.config.dark_mode = is_dark;
        if let Some(path) = &self.config_path {
            self.config.save_to(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RandomSampler;
    use crate::clock::SystemClock;

    fn scheduler(config: Config) -> (Scheduler, flume::Sender<Command>) {
        let (tx, rx) = flume::unbounded();
        let sampler = RandomSampler::seeded(3, config.memory_total_gb, config.process_count);
        let dashboard = Dashboard::new(Box::new(sampler), Box::new(SystemClock), &config);
        (Scheduler::new(dashboard, rx, config), tx)
    }

    fn slow_config() -> Config {
        Config {
            refresh_interval_ms: 60_000,
            ..Config::default()
        }
    }

    #[test]
    fn applies_queued_commands_in_order() {
        let (sched, tx) = scheduler(slow_config());
        tx.send(Command::Select(1004)).unwrap();
        tx.send(Command::KillSelected).unwrap();
        tx.send(Command::Kill(1004)).unwrap();
        tx.send(Command::Sort(crate::model::SortKey::Pid)).unwrap();
        tx.send(Command::Quit).unwrap();

        let dashboard = sched.run();
        assert_eq!(dashboard.tick_count(), 1);
        assert!(dashboard.registry().find(1004).is_none());
        assert_eq!(dashboard.registry().len(), 49);
        let terminated = dashboard
            .alerts()
            .iter()
            .filter(|a| a.message == "Process Terminated")
            .count();
        assert_eq!(terminated, 1);
        assert_eq!(dashboard.rows().first().map(|r| r.pid), Some(1049));
    }

    #[test]
    fn refresh_ticks_immediately() {
        let (sched, tx) = scheduler(slow_config());
        tx.send(Command::Refresh).unwrap();
        tx.send(Command::Refresh).unwrap();
        drop(tx);

        let dashboard = sched.run();
        assert_eq!(dashboard.tick_count(), 3);
        assert_eq!(dashboard.history().cpu.len(), 3);
    }

    #[test]
    fn timer_ticks_without_commands() {
        let config = Config {
            refresh_interval_ms: 10,
            ..Config::default()
        };
        let (sched, tx) = scheduler(config);
        let sender = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(200));
            tx.send(Command::Quit).unwrap();
        });

        let dashboard = sched.run();
        sender.join().unwrap();
        assert!(dashboard.tick_count() > 2);
    }

    #[test]
    fn theme_change_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let (sched, tx) = scheduler(slow_config());
        let sched = sched.with_config_path(path.clone());
        tx.send(Command::Theme(true)).unwrap();
        tx.send(Command::Quit).unwrap();

        let dashboard = sched.run();
        assert!(dashboard.dark_mode());
        assert!(Config::load_from(&path).dark_mode);
    }
}
