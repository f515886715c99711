use std::io::{self, BufRead};
use std::thread;

use crate::command::Command;
use crate::config::{self, Config};
use crate::controller::{Dashboard, SnapshotUpdate};
use crate::model::{Alert, AlertKind, ProcessRow};
use crate::scheduler::Scheduler;

const TABLE_ROWS: usize = 10;

/// Console front-end: prints each redraw to stdout and reads commands from stdin.
pub struct DashboardApp {
    config: Config,
}

impl DashboardApp {
    pub fn new() -> Self {
        Self {
            config: Config::load(),
        }
    }

    pub fn run(&self) -> i32 {
        let mut dashboard = Dashboard::from_config(&self.config);
        attach_console_renderer(&mut dashboard);

        // The reader owns the only sender: stdin EOF stops the scheduler.
        let (tx, rx) = flume::unbounded();
        if let Err(e) = spawn_command_reader(io::BufReader::new(io::stdin()), tx) {
            log::error!("Failed to spawn stdin reader: {}", e);
            return 1;
        }

        let scheduler = Scheduler::new(dashboard, rx, self.config.clone())
            .with_config_path(config::config_path());
        scheduler.run();
        0
    }
}

impl Default for DashboardApp {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_command_reader<R>(
    input: R,
    tx: flume::Sender<Command>,
) -> io::Result<thread::JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("stdin-commands".into())
        .spawn(move || {
            for line in input.lines() {
                let Ok(line) = line else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Command>() {
                    Ok(command) => {
                        let quit = command == Command::Quit;
                        if tx.send(command).is_err() || quit {
                            break;
                        }
                    }
                    Err(e) => eprintln!("{}", e),
                }
            }
            log::debug!("stdin closed, command reader exiting");
        })
}

fn attach_console_renderer(dashboard: &mut Dashboard) {
    dashboard.on_snapshot(|update| println!("{}", format_summary(update)));
    dashboard.on_alerts_changed(|alerts| {
        if let Some(latest) = alerts.last() {
            println!("{}", format_alert(latest));
        } else {
            println!("alerts cleared");
        }
    });
    dashboard.on_view_changed(|rows| print!("{}", format_table(rows, TABLE_ROWS)));
    dashboard.on_theme_changed(|dark| println!("theme: {}", if dark { "dark" } else { "light" }));
}

fn format_summary(update: &SnapshotUpdate<'_>) -> String {
    let cpu = &update.snapshot.cpu;
    let mem = &update.snapshot.memory;
    let counts = update.counts;
    format!(
        "[{}] {} ({}) | CPU {:.1}% ({} cores / {} threads @ {:.2} GHz) | \
         MEM {:.1}% ({:.1}/{:.0} GB, {:.1} free) | \
         {} processes: {} running, {} sleeping, {} other",
        update.snapshot.taken_at,
        update.host.hostname,
        update.host.os,
        cpu.total_percent,
        cpu.core_count,
        cpu.thread_count,
        cpu.frequency_ghz,
        mem.percent(),
        mem.used_gb,
        mem.total_gb,
        mem.free_gb(),
        counts.total,
        counts.running,
        counts.sleeping,
        counts.other,
    )
}

fn format_alert(alert: &Alert) -> String {
    let tag = match alert.kind {
        AlertKind::Warning => "WARN",
        AlertKind::Success => " OK ",
    };
    match &alert.details {
        Some(details) => format!("[{}] {} {} ({})", alert.timestamp, tag, alert.message, details),
        None => format!("[{}] {} {}", alert.timestamp, tag, alert.message),
    }
}

fn format_table(rows: &[ProcessRow], limit: usize) -> String {
    let mut out = format!(
        "  {:>6} {:<10} {:<8} {:>6} {:>8} {:>5}\n",
        "PID", "NAME", "USER", "CPU%", "MEM", "STATE"
    );
    for row in rows.iter().take(limit) {
        let marker = match (row.selected, row.highlighted) {
            (true, _) => '>',
            (false, true) => '*',
            _ => ' ',
        };
        out.push_str(&format!(
            "{} {:>6} {:<10} {:<8} {:>6.1} {:>5.1} MB {:>5}\n",
            marker,
            row.pid,
            row.name,
            row.user,
            row.cpu_percent,
            row.memory_mb,
            row.state.code(),
        ));
    }
    out
}
