use crate::model::{CpuInfo, MemoryInfo, ProcessInfo, ProcessState, SystemSnapshot};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const PROCESS_NAMES: [&str; 8] = [
    "chrome", "node", "python", "mysqld", "bash", "systemd", "docker", "vscode",
];
const PROCESS_USERS: [&str; 5] = ["root", "user", "system", "mysql", "docker"];

const FIRST_PID: u32 = 1000;
const CPU_STEP: f64 = 5.0;
const MEMORY_STEP_GB: f64 = 1.0;
const MAX_PROCESS_CPU: f64 = 30.0;
const MAX_PROCESS_MEMORY_MB: f64 = 5.0;

/// Anything that can produce the next system snapshot. The dashboard only sees this trait,
/// so a real metrics backend or a scripted test source can stand in for the simulator.
pub trait SamplingProvider {
    fn sample(&mut self, previous: Option<&SystemSnapshot>) -> SystemSnapshot;
}

/// Simulated host: CPU and memory follow a bounded random walk, the process table is
/// redrawn from fixed vocabularies on every call.
pub struct RandomSampler<R: Rng = StdRng> {
    rng: R,
    memory_total_gb: f64,
    process_count: usize,
    core_count: usize,
    thread_count: usize,
}

impl RandomSampler<StdRng> {
    pub fn new(memory_total_gb: f64, process_count: usize) -> Self {
        Self::with_rng(StdRng::from_entropy(), memory_total_gb, process_count)
    }

    pub fn seeded(seed: u64, memory_total_gb: f64, process_count: usize) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), memory_total_gb, process_count)
    }
}

impl<R: Rng> RandomSampler<R> {
    pub fn with_rng(rng: R, memory_total_gb: f64, process_count: usize) -> Self {
        Self {
            rng,
            memory_total_gb: memory_total_gb.max(0.0),
            process_count,
            core_count: num_cpus::get_physical().max(1),
            thread_count: num_cpus::get().max(1),
        }
    }

    fn next_cpu(&mut self, previous: f64) -> f64 {
        let delta = self.rng.gen_range(-CPU_STEP..=CPU_STEP);
        (previous + delta).clamp(0.0, 100.0)
    }

    fn next_memory(&mut self, previous: f64) -> f64 {
        let delta = self.rng.gen_range(-MEMORY_STEP_GB..=MEMORY_STEP_GB);
        (previous + delta).clamp(0.0, self.memory_total_gb)
    }

    fn processes(&mut self) -> Vec<ProcessInfo> {
        (0..self.process_count)
            .map(|i| ProcessInfo {
                pid: FIRST_PID + i as u32,
                name: pick(&mut self.rng, &PROCESS_NAMES),
                user: pick(&mut self.rng, &PROCESS_USERS),
                cpu_percent: round_tenth(self.rng.gen_range(0.0..MAX_PROCESS_CPU)),
                memory_mb: round_tenth(self.rng.gen_range(0.0..MAX_PROCESS_MEMORY_MB)),
                state: *ProcessState::ALL
                    .choose(&mut self.rng)
                    .unwrap_or(&ProcessState::Sleeping),
            })
            .collect()
    }
}

impl<R: Rng> SamplingProvider for RandomSampler<R> {
    fn sample(&mut self, previous: Option<&SystemSnapshot>) -> SystemSnapshot {
        let prev_cpu = previous.map(|s| s.cpu.total_percent).unwrap_or(0.0);
        let prev_used = previous.map(|s| s.memory.used_gb).unwrap_or(0.0);

        let total_percent = self.next_cpu(prev_cpu);
        let used_gb = self.next_memory(prev_used);
        let frequency_ghz = round_hundredth(2.0 + self.rng.gen_range(0.0..1.0));

        SystemSnapshot {
            cpu: CpuInfo {
                total_percent,
                core_count: self.core_count,
                thread_count: self.thread_count,
                frequency_ghz,
            },
            memory: MemoryInfo {
                total_gb: self.memory_total_gb,
                used_gb,
            },
            processes: self.processes(),
            taken_at: String::new(),
        }
    }
}

fn pick<R: Rng>(rng: &mut R, words: &[&str]) -> String {
    words.choose(rng).copied().unwrap_or("unknown").to_string()
}

fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round_hundredth(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
