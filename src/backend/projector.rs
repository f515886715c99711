use crate::model::{ProcessInfo, ProcessRow, SortKey, ViewState};
use std::cmp::Ordering;

use super::ProcessRegistry;

/// Builds the table rows for the current registry contents and view state.
///
/// Rows are stably sorted on `view.sort_key`; equal keys keep registry order in both
/// directions. Each row is annotated with selection and search-highlight flags.
pub fn project(registry: &ProcessRegistry, view: &ViewState) -> Vec<ProcessRow> {
    let mut procs: Vec<&ProcessInfo> = registry.processes().iter().collect();
    procs.sort_by(|a, b| {
        let ord = compare(a, b, view.sort_key);
        if view.sort_descending {
            ord.reverse()
        } else {
            ord
        }
    });

    let query = normalize_query(&view.search_query);
    procs
        .into_iter()
        .map(|p| {
            let mut row = ProcessRow::from_process(p);
            row.selected = view.selected_pid == Some(p.pid);
            row.highlighted = query
                .as_deref()
                .map(|q| matches_query(&row, q))
                .unwrap_or(false);
            row
        })
        .collect()
}

/// Rows whose pid, name, or user contains `query` (case-insensitive), in row order.
/// A blank query matches nothing.
pub fn search<'a>(rows: &'a [ProcessRow], query: &str) -> Vec<&'a ProcessRow> {
    match normalize_query(query) {
        Some(q) => rows.iter().filter(|row| matches_query(row, &q)).collect(),
        None => Vec::new(),
    }
}

fn normalize_query(query: &str) -> Option<String> {
    let q = query.trim();
    if q.is_empty() {
        None
    } else {
        Some(q.to_lowercase())
    }
}

fn matches_query(row: &ProcessRow, query: &str) -> bool {
    row.pid.to_string().contains(query)
        || row.name.to_lowercase().contains(query)
        || row.user.to_lowercase().contains(query)
}

fn compare(a: &ProcessInfo, b: &ProcessInfo, key: SortKey) -> Ordering {
    match key {
        SortKey::Pid => a.pid.cmp(&b.pid),
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::User => a.user.cmp(&b.user),
        SortKey::Cpu => a.cpu_percent.total_cmp(&b.cpu_percent),
        SortKey::Memory => a.memory_mb.total_cmp(&b.memory_mb),
        SortKey::State => a.state.code().cmp(&b.state.code()),
    }
}
