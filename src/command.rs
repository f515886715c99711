use crate::error::DashboardError;
use crate::model::{Priority, SortKey};
use std::str::FromStr;

/// A user action delivered to the dashboard between ticks.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Refresh,
    Kill(u32),
    KillSelected,
    SetPriority(u32, Priority),
    Sort(SortKey),
    Search(String),
    ClearSearch,
    Select(u32),
    ClearAlerts,
    Theme(bool),
    Quit,
}

impl FromStr for Command {
    type Err = DashboardError;

    /// Parses one line of console input, e.g. `kill 1003`, `sort cpu`, `priority 1001 high`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let unknown = || DashboardError::UnknownCommand(line.to_string());
        let pid = |s: &str| s.parse::<u32>().map_err(|_| unknown());

        match verb.to_lowercase().as_str() {
            "refresh" | "r" => Ok(Command::Refresh),
            "kill" if rest.is_empty() => Ok(Command::KillSelected),
            "kill" => Ok(Command::Kill(pid(rest)?)),
            "priority" | "nice" => {
                let (target, level) = rest.split_once(char::is_whitespace).ok_or_else(unknown)?;
                Ok(Command::SetPriority(pid(target)?, level.parse()?))
            }
            "sort" => Ok(Command::Sort(rest.parse()?)),
            "search" | "find" | "/" if rest.is_empty() => Ok(Command::ClearSearch),
            "search" | "find" | "/" => Ok(Command::Search(rest.to_string())),
            "select" => Ok(Command::Select(pid(rest)?)),
            "clear" => Ok(Command::ClearAlerts),
            "theme" => match rest.to_lowercase().as_str() {
                "dark" | "on" => Ok(Command::Theme(true)),
                "light" | "off" => Ok(Command::Theme(false)),
                _ => Err(unknown()),
            },
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(unknown()),
        }
    }
}
