use sysinfo::System;

use crate::model::HostInfo;

/// Host name and OS description of the machine running the dashboard.
/// Missing values fall back to `HostInfo::default()`.
pub fn detect_host() -> HostInfo {
    let fallback = HostInfo::default();
    let host = HostInfo {
        hostname: System::host_name()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(fallback.hostname),
        os: System::long_os_version()
            .or_else(System::name)
            .unwrap_or(fallback.os),
    };
    log::debug!("Host: {} ({})", host.hostname, host.os);
    host
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detected_host_is_never_blank() {
        let host = detect_host();
        assert!(!host.hostname.trim().is_empty());
        assert!(!host.os.is_empty());
    }
}
