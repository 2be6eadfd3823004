//! Text formatting utilities for the status bar.

use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory()),
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    match sys.process(Pid::from_u32(std::process::id())) {
        Some(process) => process.memory() as f64 / (1024.0 * 1024.0),
        None => 0.0,
    }
}

/// Formats memory usage in MB as a human-readable string.
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

/// `1 node`, `3 nodes`.
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_memory() {
        assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
        assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "edge"), "1 edge");
        assert_eq!(pluralize(0, "edge"), "0 edges");
    }
}
