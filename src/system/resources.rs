//! System memory and CPU detection

/// Total physical memory in MB (best effort)
pub fn total_memory_mb() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        let meminfo = std::fs::read_to_string("/proc/meminfo").ok()?;
        parse_meminfo_total_mb(&meminfo)
    }

    #[cfg(target_os = "macos")]
    {
        let out = super::gpu::run("sysctl", &["-n", "hw.memsize"])?;
        parse_memsize_mb(&out)
    }

    #[cfg(target_os = "windows")]
    {
        let out = super::gpu::run("wmic", &["OS", "get", "TotalVisibleMemorySize", "/Value"])?;
        parse_wmic_total_memory_mb(&out)
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        None
    }
}

/// Logical CPU count
pub fn cpu_count() -> Option<usize> {
    std::thread::available_parallelism().ok().map(|n| n.get())
}

/// Parse the `MemTotal:` line of /proc/meminfo (reported in kB)
pub fn parse_meminfo_total_mb(meminfo: &str) -> Option<u64> {
    let line = meminfo.lines().find(|l| l.starts_with("MemTotal:"))?;
    let kb = line
        .trim_start_matches("MemTotal:")
        .split_whitespace()
        .next()?
        .parse::<u64>()
        .ok()?;
    Some(kb / 1024)
}

/// Parse `sysctl -n hw.memsize` (bytes)
pub fn parse_memsize_mb(out: &str) -> Option<u64> {
    let bytes = out.trim().parse::<u64>().ok()?;
    Some(bytes / 1024 / 1024)
}

/// Parse `wmic OS get TotalVisibleMemorySize /Value` (kB)
pub fn parse_wmic_total_memory_mb(out: &str) -> Option<u64> {
    out.lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("TotalVisibleMemorySize="))
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(|kb| kb / 1024)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meminfo() {
        let meminfo = "MemTotal:       16318464 kB\nMemFree:         1234567 kB\n";
        assert_eq!(parse_meminfo_total_mb(meminfo), Some(15936));
        assert_eq!(parse_meminfo_total_mb("MemFree: 12 kB"), None);
    }

    #[test]
    fn test_parse_memsize() {
        assert_eq!(parse_memsize_mb("17179869184\n"), Some(16384));
        assert_eq!(parse_memsize_mb("unknown"), None);
    }

    #[test]
    fn test_parse_wmic_total_memory() {
        let out = "\r\n\r\nTotalVisibleMemorySize=33476724\r\n\r\n";
        assert_eq!(parse_wmic_total_memory_mb(out), Some(32692));
        assert_eq!(parse_wmic_total_memory_mb(""), None);
    }

    #[test]
    fn test_cpu_count_is_positive() {
        if let Some(count) = cpu_count() {
            assert!(count >= 1);
        }
    }
}
