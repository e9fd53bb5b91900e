//! GPU detection
//!
//! Best-effort native lookup of the accelerator name and its memory.

use std::process::Command;

/// GPU information
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpuInfo {
    pub name: String,
    /// 0 when the memory size could not be read
    pub vram_total_mb: u64,
    pub is_available: bool,
}

/// Detect available GPU (best effort)
pub fn detect_gpu() -> Option<GpuInfo> {
    #[cfg(target_os = "macos")]
    {
        if let Some(info) = run("system_profiler", &["SPDisplaysDataType"])
            .and_then(|out| parse_system_profiler(&out))
        {
            return Some(info);
        }
    }

    if let Some(info) = run(
        "nvidia-smi",
        &["--query-gpu=name,memory.total", "--format=csv,noheader,nounits"],
    )
    .and_then(|out| parse_nvidia_smi(&out))
    {
        return Some(info);
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(info) = run(
            "wmic",
            &["path", "Win32_VideoController", "get", "Name,AdapterRAM", "/Format:List"],
        )
        .and_then(|out| parse_wmic_video(&out))
        {
            return Some(info);
        }
    }

    tracing::debug!("No GPU detected");
    None
}

/// Run a command and return its stdout if it succeeded
pub(crate) fn run(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parse `nvidia-smi --query-gpu=name,memory.total --format=csv,noheader,nounits`.
/// Only the first GPU is considered.
pub fn parse_nvidia_smi(stdout: &str) -> Option<GpuInfo> {
    let line = stdout.lines().find(|l| !l.trim().is_empty())?;
    let mut parts = line.split(',').map(str::trim);

    let name = parts.next().filter(|n| !n.is_empty())?.to_string();
    let vram_total_mb = parts.next()?.parse::<u64>().ok()?;

    Some(GpuInfo {
        name,
        vram_total_mb,
        is_available: true,
    })
}

/// Parse `system_profiler SPDisplaysDataType` output.
///
/// Apple Silicon reports no dedicated VRAM; it is left at 0 for the probe
/// to fill with unified memory.
pub fn parse_system_profiler(stdout: &str) -> Option<GpuInfo> {
    let mut gpu_name: Option<String> = None;
    let mut vram_mb: Option<u64> = None;

    for line in stdout.lines() {
        let trimmed = line.trim();

        // "Chipset Model: Apple M2 Pro"
        if let Some(name) = trimmed.strip_prefix("Chipset Model:") {
            let name = name.trim();
            if !name.is_empty() && gpu_name.is_none() {
                gpu_name = Some(name.to_string());
            }
        }

        // "VRAM (Total): 16 GB" or "VRAM (Dynamic, Max): 1536 MB"
        if trimmed.starts_with("VRAM") && vram_mb.is_none() {
            let Some((_, value)) = trimmed.split_once("):") else {
                continue;
            };
            let mut words = value.split_whitespace();
            let amount = words.next().and_then(|v| v.parse::<u64>().ok());
            let unit = words.next().map(|u| u.to_uppercase());
            vram_mb = match (amount, unit.as_deref()) {
                (Some(v), Some("GB")) => Some(v * 1024),
                (Some(v), _) => Some(v),
                _ => None,
            };
        }
    }

    let name = gpu_name?;
    Some(GpuInfo {
        name: format!("{} (Metal)", name),
        vram_total_mb: vram_mb.unwrap_or(0),
        is_available: true,
    })
}

/// Parse `wmic path Win32_VideoController get Name,AdapterRAM /Format:List`
pub fn parse_wmic_video(stdout: &str) -> Option<GpuInfo> {
    let mut name: Option<String> = None;
    let mut adapter_ram_bytes: Option<u64> = None;

    for line in stdout.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("Name=") {
            if !value.trim().is_empty() && name.is_none() {
                name = Some(value.trim().to_string());
            }
        } else if let Some(value) = line.strip_prefix("AdapterRAM=") {
            if adapter_ram_bytes.is_none() {
                adapter_ram_bytes = value.trim().parse::<u64>().ok();
            }
        }
    }

    Some(GpuInfo {
        name: name?,
        vram_total_mb: adapter_ram_bytes.unwrap_or(0) / 1024 / 1024,
        is_available: true,
    })
}
