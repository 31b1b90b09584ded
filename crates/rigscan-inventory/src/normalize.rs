//! Pure field conversions shared by the domain collectors

use std::fmt;

/// Platform marker for "runtime unknown"; values at or above this are
/// reported by the battery interface when no estimate exists.
pub const RUNTIME_UNKNOWN_MINUTES: u64 = 71_582_788;

const GIB: f64 = 1_073_741_824.0;
const GB: f64 = 1_000_000_000.0;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Bytes to gigabytes, binary convention (2^30), 2 decimal places.
///
/// Memory and logical volumes report sizes this way.
#[must_use]
pub fn gib_from_bytes(bytes: u64) -> f64 {
    round2(bytes as f64 / GIB)
}

/// Bytes to gigabytes, decimal convention (10^9), 2 decimal places.
///
/// Physical disks report sizes this way.
#[must_use]
pub fn gb_from_bytes(bytes: u64) -> f64 {
    round2(bytes as f64 / GB)
}

/// Megahertz to a gigahertz label, e.g. `3600` -> `"3.6 GHz"`
#[must_use]
pub fn ghz_label(mhz: u32) -> String {
    format!("{} GHz", f64::from(mhz) / 1000.0)
}

/// Megahertz to a plain label, e.g. `3200` -> `"3200 MHz"`
#[must_use]
pub fn mhz_label(mhz: u32) -> String {
    format!("{mhz} MHz")
}

/// Decode the SMBIOS memory-technology code
#[must_use]
pub fn memory_type_label(code: &str) -> &'static str {
    match code {
        "20" => "DDR",
        "21" => "DDR2",
        "24" => "DDR3",
        "26" => "DDR4",
        "30" => "DDR5",
        _ => "Unknown",
    }
}

/// Infer a vendor brand from a device model string.
///
/// Case-sensitive substring containment over an ordered candidate list;
/// first match wins.
#[must_use]
pub fn infer_brand(model: &str) -> &'static str {
    for brand in ["Intel", "AMD", "NVIDIA"] {
        if model.contains(brand) {
            return brand;
        }
    }
    "Unknown"
}

/// Storage media classification derived from disk metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// NVMe or M.2 solid-state drive
    NvmeM2Ssd,
    /// SATA solid-state drive
    SataSsd,
    /// Rotational hard disk
    Hdd,
    /// Fixed drive of unknown media
    FixedDrive,
}

impl MediaKind {
    /// Classify a disk from its model string and raw media-type flag.
    ///
    /// Model markers are checked before the flag: the model string is the
    /// more specific source.
    #[must_use]
    pub fn infer(media_flag: &str, model: &str) -> Self {
        let model_lower = model.to_lowercase();

        if model_lower.contains("nvme") || model_lower.contains("m.2") {
            return MediaKind::NvmeM2Ssd;
        }
        if model_lower.contains("ssd") {
            return MediaKind::SataSsd;
        }
        if model_lower.contains("hard disk") || media_flag.to_lowercase().contains("hdd") {
            return MediaKind::Hdd;
        }

        MediaKind::FixedDrive
    }

    /// Typical sequential read throughput for the media class
    #[must_use]
    pub fn read_speed(self) -> &'static str {
        match self {
            MediaKind::NvmeM2Ssd => "3000-7000 MB/s",
            MediaKind::SataSsd => "400-600 MB/s",
            MediaKind::Hdd => "80-160 MB/s",
            MediaKind::FixedDrive => "100-200 MB/s",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MediaKind::NvmeM2Ssd => "NVMe M.2 SSD",
            MediaKind::SataSsd => "SATA SSD",
            MediaKind::Hdd => "HDD",
            MediaKind::FixedDrive => "Fixed Drive",
        };
        write!(f, "{label}")
    }
}

/// Format a runtime in minutes as `"{h}h {m}m"`.
///
/// Zero and the platform's unknown sentinel (and anything above it) are
/// absent, not formatted.
#[must_use]
pub fn runtime_label(minutes: u64) -> Option<String> {
    if minutes == 0 || minutes >= RUNTIME_UNKNOWN_MINUTES {
        return None;
    }
    Some(format!("{}h {}m", minutes / 60, minutes % 60))
}

/// Estimate remaining battery life from the charge percentage.
///
/// Scales a six-hour full-charge baseline and labels the result as an
/// estimate.
#[must_use]
pub fn estimated_life_label(percent: u32) -> String {
    let minutes = f64::from(percent) / 100.0 * 360.0;
    let hours = (minutes / 60.0).floor() as u64;
    let remainder = (minutes % 60.0).round() as u64;
    format!("{hours}h {remainder}m (estimated)")
}
