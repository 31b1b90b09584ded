//! Snapshot type definitions
//!
//! The JSON shape of [`InventorySnapshot`] is a fixed contract with the
//! consumer rendering it; field names and nesting must not drift.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel for any string fact that could not be resolved
pub const UNKNOWN: &str = "Unknown";

pub(crate) fn unknown() -> String {
    UNKNOWN.to_string()
}

/// Host platform capability for command-based collection
///
/// Decided once by the caller and passed into the collector, so the
/// collectors themselves stay deterministic under injected executors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostPlatform {
    /// Windows hosts, where the wmic/systeminfo command set is available
    Windows,
    /// Any other host; every record degrades to its default form
    Unsupported,
}

impl HostPlatform {
    /// Detect the platform the current process runs on
    #[must_use]
    pub fn detect() -> Self {
        if cfg!(windows) {
            HostPlatform::Windows
        } else {
            HostPlatform::Unsupported
        }
    }

    /// Whether the command-based collection strategy applies
    #[must_use]
    pub fn is_supported(self) -> bool {
        matches!(self, HostPlatform::Windows)
    }
}

/// A gigabyte quantity that may be unresolved
///
/// Serializes as a JSON number when known and as the literal `"Unknown"`
/// otherwise, matching the document contract.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GbValue {
    /// Resolved capacity in gigabytes
    Known(f64),
    /// Capacity could not be determined
    #[default]
    Unknown,
}

impl Serialize for GbValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GbValue::Known(gb) => serializer.serialize_f64(*gb),
            GbValue::Unknown => serializer.serialize_str(UNKNOWN),
        }
    }
}

impl<'de> Deserialize<'de> for GbValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(gb) => Ok(GbValue::Known(gb)),
            Raw::Text(_) => Ok(GbValue::Unknown),
        }
    }
}

/// Operating system identity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsRecord {
    /// Product name as reported by the platform
    pub name: String,
    /// OS version string
    pub version: String,
    /// Architecture label (e.g. "x64-based PC")
    pub architecture: String,
    /// Build identifier
    pub build: String,
    /// Preinstalled-software estimate; never fabricated, defaults to Unknown
    pub bloatware_level: String,
    /// Whether a second OS installation was detected
    pub dual_boot: bool,
}

impl Default for OsRecord {
    fn default() -> Self {
        Self {
            name: unknown(),
            version: unknown(),
            architecture: unknown(),
            build: unknown(),
            bloatware_level: unknown(),
            dual_boot: false,
        }
    }
}

/// Processor facts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuRecord {
    /// Vendor inferred from the model string
    pub brand: String,
    /// Full model name
    pub model: String,
    /// Physical core count
    pub cores: u32,
    /// Logical processor count
    pub threads: u32,
    /// Maximum clock speed label, e.g. "3.6 GHz"
    pub clock_speed: String,
}

impl Default for CpuRecord {
    fn default() -> Self {
        Self {
            brand: unknown(),
            model: unknown(),
            cores: 0,
            threads: 0,
            clock_speed: unknown(),
        }
    }
}

/// Memory facts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RamRecord {
    /// Total physical memory in gigabytes (binary convention)
    #[serde(rename = "totalGB")]
    pub total_gb: f64,
    /// Memory technology label(s), e.g. "DDR4"
    #[serde(rename = "type")]
    pub memory_type: String,
    /// Module speed label(s), e.g. "3200 MHz"
    pub speed_label: String,
    /// Number of populated memory slots
    pub slots_used: u32,
}

impl Default for RamRecord {
    fn default() -> Self {
        Self {
            total_gb: 0.0,
            memory_type: unknown(),
            speed_label: unknown(),
            slots_used: 0,
        }
    }
}

/// One storage device, merged from logical-volume and physical-disk views
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageRecord {
    /// Media type label, e.g. "NVMe M.2 SSD"
    #[serde(rename = "type")]
    pub media_type: String,
    /// Capacity in gigabytes
    #[serde(rename = "capacityGB")]
    pub capacity_gb: GbValue,
    /// Device model, or the volume letter when no physical disk matched
    pub model: String,
    /// Estimated sequential read throughput for the media type
    pub read_speed_label: String,
    /// Filesystem of the backing logical volume, absent for records seen
    /// only through the physical-disk enumeration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_system: Option<String>,
}

impl StorageRecord {
    /// Placeholder emitted when no storage device could be enumerated
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            media_type: unknown(),
            capacity_gb: GbValue::Unknown,
            model: unknown(),
            read_speed_label: unknown(),
            file_system: None,
        }
    }
}

/// One video adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpuRecord {
    /// Vendor inferred from the adapter name
    pub brand: String,
    /// Adapter model name
    pub model: String,
    /// Dedicated memory in gigabytes
    #[serde(rename = "memoryGB")]
    pub memory_gb: GbValue,
    /// Installed driver version
    pub driver_version: String,
}

impl GpuRecord {
    /// Placeholder emitted when no adapter could be enumerated
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            brand: unknown(),
            model: "Unknown GPU".to_string(),
            memory_gb: GbValue::Unknown,
            driver_version: unknown(),
        }
    }
}

/// Primary display facts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    /// Active resolution, e.g. "1920x1080"
    pub resolution: String,
    /// Refresh rate label, e.g. "60 Hz"
    pub refresh_rate: String,
    /// Panel technology; never fabricated, defaults to Unknown
    pub panel_type: String,
}

impl Default for DisplayRecord {
    fn default() -> Self {
        Self {
            resolution: unknown(),
            refresh_rate: unknown(),
            panel_type: unknown(),
        }
    }
}

/// Battery state, all-default on hosts without a battery
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryRecord {
    /// Whether the battery is currently charging
    pub is_charging: bool,
    /// Remaining runtime label, possibly marked "(estimated)"
    pub estimated_life: String,
    /// Charge-level label, e.g. "80%"
    pub health: String,
    /// Charge-level label, e.g. "80%"
    pub percentage: String,
}

impl Default for BatteryRecord {
    fn default() -> Self {
        Self {
            is_charging: false,
            estimated_life: unknown(),
            health: unknown(),
            percentage: unknown(),
        }
    }
}

/// Installed-application counts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationsRecord {
    /// Total registered applications
    pub count: u32,
    /// Estimated system-installed share
    pub system_apps: u32,
    /// Estimated user-installed share
    pub user_apps: u32,
}

/// Complete inventory snapshot
///
/// Every domain record is always present; `storage` and `gpu` are never
/// empty. Constructed fresh per collection and immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySnapshot {
    /// Operating system identity
    pub os: OsRecord,
    /// Processor facts
    pub cpu: CpuRecord,
    /// Memory facts
    pub ram: RamRecord,
    /// Storage devices, at least one record
    pub storage: Vec<StorageRecord>,
    /// Video adapters, at least one record
    pub gpu: Vec<GpuRecord>,
    /// Primary display facts
    pub display: DisplayRecord,
    /// Battery state
    pub battery: BatteryRecord,
    /// Installed-application counts
    pub applications: ApplicationsRecord,
}

impl Default for InventorySnapshot {
    fn default() -> Self {
        Self {
            os: OsRecord::default(),
            cpu: CpuRecord::default(),
            ram: RamRecord::default(),
            storage: vec![StorageRecord::placeholder()],
            gpu: vec![GpuRecord::placeholder()],
            display: DisplayRecord::default(),
            battery: BatteryRecord::default(),
            applications: ApplicationsRecord::default(),
        }
    }
}
