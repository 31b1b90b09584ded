//! Per-domain collectors and the snapshot assembler

use serde::Deserialize;
use tokio::task::JoinError;
use tracing::{debug, info, instrument, warn};

use crate::commands;
use crate::normalize::{
    MediaKind, estimated_life_label, gb_from_bytes, ghz_label, gib_from_bytes, infer_brand,
    memory_type_label, mhz_label, runtime_label,
};
use crate::parse::{parse_multi_block, parse_single_block};
use crate::probe::CommandProbe;
use crate::types::{
    ApplicationsRecord, BatteryRecord, CpuRecord, DisplayRecord, GbValue, GpuRecord, HostPlatform,
    InventorySnapshot, OsRecord, RamRecord, StorageRecord, UNKNOWN, unknown,
};

/// Snapshot assembler
///
/// Spawns the eight domain collectors as independent tasks and composes
/// their records. No collector failure aborts the others; every record is
/// present in the result even if all of its fields are defaults.
pub struct SnapshotCollector {
    probe: CommandProbe,
    platform: HostPlatform,
}

impl SnapshotCollector {
    /// Create a collector over a probe and a platform capability value
    #[must_use]
    pub fn new(probe: CommandProbe, platform: HostPlatform) -> Self {
        Self { probe, platform }
    }

    /// Collect one inventory snapshot.
    ///
    /// Infallible: on an unsupported platform, or when every underlying
    /// query fails, the result is the full-default snapshot with sentinel
    /// placeholder storage/GPU records.
    #[instrument(skip(self))]
    pub async fn collect(&self) -> InventorySnapshot {
        if !self.platform.is_supported() {
            info!(platform = ?self.platform, "command probing unsupported, returning defaults");
            return InventorySnapshot::default();
        }

        info!("collecting inventory snapshot");

        let os = tokio::spawn(collect_os(self.probe.clone()));
        let cpu = tokio::spawn(collect_cpu(self.probe.clone()));
        let ram = tokio::spawn(collect_ram(self.probe.clone()));
        let storage = tokio::spawn(collect_storage(self.probe.clone()));
        let gpu = tokio::spawn(collect_gpu(self.probe.clone()));
        let display = tokio::spawn(collect_display(self.probe.clone()));
        let battery = tokio::spawn(collect_battery(self.probe.clone()));
        let applications = tokio::spawn(collect_applications(self.probe.clone()));

        let snapshot = InventorySnapshot {
            os: resolve(os.await, "os"),
            cpu: resolve(cpu.await, "cpu"),
            ram: resolve(ram.await, "ram"),
            storage: resolve_devices(storage.await, "storage", StorageRecord::placeholder),
            gpu: resolve_devices(gpu.await, "gpu", GpuRecord::placeholder),
            display: resolve(display.await, "display"),
            battery: resolve(battery.await, "battery"),
            applications: resolve(applications.await, "applications"),
        };

        info!("inventory snapshot completed");

        snapshot
    }
}

fn resolve<T: Default>(joined: Result<T, JoinError>, domain: &'static str) -> T {
    match joined {
        Ok(record) => record,
        Err(e) => {
            warn!(domain, error = %e, "collector task failed, using defaults");
            T::default()
        }
    }
}

fn resolve_devices<T>(
    joined: Result<Vec<T>, JoinError>,
    domain: &'static str,
    placeholder: fn() -> T,
) -> Vec<T> {
    match joined {
        Ok(records) => records,
        Err(e) => {
            warn!(domain, error = %e, "collector task failed, using placeholder");
            vec![placeholder()]
        }
    }
}

/// Collect OS name, version and architecture
pub async fn collect_os(probe: CommandProbe) -> OsRecord {
    debug!("collecting os info");

    let mut record = OsRecord::default();

    if let Some(lines) = probe.lines(commands::OS_SUMMARY).await {
        for line in &lines {
            let line = line.trim();
            if let Some(value) = labeled_value(line, "OS Name:") {
                record.name = value;
            } else if let Some(value) = labeled_value(line, "OS Version:") {
                record.version = value;
            } else if let Some(value) = labeled_value(line, "System Type:") {
                record.architecture = value;
            }
        }
    }

    record
}

fn labeled_value(line: &str, label: &str) -> Option<String> {
    let value = line.strip_prefix(label)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Collect processor model, core counts and clock speed
pub async fn collect_cpu(probe: CommandProbe) -> CpuRecord {
    debug!("collecting cpu info");

    let mut record = CpuRecord::default();

    if let Some(lines) = probe.lines(commands::CPU).await {
        let block = parse_single_block(&lines);

        if let Some(name) = block.get("Name") {
            record.model = name.clone();
            record.brand = infer_brand(name).to_string();
        }
        if let Some(cores) = block.get("NumberOfCores").and_then(|v| v.parse().ok()) {
            record.cores = cores;
        }
        if let Some(threads) = block
            .get("NumberOfLogicalProcessors")
            .and_then(|v| v.parse().ok())
        {
            record.threads = threads;
        }
        if let Some(mhz) = block.get("MaxClockSpeed").and_then(|v| v.parse::<u32>().ok()) {
            record.clock_speed = ghz_label(mhz);
        }
    }

    // Last resort when the query yielded nothing usable
    if record.cores == 0
        && let Some(count) = std::env::var("NUMBER_OF_PROCESSORS")
            .ok()
            .and_then(|v| v.parse().ok())
    {
        record.cores = count;
        record.threads = count;
    }

    record
}

/// Collect memory total, technology, speed and slot usage
pub async fn collect_ram(probe: CommandProbe) -> RamRecord {
    debug!("collecting ram info");

    let mut record = RamRecord::default();

    if let Some(lines) = probe.lines(commands::TOTAL_MEMORY).await {
        let block = parse_single_block(&lines);
        if let Some(bytes) = block
            .get("TotalPhysicalMemory")
            .and_then(|v| v.parse::<u64>().ok())
        {
            record.total_gb = gib_from_bytes(bytes);
        }
    }

    if let Some(lines) = probe.lines(commands::MEMORY_CHIPS).await {
        let chips = parse_multi_block(&lines);
        record.slots_used = chips.len() as u32;

        let mut speeds: Vec<String> = Vec::new();
        let mut technologies: Vec<&str> = Vec::new();

        for chip in &chips {
            if let Some(mhz) = chip.get("Speed").and_then(|v| v.parse::<u32>().ok()) {
                let label = mhz_label(mhz);
                if !speeds.contains(&label) {
                    speeds.push(label);
                }
            }
            if let Some(code) = chip.get("MemoryType") {
                let label = memory_type_label(code);
                if !technologies.contains(&label) {
                    technologies.push(label);
                }
            }
        }

        if !speeds.is_empty() {
            record.speed_label = speeds.join("/");
        }
        if !technologies.is_empty() {
            record.memory_type = technologies.join("/");
        }
    }

    record
}

struct PhysicalDisk {
    model: String,
    capacity_gb: f64,
    kind: MediaKind,
}

/// Collect storage devices from the logical-volume and physical-disk views
pub async fn collect_storage(probe: CommandProbe) -> Vec<StorageRecord> {
    debug!("collecting storage info");

    let mut records = Vec::new();

    if let Some(lines) = probe.lines(commands::LOGICAL_DISKS).await {
        for block in parse_multi_block(&lines) {
            let (Some(device), Some(bytes)) = (
                block.get("DeviceID"),
                block.get("Size").and_then(|v| v.parse::<u64>().ok()),
            ) else {
                continue;
            };

            records.push(StorageRecord {
                media_type: MediaKind::FixedDrive.to_string(),
                capacity_gb: GbValue::Known(gib_from_bytes(bytes)),
                model: format!("{device} Drive"),
                read_speed_label: unknown(),
                file_system: Some(block.get("FileSystem").cloned().unwrap_or_else(unknown)),
            });
        }
    }

    if let Some(lines) = probe.lines(commands::PHYSICAL_DISKS).await {
        let disks: Vec<PhysicalDisk> = parse_multi_block(&lines)
            .iter()
            .filter_map(|block| {
                let model = block.get("Model")?;
                let bytes = block.get("Size").and_then(|v| v.parse::<u64>().ok())?;
                let flag = block.get("MediaType").map_or("", String::as_str);

                Some(PhysicalDisk {
                    model: model.clone(),
                    capacity_gb: gb_from_bytes(bytes),
                    kind: MediaKind::infer(flag, model),
                })
            })
            .collect();

        merge_physical_disks(&mut records, disks);
    }

    if records.is_empty() {
        records.push(StorageRecord::placeholder());
    }

    records
}

/// Merge physical-disk facts into the logical-volume records by position.
///
/// The two enumerations share no stable identifier, so the i-th disk
/// annotates the i-th volume; disks past the end of the volume list are
/// appended as their own records. Model and type on merged records are
/// therefore best-effort, not authoritative.
fn merge_physical_disks(records: &mut Vec<StorageRecord>, disks: Vec<PhysicalDisk>) {
    for (index, disk) in disks.into_iter().enumerate() {
        if let Some(record) = records.get_mut(index) {
            record.model = disk.model;
            record.media_type = disk.kind.to_string();
            record.read_speed_label = disk.kind.read_speed().to_string();
        } else {
            records.push(StorageRecord {
                media_type: disk.kind.to_string(),
                capacity_gb: GbValue::Known(disk.capacity_gb),
                model: disk.model,
                read_speed_label: disk.kind.read_speed().to_string(),
                file_system: None,
            });
        }
    }
}

/// Collect video adapters
pub async fn collect_gpu(probe: CommandProbe) -> Vec<GpuRecord> {
    debug!("collecting gpu info");

    let mut records = Vec::new();

    if let Some(lines) = probe.lines(commands::VIDEO_CONTROLLERS).await {
        for block in parse_multi_block(&lines) {
            let Some(model) = block.get("Name") else {
                continue;
            };

            let memory_gb = block
                .get("AdapterRAM")
                .and_then(|v| v.parse::<u64>().ok())
                .map(gib_from_bytes)
                .filter(|gb| *gb > 0.0)
                .map_or(GbValue::Unknown, GbValue::Known);

            records.push(GpuRecord {
                brand: infer_brand(model).to_string(),
                model: model.clone(),
                memory_gb,
                driver_version: block.get("DriverVersion").cloned().unwrap_or_else(unknown),
            });
        }
    }

    if records.is_empty() {
        records.push(GpuRecord::placeholder());
    }

    records
}

/// Collect the active display mode
pub async fn collect_display(probe: CommandProbe) -> DisplayRecord {
    debug!("collecting display info");

    let mut record = DisplayRecord::default();

    if let Some(lines) = probe.lines(commands::DISPLAY_MODES).await {
        let block = parse_single_block(&lines);

        let width = block
            .get("CurrentHorizontalResolution")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(0);
        let height = block
            .get("CurrentVerticalResolution")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(0);

        if width > 0 && height > 0 {
            record.resolution = format!("{width}x{height}");
        }

        if let Some(rate) = block
            .get("CurrentRefreshRate")
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|r| *r > 0)
        {
            record.refresh_rate = format!("{rate} Hz");
        }
    }

    // Headless adapters report no mode; ask the desktop for its bounds
    if record.resolution == UNKNOWN
        && let Some(lines) = probe.lines(commands::SCREEN_BOUNDS).await
    {
        for line in &lines {
            if let (Some(width), Some(height)) = (
                bounds_dimension(line, "Width="),
                bounds_dimension(line, "Height="),
            ) {
                record.resolution = format!("{width}x{height}");
                break;
            }
        }
    }

    record
}

/// Extract the digits following `key` in a bounds line like
/// `{X=0,Y=0,Width=1920,Height=1080}`
fn bounds_dimension(line: &str, key: &str) -> Option<u32> {
    let start = line.find(key)? + key.len();
    let digits: String = line[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[derive(Deserialize)]
struct BatteryDump {
    #[serde(rename = "BatteryStatus")]
    battery_status: Option<i64>,
    #[serde(rename = "EstimatedChargeRemaining")]
    estimated_charge_remaining: Option<u32>,
    #[serde(rename = "EstimatedRunTime")]
    estimated_run_time: Option<u64>,
}

/// Collect battery state through a three-tier fallback.
///
/// Each tier only runs while no runtime estimate has been resolved, and
/// later tiers fill gaps without overwriting earlier results. Hosts with
/// no battery leave every field at default.
pub async fn collect_battery(probe: CommandProbe) -> BatteryRecord {
    debug!("collecting battery info");

    let mut record = BatteryRecord::default();
    let mut charging: Option<bool> = None;
    let mut percent: Option<u32> = None;

    if let Some(lines) = probe.lines(commands::BATTERY_STATUS).await {
        let block = parse_single_block(&lines);

        if let Some(status) = block.get("BatteryStatus") {
            charging = Some(status.as_str() == "2");
        }
        if let Some(level) = block
            .get("EstimatedChargeRemaining")
            .and_then(|v| v.parse().ok())
        {
            percent = Some(level);
        }
        if let Some(label) = block
            .get("EstimatedRunTime")
            .and_then(|v| v.parse::<u64>().ok())
            .and_then(runtime_label)
        {
            record.estimated_life = label;
        }
    }

    if record.estimated_life == UNKNOWN
        && let Some(lines) = probe.lines(commands::BATTERY_JSON).await
        && let Ok(dump) = serde_json::from_str::<BatteryDump>(&lines.join("\n"))
    {
        if charging.is_none() {
            charging = dump.battery_status.map(|status| status == 2);
        }
        if percent.is_none() {
            percent = dump.estimated_charge_remaining;
        }
        if let Some(label) = dump.estimated_run_time.and_then(runtime_label) {
            record.estimated_life = label;
        }
    }

    if record.estimated_life == UNKNOWN
        && let (Some(false), Some(level)) = (charging, percent)
        && level > 0
    {
        record.estimated_life = estimated_life_label(level);
    }

    if let Some(charging) = charging {
        record.is_charging = charging;
    }
    if let Some(level) = percent {
        record.percentage = format!("{level}%");
        record.health = format!("{level}%");
    }

    record
}

/// Count installed applications from the registry uninstall hives
pub async fn collect_applications(probe: CommandProbe) -> ApplicationsRecord {
    debug!("collecting application counts");

    let mut count: u32 = 0;

    for cmd in commands::APPLICATION_COUNTS {
        if let Some(lines) = probe.lines(cmd).await
            && let Some(hive_count) = lines
                .iter()
                .map(|line| line.trim())
                .find(|line| !line.is_empty())
                .and_then(|line| line.parse::<u32>().ok())
        {
            count += hive_count;
        }
    }

    ApplicationsRecord {
        count,
        system_apps: (f64::from(count) * 0.4).round() as u32,
        user_apps: (f64::from(count) * 0.6).round() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use rigscan_exec::{CommandExecutor, CommandResult, ExecError};

    struct ScriptedExecutor {
        outputs: HashMap<&'static str, &'static str>,
        calls: AtomicUsize,
    }

    impl ScriptedExecutor {
        fn new(outputs: &[(&'static str, &'static str)]) -> Self {
            Self {
                outputs: outputs.iter().copied().collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CommandExecutor for ScriptedExecutor {
        async fn run(&self, cmd: &str) -> Result<CommandResult, ExecError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outputs.get(cmd) {
                Some(stdout) => Ok(CommandResult {
                    status: 0,
                    stdout: (*stdout).to_string(),
                    stderr: String::new(),
                    duration: Duration::ZERO,
                }),
                None => Err(ExecError::SpawnError("command not scripted".to_string())),
            }
        }

        async fn run_with_timeout(
            &self,
            cmd: &str,
            _timeout: Duration,
        ) -> Result<CommandResult, ExecError> {
            self.run(cmd).await
        }

        fn executor_type(&self) -> &'static str {
            "scripted"
        }
    }

    fn probe_with(outputs: &[(&'static str, &'static str)]) -> CommandProbe {
        CommandProbe::new(Arc::new(ScriptedExecutor::new(outputs)))
    }

    #[tokio::test]
    async fn test_collect_os() {
        let probe = probe_with(&[(
            commands::OS_SUMMARY,
            "OS Name:                   Microsoft Windows 10 Pro\r\n\
             OS Version:                10.0.19045 N/A Build 19045\r\n\
             System Type:               x64-based PC\r\n",
        )]);

        let record = collect_os(probe).await;
        assert_eq!(record.name, "Microsoft Windows 10 Pro");
        assert_eq!(record.version, "10.0.19045 N/A Build 19045");
        assert_eq!(record.architecture, "x64-based PC");
        assert_eq!(record.build, "Unknown");
        assert!(!record.dual_boot);
    }

    #[tokio::test]
    async fn test_collect_cpu() {
        let probe = probe_with(&[(
            commands::CPU,
            "MaxClockSpeed=2600\r\n\
             Name=Intel(R) Core(TM) i7-9750H CPU @ 2.60GHz\r\n\
             NumberOfCores=6\r\n\
             NumberOfLogicalProcessors=12\r\n",
        )]);

        let record = collect_cpu(probe).await;
        assert_eq!(record.brand, "Intel");
        assert_eq!(record.model, "Intel(R) Core(TM) i7-9750H CPU @ 2.60GHz");
        assert_eq!(record.cores, 6);
        assert_eq!(record.threads, 12);
        assert_eq!(record.clock_speed, "2.6 GHz");
    }

    #[tokio::test]
    async fn test_collect_ram() {
        let probe = probe_with(&[
            (
                commands::TOTAL_MEMORY,
                "TotalPhysicalMemory=17179869184\r\n",
            ),
            (
                commands::MEMORY_CHIPS,
                "Capacity=8589934592\r\nMemoryType=26\r\nSpeed=3200\r\n\
                 \r\n\
                 Capacity=8589934592\r\nMemoryType=26\r\nSpeed=3200\r\n",
            ),
        ]);

        let record = collect_ram(probe).await;
        assert_eq!(record.total_gb, 16.0);
        assert_eq!(record.slots_used, 2);
        assert_eq!(record.memory_type, "DDR4");
        assert_eq!(record.speed_label, "3200 MHz");
    }

    #[tokio::test]
    async fn test_collect_ram_mixed_modules() {
        let probe = probe_with(&[(
            commands::MEMORY_CHIPS,
            "MemoryType=24\r\nSpeed=1600\r\n\
             \r\n\
             MemoryType=26\r\nSpeed=3200\r\n",
        )]);

        let record = collect_ram(probe).await;
        assert_eq!(record.total_gb, 0.0);
        assert_eq!(record.memory_type, "DDR3/DDR4");
        assert_eq!(record.speed_label, "1600 MHz/3200 MHz");
    }

    #[tokio::test]
    async fn test_collect_storage_merges_by_index() {
        let probe = probe_with(&[
            (
                commands::LOGICAL_DISKS,
                "DeviceID=C:\r\nFileSystem=NTFS\r\nSize=511180111872\r\n\
                 \r\n\
                 DeviceID=D:\r\nFileSystem=NTFS\r\nSize=1000202039296\r\n",
            ),
            (
                commands::PHYSICAL_DISKS,
                "MediaType=Fixed hard disk media\r\n\
                 Model=Samsung SSD 970 EVO Plus 500GB NVMe\r\n\
                 Size=500107862016\r\n",
            ),
        ]);

        let records = collect_storage(probe).await;
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].model, "Samsung SSD 970 EVO Plus 500GB NVMe");
        assert_eq!(records[0].media_type, "NVMe M.2 SSD");
        assert_eq!(records[0].read_speed_label, "3000-7000 MB/s");
        assert_eq!(records[0].capacity_gb, GbValue::Known(476.07));
        assert_eq!(records[0].file_system.as_deref(), Some("NTFS"));

        assert_eq!(records[1].model, "D: Drive");
        assert_eq!(records[1].media_type, "Fixed Drive");
        assert_eq!(records[1].read_speed_label, "Unknown");
    }

    #[tokio::test]
    async fn test_collect_storage_appends_unmatched_disk() {
        let probe = probe_with(&[
            (
                commands::LOGICAL_DISKS,
                "DeviceID=C:\r\nFileSystem=NTFS\r\nSize=511180111872\r\n",
            ),
            (
                commands::PHYSICAL_DISKS,
                "MediaType=\r\nModel=Crucial MX500 SSD\r\nSize=500107862016\r\n\
                 \r\n\
                 MediaType=Fixed hard disk media\r\nModel=ST1000DM010 Hard disk\r\nSize=1000204886016\r\n",
            ),
        ]);

        let records = collect_storage(probe).await;
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].model, "Crucial MX500 SSD");
        assert_eq!(records[0].media_type, "SATA SSD");

        assert_eq!(records[1].model, "ST1000DM010 Hard disk");
        assert_eq!(records[1].media_type, "HDD");
        assert_eq!(records[1].capacity_gb, GbValue::Known(1000.2));
        assert!(records[1].file_system.is_none());
    }

    #[tokio::test]
    async fn test_collect_storage_placeholder_when_empty() {
        let records = collect_storage(probe_with(&[])).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].model, "Unknown");
        assert_eq!(records[0].capacity_gb, GbValue::Unknown);
    }

    #[test]
    fn test_merge_two_volumes_one_disk() {
        let mut records = vec![
            StorageRecord {
                media_type: "Fixed Drive".to_string(),
                capacity_gb: GbValue::Known(476.07),
                model: "C: Drive".to_string(),
                read_speed_label: unknown(),
                file_system: Some("NTFS".to_string()),
            },
            StorageRecord {
                media_type: "Fixed Drive".to_string(),
                capacity_gb: GbValue::Known(931.51),
                model: "D: Drive".to_string(),
                read_speed_label: unknown(),
                file_system: Some("NTFS".to_string()),
            },
        ];

        merge_physical_disks(
            &mut records,
            vec![PhysicalDisk {
                model: "WD Blue SN570 M.2".to_string(),
                capacity_gb: 500.11,
                kind: MediaKind::NvmeM2Ssd,
            }],
        );

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].model, "WD Blue SN570 M.2");
        assert_eq!(records[0].media_type, "NVMe M.2 SSD");
        assert_eq!(records[0].read_speed_label, "3000-7000 MB/s");
        // volume capacity wins over the physical size on merged records
        assert_eq!(records[0].capacity_gb, GbValue::Known(476.07));

        assert_eq!(records[1].model, "D: Drive");
        assert_eq!(records[1].media_type, "Fixed Drive");
        assert_eq!(records[1].read_speed_label, "Unknown");
    }

    #[tokio::test]
    async fn test_collect_gpu() {
        let probe = probe_with(&[(
            commands::VIDEO_CONTROLLERS,
            "AdapterRAM=4294967296\r\n\
             DriverVersion=31.0.15.3623\r\n\
             Name=NVIDIA GeForce GTX 1650\r\n\
             \r\n\
             AdapterRAM=1073741824\r\n\
             DriverVersion=27.20.100.8681\r\n\
             Name=Intel(R) UHD Graphics 630\r\n",
        )]);

        let records = collect_gpu(probe).await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].brand, "NVIDIA");
        assert_eq!(records[0].memory_gb, GbValue::Known(4.0));
        assert_eq!(records[0].driver_version, "31.0.15.3623");
        assert_eq!(records[1].brand, "Intel");
        assert_eq!(records[1].memory_gb, GbValue::Known(1.0));
    }

    #[tokio::test]
    async fn test_collect_gpu_zero_memory_is_unknown() {
        let probe = probe_with(&[(
            commands::VIDEO_CONTROLLERS,
            "AdapterRAM=0\r\nName=Microsoft Basic Display Adapter\r\n",
        )]);

        let records = collect_gpu(probe).await;
        assert_eq!(records[0].memory_gb, GbValue::Unknown);
        assert_eq!(records[0].brand, "Unknown");
        assert_eq!(records[0].driver_version, "Unknown");
    }

    #[tokio::test]
    async fn test_collect_gpu_placeholder_when_empty() {
        let records = collect_gpu(probe_with(&[])).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].model, "Unknown GPU");
    }

    #[tokio::test]
    async fn test_collect_display() {
        let probe = probe_with(&[(
            commands::DISPLAY_MODES,
            "CurrentHorizontalResolution=2560\r\n\
             CurrentRefreshRate=144\r\n\
             CurrentVerticalResolution=1440\r\n",
        )]);

        let record = collect_display(probe).await;
        assert_eq!(record.resolution, "2560x1440");
        assert_eq!(record.refresh_rate, "144 Hz");
        assert_eq!(record.panel_type, "Unknown");
    }

    #[tokio::test]
    async fn test_collect_display_bounds_fallback() {
        let probe = probe_with(&[(
            commands::SCREEN_BOUNDS,
            "{X=0,Y=0,Width=1920,Height=1080}\r\n",
        )]);

        let record = collect_display(probe).await;
        assert_eq!(record.resolution, "1920x1080");
        assert_eq!(record.refresh_rate, "Unknown");
    }

    #[tokio::test]
    async fn test_collect_display_ignores_zero_resolution() {
        let probe = probe_with(&[(
            commands::DISPLAY_MODES,
            "CurrentHorizontalResolution=0\r\n\
             CurrentRefreshRate=0\r\n\
             CurrentVerticalResolution=0\r\n",
        )]);

        let record = collect_display(probe).await;
        assert_eq!(record.resolution, "Unknown");
        assert_eq!(record.refresh_rate, "Unknown");
    }

    #[tokio::test]
    async fn test_collect_battery_direct_runtime() {
        let probe = probe_with(&[(
            commands::BATTERY_STATUS,
            "BatteryStatus=2\r\n\
             EstimatedChargeRemaining=80\r\n\
             EstimatedRunTime=130\r\n",
        )]);

        let record = collect_battery(probe).await;
        assert!(record.is_charging);
        assert_eq!(record.estimated_life, "2h 10m");
        assert_eq!(record.percentage, "80%");
        assert_eq!(record.health, "80%");
    }

    #[tokio::test]
    async fn test_collect_battery_sentinel_runtime_triggers_estimate() {
        // the structured queries only yield the charge level; runtime
        // carries the platform's unknown marker
        let probe = probe_with(&[(
            commands::BATTERY_JSON,
            r#"{
    "BatteryStatus":  1,
    "EstimatedChargeRemaining":  40,
    "EstimatedRunTime":  71582788
}"#,
        )]);

        let record = collect_battery(probe).await;
        assert!(!record.is_charging);
        assert_eq!(record.estimated_life, "2h 24m (estimated)");
        assert_eq!(record.percentage, "40%");
    }

    #[tokio::test]
    async fn test_collect_battery_json_fills_missing_fields_only() {
        let probe = probe_with(&[
            (
                commands::BATTERY_STATUS,
                "BatteryStatus=1\r\nEstimatedChargeRemaining=55\r\n",
            ),
            (
                commands::BATTERY_JSON,
                r#"{"BatteryStatus": 2, "EstimatedChargeRemaining": 90, "EstimatedRunTime": 120}"#,
            ),
        ]);

        let record = collect_battery(probe).await;
        // tier-1 facts survive, tier 2 only supplies the missing runtime
        assert!(!record.is_charging);
        assert_eq!(record.percentage, "55%");
        assert_eq!(record.estimated_life, "2h 0m");
    }

    #[tokio::test]
    async fn test_collect_battery_absent() {
        let record = collect_battery(probe_with(&[])).await;
        assert!(!record.is_charging);
        assert_eq!(record.estimated_life, "Unknown");
        assert_eq!(record.health, "Unknown");
        assert_eq!(record.percentage, "Unknown");
    }

    #[tokio::test]
    async fn test_collect_battery_no_estimate_while_charging() {
        let probe = probe_with(&[(
            commands::BATTERY_STATUS,
            "BatteryStatus=2\r\nEstimatedChargeRemaining=40\r\n",
        )]);

        let record = collect_battery(probe).await;
        assert!(record.is_charging);
        assert_eq!(record.estimated_life, "Unknown");
    }

    #[tokio::test]
    async fn test_collect_applications() {
        let probe = probe_with(&[
            (commands::APPLICATION_COUNTS[0], "120\r\n"),
            (commands::APPLICATION_COUNTS[1], "45\r\n"),
            (commands::APPLICATION_COUNTS[2], "10\r\n"),
        ]);

        let record = collect_applications(probe).await;
        assert_eq!(record.count, 175);
        assert_eq!(record.system_apps, 70);
        assert_eq!(record.user_apps, 105);
    }

    #[tokio::test]
    async fn test_collect_applications_partial_hives() {
        let probe = probe_with(&[
            (commands::APPLICATION_COUNTS[0], "200\r\n"),
            (commands::APPLICATION_COUNTS[2], "not a number\r\n"),
        ]);

        let record = collect_applications(probe).await;
        assert_eq!(record.count, 200);
        assert_eq!(record.system_apps, 80);
        assert_eq!(record.user_apps, 120);
    }

    #[tokio::test]
    async fn test_snapshot_complete_when_every_query_fails() {
        let collector = SnapshotCollector::new(probe_with(&[]), HostPlatform::Windows);
        let snapshot = collector.collect().await;

        assert_eq!(snapshot.os.name, "Unknown");
        assert_eq!(snapshot.cpu.cores, 0);
        assert_eq!(snapshot.ram.total_gb, 0.0);
        assert_eq!(snapshot.storage.len(), 1);
        assert_eq!(snapshot.gpu.len(), 1);
        assert_eq!(snapshot.display.resolution, "Unknown");
        assert_eq!(snapshot.battery.estimated_life, "Unknown");
        assert_eq!(snapshot.applications.count, 0);
    }

    #[tokio::test]
    async fn test_unsupported_platform_runs_no_commands() {
        let executor = Arc::new(ScriptedExecutor::new(&[(
            commands::CPU,
            "Name=Intel(R) Core(TM) i7-9750H\r\n",
        )]));
        let collector = SnapshotCollector::new(
            CommandProbe::new(executor.clone()),
            HostPlatform::Unsupported,
        );

        let snapshot = collector.collect().await;

        assert_eq!(executor.calls.load(Ordering::SeqCst), 0);
        assert_eq!(snapshot.cpu.model, "Unknown");
        assert_eq!(snapshot.storage.len(), 1);
        assert_eq!(snapshot.gpu.len(), 1);
    }
}
