//! Platform queries the domain collectors run
//!
//! Output of the `/format:list` and `/value` forms is `key=value` lines,
//! one blank-line-delimited block per instance.

/// OS name, version and architecture summary
pub const OS_SUMMARY: &str =
    r#"systeminfo | findstr /B /C:"OS Name" /C:"OS Version" /C:"System Type""#;

/// Processor model, core/thread counts and maximum clock
pub const CPU: &str =
    "wmic cpu get Name,NumberOfCores,NumberOfLogicalProcessors,MaxClockSpeed /format:list";

/// Total physical memory in bytes
pub const TOTAL_MEMORY: &str = "wmic computersystem get TotalPhysicalMemory /value";

/// Per-slot memory module details
pub const MEMORY_CHIPS: &str = "wmic memorychip get Capacity,Speed,MemoryType /format:list";

/// Fixed logical volumes with size and filesystem
pub const LOGICAL_DISKS: &str =
    r#"wmic logicaldisk where "DriveType=3" get DeviceID,Size,FileSystem /format:list"#;

/// Physical disks with model, raw size and media-type flag
pub const PHYSICAL_DISKS: &str = "wmic diskdrive get Model,Size,MediaType /format:list";

/// Video adapters with memory and driver version
pub const VIDEO_CONTROLLERS: &str =
    "wmic path win32_videocontroller get Name,AdapterRAM,DriverVersion /format:list";

/// Active display mode of the video adapter
pub const DISPLAY_MODES: &str = "wmic path win32_videocontroller get \
     CurrentHorizontalResolution,CurrentVerticalResolution,CurrentRefreshRate /format:list";

/// Primary-screen bounds fallback when the adapter reports no mode
pub const SCREEN_BOUNDS: &str = r#"powershell "Add-Type -AssemblyName System.Windows.Forms; [System.Windows.Forms.Screen]::PrimaryScreen.Bounds""#;

/// Battery state, charge level and runtime estimate
pub const BATTERY_STATUS: &str =
    "wmic path Win32_Battery get BatteryStatus,EstimatedChargeRemaining,EstimatedRunTime /format:list";

/// Battery state through the WMI object model, emitted as JSON
pub const BATTERY_JSON: &str = r#"powershell "Get-WmiObject -Class Win32_Battery | Select-Object -Property BatteryStatus, EstimatedChargeRemaining, EstimatedRunTime | ConvertTo-Json""#;

/// Registry uninstall-entry counts: machine-wide, 32-bit-on-64, per-user
pub const APPLICATION_COUNTS: [&str; 3] = [
    r#"reg query "HKEY_LOCAL_MACHINE\SOFTWARE\Microsoft\Windows\CurrentVersion\Uninstall" /s /f "DisplayName" | find /c "DisplayName""#,
    r#"reg query "HKEY_LOCAL_MACHINE\SOFTWARE\WOW6432Node\Microsoft\Windows\CurrentVersion\Uninstall" /s /f "DisplayName" | find /c "DisplayName""#,
    r#"reg query "HKEY_CURRENT_USER\SOFTWARE\Microsoft\Windows\CurrentVersion\Uninstall" /s /f "DisplayName" | find /c "DisplayName""#,
];
