//! rigscan-inventory: command-based host inventory collection
//!
//! Shells out to platform tools, parses their key=value output, and
//! assembles a best-effort hardware/OS snapshot. Collection degrades
//! field-by-field: a missing tool, failed command, or malformed field
//! leaves its defaults in place and never aborts the snapshot.

pub mod collector;
pub mod commands;
pub mod normalize;
pub mod parse;
pub mod probe;
pub mod types;

pub use collector::SnapshotCollector;
pub use probe::CommandProbe;
pub use types::{HostPlatform, InventorySnapshot};
