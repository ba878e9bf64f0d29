//! Environment snapshot.
//!
//! The run treats the snapshot as opaque labelled strings; where they come
//! from is up to the [`EnvironmentProbe`] handed to it.

/// Placeholder for a value the probe could not determine.
pub const UNKNOWN: &str = "unknown";

/// Host facts recorded in the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    /// CPU model string
    pub cpu_model: String,
    /// Physical core count
    pub physical_cores: String,
    /// Logical core count
    pub logical_cores: String,
    /// Total memory, e.g. `15.54 GB`
    pub total_memory: String,
    /// Available memory, e.g. `9.10 GB`
    pub available_memory: String,
    /// OS name
    pub os_name: String,
    /// OS release
    pub os_release: String,
    /// OS version string
    pub os_version: String,
    /// Runtime name
    pub runtime_name: String,
    /// Runtime version
    pub runtime_version: String,
}

impl EnvironmentSnapshot {
    /// A snapshot with every field set to [`UNKNOWN`].
    pub fn unknown() -> Self {
        Self {
            cpu_model: UNKNOWN.to_string(),
            physical_cores: UNKNOWN.to_string(),
            logical_cores: UNKNOWN.to_string(),
            total_memory: UNKNOWN.to_string(),
            available_memory: UNKNOWN.to_string(),
            os_name: UNKNOWN.to_string(),
            os_release: UNKNOWN.to_string(),
            os_version: UNKNOWN.to_string(),
            runtime_name: UNKNOWN.to_string(),
            runtime_version: UNKNOWN.to_string(),
        }
    }
}

impl Default for EnvironmentSnapshot {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Source of the environment snapshot.
pub trait EnvironmentProbe {
    /// Captures the current environment.
    fn snapshot(&self) -> EnvironmentSnapshot;
}

/// A fixed snapshot probes as itself.
impl EnvironmentProbe for EnvironmentSnapshot {
    fn snapshot(&self) -> EnvironmentSnapshot {
        self.clone()
    }
}

/// Formats a byte count as GiB with two decimals, e.g. `15.54 GB`.
pub fn format_gib(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
}
