//! powcheck host layer - Environment introspection.
//!
//! This crate supplies the environment snapshot recorded in every report:
//!
//! - CPU model and core counts
//! - Total and available memory
//! - OS name, release and version
//! - The runtime (the compiler that built the binary)
//!
//! Values the platform does not expose are reported as `unknown`.

use powcheck_core::environment::{format_gib, EnvironmentProbe, EnvironmentSnapshot, UNKNOWN};
use sysinfo::System;

/// Runtime name reported in the snapshot.
pub const RUNTIME_NAME: &str = "rustc";

/// Compiler version captured by the build script.
pub const RUNTIME_VERSION: &str = env!("POWCHECK_RUSTC_VERSION");

/// Raw facts gathered from the host before formatting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostFacts {
    /// CPU brand string
    pub cpu_model: Option<String>,
    /// Physical core count
    pub physical_cores: Option<usize>,
    /// Logical core count
    pub logical_cores: Option<usize>,
    /// Total memory in bytes
    pub total_memory: Option<u64>,
    /// Available memory in bytes
    pub available_memory: Option<u64>,
    /// OS name
    pub os_name: Option<String>,
    /// OS release (kernel version)
    pub os_release: Option<String>,
    /// Long OS version
    pub os_version: Option<String>,
}

impl HostFacts {
    /// Reads facts from the running host.
    pub fn collect() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu();

        let cpu_model = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string());
        let logical_cores = match sys.cpus().len() {
            0 => std::thread::available_parallelism().ok().map(|n| n.get()),
            n => Some(n),
        };

        Self {
            cpu_model,
            physical_cores: sys.physical_core_count(),
            logical_cores,
            total_memory: Some(sys.total_memory()).filter(|&b| b > 0),
            available_memory: Some(sys.available_memory()).filter(|&b| b > 0),
            os_name: System::name(),
            os_release: System::kernel_version(),
            os_version: System::long_os_version().or_else(System::os_version),
        }
    }

    /// Formats the facts into the labelled snapshot.
    pub fn into_snapshot(self) -> EnvironmentSnapshot {
        EnvironmentSnapshot {
            cpu_model: text_or_unknown(self.cpu_model),
            physical_cores: count_or_unknown(self.physical_cores),
            logical_cores: count_or_unknown(self.logical_cores),
            total_memory: self.total_memory.map(format_gib).unwrap_or_else(unknown),
            available_memory: self.available_memory.map(format_gib).unwrap_or_else(unknown),
            os_name: text_or_unknown(self.os_name),
            os_release: text_or_unknown(self.os_release),
            os_version: text_or_unknown(self.os_version),
            runtime_name: RUNTIME_NAME.to_string(),
            runtime_version: RUNTIME_VERSION.to_string(),
        }
    }
}

fn unknown() -> String {
    UNKNOWN.to_string()
}

fn text_or_unknown(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(unknown)
}

fn count_or_unknown(value: Option<usize>) -> String {
    value.map(|n| n.to_string()).unwrap_or_else(unknown)
}

/// Probe backed by the live host.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostProbe;

impl HostProbe {
    /// Creates a host probe.
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentProbe for HostProbe {
    fn snapshot(&self) -> EnvironmentSnapshot {
        let snapshot = HostFacts::collect().into_snapshot();
        tracing::debug!(
            cpu = %snapshot.cpu_model,
            os = %snapshot.os_name,
            memory = %snapshot.total_memory,
            "environment snapshot taken"
        );
        snapshot
    }
}
