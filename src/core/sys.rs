//! Per-node hardware and system records of the version 0 report.
//!
//! Each record names its node by `addr`. A non-empty `error` means collection
//! failed on that node and the rest of the record is empty.

use crate::core::process::SysProcess;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SysHealthInfo {
    #[serde(rename = "cpus", skip_serializing_if = "Vec::is_empty")]
    pub cpu_info: Vec<ServerCpuInfo>,
    #[serde(rename = "drives", skip_serializing_if = "Vec::is_empty")]
    pub disk_hw_info: Vec<ServerDiskHwInfo>,
    #[serde(rename = "osinfos", skip_serializing_if = "Vec::is_empty")]
    pub os_info: Vec<ServerOsInfo>,
    #[serde(rename = "meminfos", skip_serializing_if = "Vec::is_empty")]
    pub mem_info: Vec<ServerMemInfo>,
    #[serde(rename = "procinfos", skip_serializing_if = "Vec::is_empty")]
    pub proc_info: Vec<ServerProcInfo>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl SysHealthInfo {
    /// `(addr, error)` of every node record that failed to collect.
    pub fn failed_nodes(&self) -> Vec<(&str, &str)> {
        let cpus = self.cpu_info.iter().map(|r| (&r.addr, &r.error));
        let drives = self.disk_hw_info.iter().map(|r| (&r.addr, &r.error));
        let os = self.os_info.iter().map(|r| (&r.addr, &r.error));
        let mem = self.mem_info.iter().map(|r| (&r.addr, &r.error));
        let procs = self.proc_info.iter().map(|r| (&r.addr, &r.error));
        cpus.chain(drives)
            .chain(os)
            .chain(mem)
            .chain(procs)
            .filter(|(_, error)| !error.is_empty())
            .map(|(addr, error)| (addr.as_str(), error.as_str()))
            .collect()
    }
}

/// Processes running on one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ServerProcInfo {
    pub addr: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub processes: Vec<SysProcess>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

/// Virtual and swap memory of one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ServerMemInfo {
    pub addr: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

/// OS information of one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ServerOsInfo {
    pub addr: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

/// CPU and timer stats of one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ServerCpuInfo {
    pub addr: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

/// Usage counters, disk counters and partitions of one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ServerDiskHwInfo {
    pub addr: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}
