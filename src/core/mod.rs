pub mod ent;
pub mod minio;
pub mod perf;
pub mod process;
pub mod render;
pub mod report;
pub mod schema;
pub mod sys;
pub mod sysinfo;
pub use ent::{is_zero_time, zero_time, HealthStatus, Latency, NodeCommon, Throughput};
pub use minio::*;
pub use perf::*;
pub use process::SysProcess;
pub use render::{to_compact_string, to_json_string, JsonStyle};
pub use report::*;
pub use schema::*;
pub use sys::*;
pub use sysinfo::*;
