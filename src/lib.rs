//! Health info of a MinIO cluster.
//!
//! Diagnostic snapshots (CPU, memory, OS, drives, processes, drive and
//! network performance) gathered from every node and aggregated into one
//! report. Two report versions exist side by side:
//!
//! - [`HealthInfoV0`]: timestamp, error and per-node system records.
//! - [`HealthInfoV2`]: adds a version tag, performance results and the
//!   MinIO server section.
//!
//! Reports render as compact JSON through `Display` and as indented JSON
//! through [`HealthReport::to_json`]. Fields at their zero value are left
//! off the wire, nested sections are always present.
//!
//! ```
//! use health_info::{HealthInfoV2, HealthReport, HealthStatus};
//!
//! let info = HealthInfoV2::failed(chrono::Utc::now(), "disk read timeout");
//! assert_eq!(info.status(), HealthStatus::Error);
//! assert_eq!(info.error(), "disk read timeout");
//! ```

pub mod config;
pub mod core;
pub mod error;

pub use crate::config::{load_render_config, RenderConfig};
pub use crate::core::*;
pub use crate::error::{HealthInfoError, Result};
