//! JSON Schema documents for the report wire format, for tooling that
//! consumes reports without linking this crate.

use crate::core::report::{HealthInfoV0, HealthInfoV2};
use crate::error::Result;
use schemars::schema::RootSchema;
use schemars::schema_for;

pub fn health_info_v0_schema() -> RootSchema {
    schema_for!(HealthInfoV0)
}

pub fn health_info_v2_schema() -> RootSchema {
    schema_for!(HealthInfoV2)
}

pub fn schema_json(schema: &RootSchema) -> Result<String> {
    Ok(serde_json::to_string_pretty(schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn properties(schema: &RootSchema) -> Vec<String> {
        schema
            .schema
            .object
            .as_ref()
            .map(|obj| obj.properties.keys().cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn v2_schema_lists_sections() {
        let schema = health_info_v2_schema();
        let props = properties(&schema);
        for name in ["version", "error", "timestamp", "sys", "perf", "minio"] {
            assert!(props.iter().any(|p| p == name), "missing {}", name);
        }
        assert!(schema.definitions.contains_key("PerfInfo"));
        assert!(schema.definitions.contains_key("SysInfo"));
    }

    #[test]
    fn v0_schema_has_no_perf() {
        let props = properties(&health_info_v0_schema());
        assert!(props.iter().any(|p| p == "sys"));
        assert!(!props.iter().any(|p| p == "perf"));
    }

    #[test]
    fn schema_renders_as_json() {
        let text = schema_json(&health_info_v2_schema()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["title"], "HealthInfoV2");
    }
}
