use serde::{Deserialize, Serialize};

use crate::error::{BehaviorError, BehaviorResult};

use super::OpacityTiers;

pub const BEHAVIOR_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Host-persistable behavior configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub opacity_tiers: OpacityTiers,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BehaviorConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: BehaviorConfig,
}

impl BehaviorConfig {
    pub fn validate(self) -> BehaviorResult<Self> {
        self.opacity_tiers.validate()?;
        Ok(self)
    }

    pub fn to_json_contract_v1_pretty(self) -> BehaviorResult<String> {
        let payload = BehaviorConfigJsonContractV1 {
            schema_version: BEHAVIOR_CONFIG_JSON_SCHEMA_V1,
            config: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            BehaviorError::InvalidConfig(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned contract payload.
    ///
    /// Objects carrying `schema_version` are parsed strictly as the contract.
    pub fn from_json_compat_str(input: &str) -> BehaviorResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            BehaviorError::InvalidConfig(format!("failed to parse config json payload: {e}"))
        })?;
        if value.get("schema_version").is_some() {
            let payload: BehaviorConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    BehaviorError::InvalidConfig(format!(
                        "failed to parse config contract payload: {e}"
                    ))
                })?;
            if payload.schema_version != BEHAVIOR_CONFIG_JSON_SCHEMA_V1 {
                return Err(BehaviorError::InvalidConfig(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            return payload.config.validate();
        }
        let config: BehaviorConfig = serde_json::from_value(value).map_err(|e| {
            BehaviorError::InvalidConfig(format!("failed to parse config json payload: {e}"))
        })?;
        config.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::BehaviorConfig;
    use crate::api::OpacityTiers;
    use crate::error::BehaviorError;

    #[test]
    fn contract_round_trip_preserves_tiers() {
        let config = BehaviorConfig {
            opacity_tiers: OpacityTiers {
                full: 0.9,
                dimmed: 0.25,
            },
        };
        let json = config.to_json_contract_v1_pretty().expect("serialize");
        let parsed = BehaviorConfig::from_json_compat_str(&json).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn bare_empty_object_uses_defaults() {
        let parsed = BehaviorConfig::from_json_compat_str("{}").expect("parse");
        assert_eq!(parsed, BehaviorConfig::default());
    }

    #[test]
    fn unknown_schema_version_is_rejected() {
        let input = r#"{"schema_version":7,"config":{}}"#;
        let err = BehaviorConfig::from_json_compat_str(input).expect_err("version");
        assert!(matches!(err, BehaviorError::InvalidConfig(_)));
    }

    #[test]
    fn invalid_tiers_are_rejected() {
        let input = r#"{"opacity_tiers":{"full":1.0,"dimmed":1.5}}"#;
        let err = BehaviorConfig::from_json_compat_str(input).expect_err("tiers");
        assert!(matches!(err, BehaviorError::InvalidOpacity(_)));
    }

    #[test]
    fn contract_with_missing_tier_fields_defaults_them() {
        let input = r#"{"schema_version":1,"config":{"opacity_tiers":{"full":0.8}}}"#;
        let parsed = BehaviorConfig::from_json_compat_str(input).expect("parse");
        assert_eq!(parsed.opacity_tiers.full, 0.8);
        assert_eq!(parsed.opacity_tiers.dimmed, OpacityTiers::default().dimmed);
    }

    #[test]
    fn partial_bare_tiers_default_missing_values() {
        let parsed =
            BehaviorConfig::from_json_compat_str(r#"{"opacity_tiers":{"dimmed":0.3}}"#)
                .expect("parse");
        assert_eq!(
            parsed.opacity_tiers,
            OpacityTiers {
                full: 1.0,
                dimmed: 0.3
            }
        );
    }

    #[test]
    fn malformed_contract_is_rejected_instead_of_defaulting() {
        for input in [
            r#"{"schema_version":1,"config":{"opacity_tiers":{"full":"high"}}}"#,
            r#"{"schema_version":1,"config":{"opacity":{}}}"#,
            r#"{"schema_version":1}"#,
            r#"{"schema_version":1,"config":{},"extra":true}"#,
        ] {
            let err = BehaviorConfig::from_json_compat_str(input).expect_err(input);
            assert!(matches!(err, BehaviorError::InvalidConfig(_)), "{input}");
        }
    }

    #[test]
    fn non_integer_schema_version_is_rejected() {
        let input = r#"{"schema_version":"one","config":{}}"#;
        let err = BehaviorConfig::from_json_compat_str(input).expect_err("version");
        assert!(matches!(err, BehaviorError::InvalidConfig(_)));
    }

    #[test]
    fn bare_config_with_unknown_keys_is_rejected() {
        for input in [
            r#"{"opacity":{"full":1.0}}"#,
            r#"{"opacity_tiers":{"fll":0.3}}"#,
        ] {
            let err = BehaviorConfig::from_json_compat_str(input).expect_err(input);
            assert!(matches!(err, BehaviorError::InvalidConfig(_)), "{input}");
        }
    }

    #[test]
    fn invalid_json_is_rejected() {
        let err = BehaviorConfig::from_json_compat_str("{not json").expect_err("json");
        assert!(matches!(err, BehaviorError::InvalidConfig(_)));
    }
}
