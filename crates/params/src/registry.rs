//! Limits that bound the size and inputs of a registry.

use serde::{Deserialize, Serialize};

use super::default::{
    MAX_NODE_OPERATORS_COUNT, MAX_NODE_OPERATOR_NAME_LENGTH, MAX_STUCK_PENALTY_DELAY,
};

/// The limits enforced by a registry.
///
/// These default to the protocol constants; deployments may only tighten them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryParams {
    /// Maximum length of an operator name, in bytes.
    pub max_name_length: usize,

    /// Maximum number of operators.
    pub max_operators: u64,

    /// Maximum stuck penalty delay, in seconds.
    pub max_stuck_penalty_delay: u64,
}

impl RegistryParams {
    /// Returns `true` if none of the limits exceed the protocol constants.
    pub const fn is_within_protocol_limits(&self) -> bool {
        self.max_name_length <= MAX_NODE_OPERATOR_NAME_LENGTH
            && self.max_operators <= MAX_NODE_OPERATORS_COUNT
            && self.max_stuck_penalty_delay <= MAX_STUCK_PENALTY_DELAY
    }
}

impl Default for RegistryParams {
    fn default() -> Self {
        Self {
            max_name_length: MAX_NODE_OPERATOR_NAME_LENGTH,
            max_operators: MAX_NODE_OPERATORS_COUNT,
            max_stuck_penalty_delay: MAX_STUCK_PENALTY_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_params_serde() {
        let params = RegistryParams::default();
        let serialized = toml::to_string(&params).unwrap();

        let deserialized: RegistryParams = toml::from_str(&serialized).unwrap();

        assert_eq!(params, deserialized);

        let params_toml = r#"
            max_name_length = 64
            max_operators = 10
            max_stuck_penalty_delay = 86400
        "#;
        let parsed = toml::from_str::<RegistryParams>(params_toml)
            .expect("must be able to deserialize RegistryParams from a toml");
        assert!(parsed.is_within_protocol_limits());
    }

    #[test]
    fn test_registry_params_limits() {
        assert!(RegistryParams::default().is_within_protocol_limits());

        let params = RegistryParams {
            max_operators: MAX_NODE_OPERATORS_COUNT + 1,
            ..Default::default()
        };
        assert!(!params.is_within_protocol_limits());
    }
}
