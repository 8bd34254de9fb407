//! Default values and hard limits for the registry.

/// Maximum length of a node operator name, in bytes.
pub const MAX_NODE_OPERATOR_NAME_LENGTH: usize = 255;

/// Maximum number of node operators a single registry can hold.
pub const MAX_NODE_OPERATORS_COUNT: u64 = 200;

/// Upper bound for the stuck penalty delay, in seconds.
pub const MAX_STUCK_PENALTY_DELAY: u64 = 365 * 24 * 60 * 60;

/// Stuck penalty delay used when none is configured, in seconds.
pub const DEFAULT_STUCK_PENALTY_DELAY: u64 = 24 * 60 * 60;

/// The version stamped into the registry on initialization.
pub const CONTRACT_VERSION: u64 = 2;

/// Module type of a curated registry.
pub const DEFAULT_MODULE_TYPE: &str = "curated-onchain-v1";
