//! Re-exports of the commonly used parameter types.

pub use crate::{
    default::{
        CONTRACT_VERSION, DEFAULT_MODULE_TYPE, DEFAULT_STUCK_PENALTY_DELAY,
        MAX_NODE_OPERATORS_COUNT, MAX_NODE_OPERATOR_NAME_LENGTH, MAX_STUCK_PENALTY_DELAY,
    },
    errors::ModuleTypeError,
    registry::RegistryParams,
    types::{ModuleType, MODULE_TYPE_SIZE},
};
