//! Types for the registry parameters.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ModuleTypeError;

/// Size of the staking module type identifier, in bytes.
pub const MODULE_TYPE_SIZE: usize = 32;

/// Fixed-size identifier of a staking module, set once at initialization.
///
/// The identifier holds a short UTF-8 string right-padded with zero bytes. At least one trailing
/// zero byte is always present so that the text can be recovered unambiguously.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ModuleType([u8; MODULE_TYPE_SIZE]);

impl ModuleType {
    /// Wraps raw identifier bytes after checking that they encode a padded string.
    pub fn from_bytes(bytes: [u8; MODULE_TYPE_SIZE]) -> Result<Self, ModuleTypeError> {
        let module_type = ModuleType(bytes);
        module_type.decode()?;

        Ok(module_type)
    }

    /// Returns the identifier as a byte slice.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the identifier as a byte array.
    pub const fn as_array(&self) -> &[u8; MODULE_TYPE_SIZE] {
        &self.0
    }

    /// Returns the text of the identifier without the zero padding.
    pub fn as_str(&self) -> &str {
        // the constructors guarantee a well-formed encoding
        self.decode().unwrap_or_default()
    }

    fn decode(&self) -> Result<&str, ModuleTypeError> {
        let end = self
            .0
            .iter()
            .position(|b| *b == 0)
            .ok_or(ModuleTypeError::Malformed)?;

        if end == 0 {
            return Err(ModuleTypeError::Empty);
        }

        if self.0[end..].iter().any(|b| *b != 0) {
            return Err(ModuleTypeError::Malformed);
        }

        std::str::from_utf8(&self.0[..end]).map_err(|_| ModuleTypeError::Malformed)
    }
}

impl FromStr for ModuleType {
    type Err = ModuleTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.is_empty() {
            return Err(ModuleTypeError::Empty);
        }
        if bytes.len() >= MODULE_TYPE_SIZE {
            return Err(ModuleTypeError::TooLong(bytes.len()));
        }
        if bytes.contains(&0) {
            return Err(ModuleTypeError::Malformed);
        }

        let mut array = [0u8; MODULE_TYPE_SIZE];
        array[..bytes.len()].copy_from_slice(bytes);

        Ok(ModuleType(array))
    }
}

impl TryFrom<&str> for ModuleType {
    type Error = ModuleTypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for ModuleType {
    type Error = ModuleTypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ModuleType> for [u8; MODULE_TYPE_SIZE] {
    fn from(module_type: ModuleType) -> Self {
        module_type.0
    }
}

impl AsRef<[u8]> for ModuleType {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for ModuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ModuleType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModuleType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let module_type = String::deserialize(deserializer)?;
        ModuleType::try_from(module_type).map_err(serde::de::Error::custom)
    }
}
