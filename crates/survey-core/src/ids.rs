//! ID prefixes and generation.
//!
//! IDs have the form `{prefix}-{8 hex chars}`, e.g. `pin-a3f8b2c1`. The random
//! part comes from the OS entropy source via `getrandom`.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

pub const PREFIX_PIN: &str = "pin";
pub const PREFIX_ISSUE: &str = "iss";

/// Every prefix in use.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_PIN, PREFIX_ISSUE];

/// Generate a prefixed ID. Returns e.g. `"iss-0c9d11fe"`.
///
/// # Errors
///
/// Returns `CoreError::Other` if the entropy source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("entropy source unavailable: {e}")))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}

macro_rules! prefixed_id {
    ($(#[$meta:meta])* $name:ident, $prefix:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh random ID.
            ///
            /// # Errors
            ///
            /// Returns `CoreError::Other` if the entropy source is unavailable.
            pub fn generate() -> Result<Self, CoreError> {
                generate_id($prefix).map(Self)
            }

            /// Parse an ID, checking its prefix.
            ///
            /// # Errors
            ///
            /// Returns `CoreError::Validation` if the prefix does not match.
            pub fn parse(raw: &str) -> Result<Self, CoreError> {
                match raw.split_once('-') {
                    Some((prefix, rest)) if prefix == $prefix && !rest.is_empty() => {
                        Ok(Self(raw.to_string()))
                    }
                    _ => Err(CoreError::Validation(format!(
                        "expected a '{}-' id, got '{raw}'",
                        $prefix
                    ))),
                }
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

prefixed_id!(
    /// Identity of a pin on the site map.
    PinId,
    PREFIX_PIN
);

prefixed_id!(
    /// Identity of an issue attached to a pin.
    IssueId,
    PREFIX_ISSUE
);
