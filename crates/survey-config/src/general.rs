//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_pin_color() -> String {
    String::from("system_blue")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Color token given to new pins when none is passed.
    #[serde(default = "default_pin_color")]
    pub default_pin_color: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_pin_color: default_pin_color(),
        }
    }
}
