//! General application configuration.

use serde::{Deserialize, Serialize};
use spark_core::enums::IdeaColor;

const fn default_limit() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Color for ideas created without one.
    #[serde(default)]
    pub default_color: IdeaColor,

    /// Maximum rows printed by list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_color: IdeaColor::default(),
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_color, IdeaColor::Purple);
        assert_eq!(config.default_limit, 50);
    }
}
