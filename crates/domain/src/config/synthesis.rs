use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SynthesisConfig {
    /// Final hostname label that marks a query for custom synthesis.
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Base /96 under which custom synthesis builds addresses.
    #[serde(default = "default_base_prefix")]
    pub base_prefix: String,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            base_prefix: default_base_prefix(),
        }
    }
}

fn default_suffix() -> String {
    "nat64".to_string()
}

fn default_base_prefix() -> String {
    "64:ff9b:1::/96".to_string()
}
