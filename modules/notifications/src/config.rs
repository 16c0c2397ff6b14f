use serde::{Deserialize, Serialize};

/// Configuration for the notifications module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationsConfig {
    /// Base URL of the text-generation collaborator; unset = templates only.
    #[serde(default)]
    pub textgen_base_url: Option<String>,
    /// Hard ceiling on one text-generation attempt.
    #[serde(default = "default_textgen_timeout_ms")]
    pub textgen_timeout_ms: u64,
    /// Buffer of the live-subscriber broadcast channel.
    #[serde(default = "default_broadcast_capacity")]
    pub broadcast_capacity: usize,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            textgen_base_url: None,
            textgen_timeout_ms: default_textgen_timeout_ms(),
            broadcast_capacity: default_broadcast_capacity(),
        }
    }
}

fn default_textgen_timeout_ms() -> u64 {
    2000
}

fn default_broadcast_capacity() -> usize {
    64
}
