use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll / tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture the mouse so clicks on the button increment (default: true).
    #[serde(default = "default_true")]
    pub mouse_capture: bool,
    /// Show the key-hint footer (default: true).
    #[serde(default = "default_true")]
    pub show_footer: bool,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse_capture: true,
            show_footer: true,
        }
    }
}
