use serde::{Deserialize, Serialize};

use crate::todos::VisibilityFilter;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub todos: TodosConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Filter active at startup (default: all).
    #[serde(default)]
    pub initial_filter: VisibilityFilter,
}

/// Item settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodosConfig {
    /// Id assigned to the first item added in a session (default: 1).
    #[serde(default = "default_first_id")]
    pub first_id: u64,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_first_id() -> u64 {
    1
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            initial_filter: VisibilityFilter::default(),
        }
    }
}

impl Default for TodosConfig {
    fn default() -> Self {
        Self {
            first_id: default_first_id(),
        }
    }
}
