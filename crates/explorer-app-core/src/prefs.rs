// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Startup preferences for explorer front-ends.

use explorer_core::{UiState, ViewMode};
use serde::{Deserialize, Serialize};

/// Store key for [`ExplorerPrefs`].
pub const PREFS_KEY: &str = "prefs";

/// Preferences read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExplorerPrefs {
    /// Detail level the explorer opens in.
    pub view_mode: ViewMode,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ExplorerPrefs {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Beginner,
            log_filter: "warn".into(),
        }
    }
}

impl ExplorerPrefs {
    /// Initial UI state honouring these preferences.
    pub fn initial_state(&self) -> UiState {
        UiState::with_view_mode(self.view_mode)
    }
}
