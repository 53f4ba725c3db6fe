// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config port consumed by explorer front-ends.

use crate::config::ConfigError;
use crate::prefs::ExplorerPrefs;

/// Loading/saving of startup preferences.
pub trait ConfigPort {
    /// Load preferences; `None` if missing or unreadable.
    fn load_prefs(&self) -> Option<ExplorerPrefs>;
    /// Persist preferences.
    fn save_prefs(&self, prefs: &ExplorerPrefs) -> Result<(), ConfigError>;

    /// Stored preferences, or the defaults.
    fn prefs_or_default(&self) -> ExplorerPrefs {
        self.load_prefs().unwrap_or_default()
    }
}
