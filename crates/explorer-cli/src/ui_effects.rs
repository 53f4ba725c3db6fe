// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Effect runner for UiEffect -> terminal camera; includes a recording fake for tests.

use explorer_core::layout::anchor_positions;
use explorer_core::{Catalog, NodeId, UiEffect};
use tracing::info;

/// Executes effects emitted by the reducer.
pub trait UiEffectsRunner {
    /// Run effects in order.
    fn run(&mut self, effects: Vec<UiEffect>, catalog: &Catalog);

    /// Node the camera is currently framing, if any.
    fn camera_target(&self) -> Option<&str>;
}

/// The terminal has no real camera; it remembers the focus and reports it.
#[derive(Debug, Default)]
pub struct TerminalEffects {
    target: Option<NodeId>,
}

impl UiEffectsRunner for TerminalEffects {
    fn run(&mut self, effects: Vec<UiEffect>, catalog: &Catalog) {
        for eff in effects {
            match eff {
                UiEffect::FocusCamera { target } => {
                    let anchor = anchor_positions(catalog).get(&target).copied();
                    info!(%target, ?anchor, "camera focus");
                    self.target = Some(target);
                }
            }
        }
    }

    fn camera_target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

/// Test fake: records every effect it is handed.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingEffects {
    pub calls: Vec<UiEffect>,
}

#[cfg(test)]
impl UiEffectsRunner for RecordingEffects {
    fn run(&mut self, effects: Vec<UiEffect>, _catalog: &Catalog) {
        self.calls.extend(effects);
    }

    fn camera_target(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|eff| match eff {
            UiEffect::FocusCamera { target } => Some(target.as_str()),
        })
    }
}
