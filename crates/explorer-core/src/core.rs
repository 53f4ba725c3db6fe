// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Domain-level UI state for the explorer (selection, layers, mode, tour).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::NodeId;
use crate::error::ExplorerError;

/// Detail level of the info panel.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Name, category and description only.
    #[default]
    Beginner,
    /// Adds technical details and metrics.
    Advanced,
}

impl ViewMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Beginner => Self::Advanced,
            Self::Advanced => Self::Beginner,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Beginner => "beginner",
            Self::Advanced => "advanced",
        })
    }
}

impl FromStr for ViewMode {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "advanced" => Ok(Self::Advanced),
            _ => Err(ExplorerError::UnknownViewMode(s.to_owned())),
        }
    }
}

/// One of the three structural layers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Layer 0: the relay chain.
    Relay,
    /// Layer 1: parachains (and bridges).
    Parachain,
    /// Layer 2: dApps.
    DApp,
}

impl Layer {
    /// All layers, bottom-up.
    pub const ALL: [Self; 3] = [Self::Relay, Self::Parachain, Self::DApp];

    /// Human label used by the layer checkboxes.
    pub fn label(self) -> &'static str {
        match self {
            Self::Relay => "Layer 0 (Relay)",
            Self::Parachain => "Layer 1 (Parachains)",
            Self::DApp => "Layer 2 (dApps)",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Relay => "relay",
            Self::Parachain => "parachain",
            Self::DApp => "dapp",
        })
    }
}

impl FromStr for Layer {
    type Err = ExplorerError;

    /// Accepts `relay|parachain|dapp`, `l0|l1|l2` and `layer0|layer1|layer2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relay" | "l0" | "layer0" => Ok(Self::Relay),
            "parachain" | "parachains" | "l1" | "layer1" => Ok(Self::Parachain),
            "dapp" | "dapps" | "l2" | "layer2" => Ok(Self::DApp),
            _ => Err(ExplorerError::UnknownLayer(s.to_owned())),
        }
    }
}

/// Independent show/hide flag per layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayerVisibility {
    /// Layer 0.
    pub relay: bool,
    /// Layer 1.
    pub parachain: bool,
    /// Layer 2.
    pub dapp: bool,
}

impl LayerVisibility {
    /// Every layer shown.
    pub const ALL_VISIBLE: Self = Self::new(true, true, true);

    /// Build from the three flags, bottom-up.
    pub const fn new(relay: bool, parachain: bool, dapp: bool) -> Self {
        Self {
            relay,
            parachain,
            dapp,
        }
    }

    /// Flag for `layer`.
    pub fn get(self, layer: Layer) -> bool {
        match layer {
            Layer::Relay => self.relay,
            Layer::Parachain => self.parachain,
            Layer::DApp => self.dapp,
        }
    }

    /// Copy with `layer` set to `visible`; the other two flags untouched.
    pub fn with(self, layer: Layer, visible: bool) -> Self {
        let mut next = self;
        match layer {
            Layer::Relay => next.relay = visible,
            Layer::Parachain => next.parachain = visible,
            Layer::DApp => next.dapp = visible,
        }
        next
    }

    /// `(relay, parachain, dapp)`.
    pub fn as_tuple(self) -> (bool, bool, bool) {
        (self.relay, self.parachain, self.dapp)
    }
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self::ALL_VISIBLE
    }
}

/// Guided-tour position. `step_index` is only meaningful while `active`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TourState {
    /// Tour running.
    pub active: bool,
    /// Current step (valid index into the script while active).
    pub step_index: usize,
}

/// Modal overlay on top of the scene.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Overlay {
    /// Nothing open.
    #[default]
    None,
    /// The About dialog.
    About,
}

/// The single mutable entity of the explorer.
///
/// Treated as a value: transitions in [`crate::ui_state`] and
/// [`crate::tour`] take `&UiState` and return a fresh one, so a reader never
/// sees a half-applied update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiState {
    /// Node shown in the detail panel.
    pub selected: Option<NodeId>,
    /// Node under the pointer (affordance only).
    pub hovered: Option<NodeId>,
    /// Detail level.
    pub view_mode: ViewMode,
    /// Per-layer visibility.
    pub layers: LayerVisibility,
    /// Guided tour.
    pub tour: TourState,
    /// Open modal, if any.
    pub overlay: Overlay,
}

impl UiState {
    /// Idle state: nothing selected, every layer visible, beginner mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle state starting in `mode`.
    pub fn with_view_mode(mode: ViewMode) -> Self {
        Self {
            view_mode: mode,
            ..Self::default()
        }
    }

    /// Current step index when a tour is running.
    pub fn active_step(&self) -> Option<usize> {
        self.tour.active.then_some(self.tour.step_index)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn initial_state_is_idle_beginner_all_visible() {
        let ui = UiState::new();
        assert_eq!(ui.selected, None);
        assert_eq!(ui.view_mode, ViewMode::Beginner);
        assert_eq!(ui.layers.as_tuple(), (true, true, true));
        assert!(!ui.tour.active);
        assert_eq!(ui.overlay, Overlay::None);
        assert_eq!(ui.active_step(), None);
    }

    #[test]
    fn layer_tags_parse_in_every_spelling() {
        assert_eq!("l0".parse::<Layer>().unwrap(), Layer::Relay);
        assert_eq!("Parachain".parse::<Layer>().unwrap(), Layer::Parachain);
        assert_eq!("layer2".parse::<Layer>().unwrap(), Layer::DApp);
        assert_eq!(
            "l3".parse::<Layer>(),
            Err(ExplorerError::UnknownLayer("l3".into()))
        );
    }

    #[test]
    fn with_touches_exactly_one_flag() {
        let v = LayerVisibility::ALL_VISIBLE.with(Layer::Parachain, false);
        assert_eq!(v.as_tuple(), (true, false, true));
        assert!(!v.get(Layer::Parachain));
    }

    #[test]
    fn view_mode_round_trips_through_text() {
        for mode in [ViewMode::Beginner, ViewMode::Advanced] {
            assert_eq!(mode.to_string().parse::<ViewMode>().unwrap(), mode);
        }
        assert!("expert".parse::<ViewMode>().is_err());
    }
}
