// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Owns the catalog and current state; the only place state is replaced.

use explorer_core::{frame, reduce, Catalog, ExplorerError, Frame, UiEvent, UiState};
use tracing::debug;

use crate::ui_effects::UiEffectsRunner;

/// One explorer session: catalog, latest state, effect runner.
pub struct Session<R> {
    catalog: Catalog,
    ui: UiState,
    effects: R,
}

impl<R: UiEffectsRunner> Session<R> {
    /// Start from `ui` (normally the prefs-derived idle state).
    pub fn new(catalog: Catalog, ui: UiState, effects: R) -> Self {
        Self {
            catalog,
            ui,
            effects,
        }
    }

    /// Apply one event. On error the previous state is kept.
    pub fn apply(&mut self, ev: UiEvent) -> Result<(), ExplorerError> {
        debug!(?ev, "applying event");
        let (next, fx) = reduce(&self.catalog, &self.ui, ev)?;
        self.ui = next;
        self.effects.run(fx, &self.catalog);
        Ok(())
    }

    /// Latest state.
    pub fn state(&self) -> &UiState {
        &self.ui
    }

    /// Render projection of the latest state.
    pub fn frame(&self) -> Frame<'_> {
        frame(&self.catalog, &self.ui)
    }

    /// Effect runner (camera focus).
    pub fn effects(&self) -> &R {
        &self.effects
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::ui_effects::RecordingEffects;
    use explorer_core::{dataset, UiEffect};

    fn session() -> Session<RecordingEffects> {
        Session::new(
            dataset::polkadot().unwrap(),
            UiState::new(),
            RecordingEffects::default(),
        )
    }

    #[test]
    fn tour_steps_drive_the_camera() {
        let mut s = session();
        s.apply(UiEvent::StartTour).unwrap();
        s.apply(UiEvent::AdvanceTour).unwrap();
        s.apply(UiEvent::AdvanceTour).unwrap();
        assert_eq!(s.effects().camera_target(), Some("moonbeam"));
        assert_eq!(s.effects().calls.len(), 3);
        assert_eq!(
            s.effects().calls[0],
            UiEffect::FocusCamera { target: "relay-chain".into() }
        );
    }

    #[test]
    fn rejected_event_keeps_previous_state() {
        let mut s = session();
        s.apply(UiEvent::SelectNode(Some("acala".into()))).unwrap();
        let before = s.state().clone();
        assert!(s.apply(UiEvent::SelectNode(Some("kusama".into()))).is_err());
        assert!(s.apply(UiEvent::AdvanceTour).is_err());
        assert_eq!(s.state(), &before);
        assert!(s.effects().calls.is_empty());
    }

    #[test]
    fn frame_reflects_latest_state() {
        let mut s = session();
        s.apply(UiEvent::SelectNode(Some("astar".into()))).unwrap();
        assert_eq!(s.frame().detail.unwrap().name, "Astar");
    }
}
