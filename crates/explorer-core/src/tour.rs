// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tour driver: derive layer visibility and selection for a tour step.

use crate::catalog::{Catalog, LayerFocus};
use crate::core::{LayerVisibility, TourState, UiState};
use crate::error::ExplorerError;

/// Layer visibility imposed by a step's focus.
///
/// `Layer2` keeps the lower layers on for context, so it matches `All`.
pub fn layers_for(focus: LayerFocus) -> LayerVisibility {
    match focus {
        LayerFocus::Layer0 => LayerVisibility::new(true, false, false),
        LayerFocus::Layer1 => LayerVisibility::new(true, true, false),
        LayerFocus::All | LayerFocus::Layer2 => LayerVisibility::ALL_VISIBLE,
    }
}

/// Jump the tour to `index`: select the step's target, apply its layer focus,
/// and mark the tour active. View mode, hover and overlay carry over.
pub fn apply_tour_step(
    catalog: &Catalog,
    ui: &UiState,
    index: usize,
) -> Result<UiState, ExplorerError> {
    let step = catalog
        .tour_step(index)
        .ok_or(ExplorerError::TourStepOutOfRange {
            index,
            len: catalog.tour_steps().len(),
        })?;
    Ok(UiState {
        selected: Some(step.target_id.clone()),
        layers: layers_for(step.layer_focus),
        tour: TourState {
            active: true,
            step_index: index,
        },
        ..ui.clone()
    })
}
