// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pure state transitions for the explorer UI (selection, layers, mode, tour).

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, NodeId};
use crate::core::{Layer, LayerVisibility, Overlay, TourState, UiState, ViewMode};
use crate::error::ExplorerError;
use crate::tour::apply_tour_step;

/// Input events the presentation layer feeds into [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEvent {
    /// Node clicked (`Some`) or empty space clicked (`None`).
    SelectNode(Option<NodeId>),
    /// Pointer entered (`Some`) or left (`None`) a node.
    HoverNode(Option<NodeId>),
    /// Detail panel close button.
    ClosePanel,
    /// Pick a detail level.
    SetViewMode(ViewMode),
    /// Flip beginner/advanced.
    ToggleViewMode,
    /// Force one layer on or off.
    SetLayerVisible(Layer, bool),
    /// Flip one layer.
    ToggleLayer(Layer),
    /// Begin the guided tour from step 0.
    StartTour,
    /// Leave the tour.
    EndTour,
    /// Next step, or finish on the last one.
    AdvanceTour,
    /// Previous step; no-op at step 0.
    RetreatTour,
    /// Jump straight to a step.
    GotoTourStep(usize),
    /// Show the About dialog.
    OpenAbout,
    /// Dismiss the About dialog.
    CloseAbout,
}

/// Side effects requested by a transition; executed by the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEffect {
    /// Move the camera toward a node (tour steps).
    FocusCamera {
        /// Node to frame.
        target: NodeId,
    },
}

fn ensure_known(catalog: &Catalog, id: Option<&str>) -> Result<(), ExplorerError> {
    match id {
        Some(id) if !catalog.contains(id) => Err(ExplorerError::UnknownNode(id.to_owned())),
        _ => Ok(()),
    }
}

/// Select `id`, or clear the selection with `None`. Nothing else changes.
pub fn select_node(
    catalog: &Catalog,
    ui: &UiState,
    id: Option<&str>,
) -> Result<UiState, ExplorerError> {
    ensure_known(catalog, id)?;
    Ok(UiState {
        selected: id.map(str::to_owned),
        ..ui.clone()
    })
}

/// Track the node under the pointer.
pub fn hover_node(
    catalog: &Catalog,
    ui: &UiState,
    id: Option<&str>,
) -> Result<UiState, ExplorerError> {
    ensure_known(catalog, id)?;
    Ok(UiState {
        hovered: id.map(str::to_owned),
        ..ui.clone()
    })
}

/// Set the detail level.
pub fn set_view_mode(ui: &UiState, mode: ViewMode) -> UiState {
    UiState {
        view_mode: mode,
        ..ui.clone()
    }
}

/// Flip the detail level.
pub fn toggle_view_mode(ui: &UiState) -> UiState {
    set_view_mode(ui, ui.view_mode.toggled())
}

/// Set one layer flag; every combination, including all hidden, is legal.
pub fn set_layer_visible(ui: &UiState, layer: Layer, visible: bool) -> UiState {
    UiState {
        layers: ui.layers.with(layer, visible),
        ..ui.clone()
    }
}

/// Flip one layer flag.
pub fn toggle_layer(ui: &UiState, layer: Layer) -> UiState {
    set_layer_visible(ui, layer, !ui.layers.get(layer))
}

/// Start the tour at step 0 with every layer visible, whatever the user had
/// toggled before.
pub fn start_tour(catalog: &Catalog, ui: &UiState) -> Result<UiState, ExplorerError> {
    let first = catalog
        .tour_step(0)
        .ok_or(ExplorerError::TourStepOutOfRange { index: 0, len: 0 })?;
    Ok(UiState {
        selected: Some(first.target_id.clone()),
        layers: LayerVisibility::ALL_VISIBLE,
        tour: TourState {
            active: true,
            step_index: 0,
        },
        ..ui.clone()
    })
}

/// Leave the tour and clear the selection. `step_index` is left as-is.
pub fn end_tour(ui: &UiState) -> UiState {
    UiState {
        selected: None,
        tour: TourState {
            active: false,
            ..ui.tour
        },
        ..ui.clone()
    }
}

/// Next step; on the last step this is exactly [`end_tour`].
pub fn advance_tour(catalog: &Catalog, ui: &UiState) -> Result<UiState, ExplorerError> {
    let current = ui.active_step().ok_or(ExplorerError::TourInactive)?;
    if current >= catalog.last_tour_index() {
        return Ok(end_tour(ui));
    }
    apply_tour_step(catalog, ui, current + 1)
}

/// Previous step; unchanged at step 0.
pub fn retreat_tour(catalog: &Catalog, ui: &UiState) -> Result<UiState, ExplorerError> {
    let current = ui.active_step().ok_or(ExplorerError::TourInactive)?;
    if current == 0 {
        return Ok(ui.clone());
    }
    apply_tour_step(catalog, ui, current - 1)
}

fn focus_if_moved(prev: &UiState, next: &UiState, fx: &mut Vec<UiEffect>) {
    if let Some(target) = &next.selected {
        if next.tour.active && (prev.tour != next.tour || prev.selected != next.selected) {
            fx.push(UiEffect::FocusCamera {
                target: target.clone(),
            });
        }
    }
}

/// Apply one event. On error the caller keeps `ui`; nothing is half-applied.
pub fn reduce(
    catalog: &Catalog,
    ui: &UiState,
    ev: UiEvent,
) -> Result<(UiState, Vec<UiEffect>), ExplorerError> {
    let mut fx = Vec::new();
    let next = match ev {
        UiEvent::SelectNode(id) => select_node(catalog, ui, id.as_deref())?,
        UiEvent::HoverNode(id) => hover_node(catalog, ui, id.as_deref())?,
        UiEvent::ClosePanel => select_node(catalog, ui, None)?,
        UiEvent::SetViewMode(mode) => set_view_mode(ui, mode),
        UiEvent::ToggleViewMode => toggle_view_mode(ui),
        UiEvent::SetLayerVisible(layer, visible) => set_layer_visible(ui, layer, visible),
        UiEvent::ToggleLayer(layer) => toggle_layer(ui, layer),
        UiEvent::StartTour => {
            let next = start_tour(catalog, ui)?;
            // Restarting from step 0 refocuses even if nothing moved.
            if let Some(target) = &next.selected {
                fx.push(UiEffect::FocusCamera {
                    target: target.clone(),
                });
            }
            next
        }
        UiEvent::EndTour => end_tour(ui),
        UiEvent::AdvanceTour => {
            let next = advance_tour(catalog, ui)?;
            focus_if_moved(ui, &next, &mut fx);
            next
        }
        UiEvent::RetreatTour => {
            let next = retreat_tour(catalog, ui)?;
            focus_if_moved(ui, &next, &mut fx);
            next
        }
        UiEvent::GotoTourStep(index) => {
            let next = apply_tour_step(catalog, ui, index)?;
            focus_if_moved(ui, &next, &mut fx);
            next
        }
        UiEvent::OpenAbout => UiState {
            overlay: Overlay::About,
            ..ui.clone()
        },
        UiEvent::CloseAbout => UiState {
            overlay: Overlay::None,
            ..ui.clone()
        },
    };
    Ok((next, fx))
}
