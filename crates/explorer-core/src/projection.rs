// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Render projection: pure derivations from `(catalog, state)` to what a
//! front-end draws. Owns no state; call again after every transition.

use glam::Vec3;
use serde::Serialize;

use crate::catalog::{Catalog, Node, NodeKind, NodeMetrics};
use crate::core::{LayerVisibility, Overlay, UiState, ViewMode};
use crate::layout::anchor_positions;

/// Visual emphasis of a drawn node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    /// The selected node.
    Selected,
    /// Everything else.
    Normal,
}

/// A node the renderer should draw this frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibleNode<'a> {
    /// Catalog record.
    pub node: &'a Node,
    /// Selected or not.
    pub emphasis: Emphasis,
    /// Under the pointer.
    pub hovered: bool,
    /// Scene anchor.
    pub position: Vec3,
}

/// Info-panel content for the selected node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailPanel<'a> {
    /// Node id.
    pub id: &'a str,
    /// Heading.
    pub name: &'a str,
    /// Category, or the kind label when the node has none.
    pub badge: &'a str,
    /// Body text.
    pub description: &'a str,
    /// Advanced mode only.
    pub technical_details: Option<&'a str>,
    /// Advanced mode only.
    pub metrics: Option<&'a NodeMetrics>,
    /// External chains, shown in both modes.
    pub bridges_to: &'a [String],
}

/// Tour card content for the active step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TourPanel<'a> {
    /// 1-based step number.
    pub step_number: usize,
    /// Steps in the script.
    pub total: usize,
    /// Step heading.
    pub title: &'a str,
    /// Step body.
    pub content: &'a str,
    /// False on the first step.
    pub can_retreat: bool,
    /// True on the final step.
    pub is_last: bool,
}

impl TourPanel<'_> {
    /// Label for the forward button.
    pub fn advance_label(&self) -> &'static str {
        if self.is_last {
            "Finish"
        } else {
            "Next"
        }
    }
}

/// Everything a front-end needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame<'a> {
    /// Detail level.
    pub view_mode: ViewMode,
    /// Layer checkboxes.
    pub layers: LayerVisibility,
    /// Open modal.
    pub overlay: Overlay,
    /// Nodes to draw, in stable order.
    pub visible: Vec<VisibleNode<'a>>,
    /// Info panel, when something is selected.
    pub detail: Option<DetailPanel<'a>>,
    /// Tour card, when a tour is running.
    pub tour: Option<TourPanel<'a>>,
}

fn is_included(catalog: &Catalog, layers: LayerVisibility, node: &Node) -> bool {
    if !layers.get(node.layer()) {
        return false;
    }
    match node.kind {
        // A dApp is only drawn while its parent parachain is.
        NodeKind::DApp => catalog
            .parent_of(node)
            .is_some_and(|parent| is_included(catalog, layers, parent)),
        NodeKind::RelayChain | NodeKind::Parachain | NodeKind::Bridge => true,
    }
}

/// Visible nodes with their emphasis.
///
/// Order is the scene tree: relay chain, then each parachain followed by its
/// dApps, then bridges.
pub fn visible_nodes<'a>(catalog: &'a Catalog, state: &UiState) -> Vec<VisibleNode<'a>> {
    let anchors = anchor_positions(catalog);
    let relay = catalog.relay_chain();
    let tree = std::iter::once(relay)
        .chain(
            catalog
                .parachains()
                .flat_map(|para| std::iter::once(para).chain(catalog.dapps_of(&para.id))),
        )
        .chain(catalog.of_kind(NodeKind::Bridge));

    tree.filter(|node| is_included(catalog, state.layers, node))
        .map(|node| VisibleNode {
            node,
            emphasis: if state.selected.as_deref() == Some(node.id.as_str()) {
                Emphasis::Selected
            } else {
                Emphasis::Normal
            },
            hovered: state.hovered.as_deref() == Some(node.id.as_str()),
            position: anchors.get(&node.id).copied().unwrap_or(Vec3::ZERO),
        })
        .collect()
}

/// Info panel for the selected node; technical details and metrics only in
/// advanced mode.
pub fn detail_panel<'a>(catalog: &'a Catalog, state: &UiState) -> Option<DetailPanel<'a>> {
    let node = catalog.get(state.selected.as_deref()?)?;
    let advanced = state.view_mode == ViewMode::Advanced;
    Some(DetailPanel {
        id: &node.id,
        name: &node.name,
        badge: node.category.as_deref().unwrap_or_else(|| node.kind.label()),
        description: &node.description,
        technical_details: node.technical_details.as_deref().filter(|_| advanced),
        metrics: node.metrics.as_ref().filter(|_| advanced),
        bridges_to: &node.bridges_to,
    })
}

/// Tour card for the active step.
pub fn tour_panel<'a>(catalog: &'a Catalog, state: &UiState) -> Option<TourPanel<'a>> {
    let index = state.active_step()?;
    let step = catalog.tour_step(index)?;
    Some(TourPanel {
        step_number: index + 1,
        total: catalog.tour_steps().len(),
        title: &step.title,
        content: &step.content,
        can_retreat: index > 0,
        is_last: index == catalog.last_tour_index(),
    })
}

/// Full frame for the current state.
pub fn frame<'a>(catalog: &'a Catalog, state: &UiState) -> Frame<'a> {
    Frame {
        view_mode: state.view_mode,
        layers: state.layers,
        overlay: state.overlay,
        visible: visible_nodes(catalog, state),
        detail: detail_panel(catalog, state),
        tour: tour_panel(catalog, state),
    }
}
