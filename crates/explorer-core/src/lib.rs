// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core of the Polkadot ecosystem explorer.
//!
//! A static catalog (relay chain, parachains, dApps) plus a scripted tour feed
//! a small view state machine. Every transition is a pure function from one
//! [`UiState`] value to the next; the render projection derives what is
//! visible and emphasized from `(catalog, state)` alone. Nothing here draws
//! anything, so any front-end (terminal, egui, web) can sit on top.

pub mod catalog;
pub mod core;
pub mod dataset;
pub mod error;
pub mod layout;
pub mod projection;
pub mod tour;
pub mod ui_state;

pub use crate::catalog::{Catalog, LayerFocus, Node, NodeId, NodeKind, NodeMetrics, TourStep};
pub use crate::core::{Layer, LayerVisibility, Overlay, TourState, UiState, ViewMode};
pub use crate::error::{CatalogError, ExplorerError};
pub use crate::projection::{
    detail_panel, frame, tour_panel, visible_nodes, DetailPanel, Emphasis, Frame, TourPanel,
    VisibleNode,
};
pub use crate::tour::apply_tour_step;
pub use crate::ui_state::{reduce, UiEffect, UiEvent};
