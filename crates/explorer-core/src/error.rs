// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types for catalog construction and state transitions.

use thiserror::Error;

use crate::catalog::NodeId;

/// Invalid-argument conditions raised by state transitions.
///
/// These always indicate a caller bug (a stale id, a typo in a layer tag, a
/// tour index computed off the end of the script). Transitions never clamp or
/// ignore them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExplorerError {
    /// A node id that is not present in the catalog.
    #[error("unknown node id: {0}")]
    UnknownNode(NodeId),
    /// A layer tag that does not name one of the three layers.
    #[error("unknown layer tag: {0}")]
    UnknownLayer(String),
    /// A view-mode tag other than `beginner`/`advanced`.
    #[error("unknown view mode: {0}")]
    UnknownViewMode(String),
    /// Tour step index past the end of the script.
    #[error("tour step {index} out of range (script has {len} steps)")]
    TourStepOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of steps in the script.
        len: usize,
    },
    /// Tour navigation requested while no tour is running.
    #[error("tour is not active")]
    TourInactive,
}

/// Dataset invariant violations detected while building a [`crate::Catalog`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two nodes share an id.
    #[error("duplicate node id: {0}")]
    DuplicateId(NodeId),
    /// The catalog must hold exactly one relay chain.
    #[error("expected exactly one relay chain, found {0}")]
    RelayCount(usize),
    /// A dApp without a `parent_id`.
    #[error("dApp {0} has no parent parachain")]
    MissingParent(NodeId),
    /// A dApp whose parent id does not resolve.
    #[error("dApp {id} references unknown parent {parent}")]
    UnknownParent {
        /// The dApp.
        id: NodeId,
        /// The dangling parent id.
        parent: NodeId,
    },
    /// A dApp whose parent exists but is not a parachain.
    #[error("dApp {id} has parent {parent}, which is not a parachain")]
    ParentNotParachain {
        /// The dApp.
        id: NodeId,
        /// The offending parent id.
        parent: NodeId,
    },
    /// A non-dApp node carrying a `parent_id`.
    #[error("node {0} is not a dApp but declares a parent")]
    UnexpectedParent(NodeId),
    /// A tour step whose target does not resolve.
    #[error("tour step {step} targets unknown node {target}")]
    UnknownTourTarget {
        /// Step index.
        step: usize,
        /// The dangling target id.
        target: NodeId,
    },
    /// The tour script has no steps.
    #[error("tour script is empty")]
    EmptyTour,
}
