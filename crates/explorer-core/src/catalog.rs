// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Static ecosystem catalog: nodes, tour script, and the parent/child index.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Layer;
use crate::error::CatalogError;

/// Stable node identifier (e.g. `"moonbeam"`).
pub type NodeId = String;

/// Structural role of a node. Fixed at creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// The coordinating chain (layer 0).
    RelayChain,
    /// A chain attached to the relay chain (layer 1).
    Parachain,
    /// An application hosted on a parachain (layer 2).
    #[serde(rename = "dapp")]
    DApp,
    /// A bridge to an external network; drawn with the parachains.
    Bridge,
}

impl NodeKind {
    /// Layer whose visibility flag governs nodes of this kind.
    pub fn layer(self) -> Layer {
        match self {
            Self::RelayChain => Layer::Relay,
            Self::Parachain | Self::Bridge => Layer::Parachain,
            Self::DApp => Layer::DApp,
        }
    }

    /// Upper-case label used as a badge when a node has no category.
    pub fn label(self) -> &'static str {
        match self {
            Self::RelayChain => "RELAY_CHAIN",
            Self::Parachain => "PARACHAIN",
            Self::DApp => "DAPP",
            Self::Bridge => "BRIDGE",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Market/network figures shown in advanced mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeMetrics {
    /// Native token ticker.
    pub token_ticker: Option<String>,
    /// Market capitalisation, preformatted.
    pub market_cap: Option<String>,
    /// Throughput, preformatted.
    pub tps: Option<String>,
    /// Block time, preformatted.
    pub block_time: Option<String>,
}

/// One entry of the ecosystem catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    /// Unique id.
    pub id: NodeId,
    /// Structural role.
    pub kind: NodeKind,
    /// Display name.
    pub name: String,
    /// Short category badge.
    pub category: Option<String>,
    /// Beginner-level description.
    pub description: String,
    /// Extra text surfaced only in advanced mode.
    pub technical_details: Option<String>,
    /// Owning parachain; set only for dApps.
    pub parent_id: Option<NodeId>,
    /// External chains this node interoperates with.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bridges_to: Vec<String>,
    /// Display color hint (`#rrggbb`).
    pub color: Option<String>,
    /// Advanced-mode figures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<NodeMetrics>,
}

impl Node {
    fn bare(id: &str, kind: NodeKind, name: &str, description: &str) -> Self {
        Self {
            id: id.to_owned(),
            kind,
            name: name.to_owned(),
            category: None,
            description: description.to_owned(),
            technical_details: None,
            parent_id: None,
            bridges_to: Vec::new(),
            color: None,
            metrics: None,
        }
    }

    /// New relay-chain node.
    pub fn relay_chain(id: &str, name: &str, description: &str) -> Self {
        Self::bare(id, NodeKind::RelayChain, name, description)
    }

    /// New parachain node.
    pub fn parachain(id: &str, name: &str, description: &str) -> Self {
        Self::bare(id, NodeKind::Parachain, name, description)
    }

    /// New dApp node hosted on `parent`.
    pub fn dapp(id: &str, parent: &str, name: &str, description: &str) -> Self {
        let mut node = Self::bare(id, NodeKind::DApp, name, description);
        node.parent_id = Some(parent.to_owned());
        node
    }

    /// New bridge node.
    pub fn bridge(id: &str, name: &str, description: &str) -> Self {
        Self::bare(id, NodeKind::Bridge, name, description)
    }

    /// Set the category badge.
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_owned());
        self
    }

    /// Set the advanced-mode details.
    pub fn with_technical_details(mut self, details: &str) -> Self {
        self.technical_details = Some(details.to_owned());
        self
    }

    /// Set the color hint.
    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_owned());
        self
    }

    /// Set the list of bridged external chains.
    pub fn with_bridges<I, S>(mut self, chains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bridges_to = chains.into_iter().map(Into::into).collect();
        self
    }

    /// Attach advanced-mode metrics.
    pub fn with_metrics(mut self, metrics: NodeMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Layer governing this node's visibility.
    pub fn layer(&self) -> Layer {
        self.kind.layer()
    }
}

/// Which layers stay visible while a tour step is active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayerFocus {
    /// Everything visible.
    All,
    /// Relay chain only.
    Layer0,
    /// Relay chain and parachains.
    Layer1,
    /// dApps, with the lower layers kept for context.
    Layer2,
}

impl fmt::Display for LayerFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Layer0 => "layer0",
            Self::Layer1 => "layer1",
            Self::Layer2 => "layer2",
        })
    }
}

/// One stop of the guided tour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TourStep {
    /// Heading.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Node to select while the step is active.
    pub target_id: NodeId,
    /// Layer restriction for the step.
    pub layer_focus: LayerFocus,
}

impl TourStep {
    /// Build a tour step.
    pub fn new(title: &str, content: &str, target_id: &str, layer_focus: LayerFocus) -> Self {
        Self {
            title: title.to_owned(),
            content: content.to_owned(),
            target_id: target_id.to_owned(),
            layer_focus,
        }
    }
}

/// Validated, read-only catalog with id and parent indexes.
///
/// Built once at startup; every lookup afterwards is by id. Parent/child
/// linkage lives in `children` rather than in the node records so the flat
/// node list stays the single source of truth.
#[derive(Debug, Clone)]
pub struct Catalog {
    nodes: Vec<Node>,
    tour: Vec<TourStep>,
    index: BTreeMap<NodeId, usize>,
    children: BTreeMap<NodeId, Vec<usize>>,
    relay: usize,
}

impl Catalog {
    /// Validate `nodes` and `tour` and build the lookup indexes.
    pub fn new(nodes: Vec<Node>, tour: Vec<TourStep>) -> Result<Self, CatalogError> {
        let mut index = BTreeMap::new();
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(node.id.clone()));
            }
        }

        let relays: Vec<usize> = nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.kind == NodeKind::RelayChain)
            .map(|(i, _)| i)
            .collect();
        let relay = match relays.as_slice() {
            [only] => *only,
            other => return Err(CatalogError::RelayCount(other.len())),
        };

        let mut children: BTreeMap<NodeId, Vec<usize>> = BTreeMap::new();
        for (i, node) in nodes.iter().enumerate() {
            match (node.kind, node.parent_id.as_ref()) {
                (NodeKind::DApp, None) => return Err(CatalogError::MissingParent(node.id.clone())),
                (NodeKind::DApp, Some(parent)) => {
                    let Some(&p) = index.get(parent) else {
                        return Err(CatalogError::UnknownParent {
                            id: node.id.clone(),
                            parent: parent.clone(),
                        });
                    };
                    if nodes[p].kind != NodeKind::Parachain {
                        return Err(CatalogError::ParentNotParachain {
                            id: node.id.clone(),
                            parent: parent.clone(),
                        });
                    }
                    children.entry(parent.clone()).or_default().push(i);
                }
                (_, Some(_)) => return Err(CatalogError::UnexpectedParent(node.id.clone())),
                (_, None) => {}
            }
        }

        if tour.is_empty() {
            return Err(CatalogError::EmptyTour);
        }
        for (step, s) in tour.iter().enumerate() {
            if !index.contains_key(&s.target_id) {
                return Err(CatalogError::UnknownTourTarget {
                    step,
                    target: s.target_id.clone(),
                });
            }
        }

        debug!(nodes = nodes.len(), tour_steps = tour.len(), "catalog loaded");
        Ok(Self {
            nodes,
            tour,
            index,
            children,
            relay,
        })
    }

    /// All nodes in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Look up a node by id.
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// True when `id` names a catalog node.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The single relay-chain node.
    pub fn relay_chain(&self) -> &Node {
        &self.nodes[self.relay]
    }

    /// Nodes of `kind`, in declaration order.
    pub fn of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }

    /// Parachains in declaration order.
    pub fn parachains(&self) -> impl Iterator<Item = &Node> + '_ {
        self.of_kind(NodeKind::Parachain)
    }

    /// dApps hosted on `parachain_id`, in declaration order.
    pub fn dapps_of(&self, parachain_id: &str) -> impl Iterator<Item = &Node> + '_ {
        self.children
            .get(parachain_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&i| &self.nodes[i])
    }

    /// Parent parachain of a dApp.
    pub fn parent_of(&self, node: &Node) -> Option<&Node> {
        node.parent_id.as_deref().and_then(|p| self.get(p))
    }

    /// The tour script.
    pub fn tour_steps(&self) -> &[TourStep] {
        &self.tour
    }

    /// Tour step at `index`.
    pub fn tour_step(&self, index: usize) -> Option<&TourStep> {
        self.tour.get(index)
    }

    /// Index of the final tour step.
    pub fn last_tour_index(&self) -> usize {
        // Construction rejects an empty script.
        self.tour.len().saturating_sub(1)
    }
}
