// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Static scene anchors: relay at the origin, parachains on a ring below it,
//! dApps orbiting their parent. Animation offsets are the renderer's business;
//! these are the t = 0 positions.

use std::collections::BTreeMap;
use std::f32::consts::TAU;

use glam::Vec3;

use crate::catalog::{Catalog, NodeId, NodeKind};

/// Radius of the parachain ring.
pub const PARACHAIN_RING_RADIUS: f32 = 6.0;
/// Height of the parachain ring (below the relay chain).
pub const PARACHAIN_RING_Y: f32 = -2.5;
/// Orbit radius of a dApp around its parachain.
pub const DAPP_ORBIT_RADIUS: f32 = 1.5;
/// dApp height above its parachain.
pub const DAPP_ORBIT_LIFT: f32 = 1.0;

fn ring_point(index: usize, total: usize, radius: f32) -> Vec3 {
    let angle = (index as f32 / total.max(1) as f32) * TAU;
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

/// World-space anchor for every node, keyed by id.
pub fn anchor_positions(catalog: &Catalog) -> BTreeMap<NodeId, Vec3> {
    let mut out = BTreeMap::new();
    out.insert(catalog.relay_chain().id.clone(), Vec3::ZERO);

    let parachains: Vec<_> = catalog.parachains().collect();
    for (i, para) in parachains.iter().enumerate() {
        let center = ring_point(i, parachains.len(), PARACHAIN_RING_RADIUS)
            + Vec3::Y * PARACHAIN_RING_Y;
        out.insert(para.id.clone(), center);

        let dapps: Vec<_> = catalog.dapps_of(&para.id).collect();
        for (j, dapp) in dapps.iter().enumerate() {
            let offset = ring_point(j, dapps.len(), DAPP_ORBIT_RADIUS) + Vec3::Y * DAPP_ORBIT_LIFT;
            out.insert(dapp.id.clone(), center + offset);
        }
    }

    // Bridges sit on an outer ring level with the relay chain.
    let bridges: Vec<_> = catalog.of_kind(NodeKind::Bridge).collect();
    for (i, bridge) in bridges.iter().enumerate() {
        out.insert(
            bridge.id.clone(),
            ring_point(i, bridges.len(), PARACHAIN_RING_RADIUS * 1.5),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::dataset;

    #[test]
    fn every_node_gets_an_anchor() {
        let catalog = dataset::polkadot().unwrap();
        let anchors = anchor_positions(&catalog);
        assert_eq!(anchors.len(), catalog.nodes().len());
        assert_eq!(anchors["relay-chain"], Vec3::ZERO);
    }

    #[test]
    fn parachains_sit_on_the_ring() {
        let catalog = dataset::polkadot().unwrap();
        let anchors = anchor_positions(&catalog);
        for para in catalog.parachains() {
            let p = anchors[&para.id];
            assert!((p.y - PARACHAIN_RING_Y).abs() < 1e-5);
            let planar = Vec3::new(p.x, 0.0, p.z).length();
            assert!((planar - PARACHAIN_RING_RADIUS).abs() < 1e-4, "{}", para.id);
        }
        // First parachain lands on +X.
        assert!((anchors["moonbeam"].x - PARACHAIN_RING_RADIUS).abs() < 1e-4);
    }

    #[test]
    fn dapps_orbit_their_parent() {
        let catalog = dataset::polkadot().unwrap();
        let anchors = anchor_positions(&catalog);
        for id in ["stellaswap", "moonwell"] {
            let d = anchors[id] - anchors["moonbeam"];
            assert!((d.y - DAPP_ORBIT_LIFT).abs() < 1e-5);
            assert!((Vec3::new(d.x, 0.0, d.z).length() - DAPP_ORBIT_RADIUS).abs() < 1e-4);
        }
        // Two dApps are spread half an orbit apart.
        let a = anchors["stellaswap"] - anchors["moonbeam"];
        let b = anchors["moonwell"] - anchors["moonbeam"];
        assert!((a.x + b.x).abs() < 1e-4);
    }
}
