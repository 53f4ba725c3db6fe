// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Built-in Polkadot ecosystem dataset and guided-tour script.

use crate::catalog::{Catalog, LayerFocus, Node, TourStep};
use crate::error::CatalogError;

/// Brand pink (relay chain, highlights).
pub const POLKADOT_PINK: &str = "#E6007A";

/// Id of the relay-chain node in the built-in dataset.
pub const RELAY_CHAIN_ID: &str = "relay-chain";

/// Ecosystem nodes: relay chain, five parachains, five dApps.
pub fn ecosystem_nodes() -> Vec<Node> {
    vec![
        // Layer 0
        Node::relay_chain(
            RELAY_CHAIN_ID,
            "Polkadot Relay Chain",
            "The heart of Polkadot. It provides shared security, consensus, and interoperability \
             for all connected blockchains (Parachains). It does not handle smart contracts \
             directly, ensuring it remains lightweight and efficient.",
        )
        .with_category("Layer 0")
        .with_technical_details(
            "Uses NPoS (Nominated Proof-of-Stake) for consensus. Validators secure the network. \
             Collators on parachains submit blocks to validators. It coordinates cross-chain \
             message passing (XCM).",
        )
        .with_color(POLKADOT_PINK),
        // Layer 1
        Node::parachain(
            "moonbeam",
            "Moonbeam",
            "An Ethereum-compatible smart contract platform. It allows developers to deploy \
             existing Solidity smart contracts to Polkadot with minimal changes.",
        )
        .with_category("Smart Contract / EVM")
        .with_technical_details(
            "Full EVM implementation, Web3 RPC compatible. Supports standard Ethereum tools like \
             MetaMask, Hardhat, and Waffle.",
        )
        .with_color("#D43384")
        .with_bridges(["Ethereum"]),
        Node::parachain(
            "acala",
            "Acala",
            "The decentralized finance hub of Polkadot. It offers a stablecoin (aUSD), a \
             decentralized exchange (DEX), and liquid staking protocols.",
        )
        .with_category("DeFi Hub")
        .with_technical_details(
            "Specialized DeFi chain with custom EVM+ for DeFi optimization. Built-in primitives \
             for liquidity and staking.",
        )
        .with_color("#645AFF"),
        Node::parachain(
            "astar",
            "Astar",
            "A scalable network supporting multiple virtual machines, including EVM and \
             WebAssembly (Wasm). A true innovation hub for dApps.",
        )
        .with_category("Multi-VM / dApp Hub")
        .with_technical_details(
            "Supports dApp staking (Build2Earn). Connects Polkadot to major L1 blockchains via \
             bridges.",
        )
        .with_color("#1b6dc1"),
        Node::parachain(
            "hydradx",
            "HydraDX",
            "A decentralized exchange protocol designed to bring liquidity to the Polkadot \
             ecosystem using an Omnipool model.",
        )
        .with_category("Liquidity")
        .with_technical_details(
            "Substrate-based. Omnipool allows all assets to be traded against a single \
             liquidity pool, reducing slippage and fragmentation.",
        )
        .with_color("#55efc4"),
        Node::parachain(
            "polimec",
            "Polimec",
            "A decentralized community-driven funding protocol to accelerate the Web3 ecosystem.",
        )
        .with_category("Funding")
        .with_technical_details("Compliance framework for fundraising. On-chain credentials.")
        .with_color("#fdcb6e"),
        // Layer 2: Moonbeam
        Node::dapp(
            "stellaswap",
            "moonbeam",
            "StellaSwap",
            "The leading DEX on Moonbeam, offering swapping, farming, and bridging features.",
        )
        .with_category("DEX")
        .with_technical_details("Standard AMM model running on Moonbeam EVM."),
        Node::dapp(
            "moonwell",
            "moonbeam",
            "Moonwell",
            "An open lending and borrowing DeFi protocol on Moonbeam and Moonriver.",
        )
        .with_category("Lending")
        .with_technical_details("Compound V2 fork adapted for the Polkadot ecosystem."),
        // Layer 2: Acala
        Node::dapp(
            "ausd",
            "acala",
            "aUSD Protocol",
            "The native decentralized stablecoin of Polkadot, backed by multiple collateral \
             assets.",
        )
        .with_category("Stablecoin")
        .with_technical_details(
            "Over-collateralized stablecoin system integral to the Acala chain.",
        ),
        Node::dapp(
            "euphrates",
            "acala",
            "Euphrates",
            "Boosts staking rewards and liquidity for DOT holders.",
        )
        .with_category("Liquid Staking")
        .with_technical_details("Liquid staking derivatives (LSD) protocol."),
        // Layer 2: Astar
        Node::dapp(
            "arthswap",
            "astar",
            "ArthSwap",
            "A one-stop DeFi protocol on Astar Network with high APY farming.",
        )
        .with_category("DEX")
        .with_technical_details("Comprehensive DeFi suite optimized for Wasm/EVM."),
    ]
}

/// The four-step guided tour.
pub fn tour_steps() -> Vec<TourStep> {
    vec![
        TourStep::new(
            "Welcome to Polkadot",
            "Polkadot is a network of networks. It connects specialized blockchains together \
             into a unified, scalable, and secure ecosystem. Let's explore its architecture.",
            RELAY_CHAIN_ID,
            LayerFocus::All,
        ),
        TourStep::new(
            "Layer 0: The Relay Chain",
            "At the center is the Relay Chain. It doesn't run complex smart contracts. Instead, \
             it provides security and coordinates communication for the entire network. Think \
             of it as the airport hub.",
            RELAY_CHAIN_ID,
            LayerFocus::Layer0,
        ),
        TourStep::new(
            "Layer 1: Parachains",
            "Orbiting the core are Parachains. These are independent blockchains optimized for \
             specific use cases like DeFi, Gaming, or Identity. They 'plug in' to the Relay \
             Chain for shared security.",
            "moonbeam",
            LayerFocus::Layer1,
        ),
        TourStep::new(
            "Layer 2: Applications",
            "Built on top of Parachains are dApps (Decentralized Applications). This is where \
             users interact: swapping tokens, playing games, or managing identity.",
            "stellaswap",
            LayerFocus::Layer2,
        ),
    ]
}

/// Validated catalog for the built-in dataset.
pub fn polkadot() -> Result<Catalog, CatalogError> {
    Catalog::new(ecosystem_nodes(), tour_steps())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::catalog::NodeKind;

    #[test]
    fn builtin_dataset_validates() {
        let catalog = polkadot().unwrap();
        assert_eq!(catalog.nodes().len(), 11);
        assert_eq!(catalog.parachains().count(), 5);
        assert_eq!(catalog.of_kind(NodeKind::DApp).count(), 5);
        assert_eq!(catalog.tour_steps().len(), 4);
        assert_eq!(catalog.relay_chain().id, RELAY_CHAIN_ID);
    }

    #[test]
    fn every_dapp_resolves_to_a_parachain() {
        let catalog = polkadot().unwrap();
        for dapp in catalog.of_kind(NodeKind::DApp) {
            let parent = catalog.parent_of(dapp).unwrap();
            assert_eq!(parent.kind, NodeKind::Parachain, "{}", dapp.id);
        }
    }

    #[test]
    fn every_tour_target_resolves() {
        let catalog = polkadot().unwrap();
        for step in catalog.tour_steps() {
            assert!(catalog.contains(&step.target_id), "{}", step.target_id);
        }
    }

    #[test]
    fn only_moonbeam_declares_bridges() {
        let catalog = polkadot().unwrap();
        let bridged: Vec<&str> = catalog
            .nodes()
            .iter()
            .filter(|n| !n.bridges_to.is_empty())
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(bridged, ["moonbeam"]);
    }
}
