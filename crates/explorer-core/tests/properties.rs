// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use explorer_core::catalog::NodeKind;
use explorer_core::ui_state::{
    advance_tour, retreat_tour, start_tour, toggle_layer, toggle_view_mode,
};
use explorer_core::{
    apply_tour_step, dataset, visible_nodes, Catalog, Emphasis, Layer, LayerVisibility, Overlay,
    TourState, UiState, ViewMode,
};
use proptest::prelude::*;

fn catalog() -> Catalog {
    dataset::polkadot().unwrap()
}

fn node_ids() -> Vec<String> {
    dataset::ecosystem_nodes().into_iter().map(|n| n.id).collect()
}

fn arb_layer() -> impl Strategy<Value = Layer> {
    prop_oneof![Just(Layer::Relay), Just(Layer::Parachain), Just(Layer::DApp)]
}

fn arb_state() -> impl Strategy<Value = UiState> {
    let ids = node_ids();
    let steps = dataset::tour_steps().len();
    (
        prop::option::of(prop::sample::select(ids.clone())),
        prop::option::of(prop::sample::select(ids)),
        any::<bool>(),
        (any::<bool>(), any::<bool>(), any::<bool>()),
        any::<bool>(),
        0..steps,
        any::<bool>(),
    )
        .prop_map(
            |(selected, hovered, advanced, (r, p, d), active, step_index, about)| UiState {
                selected,
                hovered,
                view_mode: if advanced {
                    ViewMode::Advanced
                } else {
                    ViewMode::Beginner
                },
                layers: LayerVisibility::new(r, p, d),
                tour: TourState { active, step_index },
                overlay: if about { Overlay::About } else { Overlay::None },
            },
        )
}

proptest! {
    #[test]
    fn toggle_layer_is_an_involution(ui in arb_state(), layer in arb_layer()) {
        prop_assert_eq!(toggle_layer(&toggle_layer(&ui, layer), layer), ui);
    }

    #[test]
    fn toggle_view_mode_is_an_involution(ui in arb_state()) {
        prop_assert_eq!(toggle_view_mode(&toggle_view_mode(&ui)), ui);
    }

    #[test]
    fn start_tour_ignores_prior_state(ui in arb_state()) {
        let catalog = catalog();
        let next = start_tour(&catalog, &ui).unwrap();
        prop_assert_eq!(next.tour, TourState { active: true, step_index: 0 });
        prop_assert_eq!(
            next.selected.as_deref(),
            Some(catalog.tour_steps()[0].target_id.as_str())
        );
        prop_assert_eq!(next.layers, LayerVisibility::ALL_VISIBLE);
        prop_assert_eq!(next.view_mode, ui.view_mode);
    }

    #[test]
    fn dapps_never_outlive_their_parachain(ui in arb_state()) {
        let catalog = catalog();
        let visible = visible_nodes(&catalog, &ui);
        for entry in &visible {
            if entry.node.kind == NodeKind::DApp {
                prop_assert!(ui.layers.parachain && ui.layers.dapp);
                let parent = entry.node.parent_id.as_deref().unwrap();
                prop_assert!(visible.iter().any(|v| v.node.id == parent));
            }
        }
        if !ui.layers.parachain {
            prop_assert!(visible.iter().all(|v| v.node.kind == NodeKind::RelayChain));
        }
    }

    #[test]
    fn at_most_one_node_is_emphasized(ui in arb_state()) {
        let catalog = catalog();
        let selected = visible_nodes(&catalog, &ui)
            .into_iter()
            .filter(|v| v.emphasis == Emphasis::Selected)
            .count();
        prop_assert!(selected <= 1);
    }

    #[test]
    fn tour_navigation_keeps_index_in_range(ui in arb_state(), forward in prop::collection::vec(any::<bool>(), 0..12)) {
        let catalog = catalog();
        let mut ui = start_tour(&catalog, &ui).unwrap();
        for step in forward {
            if !ui.tour.active {
                break;
            }
            ui = if step {
                advance_tour(&catalog, &ui).unwrap()
            } else {
                retreat_tour(&catalog, &ui).unwrap()
            };
            if ui.tour.active {
                prop_assert!(ui.tour.step_index <= catalog.last_tour_index());
                prop_assert!(ui.selected.is_some());
            } else {
                prop_assert!(ui.selected.is_none());
            }
        }
    }
}

#[test]
fn apply_tour_step_layer_table_matches_each_focus() {
    let catalog = catalog();
    let expected = [(true, true, true), (true, false, false), (true, true, false), (true, true, true)];
    for (i, want) in expected.into_iter().enumerate() {
        let ui = apply_tour_step(&catalog, &UiState::new(), i).unwrap();
        assert_eq!(ui.layers.as_tuple(), want, "step {i}");
    }
}

#[test]
fn advance_on_last_step_exits_tour() {
    let catalog = catalog();
    let last = catalog.last_tour_index();
    let ui = apply_tour_step(&catalog, &UiState::new(), last).unwrap();
    let done = advance_tour(&catalog, &ui).unwrap();
    assert!(!done.tour.active);
    assert_eq!(done.selected, None);
}
