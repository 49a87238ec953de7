//! Property-based tests for the drag session
//!
//! **Feature: layer-dnd, Drag lifecycle**
//!
//! These drive a [`LayerDeck`] with generated drag gestures and check the
//! state-level guarantees: failed lookups are no-ops, cross-container drops
//! only ever add membership, and no gesture corrupts the global order.

use proptest::prelude::*;
use layerdeck_core::{
    Command, ContainerId, DndId, DragEvent, Layer, LayerDeck, LayerId, LayerType, MapState,
    SplitMap,
};

// ============================================================================
// Test Strategies
// ============================================================================

/// Strategy for a split map state with 2..6 layers and 2..4 panes
fn arb_split_state() -> impl Strategy<Value = MapState> {
    (2usize..6, 2usize..4)
        .prop_flat_map(|(count, panes)| {
            (
                Just(count),
                Just((0..count).collect::<Vec<_>>()).prop_shuffle(),
                proptest::collection::vec(proptest::collection::vec(any::<bool>(), count), panes),
            )
        })
        .prop_map(|(count, shuffled, flags)| {
            let layers: Vec<Layer> = (0..count)
                .map(|i| Layer::new(format!("l{i}"), LayerType::Point, format!("Layer {i}")))
                .collect();
            let order = shuffled.iter().map(|i| layers[*i].id.clone()).collect();
            let split_maps = flags
                .into_iter()
                .map(|member_flags| {
                    SplitMap::with_members(
                        layers
                            .iter()
                            .zip(member_flags)
                            .filter(|(_, member)| *member)
                            .map(|(layer, _)| layer.id.clone()),
                    )
                })
                .collect();
            MapState::new(layers, order).with_split_maps(split_maps)
        })
}

/// Strategy for a raw drop target: a layer id, a container key or garbage
fn arb_target() -> impl Strategy<Value = String> {
    prop_oneof![
        (0usize..6).prop_map(|i| format!("l{i}")),
        (0usize..5).prop_map(|i| i.to_string()),
        Just("sortablelist".to_string()),
        "[x-z]{1,3}",
    ]
}

fn drag(deck: &mut LayerDeck, active: &DndId, over: Option<DndId>) -> Vec<Command> {
    let mut applied = deck
        .handle_drag(DragEvent::Start {
            item_id: active.clone(),
        })
        .unwrap();
    applied.extend(
        deck.handle_drag(DragEvent::End {
            active_id: active.clone(),
            over_id: over,
        })
        .unwrap(),
    );
    applied
}

fn member_sets(state: &MapState) -> Vec<Vec<LayerId>> {
    state
        .split_maps()
        .iter()
        .map(|pane| pane.members().cloned().collect())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Releasing over empty space leaves the state untouched.
    #[test]
    fn prop_drop_on_nothing_is_noop(state in arb_split_state(), pick in any::<prop::sample::Index>()) {
        let active = state.layer_order()[pick.index(state.layer_order().len())].clone();
        let before = state.clone();
        let mut deck = LayerDeck::new(state);

        let applied = drag(&mut deck, &DndId::Layer(active), None);
        prop_assert!(applied.is_empty());
        prop_assert_eq!(deck.state(), &before);
        prop_assert!(deck.active_layer().is_none());
    }

    /// A drag never drops a layer from the order or from a pane.
    #[test]
    fn prop_drag_never_removes_anything(
        state in arb_split_state(),
        pick in any::<prop::sample::Index>(),
        target in arb_target(),
    ) {
        let active = state.layer_order()[pick.index(state.layer_order().len())].clone();
        let before = state.clone();
        let mut deck = LayerDeck::new(state);

        drag(&mut deck, &DndId::Layer(active), Some(DndId::parse(&target)));
        let after = deck.state();

        let mut old_order = before.layer_order().to_vec();
        let mut new_order = after.layer_order().to_vec();
        old_order.sort();
        new_order.sort();
        prop_assert_eq!(old_order, new_order);

        for (old, new) in before.split_maps().iter().zip(after.split_maps()) {
            prop_assert!(old.members().all(|id| new.contains(id)));
        }
    }

    /// Dropping onto a pane twice gives the same membership as once.
    #[test]
    fn prop_cross_drop_is_idempotent(
        state in arb_split_state(),
        pick in any::<prop::sample::Index>(),
        pane in any::<prop::sample::Index>(),
    ) {
        let active = DndId::Layer(state.layer_order()[pick.index(state.layer_order().len())].clone());
        let pane = pane.index(state.pane_count());
        let target = DndId::Container(ContainerId::Pane(pane));
        let mut deck = LayerDeck::new(state);

        drag(&mut deck, &active, Some(target.clone()));
        let once = member_sets(deck.state());
        let order_once = deck.state().layer_order().to_vec();
        prop_assert!(deck.state().split_maps()[pane].contains(active.as_layer().unwrap()));

        let second = drag(&mut deck, &active, Some(target));
        prop_assert!(second.is_empty());
        prop_assert_eq!(member_sets(deck.state()), once);
        prop_assert_eq!(deck.state().layer_order(), order_once.as_slice());
    }

    /// Drags that start on something other than a known layer do nothing.
    #[test]
    fn prop_unknown_active_is_noop(state in arb_split_state(), target in arb_target()) {
        let before = state.clone();
        let mut deck = LayerDeck::new(state);

        for active in ["ghost", "sortablelist", "0"] {
            let applied = drag(&mut deck, &DndId::parse(active), Some(DndId::parse(&target)));
            prop_assert!(applied.is_empty());
        }
        prop_assert_eq!(deck.state(), &before);
    }

    /// Every successful drag returns the session to idle.
    #[test]
    fn prop_session_returns_to_idle(
        state in arb_split_state(),
        pick in any::<prop::sample::Index>(),
        target in proptest::option::of(arb_target()),
    ) {
        let active = state.layer_order()[pick.index(state.layer_order().len())].clone();
        let mut deck = LayerDeck::new(state);
        drag(&mut deck, &DndId::Layer(active), target.as_deref().map(DndId::parse));
        prop_assert!(deck.active_layer().is_none());
    }
}
