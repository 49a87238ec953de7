//! Property-based tests for the container registry
//!
//! **Feature: layer-dnd, Container membership**

use proptest::prelude::*;
use layerdeck_core::{
    ContainerId, ContainerRegistry, DndId, Layer, LayerId, LayerType, MapState, SplitMap,
    build_dnd_items,
};

// ============================================================================
// Test Strategies
// ============================================================================

/// Strategy for a layer set with a shuffled global order
fn layers_and_order() -> impl Strategy<Value = (Vec<Layer>, Vec<LayerId>)> {
    (1usize..10).prop_flat_map(|count| {
        let layers: Vec<Layer> = (0..count)
            .map(|i| Layer::new(format!("l{i}"), LayerType::Point, format!("Layer {i}")))
            .collect();
        let ids: Vec<LayerId> = layers.iter().map(|layer| layer.id.clone()).collect();
        (Just(layers), Just(ids).prop_shuffle())
    })
}

/// Strategy for a split configuration with membership flags per layer
fn split_config() -> impl Strategy<Value = (Vec<Layer>, Vec<LayerId>, Vec<SplitMap>)> {
    layers_and_order().prop_flat_map(|(layers, order)| {
        let count = layers.len();
        let panes = proptest::collection::vec(proptest::collection::vec(any::<bool>(), count), 2..4);
        (Just(layers), Just(order), panes).prop_map(|(layers, order, flags)| {
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
            (layers, order, split_maps)
        })
    })
}

/// Returns true if `sub` appears in `full` in the same relative order
fn is_subsequence(sub: &[LayerId], full: &[LayerId]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|id| rest.any(|candidate| candidate == id))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The master list always equals the global order.
    #[test]
    fn prop_sortable_list_equals_order((layers, order, split_maps) in split_config()) {
        let items = build_dnd_items(&layers, &order, &split_maps).unwrap();
        prop_assert_eq!(items.sortable_list(), order.as_slice());
    }

    /// Each pane list is the order restricted to the pane's members.
    #[test]
    fn prop_pane_lists_are_order_restricted((layers, order, split_maps) in split_config()) {
        let items = build_dnd_items(&layers, &order, &split_maps).unwrap();
        prop_assert_eq!(items.pane_count(), split_maps.len());

        for (index, pane) in split_maps.iter().enumerate() {
            let list = items.pane(index).unwrap();
            prop_assert!(is_subsequence(list, &order), "pane {} breaks global order", index);
            prop_assert!(list.iter().all(|id| pane.contains(id)));
            prop_assert_eq!(list.len(), pane.members().count());
        }
    }

    /// Rebuilding with the same inputs gives the same map.
    #[test]
    fn prop_rebuild_is_deterministic((layers, order, split_maps) in split_config()) {
        let first = build_dnd_items(&layers, &order, &split_maps).unwrap();
        let second = build_dnd_items(&layers, &order, &split_maps).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Layer ids resolve to the master list; container keys to themselves.
    #[test]
    fn prop_find_container_tie_break((layers, order, split_maps) in split_config()) {
        let items = build_dnd_items(&layers, &order, &split_maps).unwrap();
        for id in &order {
            prop_assert_eq!(
                items.find_container(&DndId::Layer(id.clone())),
                Some(ContainerId::SortableList)
            );
        }
        for index in 0..split_maps.len() {
            prop_assert_eq!(
                items.find_container(&DndId::Container(ContainerId::Pane(index))),
                Some(ContainerId::Pane(index))
            );
        }
        prop_assert_eq!(
            items.find_container(&DndId::Container(ContainerId::Pane(split_maps.len()))),
            None
        );
    }

    /// The registry only rebuilds when the state revision moves.
    #[test]
    fn prop_registry_rebuilds_on_revision_change(
        (layers, order) in layers_and_order(),
        repeats in 1usize..5,
    ) {
        let mut state = MapState::new(layers, order.clone());
        let mut registry = ContainerRegistry::new();
        for _ in 0..repeats {
            registry.items(&state).unwrap();
        }
        prop_assert_eq!(registry.rebuild_count(), 1);

        let mut reversed = order;
        reversed.reverse();
        let changed = state.reorder_layers(reversed).unwrap();
        registry.items(&state).unwrap();
        let expected = if changed { 2 } else { 1 };
        prop_assert_eq!(registry.rebuild_count(), expected);
    }
}
