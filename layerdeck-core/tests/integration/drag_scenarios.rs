//! End-to-end drag scenarios through the [`LayerDeck`] controller

use layerdeck_core::{
    Command, DndId, DragEvent, Layer, LayerDeck, LayerId, LayerType, MapState, Scene, SplitMap,
};

fn ids(raw: &[&str]) -> Vec<LayerId> {
    raw.iter().map(|id| LayerId::new(*id)).collect()
}

fn abc_layers() -> Vec<Layer> {
    vec![
        Layer::new("A", LayerType::Point, "Points"),
        Layer::new("B", LayerType::Arc, "Arcs"),
        Layer::new("C", LayerType::Line, "Lines"),
    ]
}

fn drag(deck: &mut LayerDeck, active: &str, over: Option<&str>) -> Vec<Command> {
    let mut applied = deck
        .handle_drag(DragEvent::Start {
            item_id: DndId::parse(active),
        })
        .unwrap();
    applied.extend(
        deck.handle_drag(DragEvent::End {
            active_id: DndId::parse(active),
            over_id: over.map(DndId::parse),
        })
        .unwrap(),
    );
    applied
}

fn members(deck: &LayerDeck, pane: usize) -> Vec<LayerId> {
    deck.state().split_maps()[pane].members().cloned().collect()
}

#[test]
fn master_list_reorder_moves_first_to_last() {
    let mut deck = LayerDeck::new(MapState::from_layers(abc_layers()));

    let applied = drag(&mut deck, "A", Some("C"));

    assert_eq!(
        applied,
        vec![Command::ReorderLayers {
            new_order: ids(&["B", "C", "A"]),
        }]
    );
    assert_eq!(deck.state().layer_order(), ids(&["B", "C", "A"]).as_slice());
    assert_eq!(
        deck.dnd_items().unwrap().sortable_list(),
        ids(&["B", "C", "A"]).as_slice()
    );
}

#[test]
fn drop_on_pane_adds_membership_only() {
    let state = MapState::from_layers(abc_layers()).with_split_maps(vec![
        SplitMap::with_members(ids(&["A"])),
        SplitMap::new(),
    ]);
    let mut deck = LayerDeck::new(state);

    let applied = drag(&mut deck, "A", Some("1"));

    assert_eq!(
        applied,
        vec![Command::ToggleLayerMembership {
            pane: 1,
            layer_id: LayerId::new("A"),
        }]
    );
    assert_eq!(members(&deck, 0), ids(&["A"]));
    assert_eq!(members(&deck, 1), ids(&["A"]));
    assert_eq!(deck.state().layer_order(), ids(&["A", "B", "C"]).as_slice());
    assert_eq!(deck.dnd_items().unwrap().pane(1).unwrap(), ids(&["A"]).as_slice());
}

#[test]
fn repeated_pane_drop_keeps_layer_added() {
    let state = MapState::from_layers(abc_layers())
        .with_split_maps(vec![SplitMap::with_members(ids(&["A"])), SplitMap::new()]);
    let mut deck = LayerDeck::new(state);

    drag(&mut deck, "A", Some("1"));
    let second = drag(&mut deck, "A", Some("1"));

    assert!(second.is_empty());
    assert_eq!(members(&deck, 1), ids(&["A"]));
}

#[test]
fn drop_on_empty_space_changes_nothing() {
    let mut layers = abc_layers();
    layers[1].config.is_visible = false;
    let state = MapState::from_layers(layers)
        .with_split_maps(vec![SplitMap::with_members(ids(&["A", "C"])), SplitMap::new()]);
    let before = Scene::from_state(&state);
    let mut deck = LayerDeck::new(state);

    let applied = drag(&mut deck, "B", None);

    assert!(applied.is_empty());
    assert_eq!(Scene::from_state(deck.state()), before);
}

#[test]
fn drop_on_empty_space_only_keeps_config_collapse() {
    let layers = vec![
        Layer::new("A", LayerType::Point, "Points").with_config_active(true),
        Layer::new("B", LayerType::Arc, "Arcs"),
    ];
    let state = MapState::from_layers(layers)
        .with_split_maps(vec![SplitMap::with_members(ids(&["A"])), SplitMap::new()]);
    let mut expected = state.clone();
    expected
        .set_layer_config_active(&LayerId::new("A"), false)
        .unwrap();
    let mut deck = LayerDeck::new(state);

    let applied = drag(&mut deck, "A", None);

    assert_eq!(
        applied,
        vec![Command::SetLayerConfigActive {
            layer_id: LayerId::new("A"),
            active: false,
        }]
    );
    assert_eq!(deck.state(), &expected);
}

#[test]
fn drag_start_collapses_open_config_panel() {
    let layers = vec![
        Layer::new("A", LayerType::Point, "Points").with_config_active(true),
        Layer::new("B", LayerType::Arc, "Arcs"),
    ];
    let mut deck = LayerDeck::new(MapState::from_layers(layers));

    let applied = deck
        .handle_drag(DragEvent::Start {
            item_id: DndId::parse("A"),
        })
        .unwrap();

    assert_eq!(
        applied,
        vec![Command::SetLayerConfigActive {
            layer_id: LayerId::new("A"),
            active: false,
        }]
    );
    let overlay = deck.active_layer().unwrap();
    assert_eq!(overlay.id, LayerId::new("A"));
    assert!(!overlay.config.is_config_active);

    deck.handle_drag(DragEvent::Cancel).unwrap();
    assert!(deck.active_layer().is_none());
    assert_eq!(deck.state().layer_order(), ids(&["A", "B"]).as_slice());
}

#[test]
fn layer_drop_inside_pane_reorders_global_list() {
    let layers = vec![
        Layer::new("A", LayerType::Point, "A"),
        Layer::new("B", LayerType::Point, "B"),
        Layer::new("C", LayerType::Point, "C"),
        Layer::new("D", LayerType::Point, "D"),
    ];
    let state = MapState::from_layers(layers).with_split_maps(vec![
        SplitMap::with_members(ids(&["A", "C", "D"])),
        SplitMap::with_members(ids(&["B"])),
    ]);
    let mut deck = LayerDeck::new(state);

    // A layer id always resolves to the master list, so this reorders
    // the global order and pane 0 follows.
    drag(&mut deck, "D", Some("A"));

    assert_eq!(deck.state().layer_order(), ids(&["D", "A", "B", "C"]).as_slice());
    assert_eq!(
        deck.dnd_items().unwrap().pane(0).unwrap(),
        ids(&["D", "A", "C"]).as_slice()
    );
}

#[test]
fn split_toggle_then_drag_into_second_pane() {
    let mut layers = abc_layers();
    layers[2].config.is_visible = false;
    let mut deck = LayerDeck::new(MapState::from_layers(layers));

    deck.state_mut().toggle_split(2).unwrap();
    assert_eq!(deck.dnd_items().unwrap().pane(1).unwrap(), ids(&["A", "B"]).as_slice());

    drag(&mut deck, "C", Some("1"));
    assert_eq!(
        deck.dnd_items().unwrap().pane(1).unwrap(),
        ids(&["A", "B", "C"]).as_slice()
    );
    assert_eq!(deck.dnd_items().unwrap().pane(0).unwrap(), ids(&["A", "B"]).as_slice());
}

#[test]
fn corrupt_order_is_reported_not_skipped() {
    let state = MapState::new(abc_layers(), ids(&["A", "ghost", "C"]));
    let mut deck = LayerDeck::new(state);

    assert!(deck.dnd_items().is_err());
    assert!(
        deck.handle_drag(DragEvent::Start {
            item_id: DndId::parse("A"),
        })
        .is_err()
    );
    assert!(deck.active_layer().is_none());
}
