//! Property-based tests for split viewport synchronization
//!
//! **Feature: split-viewports, Synced vs disjoint panes**

use proptest::prelude::*;
use layerdeck_core::{
    SplitMap, ViewportOverride, ViewportState, ViewportSyncPolicy, aux_panel_count,
    effective_viewports, is_disjoint,
};

// ============================================================================
// Test Strategies
// ============================================================================

fn arb_override() -> impl Strategy<Value = ViewportOverride> {
    (
        proptest::option::of(-80.0f64..80.0),
        proptest::option::of(-180.0f64..180.0),
        proptest::option::of(0.0f64..20.0),
    )
        .prop_map(|(latitude, longitude, zoom)| ViewportOverride {
            latitude,
            longitude,
            zoom,
            ..ViewportOverride::default()
        })
}

/// Strategy for 0..4 panes, each with optional own viewport fields
fn arb_panes() -> impl Strategy<Value = Vec<SplitMap>> {
    proptest::collection::vec(proptest::option::of(arb_override()), 0..4).prop_map(|fields| {
        fields
            .into_iter()
            .map(|viewport| {
                let mut pane = SplitMap::new();
                pane.viewport = viewport;
                pane
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Disjoint exactly when split, unsynced and showing several panes.
    #[test]
    fn prop_disjoint_truth_table(split in any::<bool>(), synced in any::<bool>(), panes in 0usize..6) {
        prop_assert_eq!(is_disjoint(split, synced, panes), split && !synced && panes > 1);
    }

    /// One shared panel unless disjoint, then one per pane.
    #[test]
    fn prop_aux_panel_count(split in any::<bool>(), synced in any::<bool>(), panes in 0usize..6) {
        let count = aux_panel_count(split, synced, panes);
        if is_disjoint(split, synced, panes) {
            prop_assert_eq!(count, panes);
        } else {
            prop_assert_eq!(count, 1);
        }
    }

    /// The number of panels rendered matches the count.
    #[test]
    fn prop_aux_panels_match_count(synced in any::<bool>(), locked in any::<bool>(), panes in arb_panes()) {
        let policy = ViewportSyncPolicy {
            is_split: panes.len() > 1,
            is_viewport_synced: synced,
            is_zoom_locked: locked,
            pane_count: panes.len(),
        };
        let panels = policy.aux_panels(&ViewportState::default(), &panes);
        prop_assert_eq!(panels.len(), policy.aux_panel_count());
    }

    /// Synced panes always see the base viewport.
    #[test]
    fn prop_synced_panes_share_base(panes in arb_panes()) {
        let base = ViewportState::default();
        let views = effective_viewports(&base, &panes, false, false);
        prop_assert_eq!(views.len(), panes.len().max(1));
        prop_assert!(views.iter().all(|view| *view == base));
    }

    /// Disjoint panes overlay their own fields; a zoom lock pins the zoom.
    #[test]
    fn prop_disjoint_panes_overlay(panes in arb_panes(), locked in any::<bool>()) {
        let base = ViewportState::default();
        let views = effective_viewports(&base, &panes, true, locked);
        for (pane, view) in panes.iter().zip(&views) {
            let expected_lat = pane.viewport.and_then(|v| v.latitude).unwrap_or(base.latitude);
            prop_assert!((view.latitude - expected_lat).abs() < f64::EPSILON);
            if locked {
                prop_assert!((view.zoom - base.zoom).abs() < f64::EPSILON);
            }
        }
    }
}
