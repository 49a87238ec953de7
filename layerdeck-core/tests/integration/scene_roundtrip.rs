//! Scene and settings files on disk

use layerdeck_core::config::SplitSettings;
use layerdeck_core::{
    AppSettings, ConfigManager, Layer, LayerId, LayerType, MapState, Scene, SceneError,
    SplitMap, TracingLevel, ViewportOverride,
};
use tempfile::TempDir;

fn sample_state() -> MapState {
    let layers = vec![
        Layer::new("pts", LayerType::Point, "Pickups").with_data_id("trips"),
        Layer::new("arcs", LayerType::Arc, "Routes")
            .with_data_id("trips")
            .with_visible(false),
        Layer::new("hex", LayerType::Other("polygon".to_string()), "Density"),
    ];
    let mut right = SplitMap::with_members([LayerId::new("arcs")]);
    right.viewport = Some(ViewportOverride {
        zoom: Some(11.5),
        latitude: Some(40.7),
        ..ViewportOverride::default()
    });
    MapState::new(
        layers,
        vec![LayerId::new("hex"), LayerId::new("arcs"), LayerId::new("pts")],
    )
    .with_split_maps(vec![
        SplitMap::with_members([LayerId::new("pts"), LayerId::new("hex")]),
        right,
    ])
    .with_viewport_synced(false)
}

fn roundtrip(file_name: &str) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(file_name);
    let scene = Scene::from_state(&sample_state());

    scene.save(&path).unwrap();
    let loaded = Scene::load(&path).unwrap();
    assert_eq!(loaded, scene, "{file_name} did not round-trip");

    let state = loaded.into_state().unwrap();
    assert_eq!(state.layer_order(), sample_state().layer_order());
    assert!(state.sync_policy().is_disjoint());
}

#[test]
fn json_scene_roundtrip() {
    roundtrip("scene.json");
}

#[test]
fn toml_scene_roundtrip() {
    roundtrip("scene.toml");
}

#[test]
fn yaml_scene_roundtrip() {
    roundtrip("scene.yaml");
}

#[test]
fn loaded_scene_drives_viewports() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scene.json");
    Scene::from_state(&sample_state()).save(&path).unwrap();

    let state = Scene::load(&path).unwrap().into_state().unwrap();
    let policy = state.sync_policy();
    let views = policy.effective_viewports(state.viewport(), state.split_maps());

    assert_eq!(policy.aux_panel_count(), 2);
    assert_eq!(views[0], *state.viewport());
    assert!((views[1].zoom - 11.5).abs() < f64::EPSILON);
    assert!((views[1].latitude - 40.7).abs() < f64::EPSILON);
}

#[test]
fn invalid_scene_file_is_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(
        &path,
        r#"{"layers": [{"id": "a", "type": "point", "config": {"label": "A"}}],
            "layerOrder": ["a", "b"]}"#,
    )
    .unwrap();

    assert!(matches!(Scene::load(&path), Err(SceneError::Invalid(_))));
}

#[test]
fn missing_scene_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let result = Scene::load(&dir.path().join("nope.yaml"));
    assert!(matches!(result, Err(SceneError::Io { .. })));
}

#[test]
fn settings_roundtrip_through_manager() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_config_dir(dir.path().join("layerdeck"));

    assert_eq!(manager.load_settings().unwrap(), AppSettings::default());

    let mut settings = AppSettings::default();
    settings.logging.level = TracingLevel::Debug;
    settings.split = SplitSettings {
        pane_count: 3,
        viewport_synced: false,
    };
    manager.save_settings(&settings).unwrap();

    assert!(manager.settings_path().exists());
    assert_eq!(manager.load_settings().unwrap(), settings);
}
