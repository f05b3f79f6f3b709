use fruit_cat::core::config::{GameConfig, DEFAULT_CONFIG_LAYERS};

#[test]
fn shipped_game_ron_matches_defaults_and_validates() {
    let cfg = GameConfig::load_from_file(DEFAULT_CONFIG_LAYERS[0]).expect("parse game.ron");
    assert_eq!(cfg, GameConfig::default());
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
}

#[test]
fn local_layer_overrides_shipped_base() {
    let dir = tempfile::tempdir().unwrap();
    let local = dir.path().join("game.local.ron");
    std::fs::write(&local, "(fruit: (spawn_chance: 0.2), seed: Some(5))").unwrap();
    let (cfg, used, errors) =
        GameConfig::load_layered([std::path::Path::new(DEFAULT_CONFIG_LAYERS[0]), local.as_path()]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert!((cfg.fruit.spawn_chance - 0.2).abs() < 1e-9);
    assert_eq!(cfg.fruit.slow_speed, 5.0);
    assert_eq!(cfg.seed, Some(5));
}

#[test]
fn broken_layer_reported_and_defaults_kept() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("game.ron");
    std::fs::write(&bad, "(window: (width: ").unwrap();
    let (cfg, used, errors) = GameConfig::load_layered([bad.as_path()]);
    assert!(used.is_empty());
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("parse error"));
    assert_eq!(cfg, GameConfig::default());
}
