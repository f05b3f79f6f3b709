#![cfg(feature = "debug")]
use bevy::prelude::*;
use fruit_cat::debug::{DebugPlugin, DebugStats};
use fruit_cat::gameplay::GameplayPlugin;
use fruit_cat::{GameConfig, Score};

#[test]
fn stats_account_for_every_fruit() {
    let mut cfg = GameConfig::default();
    cfg.fruit.spawn_chance = 1.0;
    cfg.cat.catch_distance = 60.0;
    cfg.seed = Some(31);
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(cfg);
    app.add_plugins((GameplayPlugin, DebugPlugin));
    app.update();

    for _ in 0..500 {
        app.world_mut().run_schedule(FixedUpdate);
    }
    let stats = app.world().resource::<DebugStats>().clone();
    assert_eq!(stats.ticks, 500);
    assert_eq!(stats.spawned, 500);
    assert_eq!(stats.caught + stats.expired + stats.active as u64, stats.spawned, "{stats:?}");
    assert!(stats.caught > 0, "{stats:?}");
    assert!(stats.expired > 0, "{stats:?}");
    assert_eq!(stats.score, app.world().resource::<Score>().value());
}
