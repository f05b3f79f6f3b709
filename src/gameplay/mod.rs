// This file is part of Fruit Cat.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod cat;
pub mod fruit;
pub mod session;
pub mod spawn;

use bevy::prelude::*;
use std::time::Duration;

use crate::core::config::GameConfig;
use crate::core::system::system_order::{
    configure_tick_sets, AdvanceSet, CatMoveSet, CollisionSet, ScoringSet, SpawnSet,
};
use crate::rendering::visuals::setup_visuals;
use cat::{cat_collision_system, cat_movement_system, FruitCaught};
use session::{advance_and_filter_fruits, score_caught_fruit, setup_session, sync_cat_transform};
use spawn::{spawn_fruit_system, GameRng};

/// Game rules: one `FixedUpdate` run is one tick of the loop.
pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        configure_tick_sets(app);
        app.add_event::<FruitCaught>()
            .add_systems(
                Startup,
                (configure_tick_clock, init_game_rng, setup_visuals, setup_session).chain(),
            )
            .add_systems(FixedUpdate, cat_movement_system.in_set(CatMoveSet))
            .add_systems(FixedUpdate, cat_collision_system.in_set(CollisionSet))
            .add_systems(FixedUpdate, score_caught_fruit.in_set(ScoringSet))
            .add_systems(FixedUpdate, spawn_fruit_system.in_set(SpawnSet))
            .add_systems(
                FixedUpdate,
                (advance_and_filter_fruits, sync_cat_transform).in_set(AdvanceSet),
            );
    }
}

fn configure_tick_clock(cfg: Res<GameConfig>, fixed: Option<ResMut<Time<Fixed>>>) {
    let Some(mut fixed) = fixed else { return; };
    let delay = Duration::from_millis(cfg.tick.delay_ms.max(1));
    fixed.set_timestep(delay);
    info!(target: "config", "tick delay {} ms", delay.as_millis());
}

fn init_game_rng(mut commands: Commands, cfg: Res<GameConfig>) {
    match cfg.seed {
        Some(seed) => info!(target: "spawn", "RNG seeded with {seed}"),
        None => debug!(target: "spawn", "RNG seeded from entropy"),
    }
    commands.insert_resource(GameRng::from_config(&cfg));
}
