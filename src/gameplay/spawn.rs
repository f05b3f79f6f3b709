// This file is part of Fruit Cat.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::core::components::{Position, FRUIT_Z};
use crate::core::config::GameConfig;
use crate::gameplay::fruit::{Fruit, FruitKind};
use crate::gameplay::session::ActiveFruits;
use crate::rendering::visuals::{canvas_to_world, SpriteVisuals};

/// Session RNG; seeded from `GameConfig::seed` when present.
#[derive(Resource, Deref, DerefMut)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn from_config(cfg: &GameConfig) -> Self {
        match cfg.seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

/// What the spawn pass decided for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRoll {
    pub kind: FruitKind,
    pub y: f32,
}

/// One spawn decision: `None` most ticks, otherwise the kind and the y lane.
pub fn roll_spawn(rng: &mut impl Rng, cfg: &GameConfig) -> Option<SpawnRoll> {
    // NaN would make `gen_bool` panic; treat it as "never spawn".
    let chance = if cfg.fruit.spawn_chance.is_finite() {
        cfg.fruit.spawn_chance.clamp(0.0, 1.0)
    } else {
        0.0
    };
    if !rng.gen_bool(chance) {
        return None;
    }
    let kind = FruitKind::from_roll(rng.gen::<f32>());
    let lo = cfg.fruit.spawn_margin.round() as i32;
    let hi = (cfg.window.height - cfg.fruit.spawn_margin).round() as i32;
    let y = if lo < hi { rng.gen_range(lo..=hi) } else { lo };
    Some(SpawnRoll { kind, y: y as f32 })
}

pub fn spawn_fruit_system(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut rng: ResMut<GameRng>,
    mut active: ResMut<ActiveFruits>,
    visuals: Option<Res<SpriteVisuals>>,
) {
    let Some(roll) = roll_spawn(&mut rng.0, &cfg) else {
        return;
    };
    let fruit = Fruit::new(roll.kind, &mut rng.0);
    let pos = Vec2::new(cfg.window.width, roll.y);
    let sprite = match visuals.as_deref() {
        Some(v) => v.fruit_sprite(roll.kind),
        None => SpriteVisuals::flat_fruit(roll.kind, cfg.visuals.sprite_size),
    };
    let entity = commands
        .spawn((
            Name::new(roll.kind.label()),
            fruit,
            Position(pos),
            sprite,
            Transform::from_translation(canvas_to_world(pos, &cfg.window, FRUIT_Z)),
        ))
        .id();
    active.push(entity);
    debug!(target: "spawn", "{} at y={} ({:?})", roll.kind.label(), roll.y, entity);
}
