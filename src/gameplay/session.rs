// This file is part of Fruit Cat.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Session state owned by the game loop: the active fruit list, the score and
//! its display, plus the per-tick update-and-filter pass.

use bevy::prelude::*;

use crate::core::components::{Position, ScoreText, CAT_Z, FRUIT_Z};
use crate::core::config::GameConfig;
use crate::gameplay::cat::{Cat, FruitCaught};
use crate::gameplay::fruit::Fruit;
use crate::rendering::visuals::{canvas_to_world, SpriteVisuals};

/// Fruit currently in play, in spawn order.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct ActiveFruits(pub Vec<Entity>);

/// Points collected this session. Only ever grows.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score(u32);

impl Score {
    pub fn value(self) -> u32 {
        self.0
    }
    pub fn add(&mut self, worth: u32) {
        self.0 = self.0.saturating_add(worth);
    }
}

pub fn score_label(score: Score) -> String {
    format!("Score: {}", score.value())
}

/// Startup: the cat and the score overlay.
pub fn setup_session(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    visuals: Option<Res<SpriteVisuals>>,
) {
    commands.init_resource::<Score>();
    commands.init_resource::<ActiveFruits>();

    let start = Position::new(cfg.cat.start_x, (cfg.window.height / 2.0).floor());
    let sprite = match visuals.as_deref() {
        Some(v) => v.cat_sprite(),
        None => SpriteVisuals::flat_cat(cfg.visuals.sprite_size),
    };
    commands.spawn((
        Name::new("Cat"),
        Cat::default(),
        start,
        sprite,
        Transform::from_translation(canvas_to_world(start.0, &cfg.window, CAT_Z)),
    ));

    let pos = &cfg.visuals.score_pos;
    commands.spawn((
        Name::new("ScoreText"),
        ScoreText,
        Text::new(score_label(Score::default())),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(pos.x),
            top: Val::Px(pos.y),
            ..default()
        },
    ));
    info!(target: "score", "session started; cat at ({}, {})", start.x, start.y);
}

/// Catch subscriber: flag the fruit, bump the score, refresh the overlay.
pub fn score_caught_fruit(
    mut ev_caught: EventReader<FruitCaught>,
    mut score: ResMut<Score>,
    mut q_fruit: Query<&mut Fruit>,
    mut q_text: Query<&mut Text, With<ScoreText>>,
) {
    for ev in ev_caught.read() {
        let Ok(mut fruit) = q_fruit.get_mut(ev.fruit) else {
            continue;
        };
        if fruit.to_be_deleted {
            continue;
        }
        fruit.to_be_deleted = true;
        score.add(ev.worth);
        let label = score_label(*score);
        for mut text in &mut q_text {
            text.0.clone_from(&label);
        }
        info!(target: "score", "caught {} (+{}) -> {}", ev.kind.label(), ev.worth, label);
    }
}

/// Advance every active fruit, render it, then drop (and despawn exactly once)
/// the ones flagged for deletion. Retained order is preserved.
pub fn advance_and_filter_fruits(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut active: ResMut<ActiveFruits>,
    mut q_fruit: Query<(&mut Fruit, &mut Position, &mut Transform)>,
) {
    active.retain(|&entity| {
        let Ok((mut fruit, mut pos, mut transform)) = q_fruit.get_mut(entity) else {
            return false;
        };
        fruit.advance(&mut pos.0, &cfg.fruit);
        transform.translation = canvas_to_world(pos.0, &cfg.window, FRUIT_Z);
        if fruit.to_be_deleted {
            commands.entity(entity).despawn();
            false
        } else {
            true
        }
    });
}

pub fn sync_cat_transform(
    cfg: Res<GameConfig>,
    mut q_cat: Query<(&Position, &mut Transform), (With<Cat>, Changed<Position>)>,
) {
    for (pos, mut transform) in &mut q_cat {
        transform.translation = canvas_to_world(pos.0, &cfg.window, CAT_Z);
    }
}
