// This file is part of Fruit Cat.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::components::Position;
use crate::core::config::{CatConfig, GameConfig};
use crate::gameplay::fruit::{Fruit, FruitKind};
use crate::gameplay::session::ActiveFruits;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CatDirection {
    #[default]
    None,
    Up,
    Down,
}

/// The player. Direction is sticky: it only changes on a bound key press.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Cat {
    pub direction: CatDirection,
}

impl Cat {
    /// Next y after one step, kept inside `[margin, height - margin]`.
    /// Movement is suppressed at the limit; the direction itself is left alone.
    pub fn step_y(&self, y: f32, cfg: &CatConfig, height: f32) -> f32 {
        let top = cfg.margin;
        let bottom = height - cfg.margin;
        match self.direction {
            CatDirection::Up if y > top => (y - cfg.speed).max(top),
            CatDirection::Down if y < bottom => (y + cfg.speed).min(bottom),
            _ => y,
        }
    }

    pub fn catches(cat: Vec2, fruit: Vec2, catch_distance: f32) -> bool {
        cat.distance(fruit) <= catch_distance
    }
}

/// Emitted once per fruit the cat touches in a tick. Readers in `ScoringSet`
/// are the catch subscribers.
#[derive(Event, Debug, Clone, Copy)]
pub struct FruitCaught {
    pub fruit: Entity,
    pub kind: FruitKind,
    pub worth: u32,
}

pub fn cat_movement_system(
    cfg: Res<GameConfig>,
    mut q_cat: Query<(&Cat, &mut Position)>,
) {
    for (cat, mut pos) in &mut q_cat {
        let y = cat.step_y(pos.y, &cfg.cat, cfg.window.height);
        if y != pos.y {
            pos.y = y;
        }
    }
}

/// Check every active fruit against the cat, in list order.
pub fn cat_collision_system(
    cfg: Res<GameConfig>,
    active: Res<ActiveFruits>,
    q_cat: Query<&Position, With<Cat>>,
    q_fruit: Query<(&Fruit, &Position), Without<Cat>>,
    mut ev_caught: EventWriter<FruitCaught>,
) {
    let Ok(cat_pos) = q_cat.single() else {
        return;
    };
    for &entity in active.iter() {
        let Ok((fruit, pos)) = q_fruit.get(entity) else {
            continue;
        };
        if fruit.to_be_deleted {
            continue;
        }
        if Cat::catches(cat_pos.0, pos.0, cfg.cat.catch_distance) {
            ev_caught.write(FruitCaught {
                fruit: entity,
                kind: fruit.kind(),
                worth: fruit.worth(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::fruit::FruitMotion;

    #[test]
    fn step_is_clamped_to_margins() {
        let cfg = CatConfig {
            speed: 7.0,
            margin: 40.0,
            ..Default::default()
        };
        let height = 500.0;
        let up = Cat {
            direction: CatDirection::Up,
        };
        let down = Cat {
            direction: CatDirection::Down,
        };
        let mut y = 250.0;
        for _ in 0..200 {
            y = up.step_y(y, &cfg, height);
            assert!((40.0..=460.0).contains(&y));
        }
        assert_eq!(y, 40.0);
        for _ in 0..200 {
            y = down.step_y(y, &cfg, height);
            assert!((40.0..=460.0).contains(&y));
        }
        assert_eq!(y, 460.0);
    }

    #[test]
    fn no_direction_means_no_movement() {
        let cat = Cat::default();
        assert_eq!(cat.direction, CatDirection::None);
        assert_eq!(cat.step_y(123.0, &CatConfig::default(), 500.0), 123.0);
    }

    #[test]
    fn catch_is_inclusive_at_threshold() {
        let cat = Vec2::new(50.0, 300.0);
        assert!(Cat::catches(cat, Vec2::new(80.0, 340.0), 50.0));
        assert!(!Cat::catches(cat, Vec2::new(80.0, 341.0), 50.0));
    }

    #[derive(Resource, Default)]
    struct Seen(Vec<FruitCaught>);

    fn record(mut ev: EventReader<FruitCaught>, mut seen: ResMut<Seen>) {
        seen.0.extend(ev.read().copied());
    }

    #[test]
    fn collision_emits_one_event_per_fruit_in_list_order() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(GameConfig::default());
        app.init_resource::<Seen>();
        app.add_event::<FruitCaught>();
        app.add_systems(Update, (cat_collision_system, record).chain());

        let world = app.world_mut();
        world.spawn((Cat::default(), Position::new(50.0, 250.0)));
        let near_a = world
            .spawn((Fruit::with_motion(FruitMotion::Curvy { t: 0.0 }), Position::new(60.0, 260.0)))
            .id();
        let far = world
            .spawn((Fruit::with_motion(FruitMotion::Slow), Position::new(400.0, 250.0)))
            .id();
        let near_b = world
            .spawn((Fruit::with_motion(FruitMotion::Fast), Position::new(50.0, 210.0)))
            .id();
        let mut flagged = Fruit::with_motion(FruitMotion::Slow);
        flagged.to_be_deleted = true;
        let gone = world.spawn((flagged, Position::new(50.0, 250.0))).id();
        world.insert_resource(ActiveFruits(vec![near_a, far, near_b, gone]));

        app.update();
        let seen = &app.world().resource::<Seen>().0;
        let ids: Vec<Entity> = seen.iter().map(|e| e.fruit).collect();
        assert_eq!(ids, vec![near_a, near_b]);
        assert_eq!(seen[0].worth, 4);
        assert_eq!(seen[1].kind, FruitKind::Fast);
    }
}
