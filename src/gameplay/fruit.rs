// This file is part of Fruit Cat.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fruit kinds and their per-tick motion rules.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::core::config::FruitConfig;

/// Fruit whose x drops below this are flagged for deletion.
pub const OFFSCREEN_X: f32 = -30.0;
/// Vertical pixels per tick for sliding fruit.
pub const SLIDE_STEP: f32 = 5.0;
/// Curvy fruit run this much faster than slow fruit.
pub const CURVY_SPEED_FACTOR: f32 = 1.2;
pub const CURVY_FREQUENCY: f32 = 0.08;
pub const CURVY_AMPLITUDE: f32 = 10.0;

/// Cumulative upper bounds of the spawn roll: Slow 30%, Fast 30%, Slide 20%, Curvy 20%.
const ROLL_SLOW: f32 = 0.3;
const ROLL_FAST: f32 = 0.6;
const ROLL_SLIDE: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FruitKind {
    Slow,
    Fast,
    Slide,
    Curvy,
}

impl FruitKind {
    pub const ALL: [FruitKind; 4] = [Self::Slow, Self::Fast, Self::Slide, Self::Curvy];

    /// Pick a kind from one uniform draw in `[0, 1)`.
    pub fn from_roll(p: f32) -> Self {
        if p <= ROLL_SLOW {
            Self::Slow
        } else if p <= ROLL_FAST {
            Self::Fast
        } else if p <= ROLL_SLIDE {
            Self::Slide
        } else {
            Self::Curvy
        }
    }

    pub fn worth(self) -> u32 {
        match self {
            Self::Slow => 1,
            Self::Fast => 2,
            Self::Slide => 3,
            Self::Curvy => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Slow => "apple",
            Self::Fast => "banana",
            Self::Slide => "cherry",
            Self::Curvy => "pear",
        }
    }

    pub fn image_path(self) -> &'static str {
        match self {
            Self::Slow => "images/apple.png",
            Self::Fast => "images/banana.png",
            Self::Slide => "images/cherry.png",
            Self::Curvy => "images/pear.png",
        }
    }

    /// Flat color used when sprites are not image-backed.
    pub fn color(self) -> Color {
        match self {
            Self::Slow => Color::srgb(0.85, 0.15, 0.15),
            Self::Fast => Color::srgb(0.95, 0.85, 0.2),
            Self::Slide => Color::srgb(0.6, 0.05, 0.25),
            Self::Curvy => Color::srgb(0.55, 0.8, 0.25),
        }
    }

    /// Leftward pixels per tick.
    pub fn horizontal_speed(self, cfg: &FruitConfig) -> f32 {
        match self {
            Self::Slow => cfg.slow_speed,
            Self::Fast | Self::Slide => cfg.fast_speed,
            Self::Curvy => cfg.slow_speed * CURVY_SPEED_FACTOR,
        }
    }
}

/// Variant-specific motion state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FruitMotion {
    Slow,
    Fast,
    /// `direction` is +1 (down) or -1 (up), fixed at creation.
    Slide { direction: f32 },
    /// `t` is the phase, bumped by one every tick.
    Curvy { t: f32 },
}

#[derive(Component, Debug, Clone)]
pub struct Fruit {
    pub motion: FruitMotion,
    pub to_be_deleted: bool,
}

impl Fruit {
    /// New fruit of `kind`, drawing any per-variant randomness from `rng`.
    pub fn new(kind: FruitKind, rng: &mut impl Rng) -> Self {
        let motion = match kind {
            FruitKind::Slow => FruitMotion::Slow,
            FruitKind::Fast => FruitMotion::Fast,
            FruitKind::Slide => FruitMotion::Slide {
                direction: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
            },
            FruitKind::Curvy => FruitMotion::Curvy {
                t: rng.gen_range(0..360) as f32 * TAU / 360.0,
            },
        };
        Self::with_motion(motion)
    }

    pub fn with_motion(motion: FruitMotion) -> Self {
        Self {
            motion,
            to_be_deleted: false,
        }
    }

    pub fn kind(&self) -> FruitKind {
        match self.motion {
            FruitMotion::Slow => FruitKind::Slow,
            FruitMotion::Fast => FruitKind::Fast,
            FruitMotion::Slide { .. } => FruitKind::Slide,
            FruitMotion::Curvy { .. } => FruitKind::Curvy,
        }
    }

    pub fn worth(&self) -> u32 {
        self.kind().worth()
    }

    /// One tick of movement followed by the off-screen check.
    pub fn advance(&mut self, pos: &mut Vec2, cfg: &FruitConfig) {
        pos.x -= self.kind().horizontal_speed(cfg);
        match &mut self.motion {
            FruitMotion::Slow | FruitMotion::Fast => {}
            FruitMotion::Slide { direction } => pos.y += *direction * SLIDE_STEP,
            FruitMotion::Curvy { t } => {
                *t += 1.0;
                pos.y += (*t * CURVY_FREQUENCY).sin() * CURVY_AMPLITUDE;
            }
        }
        self.check_off_limits(pos.x);
    }

    pub fn check_off_limits(&mut self, x: f32) {
        if x < OFFSCREEN_X {
            self.to_be_deleted = true;
        }
    }
}
