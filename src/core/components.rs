use bevy::prelude::*;

/// Canvas-space position (origin top-left, y grows downwards).
/// Game rules read and write this; `Transform` is derived from it for rendering.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone, PartialEq, Default)]
pub struct Position(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

/// Tag component for the score text overlay.
#[derive(Component)]
pub struct ScoreText;

/// Draw order of the play-area sprites.
pub const CAT_Z: f32 = 1.0;
pub const FRUIT_Z: f32 = 0.5;
