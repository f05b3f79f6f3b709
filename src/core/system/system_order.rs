//! Central system ordering labels making the per-tick sequence explicit.
//! Stages (all in `FixedUpdate`, chained):
//! 1. CatMoveSet (player steps in its current direction)
//! 2. CollisionSet (cat vs every active fruit, emits catch events)
//! 3. ScoringSet (catch handlers: flag fruit, bump score, refresh text)
//! 4. SpawnSet (maybe add one fruit at the right edge)
//! 5. AdvanceSet (advance, render, drop flagged fruit)
//! 6. Rendering (implicit, Bevy)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct CatMoveSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct CollisionSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ScoringSet; // catch subscribers run here, in registration order

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SpawnSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct AdvanceSet;

/// Configure the tick ordering on `FixedUpdate`.
pub fn configure_tick_sets(app: &mut App) {
    app.configure_sets(
        FixedUpdate,
        (CatMoveSet, CollisionSet, ScoringSet, SpawnSet, AdvanceSet).chain(),
    );
}
