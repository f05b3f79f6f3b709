#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use super::modes::{DebugState, DebugStats};

#[cfg(feature = "debug")]
pub fn debug_logging_system(time: Res<Time>, mut state: ResMut<DebugState>, stats: Res<DebugStats>) {
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!(target: "sim", "SIM tick={} t={:.3}s fruits={} spawned={} caught={} expired={} score={}",
            stats.ticks,
            time.elapsed_secs(),
            stats.active,
            stats.spawned,
            stats.caught,
            stats.expired,
            stats.score);
    }
}
