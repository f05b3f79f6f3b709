use bevy::prelude::*;

#[derive(Resource, Debug)]
pub struct DebugState {
    pub time_accum: f32,
    /// Seconds between `SIM` log lines.
    pub log_interval: f32,
}
impl Default for DebugState {
    fn default() -> Self {
        Self {
            time_accum: 0.0,
            log_interval: 2.0,
        }
    }
}

#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct DebugStats {
    pub ticks: u64,
    pub spawned: u64,
    pub caught: u64,
    /// Fruit that left the screen uncaught.
    pub expired: u64,
    pub active: usize,
    pub score: u32,
}
