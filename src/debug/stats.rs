#[cfg(feature = "debug")]
use super::modes::DebugStats;
#[cfg(feature = "debug")]
use crate::gameplay::cat::FruitCaught;
#[cfg(feature = "debug")]
use crate::gameplay::fruit::Fruit;
#[cfg(feature = "debug")]
use crate::gameplay::session::{ActiveFruits, Score};
#[cfg(feature = "debug")]
use bevy::prelude::*;

/// Second catch subscriber (after scoring) plus per-tick bookkeeping.
#[cfg(feature = "debug")]
pub fn debug_stats_collect_system(
    mut stats: ResMut<DebugStats>,
    mut ev_caught: EventReader<FruitCaught>,
    mut removed: RemovedComponents<Fruit>,
    q_added: Query<(), Added<Fruit>>,
    active: Option<Res<ActiveFruits>>,
    score: Option<Res<Score>>,
) {
    stats.ticks += 1;
    let caught = ev_caught.read().count() as u64;
    let despawned = removed.read().count() as u64;
    stats.caught += caught;
    stats.expired += despawned.saturating_sub(caught);
    stats.spawned += q_added.iter().count() as u64;
    stats.active = active.map(|a| a.len()).unwrap_or_default();
    stats.score = score.map(|s| s.value()).unwrap_or_default();
}
