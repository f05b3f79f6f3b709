use crate::core::config::GameConfig;
use crate::gameplay::session::Score;
use bevy::prelude::*;

/// Counts down `window.autoClose` seconds of session time.
#[derive(Resource, Deref, DerefMut)]
pub struct SessionTimer(Timer);

/// Ends the session after `window.autoClose` seconds (0 = run until the window closes).
pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_session_timer)
            .add_systems(Update, end_session_when_due);
    }
}

fn arm_session_timer(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "AutoClose: session ends after {secs} seconds");
        commands.insert_resource(SessionTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn end_session_when_due(
    time: Res<Time>,
    timer: Option<ResMut<SessionTimer>>,
    score: Option<Res<Score>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(mut timer) = timer else { return; };
    if timer.tick(time.delta()).just_finished() {
        let final_score = score.map(|s| s.value()).unwrap_or_default();
        info!(final_score, "AutoClose: timer finished, requesting app exit");
        ev_exit.write(AppExit::Success);
    }
}
