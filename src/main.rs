use anyhow::bail;
use bevy::prelude::*;

use fruit_cat::core::config::{ConfigReport, DEFAULT_CONFIG_LAYERS};
use fruit_cat::{GameConfig, GamePlugin};

// Logging is not up until the app runs, so load issues travel in a `ConfigReport`.
#[cfg(target_arch = "wasm32")]
fn load_config() -> (GameConfig, ConfigReport) {
    const RAW: &str = include_str!("../assets/config/game.ron");
    match ron::from_str(RAW) {
        Ok(cfg) => (cfg, ConfigReport { used: vec!["embedded game.ron".into()], ..default() }),
        Err(e) => (
            GameConfig::default(),
            ConfigReport { issues: vec![format!("embedded game.ron parse failure: {e}; using defaults")], ..default() },
        ),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> (GameConfig, ConfigReport) {
    use fruit_cat::core::config::present_config_layers;

    let (cfg, used, issues) = GameConfig::load_layered(present_config_layers(&DEFAULT_CONFIG_LAYERS));
    (cfg, ConfigReport { used, issues, warnings: Vec::new() })
}

fn main() -> anyhow::Result<()> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let (cfg, mut report) = load_config();
    report.warnings = cfg.validate();
    if cfg.window.width <= 0.0 || cfg.window.height <= 0.0 {
        bail!(
            "cannot open a {}x{} window; fix window.width/height in {}",
            cfg.window.width,
            cfg.window.height,
            DEFAULT_CONFIG_LAYERS[0]
        );
    }

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(cfg)
        .insert_resource(report)
        .add_plugins(GamePlugin)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(anyhow::anyhow!("game exited with code {code}")
            .context("fruit_cat session ended abnormally")),
    }
}
