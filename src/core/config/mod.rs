pub mod config;

pub use config::{
    log_config_report, CatConfig, ConfigReport, FruitConfig, GameConfig, ScorePos, TickConfig, VisualsConfig, WindowConfig,
    present_config_layers, DEFAULT_CONFIG_LAYERS,
};
