use bevy::prelude::*;

use super::parse::parse_input_toml;
use super::types::KeyBindings;
use super::systems::system_apply_key_bindings;

pub const DEFAULT_INPUT_PATH: &str = "assets/config/input.toml";

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputActionUpdateSet;

pub struct InputActionsPlugin;
impl Plugin for InputActionsPlugin { fn build(&self, app: &mut App) { app
        .init_resource::<KeyBindings>()
        .configure_sets(Update, InputActionUpdateSet)
        .add_systems(PreStartup, load_initial_key_bindings)
        .add_systems(Update, system_apply_key_bindings.in_set(InputActionUpdateSet)); } }

fn load_initial_key_bindings(mut commands: Commands) {
    #[cfg(target_arch = "wasm32")] let raw: String = include_str!("../../../assets/config/input.toml").to_string();
    #[cfg(not(target_arch = "wasm32"))] let raw: String = {
        let path = std::env::var("INPUT_CONFIG_PATH").unwrap_or_else(|_| DEFAULT_INPUT_PATH.into());
        std::fs::read_to_string(&path).unwrap_or_else(|e| { warn!(target: "input", "{path}: {e}; using default key bindings"); String::new() })
    };
    let parsed = parse_input_toml(&raw);
    if !parsed.errors.is_empty() { for e in parsed.errors { error!(target: "input", "INPUT MAP ERROR: {e}"); } }
    info!(target: "input", "Key bindings loaded: {} keys", parsed.key_bindings.keys.len());
    commands.insert_resource(parsed.key_bindings); }
