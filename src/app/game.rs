// This file is part of Fruit Cat.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::config::log_config_report;
use crate::debug::DebugPlugin;
use crate::gameplay::GameplayPlugin;
use crate::interaction::inputmap::plugin::InputActionsPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::rendering::camera::camera::CameraPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, log_config_report).add_plugins((
            CameraPlugin,
            InputActionsPlugin,
            GameplayPlugin,
            DebugPlugin,
            AutoClosePlugin,
        ));
    }
}
