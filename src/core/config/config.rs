// This file is part of Fruit Cat.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

/// Default config layers, base first.
pub const DEFAULT_CONFIG_LAYERS: [&str; 2] =
    ["assets/config/game.ron", "assets/config/game.local.ron"];

/// The base layer is always kept (a missing base is worth reporting); the
/// override layers after it only when they exist on disk.
pub fn present_config_layers<'a>(layers: &[&'a str]) -> Vec<&'a str> {
    layers
        .iter()
        .enumerate()
        .filter(|(i, p)| *i == 0 || Path::new(p).exists())
        .map(|(_, p)| *p)
        .collect()
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            title: "Fruit Cat".into(),
            auto_close: 0.0,
        }
    }
}

/// Fixed-step clock driving the game loop.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TickConfig {
    pub delay_ms: u64,
}
impl Default for TickConfig {
    fn default() -> Self {
        Self { delay_ms: 33 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatConfig {
    pub speed: f32,
    pub margin: f32,
    pub catch_distance: f32,
    pub start_x: f32,
}
impl Default for CatConfig {
    fn default() -> Self {
        Self {
            speed: 10.0,
            margin: 40.0,
            catch_distance: 50.0,
            start_x: 50.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FruitConfig {
    pub slow_speed: f32,
    pub fast_speed: f32,
    /// Per-tick probability of spawning one fruit.
    pub spawn_chance: f64,
    /// Spawned fruit keep this far from the top and bottom edges.
    pub spawn_margin: f32,
}
impl Default for FruitConfig {
    fn default() -> Self {
        Self {
            slow_speed: 5.0,
            fast_speed: 10.0,
            spawn_chance: 0.05,
            spawn_margin: 50.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScorePos {
    pub x: f32,
    pub y: f32,
}
impl Default for ScorePos {
    fn default() -> Self {
        Self { x: 100.0, y: 40.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct VisualsConfig {
    /// Load sprite images from `assets/images/`; flat colored squares otherwise.
    pub use_images: bool,
    pub sprite_size: f32,
    pub score_pos: ScorePos,
}
impl Default for VisualsConfig {
    fn default() -> Self {
        Self {
            use_images: false,
            sprite_size: 48.0,
            score_pos: ScorePos::default(),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub tick: TickConfig,
    pub cat: CatConfig,
    pub fruit: FruitConfig,
    pub visuals: VisualsConfig,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

/// What happened while loading the config; logged once logging is up.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigReport {
    pub used: Vec<String>,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

pub fn log_config_report(report: Option<Res<ConfigReport>>) {
    let Some(report) = report else { return; };
    for e in &report.issues {
        warn!(target: "config", "CONFIG LOAD ISSUE: {e}");
    }
    for w in &report.warnings {
        warn!(target: "config", "CONFIG WARNING: {w}");
    }
    if report.used.is_empty() {
        info!(target: "config", "No config layers found; using defaults");
    } else {
        info!(target: "config", used = ?report.used, "Config layers loaded");
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
    /// Deep-merge RON layers in order (later wins) and deserialize the result.
    /// Returns the config, the layers actually read and any per-layer errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        if !bm.iter().any(|(ek, _)| *ek == k) {
                            bm.insert(k, v);
                            continue;
                        }
                        if let Some((_, ev)) = bm.iter_mut().find(|(ek, _)| **ek == k) {
                            merge_value(ev, v);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        match merged {
            Some(val) => match val.into_rust::<GameConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    errors.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    (GameConfig::default(), used, errors)
                }
            },
            None => (GameConfig::default(), used, errors),
        }
    }
    /// Non-fatal sanity checks; each entry is a human readable warning.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.tick.delay_ms == 0 {
            w.push("tick.delay_ms is 0; the game loop would run unthrottled".into());
        }
        if self.cat.speed <= 0.0 {
            w.push(format!("cat.speed {} must be > 0", self.cat.speed));
        }
        if self.cat.margin < 0.0 {
            w.push(format!("cat.margin {} negative", self.cat.margin));
        }
        if self.cat.margin * 2.0 > self.window.height {
            w.push(format!(
                "cat.margin {} leaves no vertical room in a {} high window",
                self.cat.margin, self.window.height
            ));
        }
        if self.cat.catch_distance <= 0.0 {
            w.push(format!(
                "cat.catch_distance {} must be > 0; nothing can be caught",
                self.cat.catch_distance
            ));
        }
        if self.fruit.slow_speed <= 0.0 || self.fruit.fast_speed <= 0.0 {
            w.push(format!(
                "fruit speeds must be > 0 (slow={}, fast={}); fruit would never leave the screen",
                self.fruit.slow_speed, self.fruit.fast_speed
            ));
        }
        if self.fruit.slow_speed > self.fruit.fast_speed {
            w.push(format!(
                "fruit.slow_speed {} greater than fruit.fast_speed {}",
                self.fruit.slow_speed, self.fruit.fast_speed
            ));
        }
        if !(self.fruit.spawn_chance > 0.0 && self.fruit.spawn_chance <= 1.0) {
            w.push(format!(
                "fruit.spawn_chance {} outside (0, 1]",
                self.fruit.spawn_chance
            ));
        }
        if self.fruit.spawn_margin * 2.0 > self.window.height {
            w.push(format!(
                "fruit.spawn_margin {} larger than half the window height {}",
                self.fruit.spawn_margin, self.window.height
            ));
        }
        if self.visuals.sprite_size <= 0.0 {
            w.push("visuals.sprite_size must be > 0".into());
        }
        w
    }
}
