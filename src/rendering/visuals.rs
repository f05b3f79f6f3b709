use bevy::prelude::*;
use std::collections::HashMap;

use crate::core::config::{GameConfig, WindowConfig};
use crate::gameplay::fruit::FruitKind;

pub const CAT_IMAGE: &str = "images/cat.png";

/// Map canvas coordinates (top-left origin, y down) to Bevy world space
/// (centre origin, y up).
pub fn canvas_to_world(pos: Vec2, window: &WindowConfig, z: f32) -> Vec3 {
    Vec3::new(
        pos.x - window.width * 0.5,
        window.height * 0.5 - pos.y,
        z,
    )
}

/// Sprite sources for the cat and each fruit kind. Without image handles
/// everything is drawn as flat colored squares.
#[derive(Resource, Debug, Clone, Default)]
pub struct SpriteVisuals {
    pub size: f32,
    pub cat: Option<Handle<Image>>,
    pub fruits: HashMap<FruitKind, Handle<Image>>,
}

impl SpriteVisuals {
    pub fn flat(size: f32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn flat_cat(size: f32) -> Sprite {
        Sprite::from_color(Color::srgb(0.95, 0.55, 0.15), Vec2::splat(size))
    }

    pub fn flat_fruit(kind: FruitKind, size: f32) -> Sprite {
        Sprite::from_color(kind.color(), Vec2::splat(size * 0.6))
    }

    pub fn cat_sprite(&self) -> Sprite {
        match &self.cat {
            Some(image) => Sprite::from_image(image.clone()),
            None => Self::flat_cat(self.size),
        }
    }

    pub fn fruit_sprite(&self, kind: FruitKind) -> Sprite {
        match self.fruits.get(&kind) {
            Some(image) => Sprite::from_image(image.clone()),
            None => Self::flat_fruit(kind, self.size),
        }
    }
}

/// Startup: decide between image-backed and flat sprites.
pub fn setup_visuals(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    asset_server: Option<Res<AssetServer>>,
) {
    let size = cfg.visuals.sprite_size;
    let visuals = match asset_server {
        Some(server) if cfg.visuals.use_images => {
            info!("loading sprite images for cat and {} fruit kinds", FruitKind::ALL.len());
            SpriteVisuals {
                size,
                cat: Some(server.load(CAT_IMAGE)),
                fruits: FruitKind::ALL
                    .iter()
                    .map(|k| (*k, server.load(k.image_path())))
                    .collect(),
            }
        }
        None if cfg.visuals.use_images => {
            warn!("visuals.use_images set but no AssetServer; falling back to flat sprites");
            SpriteVisuals::flat(size)
        }
        _ => SpriteVisuals::flat(size),
    };
    commands.insert_resource(visuals);
}
