pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod rendering;

// Curated re-exports
pub use app::game::GamePlugin;
pub use core::config::{config::GameConfig, config::WindowConfig};
pub use gameplay::cat::{Cat, CatDirection, FruitCaught};
pub use gameplay::fruit::{Fruit, FruitKind};
pub use gameplay::session::{ActiveFruits, Score};
