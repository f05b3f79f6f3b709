pub mod types;
pub mod parse;
pub mod plugin;
pub mod systems;
