pub mod camera;
pub mod visuals;
