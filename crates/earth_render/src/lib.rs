pub mod camera;
pub mod context_menu;
pub mod loading;
pub mod panel;
pub mod plugin;
pub mod scene;
pub mod slider;
pub mod stars;

pub use plugin::EarthRenderPlugin;
