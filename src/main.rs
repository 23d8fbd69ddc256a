use bevy::prelude::*;
use earth_core::config::CONFIG_FILE;
use earth_core::{EARTH, ViewConfig};
use earth_render::EarthRenderPlugin;
use earth_state::{AppState, ViewSettings, ViewStatePlugin};
use std::path::Path;

fn main() {
    let (config, config_error) = match ViewConfig::load(Path::new(CONFIG_FILE)) {
        Ok(config) => (config, None),
        Err(e) => (ViewConfig::default(), Some(e)),
    };
    let [width, height] = config.window_size;

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: EARTH.name.into(),
            resolution: (width, height).into(),
            ..default()
        }),
        ..default()
    }));

    // logging is only up once DefaultPlugins are in
    if let Some(e) = config_error {
        warn!("Ignoring {}: {}", CONFIG_FILE, e);
    }

    app.insert_resource(ClearColor(Color::BLACK))
        .insert_resource(ViewSettings(config))
        .init_state::<AppState>()
        .add_plugins(ViewStatePlugin)
        .add_plugins(EarthRenderPlugin)
        .run();
}
