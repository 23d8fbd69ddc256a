use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use earth_state::{AppState, ViewSet};

use super::camera;
use super::context_menu;
use super::loading;
use super::panel;
use super::scene;
use super::slider;
use super::stars;

/// Scene, camera and UI for the Earth viewer
pub struct EarthRenderPlugin;

impl Plugin for EarthRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MeshPickingPlugin)
            .add_systems(
                Startup,
                (
                    camera::spawn_camera,
                    scene::spawn_lights,
                    scene::load_models,
                    stars::spawn_star_field,
                    panel::spawn_panel,
                    context_menu::spawn_context_menu,
                ),
            )
            .add_systems(OnEnter(AppState::Loading), loading::spawn_loading_screen)
            .add_systems(OnExit(AppState::Loading), loading::despawn_loading_screen)
            .add_systems(OnEnter(AppState::Running), scene::spawn_earth)
            .add_systems(
                Update,
                (
                    camera::start_orbit_drag,
                    panel::action_button_system,
                    context_menu::context_menu_item_system,
                    context_menu::close_context_menu_on_click,
                )
                    .in_set(ViewSet::Input),
            )
            .add_systems(
                Update,
                (
                    camera::orbit_camera_system,
                    camera::viewport_system,
                    stars::update_star_field,
                    panel::sync_panel,
                    slider::sync_sliders,
                    context_menu::sync_context_menu,
                    scene::sync_moon.run_if(in_state(AppState::Running)),
                )
                    .in_set(ViewSet::Sync),
            )
            .add_systems(
                Update,
                loading::poll_models
                    .pipe(loading::apply_loading_outcome)
                    .run_if(in_state(AppState::Loading)),
            );
    }
}
