use bevy::prelude::*;
use earth_state::{ViewAction, ViewSettings, ViewState};

/// Scene handles for the two glTF models
#[derive(Resource, Debug, Clone)]
pub struct ModelAssets {
    pub earth: Handle<Scene>,
    pub moon: Handle<Scene>,
}

/// Marker for the Earth scene root
#[derive(Component)]
pub struct EarthModel;

/// Marker for the Moon scene root, present only while the moon is shown
#[derive(Component)]
pub struct MoonModel;

/// Start loading both models; `AppState::Loading` waits on these handles
pub fn load_models(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<ViewSettings>,
) {
    let earth = asset_server.load(GltfAssetLabel::Scene(0).from_asset(settings.earth_model.clone()));
    let moon = asset_server.load(GltfAssetLabel::Scene(0).from_asset(settings.moon_model.clone()));

    info!("Loading models {} and {}", settings.earth_model, settings.moon_model);
    commands.insert_resource(ModelAssets { earth, moon });
}

/// Ambient fill plus one point light
pub fn spawn_lights(mut commands: Commands, settings: Res<ViewSettings>) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: settings.ambient_brightness,
    });

    commands.spawn((
        PointLight {
            intensity: 4_000_000.0,
            range: 100.0,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(settings.point_light_position)),
    ));
}

pub fn spawn_earth(mut commands: Commands, models: Res<ModelAssets>, settings: Res<ViewSettings>) {
    commands
        .spawn((
            SceneRoot(models.earth.clone()),
            Transform::from_scale(Vec3::splat(settings.earth_scale)),
            EarthModel,
        ))
        .observe(on_earth_right_click);

    info!("Earth mounted");
}

/// Clicks on any mesh of the Earth scene bubble up to the root
fn on_earth_right_click(trigger: Trigger<Pointer<Click>>, mut actions: EventWriter<ViewAction>) {
    let click = trigger.event();
    if click.button != PointerButton::Secondary {
        return;
    }
    let pos = click.pointer_location.position;
    actions.send(ViewAction::OpenContextMenu { x: pos.x, y: pos.y });
}

/// Mount or unmount the Moon to match `ViewState::moon_visible`
pub fn sync_moon(
    mut commands: Commands,
    view: Res<ViewState>,
    models: Res<ModelAssets>,
    settings: Res<ViewSettings>,
    moon_query: Query<Entity, With<MoonModel>>,
) {
    let mounted = !moon_query.is_empty();

    if view.moon_visible && !mounted {
        commands.spawn((
            SceneRoot(models.moon.clone()),
            Transform::from_translation(Vec3::from_array(settings.moon_position))
                .with_scale(Vec3::splat(settings.moon_scale)),
            MoonModel,
        ));
        info!("Moon mounted");
    } else if !view.moon_visible && mounted {
        for entity in &moon_query {
            commands.entity(entity).despawn_recursive();
        }
        info!("Moon unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{hit, pointer, sent_actions};
    use std::time::Duration;

    fn moon_app() -> App {
        let mut app = App::new();
        app.init_resource::<ViewState>()
            .init_resource::<ViewSettings>()
            .insert_resource(ModelAssets {
                earth: Handle::default(),
                moon: Handle::default(),
            })
            .add_systems(Update, sync_moon);
        app
    }

    fn moon_count(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<Entity, With<MoonModel>>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn test_moon_hidden_by_default() {
        let mut app = moon_app();
        app.update();
        assert_eq!(moon_count(&mut app), 0);
    }

    #[test]
    fn test_moon_toggle_twice_unmounts() {
        let mut app = moon_app();

        app.world_mut().resource_mut::<ViewState>().apply(ViewAction::ToggleMoon);
        app.update();
        assert_eq!(moon_count(&mut app), 1);

        // stays single while visible
        app.update();
        assert_eq!(moon_count(&mut app), 1);

        app.world_mut().resource_mut::<ViewState>().apply(ViewAction::ToggleMoon);
        app.update();
        assert_eq!(moon_count(&mut app), 0);
        assert!(!app.world().resource::<ViewState>().moon_visible);
    }

    #[test]
    fn test_moon_placed_from_settings() {
        let mut app = moon_app();
        app.world_mut().resource_mut::<ViewState>().apply(ViewAction::ToggleMoon);
        app.update();

        let transform = app
            .world_mut()
            .query_filtered::<&Transform, With<MoonModel>>()
            .single(app.world());
        assert_eq!(transform.translation, Vec3::new(3.0, 1.0, 0.0));
        assert_eq!(transform.scale, Vec3::splat(0.0005));
    }

    fn click_earth(button: PointerButton, position: Vec2) -> App {
        let mut app = App::new();
        app.add_event::<ViewAction>();
        let earth = app
            .world_mut()
            .spawn(EarthModel)
            .observe(on_earth_right_click)
            .id();
        // EntityWorldMut::observe leaves observer registration queued
        app.world_mut().flush();

        let click = Click {
            button,
            hit: hit(),
            duration: Duration::from_millis(80),
        };
        app.world_mut()
            .trigger_targets(pointer(earth, position, click), earth);
        app
    }

    #[test]
    fn test_right_click_opens_menu_at_pointer() {
        let app = click_earth(PointerButton::Secondary, Vec2::new(320.0, 144.0));
        assert_eq!(
            sent_actions(&app),
            vec![ViewAction::OpenContextMenu { x: 320.0, y: 144.0 }]
        );
    }

    #[test]
    fn test_other_clicks_on_earth_ignored() {
        for button in [PointerButton::Primary, PointerButton::Middle] {
            let app = click_earth(button, Vec2::new(10.0, 20.0));
            assert!(sent_actions(&app).is_empty());
        }
    }
}
