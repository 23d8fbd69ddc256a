use bevy::asset::RecursiveDependencyLoadState;
use bevy::prelude::*;
use earth_core::EARTH;
use earth_state::{AppState, ViewSettings};

use super::scene::ModelAssets;

#[derive(Component)]
pub struct LoadingRoot;

#[derive(Component)]
pub struct LoadingText;

pub fn spawn_loading_screen(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(65.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            PickingBehavior::IGNORE,
            LoadingRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!("Loading {}...", EARTH.name)),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
                PickingBehavior::IGNORE,
                LoadingText,
            ));
        });
}

pub fn despawn_loading_screen(mut commands: Commands, query: Query<Entity, With<LoadingRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

/// Where a single model is in its load
#[derive(Debug, Clone, PartialEq)]
pub enum ModelLoad {
    Pending,
    Loaded,
    Failed(String),
}

impl From<Option<RecursiveDependencyLoadState>> for ModelLoad {
    fn from(state: Option<RecursiveDependencyLoadState>) -> Self {
        match state {
            Some(RecursiveDependencyLoadState::Loaded) => Self::Loaded,
            Some(RecursiveDependencyLoadState::Failed(err)) => Self::Failed(err.to_string()),
            _ => Self::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadingOutcome {
    Pending,
    Ready,
    Failed { path: String, reason: String },
}

/// The first failure wins, otherwise ready once every model is loaded
pub fn loading_outcome<'a>(models: impl IntoIterator<Item = (&'a str, ModelLoad)>) -> LoadingOutcome {
    let mut all_loaded = true;
    for (path, load) in models {
        match load {
            ModelLoad::Loaded => {}
            ModelLoad::Failed(reason) => {
                return LoadingOutcome::Failed {
                    path: path.to_string(),
                    reason,
                };
            }
            ModelLoad::Pending => all_loaded = false,
        }
    }
    if all_loaded {
        LoadingOutcome::Ready
    } else {
        LoadingOutcome::Pending
    }
}

/// Check both models and everything they reference
pub fn poll_models(
    asset_server: Res<AssetServer>,
    models: Option<Res<ModelAssets>>,
    settings: Res<ViewSettings>,
) -> LoadingOutcome {
    let Some(models) = models else {
        return LoadingOutcome::Pending;
    };
    loading_outcome([
        (
            settings.earth_model.as_str(),
            ModelLoad::from(asset_server.get_recursive_dependency_load_state(&models.earth)),
        ),
        (
            settings.moon_model.as_str(),
            ModelLoad::from(asset_server.get_recursive_dependency_load_state(&models.moon)),
        ),
    ])
}

/// Leave the loading screen once ready. A failure is reported once and keeps
/// the app on the loading screen.
pub fn apply_loading_outcome(
    In(outcome): In<LoadingOutcome>,
    settings: Res<ViewSettings>,
    mut next_state: ResMut<NextState<AppState>>,
    mut text_query: Query<&mut Text, With<LoadingText>>,
    mut failed: Local<bool>,
) {
    if *failed {
        return;
    }
    match outcome {
        LoadingOutcome::Pending => {}
        LoadingOutcome::Ready => {
            info!("Models loaded: {} and {}", settings.earth_model, settings.moon_model);
            next_state.set(AppState::Running);
        }
        LoadingOutcome::Failed { path, reason } => {
            error!("Failed to load {}: {}", path, reason);
            if let Ok(mut text) = text_query.get_single_mut() {
                **text = format!("Failed to load {}", path);
            }
            *failed = true;
        }
    }
}
