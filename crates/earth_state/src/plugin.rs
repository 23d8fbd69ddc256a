use bevy::prelude::*;

use super::view_state::{self, ViewAction, ViewSettings, ViewState};

/// Ordering for view state updates within a frame
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewSet {
    /// Widgets and pickers emit `ViewAction`s
    Input,
    /// Actions are folded into `ViewState`
    Apply,
    /// Scene and widgets catch up with `ViewState`
    Sync,
}

/// Owns `ViewState` and the `ViewAction` stream
pub struct ViewStatePlugin;

impl Plugin for ViewStatePlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<ViewSettings>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(ViewState::from_config(&settings))
            .insert_resource(settings)
            .add_event::<ViewAction>()
            .configure_sets(Update, (ViewSet::Input, ViewSet::Apply, ViewSet::Sync).chain())
            .add_systems(Update, view_state::apply_view_actions.in_set(ViewSet::Apply));
    }
}
