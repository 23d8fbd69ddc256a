use bevy::prelude::*;

/// Top-level application state
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    /// Model assets still loading
    #[default]
    Loading,
    Running,
}
