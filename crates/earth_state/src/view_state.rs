use bevy::prelude::*;
use earth_core::ViewConfig;
use earth_core::format::group_digits;

/// Loaded configuration, shared with every plugin
#[derive(Resource, Deref, Debug, Clone, Default)]
pub struct ViewSettings(pub ViewConfig);

/// Every user interaction that can change the view
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum ViewAction {
    TogglePanel,
    ToggleAutoRotate,
    ToggleMoon,
    ResetStars,
    /// Raw slider position
    SetStarCount(f32),
    /// Raw slider position
    SetStarDepth(f32),
    /// Right click on the body, in window coordinates
    OpenContextMenu { x: f32, y: f32 },
    CloseContextMenu,
    ResetCamera,
}

/// UI state of the viewer. All mutation goes through [`ViewState::apply`].
///
/// Star count and depth are kept as plain integers; grouping is only applied
/// by the `*_label` accessors.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ViewState {
    pub star_count: u32,
    pub star_depth: u32,
    pub panel_visible: bool,
    pub auto_rotate: bool,
    pub moon_visible: bool,
    pub context_menu_anchor: Vec2,
    pub context_menu_visible: bool,
    /// Bumped on every camera reset request
    pub camera_resets: u32,
    limits: StarLimits,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct StarLimits {
    default_count: u32,
    default_depth: u32,
    count_max: u32,
    depth_max: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}

impl ViewState {
    pub fn from_config(config: &ViewConfig) -> Self {
        let limits = StarLimits {
            default_count: config.default_star_count.min(config.star_count_max),
            default_depth: config.default_star_depth.min(config.star_depth_max),
            count_max: config.star_count_max,
            depth_max: config.star_depth_max,
        };
        Self {
            star_count: limits.default_count,
            star_depth: limits.default_depth,
            panel_visible: true,
            auto_rotate: true,
            moon_visible: false,
            context_menu_anchor: Vec2::ZERO,
            context_menu_visible: false,
            camera_resets: 0,
            limits,
        }
    }

    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::TogglePanel => self.panel_visible = !self.panel_visible,
            ViewAction::ToggleAutoRotate => self.auto_rotate = !self.auto_rotate,
            ViewAction::ToggleMoon => self.moon_visible = !self.moon_visible,
            ViewAction::ResetStars => {
                self.star_count = self.limits.default_count;
                self.star_depth = self.limits.default_depth;
            }
            ViewAction::SetStarCount(raw) => {
                if let Some(v) = slider_value(raw, self.limits.count_max) {
                    self.star_count = v;
                }
            }
            ViewAction::SetStarDepth(raw) => {
                if let Some(v) = slider_value(raw, self.limits.depth_max) {
                    self.star_depth = v;
                }
            }
            ViewAction::OpenContextMenu { x, y } => {
                self.context_menu_anchor = Vec2::new(x, y);
                self.context_menu_visible = true;
            }
            ViewAction::CloseContextMenu => self.context_menu_visible = false,
            ViewAction::ResetCamera => {
                self.context_menu_anchor = Vec2::ZERO;
                self.camera_resets = self.camera_resets.wrapping_add(1);
            }
        }
    }

    /// Star count as shown next to its slider, e.g. "12.345"
    pub fn star_count_label(&self) -> String {
        group_digits(self.star_count as u64)
    }

    pub fn star_depth_label(&self) -> String {
        self.star_depth.to_string()
    }

    /// Star count handed to the star field
    pub fn effective_star_count(&self) -> u32 {
        self.star_count
    }

    pub fn star_count_max(&self) -> u32 {
        self.limits.count_max
    }

    pub fn star_depth_max(&self) -> u32 {
        self.limits.depth_max
    }
}

/// Round and clamp a raw slider position. Non-finite input is dropped.
fn slider_value(raw: f32, max: u32) -> Option<u32> {
    if !raw.is_finite() {
        return None;
    }
    Some(raw.round().clamp(0.0, max as f32) as u32)
}

/// Fold this frame's actions into the view state
pub fn apply_view_actions(mut actions: EventReader<ViewAction>, mut state: ResMut<ViewState>) {
    for action in actions.read() {
        debug!("View action: {:?}", action);
        state.apply(*action);
        if *action == ViewAction::ResetCamera {
            info!("Camera reset requested (#{})", state.camera_resets);
        }
    }
}
