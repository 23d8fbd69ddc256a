use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;
use bevy::render::camera::Viewport;
use bevy::window::PrimaryWindow;
use earth_state::{ViewSettings, ViewState};
use std::f32::consts::TAU;

/// Share of the window width the 3D view keeps while the panel is open
pub const VIEWPORT_FRACTION: f32 = 0.65;

const MIN_RADIUS: f32 = 1.0;
const MAX_RADIUS: f32 = 500.0;
const PITCH_LIMIT: f32 = 1.5;

/// Camera orbiting a target point. Position is derived from the spherical
/// coordinates every frame.
#[derive(Component, Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    /// Angle around +Y, zero looking down -Z
    pub yaw: f32,
    pub pitch: f32,
    pub sensitivity: f32,
    /// 2.0 is one turn per 30 seconds
    pub auto_rotate_speed: f32,
    /// Left drag started inside the 3D view
    pub dragging: bool,
    /// Last `ViewState::camera_resets` acted on
    pub resets_seen: u32,
    home: OrbitHome,
}

#[derive(Debug, Clone, Copy)]
struct OrbitHome {
    target: Vec3,
    radius: f32,
    yaw: f32,
    pitch: f32,
}

impl OrbitCamera {
    pub fn from_position(position: Vec3, target: Vec3, auto_rotate_speed: f32) -> Self {
        let offset = position - target;
        let radius = offset.length().max(MIN_RADIUS);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();

        Self {
            target,
            radius,
            yaw,
            pitch,
            sensitivity: 0.005,
            auto_rotate_speed,
            dragging: false,
            resets_seen: 0,
            home: OrbitHome {
                target,
                radius,
                yaw,
                pitch,
            },
        }
    }

    pub fn translation(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + self.radius * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    /// Back to the pose the camera was created with
    pub fn reset(&mut self) {
        self.target = self.home.target;
        self.radius = self.home.radius;
        self.yaw = self.home.yaw;
        self.pitch = self.home.pitch;
    }

    pub fn advance_auto_rotate(&mut self, dt: f32) {
        self.yaw = (self.yaw - TAU / 60.0 * self.auto_rotate_speed * dt).rem_euclid(TAU);
    }

    /// Apply a mouse drag delta in logical pixels
    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw = (self.yaw - delta.x * self.sensitivity).rem_euclid(TAU);
        self.pitch = (self.pitch + delta.y * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn zoom(&mut self, scroll: f32) {
        self.radius = (self.radius * (1.0 - scroll * 0.1)).clamp(MIN_RADIUS, MAX_RADIUS);
    }
}

/// Logical width of the 3D view
pub fn viewport_width(window_width: f32, panel_visible: bool) -> f32 {
    if panel_visible {
        window_width * VIEWPORT_FRACTION
    } else {
        window_width
    }
}

pub fn spawn_camera(mut commands: Commands, settings: Res<ViewSettings>) {
    let pos = Vec3::from_array(settings.camera_position);
    let orbit = OrbitCamera::from_position(pos, Vec3::ZERO, settings.auto_rotate_speed);

    info!("Camera spawned at ({:.1}, {:.1}, {:.1})", pos.x, pos.y, pos.z);

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 75f32.to_radians(),
            near: 0.1,
            far: 2000.0,
            ..default()
        }),
        Transform::from_translation(orbit.translation()).looking_at(orbit.target, Vec3::Y),
        orbit,
    ));

    // Full-window UI camera, the 3D viewport shrinks while the panel is open
    commands.spawn((
        Camera2d,
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        IsDefaultUiCamera,
    ));
}

fn cursor_over_view(windows: &Query<&Window, With<PrimaryWindow>>, panel_visible: bool) -> bool {
    windows
        .get_single()
        .ok()
        .and_then(|w| {
            w.cursor_position()
                .map(|c| c.x < viewport_width(w.width(), panel_visible))
        })
        .unwrap_or(false)
}

/// Decide whether a left press starts an orbit drag. Runs before view actions
/// apply, so it sees the context menu as it was when the press happened.
pub fn start_orbit_drag(
    view: Res<ViewState>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<&mut OrbitCamera>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(mut cam) = query.get_single_mut() else {
        return;
    };
    cam.dragging = !view.context_menu_visible && cursor_over_view(&windows, view.panel_visible);
}

/// Drag to orbit, scroll to zoom, auto-rotate and reset handling
pub fn orbit_camera_system(
    time: Res<Time>,
    view: Res<ViewState>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<(&mut Transform, &mut OrbitCamera)>,
) {
    let Ok((mut transform, mut cam)) = query.get_single_mut() else {
        return;
    };

    if view.camera_resets != cam.resets_seen {
        cam.resets_seen = view.camera_resets;
        cam.reset();
        info!("Camera: reset to home position");
    }

    if !mouse_button.pressed(MouseButton::Left) {
        cam.dragging = false;
    }

    if cam.dragging {
        cam.orbit(mouse_motion.delta);
    } else if view.auto_rotate {
        cam.advance_auto_rotate(time.delta_secs());
    }

    if mouse_scroll.delta.y != 0.0 && cursor_over_view(&windows, view.panel_visible) {
        cam.zoom(mouse_scroll.delta.y);
    }

    *transform = Transform::from_translation(cam.translation()).looking_at(cam.target, Vec3::Y);
}

/// Shrink the camera viewport while the panel is open
pub fn viewport_system(
    view: Res<ViewState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cameras: Query<&mut Camera, With<OrbitCamera>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok(mut camera) = cameras.get_single_mut() else {
        return;
    };

    let wanted = if view.panel_visible {
        let size = UVec2::new(
            (window.physical_width() as f32 * VIEWPORT_FRACTION) as u32,
            window.physical_height(),
        );
        (size.x > 0 && size.y > 0).then(|| Viewport {
            physical_position: UVec2::ZERO,
            physical_size: size,
            ..default()
        })
    } else {
        None
    };

    let current = camera.viewport.as_ref().map(|v| v.physical_size);
    if current != wanted.as_ref().map(|v| v.physical_size) {
        camera.viewport = wanted;
    }
}
