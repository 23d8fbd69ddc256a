use bevy::prelude::*;
use earth_state::{ViewAction, ViewState};

/// Track length in logical pixels
pub const TRACK_WIDTH: f32 = 200.0;
const TRACK_HEIGHT: f32 = 4.0;
const THUMB_SIZE: f32 = 14.0;

/// Distance the thumb can travel along the track
pub const THUMB_TRAVEL: f32 = TRACK_WIDTH - THUMB_SIZE;

/// Which view value a slider drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKind {
    StarCount,
    StarDepth,
}

impl SliderKind {
    pub fn value(&self, view: &ViewState) -> u32 {
        match self {
            Self::StarCount => view.star_count,
            Self::StarDepth => view.star_depth,
        }
    }

    pub fn max(&self, view: &ViewState) -> u32 {
        match self {
            Self::StarCount => view.star_count_max(),
            Self::StarDepth => view.star_depth_max(),
        }
    }

    pub fn label(&self, view: &ViewState) -> String {
        match self {
            Self::StarCount => view.star_count_label(),
            Self::StarDepth => view.star_depth_label(),
        }
    }

    fn action(&self, raw: f32) -> ViewAction {
        match self {
            Self::StarCount => ViewAction::SetStarCount(raw),
            Self::StarDepth => ViewAction::SetStarDepth(raw),
        }
    }
}

/// Slider track. Holds no value of its own: thumb and label are redrawn
/// from `ViewState`.
#[derive(Component, Debug)]
pub struct Slider {
    pub kind: SliderKind,
    /// Value when the current drag started
    drag_origin: Option<u32>,
}

#[derive(Component)]
pub struct SliderThumb(pub SliderKind);

/// Text showing the slider's current value
#[derive(Component)]
pub struct SliderValueText(pub SliderKind);

/// Value reached after dragging `distance_px` from a start value
pub fn value_after_drag(origin: u32, distance_px: f32, travel_px: f32, max: u32) -> u32 {
    if travel_px <= 0.0 || max == 0 {
        return origin.min(max);
    }
    let delta = distance_px / travel_px * max as f32;
    (origin as f32 + delta).round().clamp(0.0, max as f32) as u32
}

/// Value under the pointer for a track starting at `track_left`. The thumb
/// centre follows the pointer, so both ends sit half a thumb inside the track.
pub fn value_at_cursor(cursor_x: f32, track_left: f32, track_width: f32, max: u32) -> u32 {
    let travel = track_width - THUMB_SIZE;
    if travel <= 0.0 || max == 0 {
        return 0;
    }
    let fraction = ((cursor_x - track_left - THUMB_SIZE / 2.0) / travel).clamp(0.0, 1.0);
    (fraction * max as f32).round() as u32
}

/// Thumb offset from the left end of the track
pub fn thumb_offset(value: u32, max: u32) -> f32 {
    if max == 0 {
        return 0.0;
    }
    (value.min(max) as f32 / max as f32) * THUMB_TRAVEL
}

/// Spawn a slider row: name, track with thumb, value text
pub fn spawn_slider(parent: &mut ChildBuilder, kind: SliderKind, name: &str, view: &ViewState) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            column_gap: Val::Px(16.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(name),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                Node {
                    width: Val::Px(60.0),
                    ..default()
                },
            ));

            row.spawn((
                Node {
                    width: Val::Px(TRACK_WIDTH),
                    height: Val::Px(THUMB_SIZE),
                    justify_content: JustifyContent::FlexStart,
                    align_items: AlignItems::Center,
                    ..default()
                },
                Slider {
                    kind,
                    drag_origin: None,
                },
            ))
            .with_children(|track| {
                track.spawn((
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(TRACK_HEIGHT),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.25, 0.45, 0.85)),
                    BorderRadius::all(Val::Px(TRACK_HEIGHT / 2.0)),
                ));
                track.spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(thumb_offset(kind.value(view), kind.max(view))),
                        width: Val::Px(THUMB_SIZE),
                        height: Val::Px(THUMB_SIZE),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.35, 0.6, 1.0)),
                    BorderRadius::MAX,
                    SliderThumb(kind),
                ));
            })
            .observe(on_track_press)
            .observe(on_track_release)
            .observe(on_drag_start)
            .observe(on_drag)
            .observe(on_drag_end);

            row.spawn((
                Text::new(kind.label(view)),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                SliderValueText(kind),
            ));
        });
}

/// Pressing the track jumps to the value under the pointer. A drag that
/// follows continues from there.
fn on_track_press(
    trigger: Trigger<Pointer<Down>>,
    view: Res<ViewState>,
    mut sliders: Query<(&mut Slider, &ComputedNode, &GlobalTransform)>,
    mut actions: EventWriter<ViewAction>,
) {
    let press = trigger.event();
    if press.button != PointerButton::Primary {
        return;
    }
    let Ok((mut slider, node, transform)) = sliders.get_mut(trigger.entity()) else {
        return;
    };

    // layout is in physical pixels, pointer positions are logical
    let scale = node.inverse_scale_factor();
    let width = node.size().x * scale;
    let left = transform.translation().x * scale - width / 2.0;
    let value = value_at_cursor(
        press.pointer_location.position.x,
        left,
        width,
        slider.kind.max(&view),
    );

    slider.drag_origin = Some(value);
    actions.send(slider.kind.action(value as f32));
}

fn on_track_release(trigger: Trigger<Pointer<Up>>, mut sliders: Query<&mut Slider>) {
    if let Ok(mut slider) = sliders.get_mut(trigger.entity()) {
        slider.drag_origin = None;
    }
}

fn on_drag_start(
    trigger: Trigger<Pointer<DragStart>>,
    view: Res<ViewState>,
    mut sliders: Query<&mut Slider>,
) {
    if trigger.event().button != PointerButton::Primary {
        return;
    }
    if let Ok(mut slider) = sliders.get_mut(trigger.entity()) {
        // a press on the track already set the start value
        if slider.drag_origin.is_none() {
            slider.drag_origin = Some(slider.kind.value(&view));
        }
    }
}

fn on_drag(
    trigger: Trigger<Pointer<Drag>>,
    view: Res<ViewState>,
    sliders: Query<&Slider>,
    mut actions: EventWriter<ViewAction>,
) {
    let Ok(slider) = sliders.get(trigger.entity()) else {
        return;
    };
    let Some(origin) = slider.drag_origin else {
        return;
    };
    let value = value_after_drag(
        origin,
        trigger.event().distance.x,
        THUMB_TRAVEL,
        slider.kind.max(&view),
    );
    actions.send(slider.kind.action(value as f32));
}

fn on_drag_end(trigger: Trigger<Pointer<DragEnd>>, mut sliders: Query<&mut Slider>) {
    if let Ok(mut slider) = sliders.get_mut(trigger.entity()) {
        slider.drag_origin = None;
    }
}

/// Redraw thumbs and value labels from `ViewState`
pub fn sync_sliders(
    view: Res<ViewState>,
    mut thumbs: Query<(&SliderThumb, &mut Node)>,
    mut labels: Query<(&SliderValueText, &mut Text)>,
) {
    if !view.is_changed() {
        return;
    }
    for (thumb, mut node) in &mut thumbs {
        node.left = Val::Px(thumb_offset(thumb.0.value(&view), thumb.0.max(&view)));
    }
    for (label, mut text) in &mut labels {
        **text = label.0.label(&view);
    }
}
