use bevy::prelude::*;
use earth_core::EARTH;
use earth_state::{ViewAction, ViewState};

use super::slider::{self, SliderKind};

const PANEL_BG: Color = Color::srgb(0.09, 0.09, 0.09);
const BORDER: Color = Color::srgb(0.15, 0.15, 0.15);
const HEADING: Color = Color::WHITE;
const MUTED: Color = Color::srgb(0.82, 0.83, 0.86);

/// Root of the information panel
#[derive(Component)]
pub struct PanelRoot;

/// Button shown in place of the panel while it is closed
#[derive(Component)]
pub struct OpenPanelButton;

/// Any button that emits a fixed action when pressed
#[derive(Component, Debug, Clone, Copy)]
pub struct ActionButton(pub ViewAction);

#[derive(Component)]
pub struct AutoRotateLabel;

#[derive(Component)]
pub struct MoonLabel;

pub fn auto_rotate_label(view: &ViewState) -> &'static str {
    if view.auto_rotate { "Pause" } else { "Play" }
}

pub fn moon_label(view: &ViewState) -> &'static str {
    if view.moon_visible { "Hide" } else { "Show" }
}

pub fn spawn_panel(mut commands: Commands, view: Res<ViewState>) {
    // Open button, only displayed while the panel is closed
    commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(8.0),
                right: Val::Px(8.0),
                padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                display: if view.panel_visible { Display::None } else { Display::Flex },
                ..default()
            },
            ActionButton(ViewAction::TogglePanel),
            OpenPanelButton,
        ))
        .with_children(|btn| {
            btn.spawn(label("Menu", 20.0, HEADING));
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                width: Val::Percent(35.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                display: if view.panel_visible { Display::Flex } else { Display::None },
                ..default()
            },
            BackgroundColor(PANEL_BG),
            PanelRoot,
        ))
        .with_children(|panel| {
            spawn_nav(panel);
            spawn_info(panel);
            spawn_controls(panel, &view);
            spawn_star_controls(panel, &view);
        });
}

fn label(text: impl Into<String>, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

fn section(width: Val) -> Node {
    Node {
        width,
        flex_direction: FlexDirection::Column,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        row_gap: Val::Px(4.0),
        ..default()
    }
}

fn spawn_nav(panel: &mut ChildBuilder) {
    panel
        .spawn((
            Node {
                height: Val::Percent(8.0),
                margin: UiRect::horizontal(Val::Px(8.0)),
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                border: UiRect::bottom(Val::Px(1.0)),
                ..default()
            },
            BorderColor(BORDER),
        ))
        .with_children(|nav| {
            nav.spawn((Button, ActionButton(ViewAction::TogglePanel)))
                .with_children(|btn| {
                    btn.spawn(label("X", 22.0, MUTED));
                });
            nav.spawn(label(format!("About {}", EARTH.name), 20.0, MUTED));
        });
}

fn spawn_info(panel: &mut ChildBuilder) {
    panel
        .spawn(Node {
            height: Val::Percent(65.0),
            margin: UiRect::horizontal(Val::Px(8.0)),
            padding: UiRect::axes(Val::Px(12.0), Val::Px(12.0)),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(12.0),
            overflow: Overflow::clip_y(),
            ..default()
        })
        .with_children(|info| {
            fact_row(info, &[("Name", EARTH.name.to_string()), ("Type", EARTH.kind.to_string())]);

            info.spawn(section(Val::Percent(100.0))).with_children(|s| {
                s.spawn(label("Details", 18.0, HEADING));
                s.spawn(label(EARTH.details, 14.0, MUTED));
            });

            for pair in EARTH.facts().chunks(2) {
                fact_row(info, pair);
            }
        });
}

fn fact_row(parent: &mut ChildBuilder, facts: &[(&str, String)]) {
    parent
        .spawn(Node {
            justify_content: JustifyContent::SpaceBetween,
            ..default()
        })
        .with_children(|row| {
            for (name, value) in facts {
                row.spawn(section(Val::Auto)).with_children(|s| {
                    s.spawn(label(*name, 18.0, HEADING));
                    s.spawn(label(value.clone(), 15.0, MUTED));
                });
            }
        });
}

fn spawn_controls(panel: &mut ChildBuilder, view: &ViewState) {
    panel
        .spawn((
            Node {
                height: Val::Percent(12.0),
                margin: UiRect::horizontal(Val::Px(8.0)),
                justify_content: JustifyContent::SpaceBetween,
                border: UiRect::top(Val::Px(1.0)),
                ..default()
            },
            BorderColor(BORDER),
        ))
        .with_children(|row| {
            let auto_rotate = auto_rotate_label(view);
            control(row, "Auto Rotate", ViewAction::ToggleAutoRotate, auto_rotate, AutoRotateLabel);
            divider(row);
            control(row, "Moon", ViewAction::ToggleMoon, moon_label(view), MoonLabel);
            divider(row);
            control(row, "Reset Stars", ViewAction::ResetStars, "Reset", ());
        });
}

/// Titled button; `marker` goes on the button's text
fn control(
    row: &mut ChildBuilder,
    title: &str,
    action: ViewAction,
    button_text: &str,
    marker: impl Bundle,
) {
    row.spawn(section(Val::Percent(33.0))).with_children(|s| {
        s.spawn(label(title, 16.0, HEADING));
        s.spawn((
            Button,
            Node {
                padding: UiRect::axes(Val::Px(12.0), Val::Px(4.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BorderColor(MUTED),
            BorderRadius::all(Val::Px(12.0)),
            ActionButton(action),
        ))
        .with_children(|btn| {
            btn.spawn((label(button_text, 16.0, HEADING), marker));
        });
    });
}

fn divider(row: &mut ChildBuilder) {
    row.spawn((
        Node {
            width: Val::Px(1.0),
            height: Val::Percent(100.0),
            ..default()
        },
        BackgroundColor(BORDER),
    ));
}

fn spawn_star_controls(panel: &mut ChildBuilder, view: &ViewState) {
    panel
        .spawn((
            Node {
                height: Val::Percent(15.0),
                margin: UiRect::horizontal(Val::Px(8.0)),
                padding: UiRect::top(Val::Px(6.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                border: UiRect::top(Val::Px(1.0)),
                ..default()
            },
            BorderColor(BORDER),
        ))
        .with_children(|stars| {
            stars.spawn(label("Stars", 18.0, HEADING));
            slider::spawn_slider(stars, SliderKind::StarCount, "Count", view);
            slider::spawn_slider(stars, SliderKind::StarDepth, "Depth", view);
        });
}

/// Turn button presses into view actions
pub fn action_button_system(
    buttons: Query<(&Interaction, &ActionButton), Changed<Interaction>>,
    mut actions: EventWriter<ViewAction>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            actions.send(button.0);
        }
    }
}

/// Show either the panel or its open button, and refresh toggle labels
pub fn sync_panel(
    view: Res<ViewState>,
    mut panel: Query<&mut Node, (With<PanelRoot>, Without<OpenPanelButton>)>,
    mut open_button: Query<&mut Node, (With<OpenPanelButton>, Without<PanelRoot>)>,
    mut auto_rotate: Query<&mut Text, (With<AutoRotateLabel>, Without<MoonLabel>)>,
    mut moon: Query<&mut Text, (With<MoonLabel>, Without<AutoRotateLabel>)>,
) {
    if !view.is_changed() {
        return;
    }

    let (panel_display, button_display) = if view.panel_visible {
        (Display::Flex, Display::None)
    } else {
        (Display::None, Display::Flex)
    };
    for mut node in &mut panel {
        node.display = panel_display;
    }
    for mut node in &mut open_button {
        node.display = button_display;
    }
    for mut text in &mut auto_rotate {
        **text = auto_rotate_label(&view).to_string();
    }
    for mut text in &mut moon {
        **text = moon_label(&view).to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_app() -> App {
        let mut app = App::new();
        app.init_resource::<ViewState>()
            .add_systems(Startup, spawn_panel)
            .add_systems(Update, sync_panel);
        app.update();
        app
    }

    fn display_of<M: Component>(app: &mut App) -> Display {
        app.world_mut()
            .query_filtered::<&Node, With<M>>()
            .single(app.world())
            .display
    }

    #[test]
    fn test_panel_open_by_default() {
        let mut app = panel_app();
        assert_eq!(display_of::<PanelRoot>(&mut app), Display::Flex);
        assert_eq!(display_of::<OpenPanelButton>(&mut app), Display::None);
    }

    #[test]
    fn test_closing_panel_shows_open_button() {
        let mut app = panel_app();
        app.world_mut().resource_mut::<ViewState>().apply(ViewAction::TogglePanel);
        app.update();
        assert_eq!(display_of::<PanelRoot>(&mut app), Display::None);
        assert_eq!(display_of::<OpenPanelButton>(&mut app), Display::Flex);

        app.world_mut().resource_mut::<ViewState>().apply(ViewAction::TogglePanel);
        app.update();
        assert_eq!(display_of::<PanelRoot>(&mut app), Display::Flex);
        assert_eq!(display_of::<OpenPanelButton>(&mut app), Display::None);
    }

    #[test]
    fn test_toggle_labels() {
        let mut view = ViewState::default();
        assert_eq!(auto_rotate_label(&view), "Pause");
        assert_eq!(moon_label(&view), "Show");
        view.apply(ViewAction::ToggleAutoRotate);
        view.apply(ViewAction::ToggleMoon);
        assert_eq!(auto_rotate_label(&view), "Play");
        assert_eq!(moon_label(&view), "Hide");
    }

    #[test]
    fn test_pressed_button_sends_action() {
        let mut app = App::new();
        app.add_event::<ViewAction>()
            .add_systems(Update, action_button_system);
        app.world_mut()
            .spawn((Interaction::Pressed, ActionButton(ViewAction::ToggleMoon)));
        app.world_mut()
            .spawn((Interaction::Hovered, ActionButton(ViewAction::ResetStars)));
        app.update();

        let events = app.world().resource::<Events<ViewAction>>();
        let sent: Vec<_> = events.get_cursor().read(events).copied().collect();
        assert_eq!(sent, vec![ViewAction::ToggleMoon]);
    }
}
