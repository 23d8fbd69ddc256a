use bevy::prelude::*;
use earth_state::{ContextMenuModel, ViewAction, ViewState};

/// Root of the right-click overlay
#[derive(Component)]
pub struct ContextMenuRoot;

/// One clickable menu entry
#[derive(Component, Debug, Clone, Copy)]
pub struct ContextMenuItem(pub ViewAction);

pub fn spawn_context_menu(mut commands: Commands) {
    let model = ContextMenuModel::default();

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(4.0)),
                min_width: Val::Px(160.0),
                display: Display::None,
                ..default()
            },
            BackgroundColor(Color::srgb(0.12, 0.12, 0.12)),
            BorderRadius::all(Val::Px(6.0)),
            GlobalZIndex(10),
            ContextMenuRoot,
        ))
        .with_children(|menu| {
            for (i, group) in model.groups.iter().enumerate() {
                if i > 0 {
                    menu.spawn((
                        Node {
                            height: Val::Px(1.0),
                            margin: UiRect::vertical(Val::Px(4.0)),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.25, 0.25, 0.25)),
                    ));
                }
                for entry in group {
                    menu.spawn((
                        Button,
                        Node {
                            padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
                            column_gap: Val::Px(8.0),
                            ..default()
                        },
                        ContextMenuItem(entry.action),
                    ))
                    .with_children(|item| {
                        for text in [entry.icon.glyph(), entry.label] {
                            item.spawn((
                                Text::new(text),
                                TextFont {
                                    font_size: 15.0,
                                    ..default()
                                },
                                TextColor(Color::WHITE),
                            ));
                        }
                    });
                }
            }
        });
}

/// Menu entries fire their action on press
pub fn context_menu_item_system(
    items: Query<(&Interaction, &ContextMenuItem), Changed<Interaction>>,
    mut actions: EventWriter<ViewAction>,
) {
    for (interaction, item) in &items {
        if *interaction == Interaction::Pressed {
            actions.send(item.0);
        }
    }
}

/// Any left click closes an open menu. Entry actions are sent by
/// `context_menu_item_system` in the same frame, so they still apply.
pub fn close_context_menu_on_click(
    view: Res<ViewState>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut actions: EventWriter<ViewAction>,
) {
    if view.context_menu_visible && mouse_button.just_pressed(MouseButton::Left) {
        actions.send(ViewAction::CloseContextMenu);
    }
}

/// Place and show or hide the overlay
pub fn sync_context_menu(
    view: Res<ViewState>,
    mut roots: Query<&mut Node, With<ContextMenuRoot>>,
) {
    if !view.is_changed() {
        return;
    }
    for mut node in &mut roots {
        node.display = if view.context_menu_visible {
            Display::Flex
        } else {
            Display::None
        };
        node.left = Val::Px(view.context_menu_anchor.x);
        node.top = Val::Px(view.context_menu_anchor.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use earth_state::view_state::apply_view_actions;

    fn menu_app() -> App {
        let mut app = App::new();
        app.add_event::<ViewAction>()
            .init_resource::<ViewState>()
            .init_resource::<ButtonInput<MouseButton>>()
            .add_systems(Startup, spawn_context_menu)
            .add_systems(
                Update,
                (
                    (context_menu_item_system, close_context_menu_on_click),
                    apply_view_actions,
                    sync_context_menu,
                )
                    .chain(),
            );
        app.update();
        app
    }

    fn root_node(app: &mut App) -> Node {
        app.world_mut()
            .query_filtered::<&Node, With<ContextMenuRoot>>()
            .single(app.world())
            .clone()
    }

    #[test]
    fn test_menu_hidden_by_default() {
        let mut app = menu_app();
        assert_eq!(root_node(&mut app).display, Display::None);
    }

    #[test]
    fn test_right_click_opens_at_pointer_then_click_closes() {
        let mut app = menu_app();
        app.world_mut()
            .send_event(ViewAction::OpenContextMenu { x: 320.0, y: 144.0 });
        app.update();

        let node = root_node(&mut app);
        assert_eq!(node.display, Display::Flex);
        assert_eq!(node.left, Val::Px(320.0));
        assert_eq!(node.top, Val::Px(144.0));
        assert!(app.world().resource::<ViewState>().context_menu_visible);

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        assert_eq!(root_node(&mut app).display, Display::None);
        assert!(!app.world().resource::<ViewState>().context_menu_visible);
    }

    #[test]
    fn test_reset_camera_entry() {
        let mut app = menu_app();
        app.world_mut()
            .send_event(ViewAction::OpenContextMenu { x: 50.0, y: 60.0 });
        app.update();

        let item = app
            .world_mut()
            .query_filtered::<Entity, With<ContextMenuItem>>()
            .single(app.world());
        app.world_mut().entity_mut(item).insert(Interaction::Pressed);
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        let view = app.world().resource::<ViewState>();
        assert_eq!(view.context_menu_anchor, Vec2::ZERO);
        assert_eq!(view.camera_resets, 1);
        assert!(!view.context_menu_visible);
    }
}
