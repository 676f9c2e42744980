//! Debug action panel.
//!
//! Two fire-and-forget buttons in the top-right corner, wired to the spawn
//! and reset messages.

use bevy::prelude::*;

use ballpit_core::bevy::{ResetBallsEvent, SpawnBallBatchEvent};

const BUTTON_NORMAL: Color = Color::srgb(0.15, 0.15, 0.18);
const BUTTON_HOVERED: Color = Color::srgb(0.25, 0.25, 0.30);
const BUTTON_PRESSED: Color = Color::srgb(0.35, 0.45, 0.35);

/// Marker for the "Add 5 spheres" button.
#[derive(Component)]
pub struct SpawnButton;

/// Marker for the "Reset" button.
#[derive(Component)]
pub struct ResetButton;

/// Startup system: the panel and its two buttons.
pub fn setup_debug_panel(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            right: Val::Px(12.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|panel| {
            panel
                .spawn((
                    Button,
                    SpawnButton,
                    Node {
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                    BackgroundColor(BUTTON_NORMAL),
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("Add 5 spheres"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });

            panel
                .spawn((
                    Button,
                    ResetButton,
                    Node {
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                    BackgroundColor(BUTTON_NORMAL),
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("Reset"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });
        });
}

/// System that fires the panel actions and keeps hover/press feedback.
pub fn handle_panel_buttons(
    mut buttons: Query<
        (
            &Interaction,
            &mut BackgroundColor,
            Option<&SpawnButton>,
            Option<&ResetButton>,
        ),
        (Changed<Interaction>, With<Button>),
    >,
    mut spawn_events: MessageWriter<SpawnBallBatchEvent>,
    mut reset_events: MessageWriter<ResetBallsEvent>,
) {
    for (interaction, mut background, spawn, reset) in buttons.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                background.0 = BUTTON_PRESSED;
                if spawn.is_some() {
                    spawn_events.write(SpawnBallBatchEvent);
                }
                if reset.is_some() {
                    reset_events.write(ResetBallsEvent);
                }
            }
            Interaction::Hovered => {
                background.0 = BUTTON_HOVERED;
            }
            Interaction::None => {
                background.0 = BUTTON_NORMAL;
            }
        }
    }
}
