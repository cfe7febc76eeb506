use bevy::prelude::*;

use sortviz_core::{Algorithm, RunOutcome};

use crate::AppState;
use crate::driver::LastRun;
use crate::state::{SelectedAlgorithm, Viz};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Ready), spawn_controls)
            .add_systems(OnEnter(AppState::Failed), spawn_failure_screen)
            .add_systems(
                Update,
                (
                    handle_algorithm_buttons,
                    highlight_selection,
                    handle_sort_button,
                    handle_cancel_button,
                    update_status,
                )
                    .run_if(in_state(AppState::Ready)),
            );
    }
}

// -----------------------------------------------------------------------
// Controls
// -----------------------------------------------------------------------

#[derive(Component)]
struct AlgorithmButton(Algorithm);

#[derive(Component)]
struct SortButton;

#[derive(Component)]
struct CancelButton;

#[derive(Component)]
struct StatusText;

const BTN_BG: Color = Color::srgb(0.22, 0.22, 0.28);
const BTN_SELECTED: Color = Color::srgb(0.2, 0.4, 0.7);
const SORT_BG: Color = Color::srgb(0.2, 0.5, 0.25);
const CANCEL_BG: Color = Color::srgb(0.45, 0.22, 0.2);

fn spawn_controls(mut commands: Commands, viz: Res<Viz>, selected: Res<SelectedAlgorithm>) {
    let panel_bg = Color::srgba(0.1, 0.1, 0.12, 0.85);

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(panel_bg),
        ))
        .with_children(|bar| {
            bar.spawn((
                Text::new(&viz.title),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            for algorithm in Algorithm::ALL {
                let bg = if algorithm == selected.0 {
                    BTN_SELECTED
                } else {
                    BTN_BG
                };
                bar.spawn((
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                        ..default()
                    },
                    BackgroundColor(bg),
                    AlgorithmButton(algorithm),
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new(algorithm.label()),
                        TextFont {
                            font_size: 13.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });
            }

            bar.spawn((
                Button,
                Node {
                    padding: UiRect::axes(Val::Px(14.0), Val::Px(4.0)),
                    ..default()
                },
                BackgroundColor(SORT_BG),
                SortButton,
            ))
            .with_children(|btn| {
                btn.spawn((
                    Text::new("Sort"),
                    TextFont {
                        font_size: 13.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });

            bar.spawn((
                Button,
                Node {
                    padding: UiRect::axes(Val::Px(14.0), Val::Px(4.0)),
                    ..default()
                },
                BackgroundColor(CANCEL_BG),
                CancelButton,
            ))
            .with_children(|btn| {
                btn.spawn((
                    Text::new("Cancel"),
                    TextFont {
                        font_size: 13.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });

            bar.spawn((
                Text::new("Pick an algorithm and press Sort"),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.8, 0.6)),
                StatusText,
            ));
        });
}

fn handle_algorithm_buttons(
    interactions: Query<(&Interaction, &AlgorithmButton), Changed<Interaction>>,
    mut selected: ResMut<SelectedAlgorithm>,
) {
    for (interaction, button) in &interactions {
        if *interaction == Interaction::Pressed {
            selected.0 = button.0;
        }
    }
}

fn highlight_selection(
    selected: Res<SelectedAlgorithm>,
    mut buttons: Query<(&AlgorithmButton, &mut BackgroundColor)>,
) {
    if !selected.is_changed() {
        return;
    }
    for (button, mut bg) in &mut buttons {
        bg.0 = if button.0 == selected.0 {
            BTN_SELECTED
        } else {
            BTN_BG
        };
    }
}

fn handle_sort_button(
    interactions: Query<&Interaction, (Changed<Interaction>, With<SortButton>)>,
    selected: Res<SelectedAlgorithm>,
    mut viz: ResMut<Viz>,
) {
    for interaction in &interactions {
        if *interaction == Interaction::Pressed {
            match viz.session.start(selected.0) {
                Ok(()) => info!("run started: {}", selected.0.label()),
                Err(err) => warn!("{err}"),
            }
        }
    }
}

fn handle_cancel_button(
    interactions: Query<&Interaction, (Changed<Interaction>, With<CancelButton>)>,
    viz: Res<Viz>,
) {
    for interaction in &interactions {
        if *interaction == Interaction::Pressed {
            viz.session.cancel();
        }
    }
}

fn update_status(
    viz: Res<Viz>,
    selected: Res<SelectedAlgorithm>,
    last: Res<LastRun>,
    mut status: Query<&mut Text, With<StatusText>>,
) {
    let line = if viz.session.is_running() {
        format!("Sorting with {}...", selected.0.label())
    } else if let Some(report) = &last.0 {
        match report.outcome {
            RunOutcome::Completed => format!(
                "{} done in {} steps",
                report.algorithm.label(),
                report.commits
            ),
            RunOutcome::Canceled => format!(
                "{} canceled after {} steps",
                report.algorithm.label(),
                report.commits
            ),
        }
    } else {
        "Pick an algorithm and press Sort".to_string()
    };

    for mut text in &mut status {
        **text = line.clone();
    }
}

// -----------------------------------------------------------------------
// Failure screen
// -----------------------------------------------------------------------

fn spawn_failure_screen(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.1, 0.1, 0.12)),
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("Failed to load the gallery -- see the log for details."),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.5, 0.4)),
            ));
        });
}
