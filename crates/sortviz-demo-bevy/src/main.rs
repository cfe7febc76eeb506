mod driver;
mod rendering;
mod state;
mod ui;

use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Sorting Visualizer".into(),
                resolution: (1280.0, 480.0).into(),
                ..default()
            }),
            ..default()
        }))
        .init_state::<AppState>()
        .add_plugins((
            state::StatePlugin,
            ui::UiPlugin,
            rendering::RenderingPlugin,
            driver::DriverPlugin,
        ))
        .run();
}

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Loading,
    Ready,
    Failed,
}
