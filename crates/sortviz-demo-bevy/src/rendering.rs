use bevy::prelude::*;

use sortviz_core::AssetId;

use crate::AppState;
use crate::driver::CurrentOrder;
use crate::state::Viz;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(OnEnter(AppState::Ready), spawn_item_sprites)
            .add_systems(Update, layout_items.run_if(in_state(AppState::Ready)));
    }
}

/// One sprite per gallery item. The sprite follows its asset, not its
/// slot; layout repositions it as the sequence order changes.
#[derive(Component)]
struct ItemSprite {
    asset: AssetId,
}

const SLOT_WIDTH: f32 = 110.0;
const BASELINE_Y: f32 = -80.0;

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn spawn_item_sprites(mut commands: Commands, viz: Res<Viz>) {
    for item in viz.session.items() {
        let Some(handle) = viz.session.handle(item.asset) else {
            continue;
        };
        commands.spawn((
            Sprite::from_image(handle.clone()),
            Transform::from_xyz(0.0, 0.0, 1.0),
            ItemSprite { asset: item.asset },
        ));
    }
}

/// Bottom-aligned row in sequence order, like the original flow layout:
/// slot x comes from the item's position, y centers the sprite so every
/// image sits on the same baseline.
fn layout_items(order: Res<CurrentOrder>, mut sprites: Query<(&ItemSprite, &mut Transform)>) {
    if !order.is_changed() {
        return;
    }

    let n = order.0.len() as f32;
    let origin = -(n - 1.0) * SLOT_WIDTH / 2.0;

    for (sprite, mut transform) in &mut sprites {
        if let Some(slot) = order.0.iter().position(|item| item.asset == sprite.asset) {
            let item = &order.0[slot];
            transform.translation.x = origin + slot as f32 * SLOT_WIDTH;
            transform.translation.y = BASELINE_Y + item.key as f32 / 2.0;
        }
    }
}
