use std::collections::HashMap;
use std::path::Path;

use bevy::asset::LoadState;
use bevy::prelude::*;

use sortviz_core::Algorithm;
use sortviz_gallery::{
    AssetLoadError, AssetSource, GalleryManifest, RunSession, build_collection, load_manifest,
};

use crate::AppState;

pub struct StatePlugin;

impl Plugin for StatePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedAlgorithm>()
            .add_systems(Startup, begin_loading)
            .add_systems(Update, finish_loading.run_if(in_state(AppState::Loading)));
    }
}

/// The algorithm the selector currently points at.
#[derive(Resource)]
pub struct SelectedAlgorithm(pub Algorithm);

impl Default for SelectedAlgorithm {
    fn default() -> Self {
        Self(Algorithm::Bubble)
    }
}

/// The live session once every gallery image has loaded.
#[derive(Resource)]
pub struct Viz {
    pub session: RunSession<Handle<Image>>,
    pub title: String,
}

/// Gallery images still in flight during [`AppState::Loading`].
#[derive(Resource)]
struct PendingGallery {
    manifest: GalleryManifest,
    handles: Vec<Handle<Image>>,
}

fn begin_loading(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let assets_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");

    let manifest = match load_manifest(&assets_dir) {
        Ok(manifest) => manifest,
        Err(err) => {
            error!("failed to load gallery manifest: {err}");
            next_state.set(AppState::Failed);
            return;
        }
    };

    let handles: Vec<Handle<Image>> = manifest
        .images
        .iter()
        .map(|entry| asset_server.load(entry.path.clone()))
        .collect();

    commands.insert_resource(PendingGallery { manifest, handles });
}

/// Wait for every image, then build the collection. Fail-fast: one failed
/// load means no run is offered at all.
fn finish_loading(
    mut commands: Commands,
    pending: Option<Res<PendingGallery>>,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(pending) = pending else {
        return;
    };

    for (entry, handle) in pending.manifest.images.iter().zip(&pending.handles) {
        if matches!(asset_server.load_state(handle), LoadState::Failed(_)) {
            error!("failed to load gallery image '{}' ({})", entry.name, entry.path);
            commands.remove_resource::<PendingGallery>();
            next_state.set(AppState::Failed);
            return;
        }
    }

    if !pending.handles.iter().all(|handle| images.contains(handle)) {
        return;
    }

    // All decoded: intrinsic heights become the sort keys.
    let mut loaded = LoadedImages::default();
    for (entry, handle) in pending.manifest.images.iter().zip(&pending.handles) {
        let Some(image) = images.get(handle) else {
            return;
        };
        loaded
            .map
            .insert(entry.name.clone(), (handle.clone(), image.height()));
    }

    match build_collection(&pending.manifest, &mut loaded) {
        Ok(collection) => {
            info!(
                "gallery '{}' ready with {} images",
                pending.manifest.title,
                collection.items.len()
            );
            commands.insert_resource(Viz {
                session: RunSession::new(collection),
                title: pending.manifest.title.clone(),
            });
            commands.remove_resource::<PendingGallery>();
            next_state.set(AppState::Ready);
        }
        Err(err) => {
            error!("failed to build gallery collection: {err}");
            commands.remove_resource::<PendingGallery>();
            next_state.set(AppState::Failed);
        }
    }
}

/// Adapter presenting the loaded Bevy images as an asset source.
#[derive(Default)]
struct LoadedImages {
    map: HashMap<String, (Handle<Image>, u32)>,
}

impl AssetSource for LoadedImages {
    type Handle = Handle<Image>;

    fn load(&mut self, name: &str) -> Result<(Handle<Image>, u32), AssetLoadError> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| AssetLoadError::NotFound {
                name: name.to_string(),
            })
    }
}
