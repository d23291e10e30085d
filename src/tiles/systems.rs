use super::manifest::{self, TileManifest};
use super::{LoadProgress, TileRegistry, TileRegistryConfig};
use bevy::prelude::*;

/// System to register the tiles listed in the configured manifest
pub fn load_tile_manifest(
    config: Res<TileRegistryConfig>,
    asset_server: Res<AssetServer>,
    mut registry: ResMut<TileRegistry>,
) {
    let path = &config.manifest_path;
    if !manifest::manifest_exists(path) {
        warn!("Tile manifest {:?} not found, no tiles registered", path);
        return;
    }

    let manifest: TileManifest = match manifest::load_manifest(path) {
        Ok(manifest) => manifest,
        Err(e) => {
            error!("Failed to load tile manifest {:?}: {}", path, e);
            return;
        }
    };

    match manifest.register_into(&mut registry, &*asset_server) {
        Ok(count) => info!("Registered {} tile(s) from {:?}", count, path),
        Err(e) => error!(
            "Tile manifest {:?} stopped after {} tile(s): {}",
            path,
            registry.len(),
            e
        ),
    }
}

/// System to count tile images as loaded when the asset server finishes them
pub fn notify_tile_image_loads(
    mut events: MessageReader<AssetEvent<Image>>,
    mut registry: ResMut<TileRegistry>,
) {
    for event in events.read() {
        if registry.pending_loads() == 0 {
            continue;
        }
        let completed = registry.notify_image_event(event);
        if completed > 0 {
            debug!("{} tile image(s) loaded ({})", completed, registry.progress());
        }
    }
}

/// System to log load progress whenever it changes
pub fn report_load_progress(
    config: Res<TileRegistryConfig>,
    registry: Res<TileRegistry>,
    mut last: Local<LoadProgress>,
) {
    if !config.report_progress {
        return;
    }

    let progress = registry.progress();
    if progress == *last {
        return;
    }
    *last = progress;

    if progress.is_settled() {
        info!("All tile images loaded ({})", progress);
    } else {
        info!("Tile images loaded: {}", progress);
    }
}
