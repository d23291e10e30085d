pub mod constants;
pub mod error;
pub mod loading;
pub mod manifest;
pub mod registry;
pub mod systems;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use error::TileRegistryError;
pub use loading::{ImageSource, LoadCounters, LoadProgress};
pub use manifest::{ManifestError, TileManifest};
pub use registry::{Registration, TileRegistry};
pub use systems::*;
pub use types::{GoalDescriptor, GoalImage, TileDescriptor, TileImage, TileRecord};

use bevy::prelude::*;
use std::path::PathBuf;

/// Plugin that owns the tile registry and keeps its load counters current
pub struct TileRegistryPlugin;

impl Plugin for TileRegistryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TileRegistryConfig>()
            .init_resource::<TileRegistry>()
            .add_systems(Startup, load_tile_manifest)
            .add_systems(
                Update,
                (
                    notify_tile_image_loads,
                    report_load_progress.after(notify_tile_image_loads),
                ),
            );
    }
}

/// Configuration for tile registration
#[derive(Resource, Debug, Clone)]
pub struct TileRegistryConfig {
    /// JSON manifest registered at startup
    pub manifest_path: PathBuf,
    /// Log image load progress as it changes
    pub report_progress: bool,
}

impl Default for TileRegistryConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            report_progress: true,
        }
    }
}
