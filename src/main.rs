use bevy::prelude::*;

mod tiles;

use tiles::{TileRegistry, TileRegistryPlugin, PALETTE_SPACING, PALETTE_SWATCH_SIZE};

/// Marker for palette sprites
#[derive(Component)]
struct TileSwatch;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(ImagePlugin::default_nearest()))
        .add_plugins(TileRegistryPlugin)
        .add_systems(
            Startup,
            (
                setup_camera,
                spawn_tile_palette.after(tiles::load_tile_manifest),
            ),
        )
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::from_xyz(0.0, 0.0, 999.0)));
}

/// Lay out every known tile in a row, with its goal image beneath.
/// Sprites appear as their images finish loading.
fn spawn_tile_palette(mut commands: Commands, registry: Res<TileRegistry>) {
    let count = registry.known_tiles().len();
    let start_x = -(count.saturating_sub(1) as f32) * PALETTE_SPACING / 2.0;

    for (column, record) in registry.iter().enumerate() {
        let x = start_x + column as f32 * PALETTE_SPACING;
        for (row, image) in record.images().enumerate() {
            commands.spawn((
                Sprite {
                    image: image.handle.clone(),
                    custom_size: Some(Vec2::splat(PALETTE_SWATCH_SIZE)),
                    ..default()
                },
                Transform::from_xyz(x, -(row as f32) * PALETTE_SPACING, 0.0),
                TileSwatch,
            ));
        }
    }

    info!("Tile palette spawned for {} tile(s)", count);
}
