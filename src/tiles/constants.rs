/// Default location of the tile manifest, relative to the working directory
pub const DEFAULT_MANIFEST_PATH: &str = "assets/tiles.json";

/// Qualified name used in registration error messages
pub const REGISTER_OPERATION: &str = "TileRegistry::register";

/// Horizontal distance between tiles in the palette view (pixels)
pub const PALETTE_SPACING: f32 = 48.0;

/// Display size of a palette swatch (pixels)
pub const PALETTE_SWATCH_SIZE: f32 = 40.0;
