use super::error::TileRegistryError;
use super::loading::ImageSource;
use super::registry::TileRegistry;
use super::types::TileDescriptor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// List of tile descriptors read from a JSON file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileManifest {
    #[serde(default)]
    pub tiles: Vec<TileDescriptor>,
}

/// Error type for manifest loading
#[derive(Debug)]
pub enum ManifestError {
    Io(io::Error),
    Parse(serde_json::Error),
    Registry(TileRegistryError),
}

impl From<io::Error> for ManifestError {
    fn from(err: io::Error) -> Self {
        ManifestError::Io(err)
    }
}

impl From<serde_json::Error> for ManifestError {
    fn from(err: serde_json::Error) -> Self {
        ManifestError::Parse(err)
    }
}

impl From<TileRegistryError> for ManifestError {
    fn from(err: TileRegistryError) -> Self {
        ManifestError::Registry(err)
    }
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::Io(e) => write!(f, "IO error: {}", e),
            ManifestError::Parse(e) => write!(f, "Invalid tile manifest: {}", e),
            ManifestError::Registry(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManifestError::Io(e) => Some(e),
            ManifestError::Parse(e) => Some(e),
            ManifestError::Registry(e) => Some(e),
        }
    }
}

/// Parse a manifest from JSON text
pub fn parse_manifest(json: &str) -> Result<TileManifest, ManifestError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a manifest file
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<TileManifest, ManifestError> {
    let json = fs::read_to_string(path)?;
    parse_manifest(&json)
}

/// Check if a manifest file exists
pub fn manifest_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

impl TileManifest {
    /// Register every tile in the manifest, in file order
    pub fn register_into(
        &self,
        registry: &mut TileRegistry,
        images: &impl ImageSource,
    ) -> Result<usize, ManifestError> {
        Ok(registry.register_all(&self.tiles, images)?)
    }
}
