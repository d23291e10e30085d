use super::error::TileRegistryError;
use super::loading::{ImageSource, LoadCounters, LoadProgress, LoadSignal};
use super::types::{GoalImage, TileDescriptor, TileImage, TileRecord};
use bevy::prelude::*;
use std::collections::HashMap;

/// Outcome of a successful registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Added,
    /// The name was already registered; the record was replaced
    Replaced { warning: String },
}

impl Registration {
    /// Log the duplicate-name warning and carry the exact logged text
    fn replaced(name: &str) -> Self {
        let warning = duplicate_name_warning(name);
        warn!("{}", warning);
        Registration::Replaced { warning }
    }
}

/// Warning text logged when a tile name is registered again
pub fn duplicate_name_warning(name: &str) -> String {
    format!("Warning: tile name {} already exists", name)
}

/// Registry of tile types and their image load state.
/// The rest of the game only reads from it.
#[derive(Resource, Debug, Default)]
pub struct TileRegistry {
    /// Tile names in first-registration order
    known_tiles: Vec<String>,

    /// Records by name (last write wins)
    tiles: HashMap<String, TileRecord>,

    counters: LoadCounters,

    /// Loads still waiting for an asset event, replaced records included
    pending: Vec<(AssetId<Image>, LoadSignal)>,
}

impl TileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tile type, replacing any record with the same name.
    /// Fails without touching the registry when the name is missing.
    pub fn register(
        &mut self,
        descriptor: &TileDescriptor,
        images: &impl ImageSource,
    ) -> Result<Registration, TileRegistryError> {
        let name = descriptor
            .valid_name()
            .ok_or_else(TileRegistryError::missing_name)?
            .to_owned();

        let registration = if self.tiles.contains_key(&name) {
            Registration::replaced(&name)
        } else {
            if !self.known_tiles.contains(&name) {
                self.known_tiles.push(name.clone());
            }
            Registration::Added
        };

        let image = self.queue_image(&descriptor.url, images);
        let goal = descriptor
            .goal
            .as_ref()
            .and_then(|goal| goal.url.as_deref())
            .map(|url| GoalImage {
                image: self.queue_image(url, images),
            });

        debug!(
            "Registered tile '{}' ({} image(s), progress {})",
            name,
            if goal.is_some() { 2 } else { 1 },
            self.progress()
        );

        self.tiles.insert(name.clone(), TileRecord { name, image, goal });
        Ok(registration)
    }

    /// Register descriptors in order, stopping at the first failure.
    /// Tiles registered before the failure stay registered.
    pub fn register_all<'a>(
        &mut self,
        descriptors: impl IntoIterator<Item = &'a TileDescriptor>,
        images: &impl ImageSource,
    ) -> Result<usize, TileRegistryError> {
        let mut count = 0;
        for descriptor in descriptors {
            self.register(descriptor, images)?;
            count += 1;
        }
        Ok(count)
    }

    /// Queue an image load. An image the source already finished counts as
    /// loaded right away, since no further asset event will arrive for it.
    fn queue_image(&mut self, src: &str, images: &impl ImageSource) -> TileImage {
        let image = TileImage::queue(src, images, &self.counters);
        let id = image.handle.id();
        if images.is_loaded(id) {
            image.complete();
        } else {
            self.pending.push((id, image.signal().clone()));
        }
        image
    }

    /// Complete every pending load finished by this asset event.
    /// Returns how many images were newly counted as loaded.
    pub fn notify_image_event(&mut self, event: &AssetEvent<Image>) -> usize {
        let mut completed = 0;
        for (id, signal) in &self.pending {
            if event.is_loaded_with_dependencies(*id) && signal.complete() {
                completed += 1;
            }
        }
        self.pending.retain(|(_, signal)| !signal.is_complete());
        completed
    }

    /// Number of loads still outstanding
    pub fn pending_loads(&self) -> usize {
        self.pending
            .iter()
            .filter(|(_, signal)| !signal.is_complete())
            .count()
    }

    pub fn get(&self, name: &str) -> Option<&TileRecord> {
        self.tiles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tiles.contains_key(name)
    }

    pub fn known_tiles(&self) -> &[String] {
        &self.known_tiles
    }

    /// Records in first-registration order
    pub fn iter(&self) -> impl Iterator<Item = &TileRecord> {
        self.known_tiles.iter().filter_map(|name| self.tiles.get(name))
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn counters(&self) -> &LoadCounters {
        &self.counters
    }

    pub fn progress(&self) -> LoadProgress {
        self.counters.progress()
    }

    /// Clear all tiles and zero the counters
    pub fn reset(&mut self) {
        self.known_tiles.clear();
        self.tiles.clear();
        self.pending.clear();
        self.counters.reset();
    }
}
