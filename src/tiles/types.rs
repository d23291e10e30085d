use super::loading::{ImageSource, LoadCounters, LoadSignal};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Input describing a tile type to register
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDescriptor {
    /// Registry key. Required, but checked at registration rather than parse time
    #[serde(default)]
    pub name: Option<String>,
    /// Source of the primary image
    pub url: String,
    /// Alternate image used when the tile marks a goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<GoalDescriptor>,
}

impl TileDescriptor {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            url: url.into(),
            goal: None,
        }
    }

    pub fn with_goal(mut self, url: impl Into<String>) -> Self {
        self.goal = Some(GoalDescriptor {
            url: Some(url.into()),
        });
        self
    }

    /// The name, if present and non-empty
    pub fn valid_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalDescriptor {
    #[serde(default)]
    pub url: Option<String>,
}

/// An image queued for loading, along with its completion signal
#[derive(Debug, Clone)]
pub struct TileImage {
    pub src: String,
    pub handle: Handle<Image>,
    signal: LoadSignal,
}

impl TileImage {
    /// Start loading `src` and count it as an image to load
    pub fn queue(src: &str, images: &impl ImageSource, counters: &LoadCounters) -> Self {
        Self {
            src: src.to_owned(),
            handle: images.load_image(src),
            signal: counters.queue(),
        }
    }

    /// On-load notification. Counts the image as loaded the first time only.
    pub fn complete(&self) -> bool {
        self.signal.complete()
    }

    pub fn is_loaded(&self) -> bool {
        self.signal.is_complete()
    }

    pub(crate) fn signal(&self) -> &LoadSignal {
        &self.signal
    }
}

#[derive(Debug, Clone)]
pub struct GoalImage {
    pub image: TileImage,
}

/// One registered tile type
#[derive(Debug, Clone)]
pub struct TileRecord {
    pub name: String,
    pub image: TileImage,
    pub goal: Option<GoalImage>,
}

impl TileRecord {
    /// All images of this record, primary first
    pub fn images(&self) -> impl Iterator<Item = &TileImage> {
        std::iter::once(&self.image).chain(self.goal.as_ref().map(|goal| &goal.image))
    }

    pub fn is_loaded(&self) -> bool {
        self.images().all(TileImage::is_loaded)
    }
}
