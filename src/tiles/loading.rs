use bevy::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Something that can start an image load and hand back a handle to it.
/// `AssetServer` is the real implementation; tests use an in-memory one.
pub trait ImageSource {
    fn load_image(&self, src: &str) -> Handle<Image>;

    /// Whether the image behind `id` has already finished loading.
    /// A source that hands back a cached handle will not announce it again.
    fn is_loaded(&self, id: AssetId<Image>) -> bool;
}

impl ImageSource for AssetServer {
    fn load_image(&self, src: &str) -> Handle<Image> {
        self.load(src.to_owned())
    }

    fn is_loaded(&self, id: AssetId<Image>) -> bool {
        self.is_loaded_with_dependencies(id)
    }
}

/// Process-wide image load counters.
/// Clones share the same underlying counts.
#[derive(Debug, Clone, Default)]
pub struct LoadCounters {
    to_load: Arc<AtomicUsize>,
    loaded: Arc<AtomicUsize>,
}

impl LoadCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of images queued since the last reset
    pub fn images_to_load(&self) -> usize {
        self.to_load.load(Ordering::Acquire)
    }

    /// Number of queued images whose load has completed
    pub fn images_loaded(&self) -> usize {
        self.loaded.load(Ordering::Acquire)
    }

    /// Queue one image, returning the signal that marks it loaded
    pub fn queue(&self) -> LoadSignal {
        self.to_load.fetch_add(1, Ordering::AcqRel);
        LoadSignal {
            counters: self.clone(),
            fired: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn progress(&self) -> LoadProgress {
        LoadProgress {
            loaded: self.images_loaded(),
            to_load: self.images_to_load(),
        }
    }

    /// Zero both counters (host initialization or between isolated runs)
    pub fn reset(&self) {
        self.to_load.store(0, Ordering::Release);
        self.loaded.store(0, Ordering::Release);
    }
}

/// Completion signal for a single queued image
#[derive(Debug, Clone)]
pub struct LoadSignal {
    counters: LoadCounters,
    fired: Arc<AtomicBool>,
}

impl LoadSignal {
    /// Mark the image as loaded. Only the first call counts.
    pub fn complete(&self) -> bool {
        if self.fired.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.counters.loaded.fetch_add(1, Ordering::AcqRel);
        true
    }

    pub fn is_complete(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}

/// Snapshot of the load counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadProgress {
    pub loaded: usize,
    pub to_load: usize,
}

impl LoadProgress {
    /// True once every queued image has completed
    pub fn is_settled(&self) -> bool {
        self.loaded >= self.to_load
    }
}

impl std::fmt::Display for LoadProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.loaded, self.to_load)
    }
}

/// Image source backed by a standalone `Assets<Image>`, so tests get
/// handles without an asset server. Like `AssetServer`, the same path
/// always gives back the same handle.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemoryImages {
    assets: std::sync::Mutex<Assets<Image>>,
    by_path: std::sync::Mutex<std::collections::HashMap<String, Handle<Image>>>,
    finished: std::sync::Mutex<std::collections::HashSet<AssetId<Image>>>,
}

#[cfg(test)]
impl MemoryImages {
    /// Mark an image as finished loading
    pub(crate) fn finish(&self, id: AssetId<Image>) {
        self.finished.lock().unwrap().insert(id);
    }
}

#[cfg(test)]
impl ImageSource for MemoryImages {
    fn load_image(&self, src: &str) -> Handle<Image> {
        self.by_path
            .lock()
            .unwrap()
            .entry(src.to_owned())
            .or_insert_with(|| self.assets.lock().unwrap().add(Image::default()))
            .clone()
    }

    fn is_loaded(&self, id: AssetId<Image>) -> bool {
        self.finished.lock().unwrap().contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_and_complete() {
        let counters = LoadCounters::new();
        let first = counters.queue();
        let second = counters.queue();
        assert_eq!(counters.images_to_load(), 2);
        assert_eq!(counters.images_loaded(), 0);

        // Completions may arrive in any order
        assert!(second.complete());
        assert!(first.complete());
        assert_eq!(counters.images_loaded(), 2);
        assert!(counters.progress().is_settled());
    }

    #[test]
    fn test_complete_counts_once() {
        let counters = LoadCounters::new();
        let signal = counters.queue();

        assert!(signal.complete());
        assert!(!signal.complete());
        assert!(signal.is_complete());
        assert_eq!(counters.images_loaded(), 1);
    }

    #[test]
    fn test_reset_and_progress_display() {
        let counters = LoadCounters::new();
        let _pending = counters.queue();
        let progress = counters.progress();
        assert!(!progress.is_settled());
        assert_eq!(progress.to_string(), "0/1");

        counters.reset();
        assert_eq!(counters.progress(), LoadProgress::default());
    }
}
