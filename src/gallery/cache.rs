use arc_swap::ArcSwapOption;
use std::sync::Arc;

use crate::gallery::models::PhotoResource;

/// Single-slot store for the last successfully fetched photo list.
///
/// Writes swap the whole list atomically, so readers never observe a torn
/// value and never block. Share it between clients with `Arc<PhotoCache>`.
#[derive(Debug, Default)]
pub struct PhotoCache {
    slot: ArcSwapOption<Vec<PhotoResource>>,
}

impl PhotoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owned copy of the cached list, if any
    pub fn get(&self) -> Option<Vec<PhotoResource>> {
        let hit = self.slot.load_full();
        crate::metrics::record_cache_read(hit.is_some());
        hit.map(|photos| photos.as_ref().clone())
    }

    pub fn set(&self, photos: Vec<PhotoResource>) {
        self.slot.store(Some(Arc::new(photos)));
    }

    pub fn clear(&self) {
        self.slot.store(None);
    }
}
