//! Preview handle registry.
//!
//! Preview references (object-URL equivalents) are externally managed
//! resources: acquired when a batch initializes its image-kind results
//! and released when the file list is cleared or replaced. The registry
//! tracks every live handle so release is guaranteed rather than left to
//! garbage collection.

use std::collections::HashSet;

use crate::models::file::FileEntry;

#[derive(Debug, Default)]
pub struct PreviewRegistry {
    handles: HashSet<String>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a preview handle for the entry, or `None` when its media
    /// kind has no preview.
    pub fn acquire(&mut self, entry: &FileEntry) -> Option<String> {
        if !entry.media_kind.has_preview() {
            return None;
        }
        let handle = format!("preview-{}", uuid::Uuid::new_v4().simple());
        self.handles.insert(handle.clone());
        Some(handle)
    }

    /// Release a single handle. Returns false for an unknown handle.
    pub fn release(&mut self, handle: &str) -> bool {
        self.handles.remove(handle)
    }

    /// Release every live handle. Called when the file list is cleared
    /// or replaced.
    pub fn release_all(&mut self) -> usize {
        let count = self.handles.len();
        if count > 0 {
            log::debug!("releasing {} preview handles", count);
        }
        self.handles.clear();
        count
    }

    pub fn live_count(&self) -> usize {
        self.handles.len()
    }
}
