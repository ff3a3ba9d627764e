//! Metadata generation abstraction layer.
//!
//! This module defines the `MetadataApi` trait, which is the sole interface
//! for producing title/description/keyword metadata. All metadata
//! fabrication MUST be implemented within the `api/` directory. Upper-layer
//! modules (`services/`, `session`) call through this trait and never
//! construct metadata directly.
//!
//! The current implementation is `SimulatedMetadataApi`, which fabricates
//! text from the file name after a fixed delay. A real AI backend can be
//! swapped in without affecting upper layers.

use crate::error::AppError;
use crate::models::file::MediaKind;
use crate::models::settings::GenerationSettings;

/// One generation call: the file under analysis plus the settings knobs a
/// backend may honor (the simulation ignores them).
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub file_name: String,
    pub media_kind: MediaKind,
    pub settings: GenerationSettings,
}

/// Metadata produced for a single file.
#[derive(Debug, Clone)]
pub struct GeneratedMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// Abstraction trait for metadata generation backends.
pub trait MetadataApi: Send + Sync {
    /// Generate metadata for one file.
    ///
    /// The engine awaits this as a suspension point; a failure here is
    /// recorded as a per-file error and never aborts the batch.
    fn generate(
        &self,
        request: GenerationRequest,
    ) -> impl std::future::Future<Output = std::result::Result<GeneratedMetadata, AppError>> + Send;
}

pub mod simulated;
