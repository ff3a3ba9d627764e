//! SimulatedMetadataApi — fixed-delay stand-in for a real AI backend.
//!
//! Fabricates a title, a description and a fixed keyword list from the
//! file name: the extension is stripped, dashes and underscores become
//! spaces, and the humanized stem is spliced into fixed phrases.

use std::time::Duration;

use super::{GeneratedMetadata, GenerationRequest, MetadataApi};
use crate::error::AppError;

/// Artificial latency of one generation call, standing in for a round
/// trip to the AI service.
pub const SIMULATED_LATENCY_MS: u64 = 1000;

/// The fixed keyword set attached to every simulated result.
pub const STOCK_KEYWORDS: &[&str] = &[
    "professional",
    "high-quality",
    "stock",
    "commercial",
    "editorial",
    "digital",
    "design",
    "creative",
    "modern",
    "business",
];

#[derive(Debug)]
pub struct SimulatedMetadataApi {
    latency: Duration,
}

impl SimulatedMetadataApi {
    /// Build the API client. Fails fast when the credential is absent;
    /// no processing may start without one.
    pub fn new(api_key: &str) -> crate::error::Result<Self> {
        if api_key.trim().is_empty() {
            return Err(AppError::Configuration("API key is not set".into()));
        }
        Ok(Self {
            latency: Duration::from_millis(SIMULATED_LATENCY_MS),
        })
    }

    /// Same client with a custom latency. Tests use a near-zero delay.
    pub fn with_latency(api_key: &str, latency: Duration) -> crate::error::Result<Self> {
        let mut api = Self::new(api_key)?;
        api.latency = latency;
        Ok(api)
    }
}

/// Strip the extension and replace `-`/`_` with spaces.
///
/// The stem is everything before the first dot, so "archive.tar.gz"
/// humanizes to "archive".
pub(crate) fn humanize_stem(file_name: &str) -> String {
    let stem = file_name.split('.').next().unwrap_or(file_name);
    stem.replace(['-', '_'], " ")
}

impl MetadataApi for SimulatedMetadataApi {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> crate::error::Result<GeneratedMetadata> {
        tokio::time::sleep(self.latency).await;

        let subject = humanize_stem(&request.file_name);
        Ok(GeneratedMetadata {
            title: format!("Professional {} image", subject),
            description: format!(
                "High-quality stock image featuring {}. Perfect for commercial and editorial use.",
                subject
            ),
            keywords: STOCK_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        })
    }
}
