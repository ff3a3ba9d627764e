//! Generation settings record.

use serde::{Deserialize, Serialize};

/// Flat configuration record supplied by the settings surface.
///
/// Read-only input to the generation engine. The knobs are carried through
/// the generation request so a real backend can honor them; the simulated
/// backend derives everything from the file name and ignores the rest.
/// `batch_size` in particular does not parallelize the loop — generation
/// is strictly sequential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    /// Files per UI processing chunk: 1-10.
    pub batch_size: u32,
    /// Title length in characters: 20-200.
    pub title_length: u32,
    /// Description length in characters: 50-500.
    pub description_length: u32,
    /// Number of keywords to generate: 5-50.
    pub keywords_count: u32,
    /// Maximum words in the description: 10-100.
    pub max_desc_words: u32,
    /// Output file extension override ("default" keeps the original).
    pub file_extension: String,
    /// Prompt selection: "default" or "custom".
    pub custom_prompt: String,
    /// Optimize metadata for silhouette-style images.
    pub silhouette: bool,
    /// Optimize metadata for isolated objects on a white background.
    pub white_bg: bool,
    /// Optimize metadata for isolated objects on a transparent background.
    pub transparent_bg: bool,
    /// Whether the custom prompt overrides the default prompts.
    pub use_custom_prompt: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            batch_size: 3,
            title_length: 60,
            description_length: 150,
            keywords_count: 30,
            max_desc_words: 40,
            file_extension: "default".to_string(),
            custom_prompt: "default".to_string(),
            silhouette: false,
            white_bg: false,
            transparent_bg: false,
            use_custom_prompt: false,
        }
    }
}
