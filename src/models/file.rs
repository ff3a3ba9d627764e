//! Input file model and media kind classification.

use serde::{Deserialize, Serialize};

/// File extensions accepted for metadata generation, matching the upload
/// surface's accept list (images, videos, vector/document formats).
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "svg", "mp4", "mov", "eps", "ps", "ai", "pdf",
];

/// Declared media kind of an input file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Vector,
}

impl MediaKind {
    /// Classify a file name by extension. Returns `None` for unsupported
    /// extensions (the intake layer drops those files).
    ///
    /// SVG counts as image: previews key off an `image/*` MIME type,
    /// which includes `image/svg+xml`.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = file_name.rsplit_once('.').map(|(_, e)| e)?;
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "svg" => Some(Self::Image),
            "mp4" | "mov" => Some(Self::Video),
            "eps" | "ps" | "ai" | "pdf" => Some(Self::Vector),
            _ => None,
        }
    }

    /// Only image-kind files get a preview reference.
    pub fn has_preview(self) -> bool {
        self == Self::Image
    }
}

/// A resolved input file awaiting metadata generation.
///
/// Immutable once added to the session; identified by its position in the
/// file list (the core assigns no stable ID of its own).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub file_name: String,
    pub file_path: String,
    pub file_size: u64,
    pub media_kind: MediaKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_image_extensions() {
        for name in ["a.jpg", "b.JPEG", "c.png", "d.gif", "e.svg"] {
            assert_eq!(MediaKind::from_file_name(name), Some(MediaKind::Image));
        }
    }

    #[test]
    fn classifies_video_extensions() {
        assert_eq!(MediaKind::from_file_name("clip.mp4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_file_name("clip.MOV"), Some(MediaKind::Video));
    }

    #[test]
    fn classifies_vector_extensions() {
        for name in ["v.eps", "v.ps", "v.ai", "v.pdf"] {
            assert_eq!(MediaKind::from_file_name(name), Some(MediaKind::Vector));
        }
    }

    #[test]
    fn unsupported_extension_returns_none() {
        assert_eq!(MediaKind::from_file_name("archive.zip"), None);
        assert_eq!(MediaKind::from_file_name("noext"), None);
    }

    #[test]
    fn extension_is_taken_from_last_dot() {
        assert_eq!(
            MediaKind::from_file_name("shoot.2026.final.png"),
            Some(MediaKind::Image)
        );
    }

    #[test]
    fn only_images_have_previews() {
        assert!(MediaKind::Image.has_preview());
        assert!(!MediaKind::Video.has_preview());
        assert!(!MediaKind::Vector.has_preview());
    }

    #[test]
    fn serde_camel_case_keys() {
        let entry = FileEntry {
            file_name: "cat.jpg".to_string(),
            file_path: "/tmp/cat.jpg".to_string(),
            file_size: 2048,
            media_kind: MediaKind::Image,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("fileName").is_some());
        assert!(json.get("filePath").is_some());
        assert!(json.get("fileSize").is_some());
        assert!(json.get("mediaKind").is_some());
        assert!(json.get("file_name").is_none());
    }
}
