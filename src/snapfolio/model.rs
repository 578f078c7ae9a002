use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Categories the gallery ships with. Records are not restricted to these.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["outdoor", "indoor", "special-moments"];

/// A single photo as described by the catalog manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: u32,
    pub title: String,
    pub src: String,
    pub thumbnail: String,
    pub date: NaiveDate,
    pub category: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
    pub likes: u32,
    pub description: String,
}

/// Provenance block of the manifest. Never consulted by the gallery core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    #[serde(default)]
    pub total_photos: usize,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub last_updated: NaiveDate,
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl Default for CatalogMetadata {
    fn default() -> Self {
        Self {
            total_photos: 0,
            categories: default_categories(),
            last_updated: NaiveDate::default(),
        }
    }
}

/// The `photos.json` document: ordered photos plus metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub photos: Vec<PhotoRecord>,
    #[serde(default)]
    pub metadata: CatalogMetadata,
}

/// A manifest read for its metadata only. Photo entries are skipped, so
/// hand-edited records that no longer parse don't hide the metadata.
#[derive(Debug, Default, Deserialize)]
pub struct ManifestHeader {
    #[serde(default)]
    pub metadata: CatalogMetadata,
}

impl Manifest {
    pub fn new(photos: Vec<PhotoRecord>, metadata: CatalogMetadata) -> Self {
        Self { photos, metadata }
    }
}

/// A photo paired with the viewer's like state, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPhoto {
    pub photo: PhotoRecord,
    pub liked: bool,
    pub like_count: u32,
}

/// The lightbox contents: the open photo and where it sits in the filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    pub photo: DisplayPhoto,
    /// 1-based position in the filtered list
    pub position: usize,
    pub total: usize,
    pub prev_id: Option<u32>,
    pub next_id: Option<u32>,
}
