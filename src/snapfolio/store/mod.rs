//! # Catalog Storage
//!
//! The gallery reads its photos from a manifest document produced offline.
//! [`CatalogSource`] hides where that document lives so the API layer can be
//! exercised without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileCatalog`]: the `photos.json` file on disk
//!   - Written pretty-printed with a trailing newline
//!   - A missing file loads as `None`, not an error
//!
//! - [`memory::InMemoryCatalog`]: in-memory manifest for tests
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "photos":   [ { "id": 1, "title": "...", ... } ],
//!   "metadata": { "totalPhotos": 1, "categories": [...], "lastUpdated": "YYYY-MM-DD" }
//! }
//! ```
//!
//! View state (likes, filters, pages) is never stored.

use crate::error::Result;
use crate::model::{CatalogMetadata, Manifest};

pub mod fs;
pub mod memory;

/// Abstract access to the catalog manifest.
pub trait CatalogSource {
    /// Load the manifest, or `None` when none has been written yet
    fn load(&self) -> Result<Option<Manifest>>;

    /// Load only the metadata block, or `None` when no manifest exists
    fn load_metadata(&self) -> Result<Option<CatalogMetadata>> {
        Ok(self.load()?.map(|manifest| manifest.metadata))
    }

    /// Replace the stored manifest
    fn save(&mut self, manifest: &Manifest) -> Result<()>;

    /// Human-readable location, used in messages
    fn describe(&self) -> String;
}
