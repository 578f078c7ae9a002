use super::CatalogSource;
use crate::error::Result;
use crate::model::Manifest;

/// In-memory catalog for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryCatalog {
    manifest: Option<Manifest>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(manifest: Manifest) -> Self {
        Self {
            manifest: Some(manifest),
        }
    }
}

impl CatalogSource for InMemoryCatalog {
    fn load(&self) -> Result<Option<Manifest>> {
        Ok(self.manifest.clone())
    }

    fn save(&mut self, manifest: &Manifest) -> Result<()> {
        self.manifest = Some(manifest.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory catalog".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{CatalogMetadata, PhotoRecord, DEFAULT_CATEGORIES};
    use chrono::NaiveDate;

    pub fn photo(id: u32, title: &str, category: &str) -> PhotoRecord {
        PhotoRecord {
            id,
            title: title.to_string(),
            src: format!("/images/gallery/photo-{}.jpg", id),
            thumbnail: format!("/images/gallery/photo-{}-thumb.jpg", id),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            category: category.to_string(),
            alt: format!("Photo {}", id),
            width: 1200,
            height: 800,
            likes: 0,
            description: format!("Description {}", id),
        }
    }

    /// `count` photos titled "Photo N", cycling through the default categories.
    pub fn numbered_photos(count: u32) -> Vec<PhotoRecord> {
        (1..=count)
            .map(|id| {
                let category = DEFAULT_CATEGORIES[(id as usize - 1) % DEFAULT_CATEGORIES.len()];
                photo(id, &format!("Photo {}", id), category)
            })
            .collect()
    }

    pub struct CatalogFixture {
        pub catalog: InMemoryCatalog,
        photos: Vec<PhotoRecord>,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                catalog: InMemoryCatalog::new(),
                photos: Vec::new(),
            }
        }

        pub fn with_photo(mut self, title: &str, category: &str) -> Self {
            let id = self.photos.len() as u32 + 1;
            self.photos.push(photo(id, title, category));
            self.sync()
        }

        pub fn with_liked_photo(mut self, title: &str, category: &str, likes: u32) -> Self {
            let id = self.photos.len() as u32 + 1;
            let mut record = photo(id, title, category);
            record.likes = likes;
            self.photos.push(record);
            self.sync()
        }

        pub fn with_photos(mut self, count: u32) -> Self {
            self.photos = numbered_photos(count);
            self.sync()
        }

        fn sync(mut self) -> Self {
            let metadata = CatalogMetadata {
                total_photos: self.photos.len(),
                ..CatalogMetadata::default()
            };
            self.catalog
                .save(&Manifest::new(self.photos.clone(), metadata))
                .unwrap();
            self
        }
    }
}
