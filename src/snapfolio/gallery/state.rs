use super::criteria::Criteria;
use crate::model::{DisplayPhoto, PhotoRecord};
use std::collections::HashMap;

/// Catalog, active criteria, derived filtered list and like flags.
///
/// The filtered list is always a pure function of the catalog and the
/// criteria. It is rebuilt from scratch on every change and `revision` is
/// bumped each time so dependents can tell the list was replaced.
#[derive(Debug, Default)]
pub struct GalleryState {
    photos: Vec<PhotoRecord>,
    criteria: Criteria,
    filtered: Vec<PhotoRecord>,
    likes: HashMap<u32, bool>,
    revision: u64,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the catalog and clears any active filter.
    pub fn set_photos(&mut self, photos: Vec<PhotoRecord>) {
        self.photos = photos;
        self.criteria = Criteria::new();
        self.recompute();
    }

    /// `None` removes the category filter. The search query is kept.
    pub fn filter_by_category(&mut self, category: Option<&str>) {
        self.criteria.set_category(category);
        self.recompute();
    }

    /// Empty or whitespace-only queries remove the search. The category is kept.
    pub fn search_photos(&mut self, query: &str) {
        self.criteria.set_query(query);
        self.recompute();
    }

    /// Flips the like flag for `id`. Ids never seen before count as not liked.
    pub fn toggle_like(&mut self, id: u32) -> bool {
        let flag = self.likes.entry(id).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }

    pub fn filtered_photos(&self) -> &[PhotoRecord] {
        &self.filtered
    }

    pub fn likes(&self) -> &HashMap<u32, bool> {
        &self.likes
    }

    pub fn is_liked(&self, id: u32) -> bool {
        self.likes.get(&id).copied().unwrap_or(false)
    }

    /// Baseline likes plus one when the viewer liked the photo.
    pub fn like_count(&self, photo: &PhotoRecord) -> u32 {
        photo.likes + u32::from(self.is_liked(photo.id))
    }

    pub fn display(&self, photo: &PhotoRecord) -> DisplayPhoto {
        DisplayPhoto {
            photo: photo.clone(),
            liked: self.is_liked(photo.id),
            like_count: self.like_count(photo),
        }
    }

    pub fn find(&self, id: u32) -> Option<&PhotoRecord> {
        self.photos.iter().find(|p| p.id == id)
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.criteria.category()
    }

    pub fn query(&self) -> Option<&str> {
        self.criteria.query()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn recompute(&mut self) {
        self.filtered = self.criteria.apply(&self.photos);
        self.revision += 1;
    }
}
