use crate::model::PhotoRecord;

/// Full-screen selection over the current filtered list.
///
/// Only the selected id is kept; its position is looked up in whatever list
/// the caller passes, so navigation always follows the filter in effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    selected: Option<u32>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, id: u32) {
        self.selected = Some(id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// Index of the selection within `photos`, if it is there.
    pub fn position(&self, photos: &[PhotoRecord]) -> Option<usize> {
        let id = self.selected?;
        photos.iter().position(|p| p.id == id)
    }

    pub fn current<'a>(&self, photos: &'a [PhotoRecord]) -> Option<&'a PhotoRecord> {
        self.position(photos).map(|i| &photos[i])
    }

    pub fn has_next(&self, photos: &[PhotoRecord]) -> bool {
        matches!(self.position(photos), Some(i) if i + 1 < photos.len())
    }

    pub fn has_prev(&self, photos: &[PhotoRecord]) -> bool {
        matches!(self.position(photos), Some(i) if i > 0)
    }

    /// Steps forward. At the last photo this does nothing and returns false.
    pub fn next(&mut self, photos: &[PhotoRecord]) -> bool {
        match self.position(photos) {
            Some(i) if i + 1 < photos.len() => {
                self.selected = Some(photos[i + 1].id);
                true
            }
            _ => false,
        }
    }

    /// Steps back. At the first photo this does nothing and returns false.
    pub fn prev(&mut self, photos: &[PhotoRecord]) -> bool {
        match self.position(photos) {
            Some(i) if i > 0 => {
                self.selected = Some(photos[i - 1].id);
                true
            }
            _ => false,
        }
    }
}
