//! # Gallery Core
//!
//! In-memory view state for browsing a photo catalog. Nothing here touches the
//! filesystem or the terminal; the CLI and any other front end drive it through
//! the action methods on [`Gallery`].
//!
//! ## Pieces
//!
//! - [`GalleryState`]: catalog, active [`Criteria`], the derived filtered list
//!   and the viewer's like flags.
//! - [`Pager`]: infinite-scroll cursor exposing a growing prefix of the
//!   filtered list.
//! - [`Lightbox`]: the photo currently open full-screen, with prev/next inside
//!   the filtered list.
//!
//! ## Derived State
//!
//! The filtered list is never patched in place. Every criteria change rebuilds
//! it from the full catalog, so it is always a pure function of
//! `(catalog, criteria)` and keeps catalog order.
//!
//! Category filter and text search are independent predicates combined with
//! AND: picking a category keeps the current search and vice versa.
//!
//! Whenever the filtered list is rebuilt the pager goes back to page one.
//! [`Gallery`] notices this through [`GalleryState::revision`].

use crate::model::{DisplayPhoto, LightboxView, PhotoRecord};

pub mod criteria;
pub mod lightbox;
pub mod pager;
pub mod state;

pub use criteria::Criteria;
pub use lightbox::Lightbox;
pub use pager::{Pager, ScrollMetrics, DEFAULT_PAGE_SIZE, DEFAULT_SCROLL_THRESHOLD};
pub use state::GalleryState;

/// One browsing session: state store, pager and lightbox wired together.
#[derive(Debug, Default)]
pub struct Gallery {
    state: GalleryState,
    pager: Pager,
    lightbox: Lightbox,
    seen_revision: u64,
}

impl Gallery {
    pub fn new(pager: Pager) -> Self {
        Self {
            state: GalleryState::new(),
            pager,
            lightbox: Lightbox::new(),
            seen_revision: 0,
        }
    }

    pub fn with_photos(mut self, photos: Vec<PhotoRecord>) -> Self {
        self.set_photos(photos);
        self
    }

    pub fn set_photos(&mut self, photos: Vec<PhotoRecord>) {
        self.state.set_photos(photos);
        self.sync_pager();
    }

    pub fn filter_by_category(&mut self, category: Option<&str>) {
        self.state.filter_by_category(category);
        self.sync_pager();
    }

    pub fn search_photos(&mut self, query: &str) {
        self.state.search_photos(query);
        self.sync_pager();
    }

    pub fn toggle_like(&mut self, id: u32) -> bool {
        self.state.toggle_like(id)
    }

    /// Explicit scroll trigger. Returns whether more photos became visible.
    pub fn load_more(&mut self) -> bool {
        let len = self.state.filtered_photos().len();
        self.pager.advance(len)
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        let len = self.state.filtered_photos().len();
        self.pager.on_scroll(metrics, len)
    }

    /// Opens the lightbox on `id` when that photo is in the filtered list.
    pub fn open(&mut self, id: u32) -> bool {
        if self.state.filtered_photos().iter().any(|p| p.id == id) {
            self.lightbox.open(id);
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) -> bool {
        self.lightbox.next(self.state.filtered_photos())
    }

    pub fn prev(&mut self) -> bool {
        self.lightbox.prev(self.state.filtered_photos())
    }

    pub fn close(&mut self) {
        self.lightbox.close();
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn filtered_photos(&self) -> &[PhotoRecord] {
        self.state.filtered_photos()
    }

    pub fn visible(&self) -> &[PhotoRecord] {
        self.pager.visible(self.state.filtered_photos())
    }

    /// Number of filtered photos not yet revealed by the pager.
    pub fn hidden_count(&self) -> usize {
        self.filtered_photos().len() - self.visible().len()
    }

    pub fn visible_display(&self) -> Vec<DisplayPhoto> {
        self.visible()
            .iter()
            .map(|photo| self.state.display(photo))
            .collect()
    }

    /// The open photo with its neighbours, or `None` when closed or filtered out.
    pub fn lightbox_view(&self) -> Option<LightboxView> {
        let photos = self.state.filtered_photos();
        let index = self.lightbox.position(photos)?;
        Some(LightboxView {
            photo: self.state.display(&photos[index]),
            position: index + 1,
            total: photos.len(),
            prev_id: index.checked_sub(1).map(|i| photos[i].id),
            next_id: photos.get(index + 1).map(|p| p.id),
        })
    }

    fn sync_pager(&mut self) {
        if self.state.revision() != self.seen_revision {
            self.seen_revision = self.state.revision();
            self.pager.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{numbered_photos, photo};

    #[test]
    fn pages_through_thirty_photos() {
        let mut gallery = Gallery::new(Pager::new(12)).with_photos(numbered_photos(30));
        assert_eq!(gallery.visible().len(), 12);

        gallery.load_more();
        assert_eq!(gallery.visible().len(), 24);

        gallery.load_more();
        assert_eq!(gallery.visible().len(), 30);
        assert_eq!(gallery.hidden_count(), 0);
        assert!(!gallery.load_more());
    }

    #[test]
    fn filter_change_resets_page() {
        let mut gallery = Gallery::new(Pager::new(5)).with_photos(numbered_photos(30));
        gallery.load_more();
        gallery.load_more();
        assert_eq!(gallery.visible().len(), 15);

        gallery.filter_by_category(Some("outdoor"));
        assert_eq!(gallery.pager().page(), 1);
        assert_eq!(gallery.visible().len(), 5);
    }

    #[test]
    fn search_change_resets_page() {
        let mut gallery = Gallery::new(Pager::new(5)).with_photos(numbered_photos(30));
        gallery.load_more();
        gallery.search_photos("photo");
        assert_eq!(gallery.pager().page(), 1);
    }

    #[test]
    fn liking_does_not_reset_page() {
        let mut gallery = Gallery::new(Pager::new(5)).with_photos(numbered_photos(30));
        gallery.load_more();
        gallery.toggle_like(1);
        assert_eq!(gallery.pager().page(), 2);
        assert!(gallery.visible_display()[0].liked);
    }

    #[test]
    fn scroll_near_bottom_reveals_next_page() {
        let mut gallery = Gallery::new(Pager::new(12)).with_photos(numbered_photos(30));
        assert!(gallery.on_scroll(ScrollMetrics::new(900, 2700, 4000)));
        assert_eq!(gallery.visible().len(), 24);
    }

    #[test]
    fn lightbox_walks_filtered_list() {
        let mut gallery = Gallery::default().with_photos(vec![
            photo(1, "A", "outdoor"),
            photo(2, "B", "indoor"),
            photo(3, "C", "outdoor"),
        ]);
        gallery.filter_by_category(Some("outdoor"));

        assert!(gallery.open(1));
        let view = gallery.lightbox_view().unwrap();
        assert_eq!(view.position, 1);
        assert_eq!(view.total, 2);
        assert_eq!(view.prev_id, None);
        assert_eq!(view.next_id, Some(3));

        assert!(gallery.next());
        assert!(!gallery.next());
        assert_eq!(gallery.lightbox().selected(), Some(3));

        gallery.close();
        assert!(gallery.lightbox_view().is_none());
    }

    #[test]
    fn cannot_open_filtered_out_photo() {
        let mut gallery = Gallery::default().with_photos(vec![
            photo(1, "A", "outdoor"),
            photo(2, "B", "indoor"),
        ]);
        gallery.filter_by_category(Some("indoor"));
        assert!(!gallery.open(1));
        assert!(!gallery.lightbox().is_open());
    }

    #[test]
    fn lightbox_view_reports_like_state() {
        let mut gallery = Gallery::default().with_photos(vec![photo(4, "A", "outdoor")]);
        gallery.open(4);
        gallery.toggle_like(4);
        let view = gallery.lightbox_view().unwrap();
        assert!(view.photo.liked);
        assert_eq!(view.photo.like_count, 1);
    }
}
