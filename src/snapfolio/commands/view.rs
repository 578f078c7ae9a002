use crate::commands::{CmdResult, PhotoQuery};
use crate::config::FolioConfig;
use crate::error::{FolioError, Result};
use crate::store::CatalogSource;

use super::helpers::{apply_query, open_gallery};

/// Opens the lightbox on `id` within the list filtered by `query`.
pub fn run<S: CatalogSource>(
    source: &S,
    config: &FolioConfig,
    id: u32,
    query: &PhotoQuery,
) -> Result<CmdResult> {
    let (mut gallery, messages) = open_gallery(source, config)?;
    apply_query(&mut gallery, query);

    if !gallery.open(id) {
        return Err(FolioError::PhotoNotFound(id));
    }
    let view = gallery
        .lightbox_view()
        .ok_or(FolioError::PhotoNotFound(id))?;

    let mut result = CmdResult::default().with_lightbox(view);
    result.messages = messages;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::CatalogFixture;

    fn fixture() -> CatalogFixture {
        CatalogFixture::new()
            .with_photo("First", "outdoor")
            .with_photo("Second", "indoor")
            .with_photo("Third", "outdoor")
    }

    #[test]
    fn shows_neighbours_in_catalog_order() {
        let result = run(
            &fixture().catalog,
            &FolioConfig::default(),
            2,
            &PhotoQuery::default(),
        )
        .unwrap();

        let view = result.lightbox.unwrap();
        assert_eq!(view.photo.photo.title, "Second");
        assert_eq!(view.prev_id, Some(1));
        assert_eq!(view.next_id, Some(3));
        assert_eq!((view.position, view.total), (2, 3));
    }

    #[test]
    fn neighbours_follow_the_filter() {
        let query = PhotoQuery {
            category: Some("outdoor".into()),
            ..PhotoQuery::default()
        };
        let result = run(&fixture().catalog, &FolioConfig::default(), 3, &query).unwrap();

        let view = result.lightbox.unwrap();
        assert_eq!(view.prev_id, Some(1));
        assert_eq!(view.next_id, None);
    }

    #[test]
    fn filtered_out_photo_is_not_found() {
        let query = PhotoQuery {
            category: Some("outdoor".into()),
            ..PhotoQuery::default()
        };
        let err = run(&fixture().catalog, &FolioConfig::default(), 2, &query).unwrap_err();
        assert!(matches!(err, FolioError::PhotoNotFound(2)));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let err = run(
            &fixture().catalog,
            &FolioConfig::default(),
            77,
            &PhotoQuery::default(),
        )
        .unwrap_err();
        assert!(matches!(err, FolioError::PhotoNotFound(77)));
    }
}
