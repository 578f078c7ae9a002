use crate::commands::{CmdMessage, PhotoQuery};
use crate::config::FolioConfig;
use crate::error::Result;
use crate::gallery::{Gallery, Pager};
use crate::store::CatalogSource;

/// Builds a gallery session from the stored catalog.
///
/// A missing manifest yields an empty gallery plus an info message.
pub fn open_gallery<S: CatalogSource>(
    source: &S,
    config: &FolioConfig,
) -> Result<(Gallery, Vec<CmdMessage>)> {
    let mut messages = Vec::new();
    let pager = Pager::new(config.page_size).with_threshold(config.scroll_threshold);

    let photos = match source.load()? {
        Some(manifest) => manifest.photos,
        None => {
            messages.push(CmdMessage::info(format!(
                "No catalog at {}. Run `snapfolio manifest` to create one.",
                source.describe()
            )));
            Vec::new()
        }
    };

    Ok((Gallery::new(pager).with_photos(photos), messages))
}

/// Applies category and search from `query` to a fresh gallery.
pub fn apply_query(gallery: &mut Gallery, query: &PhotoQuery) {
    if let Some(category) = &query.category {
        gallery.filter_by_category(Some(category));
    }
    if let Some(search) = &query.search {
        gallery.search_photos(search);
    }
}
