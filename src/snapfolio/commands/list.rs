use crate::commands::{CmdResult, PhotoQuery};
use crate::config::FolioConfig;
use crate::error::Result;
use crate::store::CatalogSource;

use super::helpers::{apply_query, open_gallery};

pub fn run<S: CatalogSource>(
    source: &S,
    config: &FolioConfig,
    query: &PhotoQuery,
) -> Result<CmdResult> {
    let (mut gallery, messages) = open_gallery(source, config)?;
    apply_query(&mut gallery, query);

    for _ in 1..query.page.max(1) {
        if !gallery.load_more() {
            break;
        }
    }

    let mut result =
        CmdResult::default().with_listed_photos(gallery.visible_display(), gallery.hidden_count());
    result.messages = messages;
    Ok(result)
}
