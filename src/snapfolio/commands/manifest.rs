use crate::commands::{CmdMessage, CmdResult};
use crate::config::FolioConfig;
use crate::error::{FolioError, Result};
use crate::model::{CatalogMetadata, Manifest, PhotoRecord};
use crate::store::CatalogSource;
use chrono::{NaiveDate, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Used when an image header cannot be read.
const FALLBACK_DIMENSIONS: (u32, u32) = (1200, 800);

#[derive(Debug, Clone)]
pub struct ManifestOptions {
    pub gallery_dir: PathBuf,
    pub url_prefix: String,
    pub default_category: String,
    pub today: NaiveDate,
}

impl ManifestOptions {
    pub fn from_config(config: &FolioConfig, gallery_dir: Option<PathBuf>) -> Self {
        Self {
            gallery_dir: gallery_dir.unwrap_or_else(|| config.gallery_dir.clone()),
            url_prefix: config.url_prefix.clone(),
            default_category: config.default_category.clone(),
            today: Utc::now().date_naive(),
        }
    }
}

/// Rebuilds the catalog from the optimized images in the gallery dir.
///
/// Metadata from an existing manifest (e.g. the category list) is kept;
/// photo entries are regenerated from scratch.
pub fn run<S: CatalogSource>(source: &mut S, options: &ManifestOptions) -> Result<CmdResult> {
    let images = gallery_images(&options.gallery_dir)?;
    if images.is_empty() {
        return Err(FolioError::NoImagesFound(options.gallery_dir.clone()));
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Found {} image(s)", images.len())));

    let mut photos = Vec::with_capacity(images.len());
    for (i, filename) in images.iter().enumerate() {
        let path = options.gallery_dir.join(filename);
        let (width, height) = match image::image_dimensions(&path) {
            Ok(dims) => dims,
            Err(e) => {
                log::warn!("Could not read dimensions of {}: {}", path.display(), e);
                result.add_message(CmdMessage::warning(format!(
                    "Could not get dimensions for {}",
                    filename
                )));
                FALLBACK_DIMENSIONS
            }
        };
        let record = build_record(i as u32 + 1, filename, (width, height), options);
        log::debug!("Catalogued {} as #{}", filename, record.id);
        photos.push(record);
    }

    let existing = match source.load_metadata() {
        Ok(Some(metadata)) => metadata,
        Ok(None) => CatalogMetadata::default(),
        Err(e) => {
            log::warn!("Ignoring unreadable manifest {}: {}", source.describe(), e);
            result.add_message(CmdMessage::warning(format!(
                "Could not parse existing {}",
                source.describe()
            )));
            CatalogMetadata::default()
        }
    };

    let metadata = CatalogMetadata {
        total_photos: photos.len(),
        last_updated: options.today,
        ..existing
    };
    let manifest = Manifest::new(photos, metadata);
    source.save(&manifest)?;

    result.add_message(CmdMessage::success(format!(
        "Updated {} with {} photo(s)",
        source.describe(),
        manifest.photos.len()
    )));
    result.add_message(CmdMessage::info(
        "Review titles, categories, descriptions and dates before publishing.",
    ));
    Ok(result)
}

/// Full-size `.jpg` files in `dir`, thumbnails excluded, sorted by name.
pub fn gallery_images(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(FolioError::InputDirNotFound(dir.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(FolioError::Io)? {
        let entry = entry.map_err(FolioError::Io)?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".jpg") && !name.contains("-thumb") {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

pub fn build_record(
    id: u32,
    filename: &str,
    (width, height): (u32, u32),
    options: &ManifestOptions,
) -> PhotoRecord {
    let stem = filename.strip_suffix(".jpg").unwrap_or(filename);
    PhotoRecord {
        id,
        title: title_from_filename(filename),
        src: format!("{}/{}", options.url_prefix, filename),
        thumbnail: format!("{}/{}-thumb.jpg", options.url_prefix, stem),
        date: options.today,
        category: options.default_category.clone(),
        alt: format!("Photo {}", id),
        width,
        height,
        likes: 0,
        description: format!("A precious moment - Photo {}", id),
    }
}

/// `summer_beach-day.jpg` -> `Summer Beach Day`
pub fn title_from_filename(filename: &str) -> String {
    let stem = match filename.rfind('.') {
        Some(dot) if dot > 0 => &filename[..dot],
        _ => filename,
    };

    let mut title = String::with_capacity(stem.len());
    let mut capitalize = true;
    for c in stem.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        if capitalize {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
        capitalize = c.is_whitespace();
    }
    title
}
