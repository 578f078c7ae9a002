use crate::error::{FolioError, Result};
use crate::gallery::{DEFAULT_PAGE_SIZE, DEFAULT_SCROLL_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const DEFAULT_QUALITY: u8 = 80;
pub const DEFAULT_MAX_DIMENSION: u32 = 1200;
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 300;

/// Keys accepted by [`FolioConfig::get`] and [`FolioConfig::set`], in display order.
pub const CONFIG_KEYS: [&str; 10] = [
    "manifest-path",
    "gallery-dir",
    "url-prefix",
    "default-category",
    "page-size",
    "scroll-threshold",
    "quality",
    "max-width",
    "max-height",
    "thumbnail-size",
];

/// Configuration for snapfolio, stored in <config dir>/config.json under the
/// same kebab-case keys that `get` and `set` accept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct FolioConfig {
    /// Manifest read by the gallery and written by `manifest`
    pub manifest_path: PathBuf,

    /// Where optimized images land and where `manifest` looks for them
    pub gallery_dir: PathBuf,

    /// Public URL prefix for `src`/`thumbnail` in generated records
    pub url_prefix: String,

    /// Category assigned to newly generated records
    pub default_category: String,

    pub page_size: usize,

    /// Distance to the bottom (px) under which the next page loads
    pub scroll_threshold: u32,

    /// JPEG quality, 1-100
    pub quality: u8,

    pub max_width: u32,
    pub max_height: u32,

    /// Edge length of the square thumbnails
    pub thumbnail_size: u32,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from("src/data/photos.json"),
            gallery_dir: PathBuf::from("public/images/gallery"),
            url_prefix: "/images/gallery".to_string(),
            default_category: "special-moments".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            quality: DEFAULT_QUALITY,
            max_width: DEFAULT_MAX_DIMENSION,
            max_height: DEFAULT_MAX_DIMENSION,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
        }
    }
}

impl FolioConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FolioError::Io)?;
        let config: FolioConfig =
            serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects hand-edited values that `set` would have refused.
    fn validate(&self) -> Result<()> {
        let invalid = if self.page_size == 0 {
            Some("page-size must be positive")
        } else if !(1..=100).contains(&self.quality) {
            Some("quality must be between 1 and 100")
        } else if self.max_width == 0 || self.max_height == 0 || self.thumbnail_size == 0 {
            Some("image dimensions must be positive")
        } else {
            None
        };
        match invalid {
            Some(message) => Err(FolioError::Config(message.to_string())),
            None => Ok(()),
        }
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FolioError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FolioError::Serialization)?;
        fs::write(config_path, content).map_err(FolioError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "manifest-path" => self.manifest_path.display().to_string(),
            "gallery-dir" => self.gallery_dir.display().to_string(),
            "url-prefix" => self.url_prefix.clone(),
            "default-category" => self.default_category.clone(),
            "page-size" => self.page_size.to_string(),
            "scroll-threshold" => self.scroll_threshold.to_string(),
            "quality" => self.quality.to_string(),
            "max-width" => self.max_width.to_string(),
            "max-height" => self.max_height.to_string(),
            "thumbnail-size" => self.thumbnail_size.to_string(),
            _ => return None,
        };
        Some(value)
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "manifest-path" => self.manifest_path = PathBuf::from(value),
            "gallery-dir" => self.gallery_dir = PathBuf::from(value),
            "url-prefix" => self.url_prefix = value.trim_end_matches('/').to_string(),
            "default-category" => {
                if value.trim().is_empty() {
                    return Err("default-category cannot be empty".to_string());
                }
                self.default_category = value.to_string();
            }
            "page-size" => self.page_size = parse_positive(key, value)?,
            "scroll-threshold" => {
                self.scroll_threshold = value
                    .parse()
                    .map_err(|_| format!("Invalid value for {}: {}", key, value))?;
            }
            "quality" => self.quality = parse_quality(value)?,
            "max-width" => self.max_width = parse_positive(key, value)?,
            "max-height" => self.max_height = parse_positive(key, value)?,
            "thumbnail-size" => self.thumbnail_size = parse_positive(key, value)?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

fn parse_positive<T>(key: &str, value: &str) -> std::result::Result<T, String>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    match value.parse::<T>() {
        Ok(n) if n > T::default() => Ok(n),
        _ => Err(format!("{} must be a positive integer, got {}", key, value)),
    }
}

/// Parses a JPEG quality in 1..=100.
pub fn parse_quality(value: &str) -> std::result::Result<u8, String> {
    match value.parse::<u8>() {
        Ok(q) if (1..=100).contains(&q) => Ok(q),
        _ => Err(format!("quality must be between 1 and 100, got {}", value)),
    }
}
