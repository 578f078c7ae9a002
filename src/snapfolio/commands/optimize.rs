//! Resize and recompress source photos into gallery renditions.
//!
//! Every supported file `<stem>.<ext>` in the input directory produces:
//!
//! ```text
//! <stem>.jpg        fit inside max_width x max_height, never enlarged
//! <stem>-thumb.jpg  center-cropped square of thumbnail_size
//! <stem>.webp       same bounds as the JPEG, only with --webp
//! ```
//!
//! A file that fails to decode or encode is reported and skipped. The run
//! only fails outright when the input directory is missing or holds no
//! supported file.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::FolioConfig;
use crate::error::{FolioError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Lowercase extensions accepted as optimizer input.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "tiff"];

const THUMB_SUFFIX: &str = "-thumb";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub webp: bool,
    pub quality: u8,
    pub max_width: u32,
    pub max_height: u32,
    pub thumbnail_size: u32,
}

impl OptimizeOptions {
    /// Options from config; `output_dir` falls back to the configured gallery dir.
    pub fn from_config(
        config: &FolioConfig,
        input_dir: PathBuf,
        output_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            input_dir,
            output_dir: output_dir.unwrap_or_else(|| config.gallery_dir.clone()),
            webp: false,
            quality: config.quality,
            max_width: config.max_width,
            max_height: config.max_height,
            thumbnail_size: config.thumbnail_size,
        }
    }

    pub fn with_webp(mut self, webp: bool) -> Self {
        self.webp = webp;
        self
    }

    pub fn with_quality(mut self, quality: Option<u8>) -> Self {
        if let Some(q) = quality {
            self.quality = q.clamp(1, 100);
        }
        self
    }

    pub fn with_max_width(mut self, width: Option<u32>) -> Self {
        if let Some(w) = width {
            self.max_width = w.max(1);
        }
        self
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OptimizeStats {
    pub processed: usize,
    pub failed: usize,
    pub original_bytes: u64,
    pub optimized_bytes: u64,
}

impl OptimizeStats {
    pub fn total(&self) -> usize {
        self.processed + self.failed
    }

    pub fn saved_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        let saved = self.original_bytes as f64 - self.optimized_bytes as f64;
        saved / self.original_bytes as f64 * 100.0
    }
}

struct Rendition {
    main: PathBuf,
    thumbnail: PathBuf,
    original_bytes: u64,
    optimized_bytes: u64,
}

pub fn run(options: &OptimizeOptions) -> Result<CmdResult> {
    let images = find_images(&options.input_dir)?;
    if images.is_empty() {
        return Err(FolioError::NoImagesFound(options.input_dir.clone()));
    }

    if !options.output_dir.exists() {
        fs::create_dir_all(&options.output_dir).map_err(FolioError::Io)?;
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Found {} image(s) in {}",
        images.len(),
        options.input_dir.display()
    )));

    let mut stats = OptimizeStats::default();
    let mut written = Vec::new();

    for path in &images {
        let name = file_name(path);
        log::debug!("Optimizing {}", path.display());

        if let Some(target) = overwritten_source(path, options) {
            let e = FolioError::SameFile(target);
            log::warn!("Skipping {}: {}", path.display(), e);
            result.add_message(CmdMessage::warning(format!(
                "Error processing {}: {}",
                name, e
            )));
            stats.failed += 1;
            continue;
        }

        let source = match decode(path) {
            Ok(img) => img,
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
                result.add_message(CmdMessage::warning(format!(
                    "Error processing {}: {}",
                    name, e
                )));
                stats.failed += 1;
                continue;
            }
        };

        match write_renditions(path, &source, options) {
            Ok(rendition) => {
                stats.processed += 1;
                stats.original_bytes += rendition.original_bytes;
                stats.optimized_bytes += rendition.optimized_bytes;
                result.add_message(CmdMessage::success(format!(
                    "{}: {} -> {} ({}%)",
                    name,
                    format_kb(rendition.original_bytes),
                    format_kb(rendition.optimized_bytes),
                    compression_percent(rendition.original_bytes, rendition.optimized_bytes)
                )));
                written.push(rendition.main);
                written.push(rendition.thumbnail);
            }
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
                result.add_message(CmdMessage::warning(format!(
                    "Error processing {}: {}",
                    name, e
                )));
                stats.failed += 1;
                continue;
            }
        }

        if options.webp {
            let (_, _, webp_path) = rendition_paths(path, options);
            let bounded = fit_within(&source, options.max_width, options.max_height);
            match write_webp(&bounded, &webp_path) {
                Ok(()) => {
                    let size = fs::metadata(&webp_path).map(|m| m.len()).unwrap_or(0);
                    result.add_message(CmdMessage::info(format!(
                        "  WebP: {} - {}",
                        format_kb(size),
                        webp_path.display()
                    )));
                    written.push(webp_path);
                }
                Err(e) => {
                    log::warn!("WebP conversion failed for {}: {}", path.display(), e);
                    result.add_message(CmdMessage::warning(format!(
                        "  WebP conversion failed for {}: {}",
                        name, e
                    )));
                }
            }
        }
    }

    summarize(&mut result, &stats);
    Ok(result.with_written_files(written))
}

/// Supported images directly inside `dir`, sorted by file name.
pub fn find_images(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(FolioError::InputDirNotFound(dir.to_path_buf()));
    }

    let mut images = Vec::new();
    for entry in fs::read_dir(dir).map_err(FolioError::Io)? {
        let path = entry.map_err(FolioError::Io)?.path();
        if path.is_file() && is_supported(&path) {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Scales `img` down to fit the bounds, keeping aspect ratio. Smaller images are untouched.
pub fn fit_within(img: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    if img.width() <= max_width && img.height() <= max_height {
        return img.clone();
    }
    img.resize(max_width, max_height, FilterType::Lanczos3)
}

fn decode(path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(path)
        .map_err(FolioError::Io)?
        .with_guessed_format()
        .map_err(FolioError::Io)?
        .decode()
        .map_err(FolioError::Image)?;
    Ok(img)
}

fn rendition_paths(path: &Path, options: &OptimizeOptions) -> (PathBuf, PathBuf, PathBuf) {
    let stem = stem(path);
    let dir = &options.output_dir;
    (
        dir.join(format!("{}.jpg", stem)),
        dir.join(format!("{}{}.jpg", stem, THUMB_SUFFIX)),
        dir.join(format!("{}.webp", stem)),
    )
}

/// The output path that resolves to `path` itself, if any.
fn overwritten_source(path: &Path, options: &OptimizeOptions) -> Option<PathBuf> {
    let source = fs::canonicalize(path).ok()?;
    let (main, thumbnail, webp) = rendition_paths(path, options);
    let mut targets = vec![main, thumbnail];
    if options.webp {
        targets.push(webp);
    }
    targets
        .into_iter()
        .find(|target| fs::canonicalize(target).is_ok_and(|t| t == source))
}

fn write_renditions(
    path: &Path,
    source: &DynamicImage,
    options: &OptimizeOptions,
) -> Result<Rendition> {
    // Sized before anything is written to the output dir
    let original_bytes = fs::metadata(path).map_err(FolioError::Io)?.len();
    let (main, thumbnail, _) = rendition_paths(path, options);

    let bounded = fit_within(source, options.max_width, options.max_height);
    write_jpeg(&bounded, &main, options.quality)?;

    let thumb = source.resize_to_fill(
        options.thumbnail_size,
        options.thumbnail_size,
        FilterType::Lanczos3,
    );
    write_jpeg(&thumb, &thumbnail, options.quality)?;

    let optimized_bytes = fs::metadata(&main).map_err(FolioError::Io)?.len();

    Ok(Rendition {
        main,
        thumbnail,
        original_bytes,
        optimized_bytes,
    })
}

fn write_jpeg(img: &DynamicImage, path: &Path, quality: u8) -> Result<()> {
    let file = File::create(path).map_err(FolioError::Io)?;
    let mut writer = BufWriter::new(file);
    // JPEG has no alpha channel
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, quality))
        .map_err(FolioError::Image)?;
    writer.flush().map_err(FolioError::Io)?;
    Ok(())
}

fn write_webp(img: &DynamicImage, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(FolioError::Io)?;
    let mut writer = BufWriter::new(file);
    let rgba = DynamicImage::ImageRgba8(img.to_rgba8());
    rgba.write_with_encoder(WebPEncoder::new_lossless(&mut writer))
        .map_err(FolioError::Image)?;
    writer.flush().map_err(FolioError::Io)?;
    Ok(())
}

fn summarize(result: &mut CmdResult, stats: &OptimizeStats) {
    let total = stats.total();
    result.add_message(CmdMessage::success(format!(
        "Processed: {}/{}",
        stats.processed, total
    )));
    if stats.failed > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Failed: {}/{}",
            stats.failed, total
        )));
    }
    result.add_message(CmdMessage::info(format!(
        "Total: {} -> {}",
        format_kb(stats.original_bytes),
        format_kb(stats.optimized_bytes)
    )));
    result.add_message(CmdMessage::info(format!(
        "Space saved: {:.1}%",
        stats.saved_percent()
    )));
}

fn compression_percent(original: u64, optimized: u64) -> i64 {
    if original == 0 {
        return 0;
    }
    ((original as f64 - optimized as f64) / original as f64 * 100.0).round() as i64
}

fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
