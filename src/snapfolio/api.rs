//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the gallery
//! core. Every front end (the CLI today) goes through [`FolioApi`].
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Carries configuration** so callers don't thread it through every call
//! - **Returns structured types** (`Result<CmdResult>`, [`Gallery`])
//!
//! It does no printing and never exits the process.
//!
//! ## Generic Over CatalogSource
//!
//! `FolioApi<S: CatalogSource>` is generic over where the manifest lives:
//! - Production: `FolioApi<FileCatalog>`
//! - Testing: `FolioApi<InMemoryCatalog>`

use crate::commands;
use crate::commands::manifest::ManifestOptions;
use crate::commands::optimize::OptimizeOptions;
use crate::config::FolioConfig;
use crate::error::Result;
use crate::gallery::Gallery;
use crate::store::CatalogSource;
use std::path::PathBuf;

pub struct FolioApi<S: CatalogSource> {
    source: S,
    config: FolioConfig,
    config_dir: PathBuf,
}

impl<S: CatalogSource> FolioApi<S> {
    pub fn new(source: S, config: FolioConfig, config_dir: PathBuf) -> Self {
        Self {
            source,
            config,
            config_dir,
        }
    }

    /// Starts an interactive session over the stored catalog.
    pub fn open_gallery(&self) -> Result<(Gallery, Vec<CmdMessage>)> {
        commands::helpers::open_gallery(&self.source, &self.config)
    }

    pub fn list_photos(&self, query: &PhotoQuery) -> Result<CmdResult> {
        commands::list::run(&self.source, &self.config, query)
    }

    pub fn view_photo(&self, id: u32, query: &PhotoQuery) -> Result<CmdResult> {
        commands::view::run(&self.source, &self.config, id, query)
    }

    pub fn optimize_images(
        &self,
        input_dir: PathBuf,
        output_dir: Option<PathBuf>,
        webp: bool,
        quality: Option<u8>,
        max_width: Option<u32>,
    ) -> Result<CmdResult> {
        let options = OptimizeOptions::from_config(&self.config, input_dir, output_dir)
            .with_webp(webp)
            .with_quality(quality)
            .with_max_width(max_width);
        commands::optimize::run(&options)
    }

    pub fn generate_manifest(&mut self, gallery_dir: Option<PathBuf>) -> Result<CmdResult> {
        let options = ManifestOptions::from_config(&self.config, gallery_dir);
        commands::manifest::run(&mut self.source, &options)
    }

    pub fn formats(&self) -> CmdResult {
        commands::formats::run()
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, PhotoQuery};
