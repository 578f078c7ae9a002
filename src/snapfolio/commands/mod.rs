use crate::config::FolioConfig;
use crate::model::{DisplayPhoto, LightboxView};
use std::path::PathBuf;

pub mod config;
pub mod formats;
pub mod helpers;
pub mod list;
pub mod manifest;
pub mod optimize;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_photos: Vec<DisplayPhoto>,
    /// Filtered photos beyond the requested page
    pub hidden_photos: usize,
    pub lightbox: Option<LightboxView>,
    pub written_files: Vec<PathBuf>,
    pub config: Option<FolioConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_photos(mut self, photos: Vec<DisplayPhoto>, hidden: usize) -> Self {
        self.listed_photos = photos;
        self.hidden_photos = hidden;
        self
    }

    pub fn with_lightbox(mut self, view: LightboxView) -> Self {
        self.lightbox = Some(view);
        self
    }

    pub fn with_written_files(mut self, paths: Vec<PathBuf>) -> Self {
        self.written_files = paths;
        self
    }

    pub fn with_config(mut self, config: FolioConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Category, search text and page for one-shot listing commands.
#[derive(Debug, Clone)]
pub struct PhotoQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    /// 1-based
    pub page: usize,
}

impl Default for PhotoQuery {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            page: 1,
        }
    }
}
