use super::CatalogSource;
use crate::error::{FolioError, Result};
use crate::model::{CatalogMetadata, Manifest, ManifestHeader};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(FolioError::Io)?;
            }
        }
        Ok(())
    }
}

impl CatalogSource for FileCatalog {
    fn load(&self) -> Result<Option<Manifest>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(FolioError::Io)?;
        let manifest: Manifest =
            serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        log::debug!(
            "Loaded {} photo(s) from {}",
            manifest.photos.len(),
            self.path.display()
        );
        Ok(Some(manifest))
    }

    fn load_metadata(&self) -> Result<Option<CatalogMetadata>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(FolioError::Io)?;
        let header: ManifestHeader =
            serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        Ok(Some(header.metadata))
    }

    fn save(&mut self, manifest: &Manifest) -> Result<()> {
        self.ensure_parent()?;
        let mut content =
            serde_json::to_string_pretty(manifest).map_err(FolioError::Serialization)?;
        content.push('\n');
        fs::write(&self.path, content).map_err(FolioError::Io)?;
        log::debug!("Wrote manifest to {}", self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::photo;

    #[test]
    fn missing_manifest_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = FileCatalog::new(dir.path().join("photos.json"));
        assert!(catalog.load().unwrap().is_none());
    }

    #[test]
    fn save_creates_parent_dirs_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src").join("data").join("photos.json");
        let mut catalog = FileCatalog::new(&path);

        let manifest = Manifest::new(
            vec![photo(1, "Sunset Beach", "outdoor")],
            CatalogMetadata::default(),
        );
        catalog.save(&manifest).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.ends_with("}\n"));
        assert!(raw.contains("  \"photos\": ["));

        let loaded = catalog.load().unwrap().unwrap();
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn metadata_survives_unparseable_photos() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photos.json");
        fs::write(
            &path,
            r#"{"photos":[{"id":1,"date":"June 2024"}],"metadata":{"categories":["family"]}}"#,
        )
        .unwrap();

        let catalog = FileCatalog::new(&path);
        assert!(catalog.load().is_err());
        let metadata = catalog.load_metadata().unwrap().unwrap();
        assert_eq!(metadata.categories, vec!["family"]);
        assert!(FileCatalog::new(dir.path().join("none.json"))
            .load_metadata()
            .unwrap()
            .is_none());
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photos.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FileCatalog::new(&path).load().unwrap_err();
        assert!(matches!(err, FolioError::Serialization(_)));
    }
}
