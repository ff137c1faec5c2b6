//! Map documents stored as pretty JSON files, one per map id.

use std::path::{Path, PathBuf};

use kmap_core::errors::StorageError;
use kmap_core::models::MapDocument;
use kmap_core::traits::IMapRepository;
use kmap_core::KmapResult;

use crate::io_err;

const EXTENSION: &str = "json";

/// `IMapRepository` over a directory of `{map_id}.json` files.
#[derive(Debug, Clone)]
pub struct FileMapRepository {
    root: PathBuf,
}

impl FileMapRepository {
    /// Open (creating if needed) a repository rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> KmapResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|e| io_err(&root, e))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, map_id: &str) -> KmapResult<PathBuf> {
        let valid = !map_id.is_empty()
            && map_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::Unavailable {
                reason: format!("invalid map id {map_id:?}"),
            }
            .into());
        }
        Ok(self.root.join(format!("{map_id}.{EXTENSION}")))
    }
}

impl IMapRepository for FileMapRepository {
    fn load_map(&self, map_id: &str) -> KmapResult<Option<MapDocument>> {
        let path = self.path_for(map_id)?;
        if !path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        Ok(Some(MapDocument::from_json(&text)?))
    }

    fn save_map(&self, map_id: &str, document: &MapDocument) -> KmapResult<()> {
        let path = self.path_for(map_id)?;
        let json = document.to_json_pretty()?;
        // Write then rename so a crash never leaves a truncated map.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| io_err(&tmp, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| io_err(&path, e))?;
        tracing::debug!(map = %map_id, path = %path.display(), "saved map document");
        Ok(())
    }

    fn list_maps(&self) -> KmapResult<Vec<String>> {
        let entries = std::fs::read_dir(&self.root).map_err(|e| io_err(&self.root, e))?;
        let mut ids: Vec<String> = entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if path.extension().is_some_and(|ext| ext == EXTENSION) {
                    path.file_stem().map(|s| s.to_string_lossy().into_owned())
                } else {
                    None
                }
            })
            .collect();
        ids.sort();
        Ok(ids)
    }
}
