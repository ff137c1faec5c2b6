use crate::errors::KmapResult;
use crate::models::MapDocument;

/// Storage for authored map documents.
pub trait IMapRepository: Send + Sync {
    fn load_map(&self, map_id: &str) -> KmapResult<Option<MapDocument>>;
    fn save_map(&self, map_id: &str, document: &MapDocument) -> KmapResult<()>;
    fn list_maps(&self) -> KmapResult<Vec<String>>;
}
