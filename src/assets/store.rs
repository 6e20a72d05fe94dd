use std::collections::HashMap;

use bytes::Bytes;
use mime::Mime;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::asset::{Asset, AssetHandle};

/// Transient assets for the running session. Nothing here outlives the process.
#[derive(Debug, Default)]
pub struct AssetStore {
    assets: RwLock<HashMap<String, Asset>>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, mime_type: Mime, data: Bytes) -> AssetHandle {
        let id = Uuid::new_v4().to_string();
        let asset = Asset {
            id: id.to_string(),
            mime_type,
            data,
        };

        self.assets.write().await.insert(id.to_string(), asset);

        AssetHandle { id }
    }

    pub async fn get(&self, id: &str) -> Option<Asset> {
        self.assets.read().await.get(id).cloned()
    }

    pub async fn remove(&self, id: &str) -> bool {
        self.assets.write().await.remove(id).is_some()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.assets.read().await.len()
    }
}
