use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::app::util::time::current_time_in_secs;

use crate::education::models::education_content::EducationContent;

use super::models::result_view::ResultView;

#[derive(Debug, Default)]
pub struct ResultStore {
    views: RwLock<HashMap<String, ResultView>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if a view with the same id is already mounted.
    pub async fn insert_if_absent(&self, view: ResultView) -> bool {
        let mut views = self.views.write().await;

        if views.contains_key(&view.id) {
            return false;
        }

        views.insert(view.id.to_string(), view);
        true
    }

    /// Reading a view counts as the user still looking at it.
    pub async fn get(&self, id: &str) -> Option<ResultView> {
        let mut views = self.views.write().await;
        let view = views.get_mut(id)?;
        view.last_seen = current_time_in_secs();

        Some(view.clone())
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.views.read().await.contains_key(id)
    }

    /// Ids of views nobody has looked at since `cutoff` (epoch seconds).
    pub async fn idle_before(&self, cutoff: u64) -> Vec<String> {
        self.views
            .read()
            .await
            .values()
            .filter(|view| view.last_seen < cutoff)
            .map(|view| view.id.to_string())
            .collect()
    }

    pub async fn toggle_info(&self, id: &str) -> Option<bool> {
        self.views
            .write()
            .await
            .get_mut(id)
            .map(|view| view.toggle_info())
    }

    pub async fn set_education(&self, id: &str, content: EducationContent) -> bool {
        match self.views.write().await.get_mut(id) {
            Some(view) => view.resolve_education(content),
            None => false,
        }
    }

    pub async fn remove(&self, id: &str) -> Option<ResultView> {
        self.views.write().await.remove(id)
    }
}
