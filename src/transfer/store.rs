use std::collections::HashMap;

use tokio::sync::RwLock;

use super::models::{
    transfer_job::TransferJob, transfer_outcome::TransferOutcome,
    transfer_progress::TransferProgress,
};

#[derive(Debug, Default)]
pub struct JobStore {
    jobs: RwLock<HashMap<String, TransferJob>>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, job: TransferJob) {
        self.jobs.write().await.insert(job.id.to_string(), job);
    }

    pub async fn get(&self, id: &str) -> Option<TransferJob> {
        self.jobs.read().await.get(id).cloned()
    }

    pub async fn apply_progress(&self, id: &str, event: &TransferProgress) {
        if let Some(job) = self.jobs.write().await.get_mut(id) {
            job.apply_progress(event);
        }
    }

    /// Hands the outcome back when there is no pending job left to take it.
    pub async fn complete(&self, id: &str, outcome: TransferOutcome) -> Result<(), TransferOutcome> {
        let mut jobs = self.jobs.write().await;

        match jobs.get_mut(id) {
            Some(job) if !job.status.is_terminal() => {
                job.complete(outcome);
                Ok(())
            }
            _ => Err(outcome),
        }
    }

    /// Ids of finished jobs last touched before `cutoff` (epoch seconds).
    pub async fn finished_before(&self, cutoff: u64) -> Vec<String> {
        self.jobs
            .read()
            .await
            .values()
            .filter(|job| job.status.is_terminal() && job.updated_at < cutoff)
            .map(|job| job.id.to_string())
            .collect()
    }

    pub async fn remove(&self, id: &str) -> Option<TransferJob> {
        self.jobs.write().await.remove(id)
    }
}
