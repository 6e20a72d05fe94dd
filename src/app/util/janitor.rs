use std::time::Duration;

use tokio::{task, time::interval};

use crate::{
    app::{config::JANITOR_INTERVAL_SECS, util::time::current_time_in_secs},
    results, AppState,
};

pub fn spawn(state: AppState) {
    tracing::debug!("janitor spawned");

    task::spawn(async move {
        let mut interval = interval(Duration::from_secs(JANITOR_INTERVAL_SECS));

        loop {
            interval.tick().await;
            let cutoff = current_time_in_secs().saturating_sub(state.envy.session_ttl_secs());
            cleanup_sessions(&state, cutoff).await;
        }
    });
}

/// Releases result screens idle since `cutoff` and finished jobs nobody is
/// viewing. Pending jobs are left alone; the poll loop bounds them.
pub async fn cleanup_sessions(state: &AppState, cutoff: u64) -> usize {
    let mut ids = state.results.idle_before(cutoff).await;

    for id in state.jobs.finished_before(cutoff).await {
        if !ids.contains(&id) && !state.results.contains(&id).await {
            ids.push(id);
        }
    }

    if !ids.is_empty() {
        tracing::debug!("releasing {} idle session(s)", ids.len());
    }

    for id in &ids {
        results::service::reset(id, state).await;
    }

    ids.len()
}
