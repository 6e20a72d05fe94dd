pub mod transfer_job;
pub mod transfer_outcome;
pub mod transfer_progress;
