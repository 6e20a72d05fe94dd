use std::time::Duration;

use serde::Deserialize;

use super::config::{
    DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_POLL_INTERVAL_MS, DEFAULT_PORT,
    DEFAULT_SESSION_TTL_SECS,
};

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: String,
    pub port: Option<u16>,

    pub backend_url: String,

    pub max_upload_bytes: Option<usize>,

    pub poll_interval_ms: Option<u64>,
    pub max_poll_attempts: Option<u32>,

    pub mock_transfer: Option<bool>,

    pub session_ttl_secs: Option<u64>,
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS))
    }

    pub fn max_poll_attempts(&self) -> u32 {
        self.max_poll_attempts.unwrap_or(DEFAULT_MAX_POLL_ATTEMPTS)
    }

    pub fn mock_transfer(&self) -> bool {
        self.mock_transfer.unwrap_or(false)
    }

    /// How long a finished job or an untouched result screen is kept around.
    pub fn session_ttl_secs(&self) -> u64 {
        self.session_ttl_secs.unwrap_or(DEFAULT_SESSION_TTL_SECS)
    }
}
