pub const APP_NAME: &str = "PicoArt";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 90;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 1800;
pub const JANITOR_INTERVAL_SECS: u64 = 60;

pub const MAX_IMAGE_WIDTH: u32 = 1024;
pub const JPEG_QUALITY: u8 = 95;
