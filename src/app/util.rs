pub mod cancel;
pub mod html;
pub mod janitor;
pub mod multipart;
pub mod reqwest;
pub mod time;
