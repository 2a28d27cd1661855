pub mod config;
pub mod effect;
pub mod playback;
pub mod snapshot;
pub mod timeline;
