pub mod matmath;
pub mod error;
pub mod config;
pub mod signal;
pub mod spin;
pub mod frame;
pub mod playback;
