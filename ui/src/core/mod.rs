pub mod config;
pub mod format;
pub mod platform;
pub mod session;
pub mod timing;
