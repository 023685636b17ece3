// src/core/mod.rs
//! Configuration and the demo board shared by both API modes

pub mod board;
pub mod config_manager;
pub mod dataset;

pub use board::JobBoard;
pub use config_manager::ConfigManager;
pub use dataset::Dataset;
