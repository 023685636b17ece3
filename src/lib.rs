// src/lib.rs
pub mod auth;
pub mod cli;
pub mod client;
pub mod core;
pub mod error;
pub mod jd_generator;
pub mod policy;
pub mod types;
pub mod web;

pub use client::{ApiClient, Session, SessionState, TokenStore};
pub use crate::core::{ConfigManager, JobBoard};
pub use error::{ApiError, ApiResult};
pub use web::{build_rocket, start_web_server};
