//! Data models and configuration.

pub mod config;
pub mod course;
pub mod embedded;
