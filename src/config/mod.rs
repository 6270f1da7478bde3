//! Configuration module for daybudget
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - Session settings loading and validation

pub mod paths;
pub mod settings;

pub use paths::ConfigPaths;
pub use settings::SessionConfig;
