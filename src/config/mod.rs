// src/config/mod.rs

//! Configuration loading and validation for dagstore.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk or a string (`loader.rs`).
//! - Validate limits before a config can be used (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, parse_str};
pub use model::{
    DagConfig, DuplicateVertexPolicy, GraphSection, LogLevel, LoggingSection, RawDagConfig,
};
