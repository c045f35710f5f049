// src/config/model.rs

use std::str::FromStr;

use serde::Deserialize;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [graph]
/// on_duplicate_vertex = "reject"
/// max_vertices = 10000
///
/// [logging]
/// level = "debug"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDagConfig {
    /// Graph behaviour from `[graph]`.
    #[serde(default)]
    pub graph: GraphSection,

    /// Log settings from `[logging]`.
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawDagConfig>` (see `config::validate`),
/// so holders can rely on the invariants checked there.
#[derive(Debug, Clone)]
pub struct DagConfig {
    pub graph: GraphSection,
    pub logging: LoggingSection,
}

impl DagConfig {
    pub(crate) fn new_unchecked(graph: GraphSection, logging: LoggingSection) -> Self {
        Self { graph, logging }
    }
}

impl Default for DagConfig {
    fn default() -> Self {
        Self::new_unchecked(GraphSection::default(), LoggingSection::default())
    }
}

/// `[graph]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphSection {
    /// What `add_vertex` does when the id is already present.
    #[serde(default)]
    pub on_duplicate_vertex: DuplicateVertexPolicy,

    /// Upper bound on the number of vertices; unbounded when absent.
    #[serde(default)]
    pub max_vertices: Option<usize>,
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSection {
    /// Falls back to `DAGSTORE_LOG`, then `info`, when unset.
    #[serde(default)]
    pub level: Option<LogLevel>,
}

/// Behaviour when a vertex is added under an id that is already present.
///
/// - `Overwrite`: the old vertex and all of its edges are dropped and the
///   new vertex takes its place (default).
/// - `Reject`: the add fails with `DagError::DuplicateVertex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateVertexPolicy {
    #[default]
    Overwrite,
    Reject,
}

impl FromStr for DuplicateVertexPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overwrite" => Ok(DuplicateVertexPolicy::Overwrite),
            "reject" => Ok(DuplicateVertexPolicy::Reject),
            other => Err(format!(
                "invalid on_duplicate_vertex: {other} (expected \"overwrite\" or \"reject\")"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[serde(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl FromStr for LogLevel {
    type Err = String;

    /// Case-insensitive; `warning` is accepted for `warn`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("invalid log level: {other}")),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
