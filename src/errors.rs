// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::dag::VertexId;

#[derive(Error, Debug)]
pub enum DagError {
    #[error("vertex with the id {0:?} not found")]
    NotFound(VertexId),

    #[error("edge ({tail:?},{head:?}) already exists")]
    DuplicateEdge { tail: VertexId, head: VertexId },

    #[error("vertex with the id {0:?} already exists")]
    DuplicateVertex(VertexId),

    #[error("vertex limit of {limit} reached")]
    CapacityExceeded { limit: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DagError>;
