// src/config/validate.rs

use crate::config::model::{DagConfig, RawDagConfig};
use crate::errors::{DagError, Result};

impl TryFrom<RawDagConfig> for DagConfig {
    type Error = DagError;

    fn try_from(raw: RawDagConfig) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(DagConfig::new_unchecked(raw.graph, raw.logging))
    }
}

fn validate_raw_config(cfg: &RawDagConfig) -> Result<()> {
    validate_graph_section(cfg)?;
    Ok(())
}

fn validate_graph_section(cfg: &RawDagConfig) -> Result<()> {
    // on_duplicate_vertex is strongly typed and checked during
    // deserialization already.
    if cfg.graph.max_vertices == Some(0) {
        return Err(DagError::ConfigError(
            "[graph].max_vertices must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}
