#![allow(dead_code)]

use dagstore::config::{DagConfig, DuplicateVertexPolicy, LogLevel, RawDagConfig};
use dagstore::{Dag, DagOptions, Vertex};

/// Builder for a populated `Dag<String>` to simplify test setup.
///
/// Vertices are added in declaration order, then edges.
pub struct DagBuilder {
    options: DagOptions,
    vertices: Vec<(String, Option<String>)>,
    edges: Vec<(String, String)>,
}

impl DagBuilder {
    pub fn new() -> Self {
        Self {
            options: DagOptions::default(),
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: DagOptions) -> Self {
        self.options = options;
        self
    }

    pub fn vertex(mut self, id: &str) -> Self {
        self.vertices.push((id.to_string(), None));
        self
    }

    pub fn vertex_with_value(mut self, id: &str, value: &str) -> Self {
        self.vertices.push((id.to_string(), Some(value.to_string())));
        self
    }

    pub fn vertices(mut self, ids: &[&str]) -> Self {
        for id in ids {
            self = self.vertex(id);
        }
        self
    }

    pub fn edge(mut self, tail: &str, head: &str) -> Self {
        self.edges.push((tail.to_string(), head.to_string()));
        self
    }

    /// Adds any missing vertices and the edges `ids[0] -> ids[1] -> ...`.
    pub fn chain(mut self, ids: &[&str]) -> Self {
        for id in ids {
            if !self.vertices.iter().any(|(existing, _)| existing == id) {
                self = self.vertex(id);
            }
        }
        for pair in ids.windows(2) {
            self = self.edge(pair[0], pair[1]);
        }
        self
    }

    pub fn build(self) -> Dag<String> {
        let dag = Dag::with_options(self.options);
        for (id, value) in self.vertices {
            dag.add_vertex(Vertex::new(id, value))
                .expect("Failed to add vertex from builder");
        }
        for (tail, head) in self.edges {
            dag.add_edge(&tail, &head)
                .expect("Failed to add edge from builder");
        }
        dag
    }
}

impl Default for DagBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `DagConfig`.
pub struct ConfigBuilder {
    config: RawDagConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RawDagConfig::default(),
        }
    }

    pub fn on_duplicate_vertex(mut self, policy: DuplicateVertexPolicy) -> Self {
        self.config.graph.on_duplicate_vertex = policy;
        self
    }

    pub fn max_vertices(mut self, limit: usize) -> Self {
        self.config.graph.max_vertices = Some(limit);
        self
    }

    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = Some(level);
        self
    }

    pub fn build_raw(self) -> RawDagConfig {
        self.config
    }

    pub fn build(self) -> DagConfig {
        DagConfig::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
