// src/lib.rs

//! In-memory directed graph container with a thread-safe mutation protocol.
//!
//! A [`Dag`] owns a set of [`Vertex`] values keyed by id. Edges live only as
//! adjacency entries on their two endpoints and every mutation keeps both
//! sides in step under a single lock. Deleting a vertex also deletes every
//! edge touching it.
//!
//! ```
//! use dagstore::{Dag, Vertex};
//!
//! let dag: Dag<&str> = Dag::new();
//! dag.add_vertex(Vertex::new("1", None))?;
//! dag.add_vertex(Vertex::with_value("2", "two"))?;
//! dag.add_edge("1", "2")?;
//!
//! assert_eq!(dag.order(), 2);
//! assert_eq!(dag.size(), 1);
//! assert_eq!(dag.sink_vertices(), vec!["2".to_string()]);
//! # Ok::<(), dagstore::DagError>(())
//! ```
//!
//! No topological ordering or cycle detection is provided; callers layer
//! their own traversal on top.

pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;

pub use crate::config::{DagConfig, DuplicateVertexPolicy};
pub use crate::dag::{Dag, DagOptions, Vertex, VertexId};
pub use crate::errors::{DagError, Result};
