// src/dag/mod.rs

//! Graph container.
//!
//! - [`vertex`] holds a single node: id, optional payload, adjacency lists.
//! - [`graph`] holds the lock-guarded vertex arena and every operation that
//!   mutates or queries it.

pub mod graph;
pub mod vertex;

pub use graph::{Dag, DagOptions};
pub use vertex::{Vertex, VertexId};
