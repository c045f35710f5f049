// src/dag/graph.rs

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, trace, warn};

use crate::config::{DagConfig, DuplicateVertexPolicy, GraphSection};
use crate::dag::vertex::{Vertex, VertexId};
use crate::errors::{DagError, Result};

/// Runtime options for a [`Dag`], usually derived from `[graph]` config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DagOptions {
    pub on_duplicate_vertex: DuplicateVertexPolicy,
    /// `None` means unbounded.
    pub max_vertices: Option<usize>,
}

impl From<&GraphSection> for DagOptions {
    fn from(section: &GraphSection) -> Self {
        Self {
            on_duplicate_vertex: section.on_duplicate_vertex,
            max_vertices: section.max_vertices,
        }
    }
}

/// Vertex storage keyed by id. Only touched with the `Dag` lock held.
#[derive(Debug)]
struct Arena<V> {
    vertices: BTreeMap<VertexId, Vertex<V>>,
}

impl<V> Arena<V> {
    fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
        }
    }

    fn get(&self, id: &str) -> Result<&Vertex<V>> {
        self.vertices
            .get(id)
            .ok_or_else(|| DagError::NotFound(id.to_string()))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Vertex<V>> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| DagError::NotFound(id.to_string()))
    }

    fn size(&self) -> usize {
        self.vertices.values().map(Vertex::out_degree).sum()
    }

    /// Remove a vertex together with every edge touching it.
    ///
    /// Returns the detached vertex and the number of edges removed, or
    /// `None` if the id is not a member.
    fn detach(&mut self, id: &str) -> Option<(Vertex<V>, usize)> {
        let mut vertex = self.vertices.remove(id)?;
        let (parents, children) = vertex.take_adjacency();

        for parent in &parents {
            if let Some(tail) = self.vertices.get_mut(parent) {
                tail.unlink_child(id);
            }
        }
        for child in &children {
            if let Some(head) = self.vertices.get_mut(child) {
                head.unlink_parent(id);
            }
        }

        // A self-loop shows up on both sides but is a single edge.
        let removed_edges = children.len() + parents.iter().filter(|p| p.as_str() != id).count();
        Some((vertex, removed_edges))
    }
}

/// Thread-safe in-memory directed graph keyed by vertex id.
///
/// Every public operation takes the single internal lock for its whole
/// duration, so both sides of an edge always change together and a `Dag`
/// can be shared between threads behind an `Arc` without extra
/// synchronization.
///
/// Despite the name, acyclicity is **not** enforced: `add_edge` performs no
/// cycle check and callers are responsible for keeping the graph acyclic.
///
/// Listings (sinks, sources, ids, the `Display` report) are sorted by id.
#[derive(Debug)]
pub struct Dag<V> {
    options: DagOptions,
    inner: Mutex<Arena<V>>,
}

impl<V> Default for Dag<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Dag<V> {
    /// Empty graph with default options.
    pub fn new() -> Self {
        Self::with_options(DagOptions::default())
    }

    pub fn with_options(options: DagOptions) -> Self {
        Self {
            options,
            inner: Mutex::new(Arena::new()),
        }
    }

    /// Empty graph configured from the `[graph]` section of a validated config.
    pub fn from_config(cfg: &DagConfig) -> Self {
        Self::with_options(DagOptions::from(&cfg.graph))
    }

    pub fn options(&self) -> DagOptions {
        self.options
    }

    fn lock(&self) -> MutexGuard<'_, Arena<V>> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                // Mutations never panic half-way, so the arena is still whole.
                warn!("dag mutex poisoned; recovering");
                poisoned.into_inner()
            }
        }
    }

    /// Insert a vertex, keyed by its id.
    ///
    /// The vertex joins with no edges; any adjacency it carries is dropped.
    /// An id that is already present is handled per
    /// [`DuplicateVertexPolicy`]: `Overwrite` replaces the old vertex and
    /// removes all of its edges, `Reject` fails with
    /// [`DagError::DuplicateVertex`].
    pub fn add_vertex(&self, mut vertex: Vertex<V>) -> Result<()> {
        vertex.take_adjacency();
        let id = vertex.id().to_string();

        let mut arena = self.lock();

        if arena.vertices.contains_key(&id) {
            match self.options.on_duplicate_vertex {
                DuplicateVertexPolicy::Reject => {
                    debug!(vertex = %id, "rejecting duplicate vertex");
                    return Err(DagError::DuplicateVertex(id));
                }
                DuplicateVertexPolicy::Overwrite => {
                    if let Some((_, removed_edges)) = arena.detach(&id) {
                        warn!(vertex = %id, removed_edges, "overwriting existing vertex");
                    }
                }
            }
        } else if let Some(limit) = self.options.max_vertices {
            if arena.vertices.len() >= limit {
                warn!(vertex = %id, limit, "vertex limit reached");
                return Err(DagError::CapacityExceeded { limit });
            }
        }

        arena.vertices.insert(id.clone(), vertex);
        debug!(vertex = %id, order = arena.vertices.len(), "added vertex");

        Ok(())
    }

    /// Remove a vertex and every edge touching it.
    ///
    /// Returns the removed vertex, detached and with its payload intact.
    pub fn delete_vertex(&self, id: &str) -> Result<Vertex<V>> {
        let mut arena = self.lock();

        let (vertex, removed_edges) = arena
            .detach(id)
            .ok_or_else(|| DagError::NotFound(id.to_string()))?;

        debug!(
            vertex = %id,
            removed_edges,
            order = arena.vertices.len(),
            "deleted vertex"
        );

        Ok(vertex)
    }

    /// Add the edge `tail -> head`.
    ///
    /// Both endpoints must be members (checked tail first). No cycle check
    /// is done; a self-loop is accepted.
    pub fn add_edge(&self, tail: &str, head: &str) -> Result<()> {
        let mut arena = self.lock();

        let tail_vertex = arena.get(tail)?;
        arena.get(head)?;

        if tail_vertex.has_child(head) {
            return Err(DagError::DuplicateEdge {
                tail: tail.to_string(),
                head: head.to_string(),
            });
        }

        arena.get_mut(tail)?.link_child(head);
        arena.get_mut(head)?.link_parent(tail);

        debug!(tail = %tail, head = %head, "added edge");
        Ok(())
    }

    /// Remove the edge `tail -> head` from both endpoints.
    ///
    /// Returns `Ok(false)` when both endpoints exist but the edge does not.
    pub fn delete_edge(&self, tail: &str, head: &str) -> Result<bool> {
        let mut arena = self.lock();

        arena.get(tail)?;
        arena.get(head)?;

        let forward = arena.get_mut(tail)?.unlink_child(head);
        let backward = arena.get_mut(head)?.unlink_parent(tail);
        let removed = forward || backward;

        if removed {
            debug!(tail = %tail, head = %head, "deleted edge");
        } else {
            trace!(tail = %tail, head = %head, "edge not present; nothing to delete");
        }

        Ok(removed)
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.lock().vertices.len()
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.lock().size()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().vertices.is_empty()
    }

    /// Ids of vertices without outgoing edges, sorted.
    pub fn sink_vertices(&self) -> Vec<VertexId> {
        self.lock()
            .vertices
            .values()
            .filter(|v| v.is_sink())
            .map(|v| v.id().to_string())
            .collect()
    }

    /// Ids of vertices without incoming edges, sorted.
    pub fn source_vertices(&self) -> Vec<VertexId> {
        self.lock()
            .vertices
            .values()
            .filter(|v| v.is_source())
            .map(|v| v.id().to_string())
            .collect()
    }

    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.lock().vertices.keys().cloned().collect()
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.lock().vertices.contains_key(id)
    }

    pub fn has_edge(&self, tail: &str, head: &str) -> bool {
        self.lock()
            .vertices
            .get(tail)
            .is_some_and(|v| v.has_child(head))
    }

    /// Run `f` against a member vertex while the lock is held.
    ///
    /// `f` must not call back into this `Dag`; the lock is not reentrant.
    pub fn with_vertex<R>(&self, id: &str, f: impl FnOnce(&Vertex<V>) -> R) -> Result<R> {
        let arena = self.lock();
        let vertex = arena.get(id)?;
        Ok(f(vertex))
    }

    pub fn parents_of(&self, id: &str) -> Result<Vec<VertexId>> {
        self.with_vertex(id, |v| v.parents().to_vec())
    }

    pub fn children_of(&self, id: &str) -> Result<Vec<VertexId>> {
        self.with_vertex(id, |v| v.children().to_vec())
    }

    pub fn degree(&self, id: &str) -> Result<usize> {
        self.with_vertex(id, Vertex::degree)
    }

    pub fn in_degree(&self, id: &str) -> Result<usize> {
        self.with_vertex(id, Vertex::in_degree)
    }

    pub fn out_degree(&self, id: &str) -> Result<usize> {
        self.with_vertex(id, Vertex::out_degree)
    }

    /// Placeholder validity check: `true` only for a graph with no vertices.
    ///
    /// This does not inspect edges and does not detect cycles; callers that
    /// need acyclicity have to check it themselves.
    pub fn validate(&self) -> bool {
        let order = self.order();
        trace!(order, "validate");
        order == 0
    }
}

impl<V: Clone> Dag<V> {
    /// Snapshot of a member vertex. Changes to the copy do not reach the graph.
    pub fn vertex(&self, id: &str) -> Option<Vertex<V>> {
        self.lock().vertices.get(id).cloned()
    }
}

/// Multi-line diagnostic report:
///
/// ```text
/// DAG Vertices: 2 - Edges: 1
/// Vertices:
/// ID: 1 - Parents: 0 - Children: 1 - Value: <none> - Parent IDs: [] - Child IDs: ["2"]
/// ID: 2 - Parents: 1 - Children: 0 - Value: <none> - Parent IDs: ["1"] - Child IDs: []
/// ```
impl<V: fmt::Display> fmt::Display for Dag<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arena = self.lock();

        writeln!(
            f,
            "DAG Vertices: {} - Edges: {}",
            arena.vertices.len(),
            arena.size()
        )?;
        writeln!(f, "Vertices:")?;
        for vertex in arena.vertices.values() {
            writeln!(
                f,
                "{vertex} - Parent IDs: {:?} - Child IDs: {:?}",
                vertex.parents(),
                vertex.children()
            )?;
        }

        Ok(())
    }
}
