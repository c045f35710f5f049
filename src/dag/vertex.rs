// src/dag/vertex.rs

use std::fmt;

/// Caller-chosen vertex key. Any string is accepted, including `""`.
pub type VertexId = String;

/// A node in a [`Dag`](crate::dag::Dag).
///
/// Adjacency is stored as vertex ids rather than references, so a vertex
/// never owns its neighbours. Both lists keep insertion order and never hold
/// the same id twice.
///
/// A vertex is created detached and only gains edges once it is owned by a
/// `Dag`; the adjacency setters are crate-private for that reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<V> {
    id: VertexId,
    value: Option<V>,
    /// Vertices with an edge pointing into this one.
    parents: Vec<VertexId>,
    /// Vertices this one points to.
    children: Vec<VertexId>,
}

impl<V> Vertex<V> {
    /// Create a detached vertex with no edges.
    pub fn new(id: impl Into<VertexId>, value: Option<V>) -> Self {
        Self {
            id: id.into(),
            value,
            parents: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_value(id: impl Into<VertexId>, value: V) -> Self {
        Self::new(id, Some(value))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.value.as_mut()
    }

    pub fn into_value(self) -> Option<V> {
        self.value
    }

    pub fn parents(&self) -> &[VertexId] {
        &self.parents
    }

    pub fn children(&self) -> &[VertexId] {
        &self.children
    }

    /// Total number of incident edges (`in_degree + out_degree`).
    pub fn degree(&self) -> usize {
        self.in_degree() + self.out_degree()
    }

    pub fn in_degree(&self) -> usize {
        self.parents.len()
    }

    pub fn out_degree(&self) -> usize {
        self.children.len()
    }

    /// No outgoing edges.
    pub fn is_sink(&self) -> bool {
        self.children.is_empty()
    }

    /// No incoming edges.
    pub fn is_source(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn has_child(&self, id: &str) -> bool {
        self.children.iter().any(|c| c == id)
    }

    pub fn has_parent(&self, id: &str) -> bool {
        self.parents.iter().any(|p| p == id)
    }

    /// Returns `false` if `id` was already a child.
    pub(crate) fn link_child(&mut self, id: &str) -> bool {
        if self.has_child(id) {
            return false;
        }
        self.children.push(id.to_string());
        true
    }

    /// Returns `false` if `id` was already a parent.
    pub(crate) fn link_parent(&mut self, id: &str) -> bool {
        if self.has_parent(id) {
            return false;
        }
        self.parents.push(id.to_string());
        true
    }

    pub(crate) fn unlink_child(&mut self, id: &str) -> bool {
        remove_id(&mut self.children, id)
    }

    pub(crate) fn unlink_parent(&mut self, id: &str) -> bool {
        remove_id(&mut self.parents, id)
    }

    /// Drop all adjacency, returning `(parents, children)`.
    pub(crate) fn take_adjacency(&mut self) -> (Vec<VertexId>, Vec<VertexId>) {
        (
            std::mem::take(&mut self.parents),
            std::mem::take(&mut self.children),
        )
    }
}

/// Removes `id` while keeping the order of the remaining entries.
fn remove_id(ids: &mut Vec<VertexId>, id: &str) -> bool {
    match ids.iter().position(|x| x == id) {
        Some(pos) => {
            ids.remove(pos);
            true
        }
        None => false,
    }
}

/// Single diagnostic line, e.g.
/// `ID: 1 - Parents: 0 - Children: 2 - Value: <none>`.
impl<V: fmt::Display> fmt::Display for Vertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} - Parents: {} - Children: {} - Value: ",
            self.id,
            self.in_degree(),
            self.out_degree()
        )?;
        match &self.value {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("<none>"),
        }
    }
}
