//! Undirected graph with breadth-first and depth-first traversal.
//!
//! Nodes are string ids kept in insertion order. Adjacency lists are kept in
//! edge-insertion order, which is the neighbor order both traversals follow.
//! This makes every traversal deterministic for a given sequence of calls.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// Undirected graph without parallel edges. Self-loops are allowed.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Node ids by dense index, in insertion order
    ids: Vec<String>,
    /// Node id -> dense index
    index: HashMap<String, usize>,
    /// Per-node neighbor indices, in edge-insertion order
    adjacency: Vec<Vec<usize>>,
    /// Edges as index pairs, in insertion order
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.ids.iter().map(String::as_str)
    }

    /// Edges in insertion order, each reported once with endpoints as added.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.edges
            .iter()
            .map(|&(u, v)| (self.ids[u].as_str(), self.ids[v].as_str()))
    }

    /// Neighbors of `id` in edge-insertion order, or `None` for an unknown id.
    pub fn neighbors(&self, id: &str) -> Option<Vec<&str>> {
        let &i = self.index.get(id)?;
        Some(self.adjacency[i].iter().map(|&n| self.ids[n].as_str()).collect())
    }

    /// Adds an isolated node.
    ///
    /// Fails with `EmptyInput` for a blank id and `DuplicateNode` when present.
    pub fn add_node(&mut self, id: impl Into<String>) -> VizResult<()> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(VizError::EmptyInput { what: "node name" });
        }
        if self.index.contains_key(&id) {
            return Err(VizError::DuplicateNode { id });
        }
        tracing::debug!(%id, "graph add node");
        self.index.insert(id.clone(), self.ids.len());
        self.ids.push(id);
        self.adjacency.push(Vec::new());
        Ok(())
    }

    /// Adds an undirected edge between two existing nodes.
    ///
    /// Returns `Ok(false)` if the edge was already present. Fails with
    /// `MissingEndpoint` naming the first absent endpoint.
    pub fn add_edge(&mut self, u: &str, v: &str) -> VizResult<bool> {
        if u.trim().is_empty() || v.trim().is_empty() {
            return Err(VizError::EmptyInput { what: "pair of nodes for the edge" });
        }
        let a = self.index_of(u).ok_or_else(|| VizError::MissingEndpoint { id: u.to_string() })?;
        let b = self.index_of(v).ok_or_else(|| VizError::MissingEndpoint { id: v.to_string() })?;

        if self.adjacency[a].contains(&b) {
            return Ok(false);
        }

        tracing::debug!(u, v, "graph add edge");
        self.adjacency[a].push(b);
        if a != b {
            self.adjacency[b].push(a);
        }
        self.edges.push((a, b));
        Ok(true)
    }

    /// Breadth-first order from `source` over its connected component.
    pub fn bfs(&self, source: &str) -> VizResult<Traversal> {
        let start = self.source_index(source)?;
        let mut visited = vec![false; self.ids.len()];
        let mut order = Vec::new();
        let mut frontier = VecDeque::from([start]);
        visited[start] = true;

        while let Some(node) = frontier.pop_front() {
            order.push(self.ids[node].clone());
            for &next in &self.adjacency[node] {
                if !visited[next] {
                    visited[next] = true;
                    frontier.push_back(next);
                }
            }
        }

        Ok(Traversal::new(TraversalKind::Bfs, source, order))
    }

    /// Depth-first preorder from `source` over its connected component.
    ///
    /// Equivalent to the recursive formulation: a node is emitted when first
    /// reached and its neighbors are descended into one at a time, in order.
    pub fn dfs(&self, source: &str) -> VizResult<Traversal> {
        let start = self.source_index(source)?;
        let mut visited = vec![false; self.ids.len()];
        let mut order = vec![self.ids[start].clone()];
        // (node, index of the next neighbor to try)
        let mut stack = vec![(start, 0usize)];
        visited[start] = true;

        while let Some(top) = stack.last_mut() {
            let (node, cursor) = *top;
            match self.adjacency[node].get(cursor) {
                Some(&next) => {
                    top.1 += 1;
                    if !visited[next] {
                        visited[next] = true;
                        order.push(self.ids[next].clone());
                        stack.push((next, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        Ok(Traversal::new(TraversalKind::Dfs, source, order))
    }

    /// Runs the traversal of the given kind.
    pub fn traverse(&self, kind: TraversalKind, source: &str) -> VizResult<Traversal> {
        match kind {
            TraversalKind::Bfs => self.bfs(source),
            TraversalKind::Dfs => self.dfs(source),
        }
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.index.clear();
        self.adjacency.clear();
        self.edges.clear();
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    fn source_index(&self, source: &str) -> VizResult<usize> {
        self.index_of(source).ok_or_else(|| VizError::UnknownSource {
            id: source.to_string(),
        })
    }
}

/// Which traversal produced a [`Traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraversalKind {
    Bfs,
    Dfs,
}

impl TraversalKind {
    pub fn label(&self) -> &'static str {
        match self {
            TraversalKind::Bfs => "BFS",
            TraversalKind::Dfs => "DFS",
        }
    }
}

impl std::fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Finished traversal: the visit order from a source node.
///
/// The order is computed up front. [`Traversal::steps`] replays it as a
/// sequence of visited-so-far snapshots, which a presentation layer can walk
/// at its own pace and restart any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traversal {
    kind: TraversalKind,
    source: String,
    order: Vec<String>,
}

impl Traversal {
    fn new(kind: TraversalKind, source: &str, order: Vec<String>) -> Self {
        Self {
            kind,
            source: source.to_string(),
            order,
        }
    }

    pub fn kind(&self) -> TraversalKind {
        self.kind
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Visit order, each reachable node exactly once.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Number of visited nodes, which is also the number of steps.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Zero-based position of `id` in the visit order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.order.iter().position(|n| n == id)
    }

    /// Nodes visited after `step + 1` steps, or `None` past the end.
    pub fn step(&self, step: usize) -> Option<&[String]> {
        (step < self.order.len()).then(|| &self.order[..=step])
    }

    /// Fresh iterator over visited-so-far snapshots.
    pub fn steps(&self) -> Steps<'_> {
        Steps {
            order: &self.order,
            next: 0,
        }
    }
}

/// Iterator returned by [`Traversal::steps`].
#[derive(Debug, Clone)]
pub struct Steps<'a> {
    order: &'a [String],
    next: usize,
}

impl<'a> Iterator for Steps<'a> {
    type Item = &'a [String];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.order.len() {
            return None;
        }
        self.next += 1;
        Some(&self.order[..self.next])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.order.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Steps<'_> {}
