//! Presentation-neutral command layer.
//!
//! A [`Session`] owns one instance of every structure and applies [`Command`]s
//! to them. Both front-ends go through it, so input validation and the mapping
//! from user intent to core calls live in one place. Commands can also be
//! parsed from a line of text, which is how the REPL and scripts drive it.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bst::{self, BinarySearchTree};
use crate::error::VizResult;
use crate::graph::{Graph, Traversal, TraversalKind};
use crate::linear::{LinearContainer, Queue, Stack, DEFAULT_CAPACITY};
use crate::samples;

/// Number of keys or nodes generated by a sample command without a count.
pub const DEFAULT_SAMPLE_SIZE: usize = 7;

/// The four structures a session owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Structure {
    #[default]
    Stack,
    Queue,
    Tree,
    Graph,
}

impl Structure {
    pub const ALL: [Structure; 4] = [
        Structure::Stack,
        Structure::Queue,
        Structure::Tree,
        Structure::Graph,
    ];

    /// Human-readable name, as shown in menus.
    pub fn title(&self) -> &'static str {
        match self {
            Structure::Stack => "Stack",
            Structure::Queue => "Queue",
            Structure::Tree => "Binary Search Tree",
            Structure::Graph => "Graph",
        }
    }

    fn keyword(&self) -> &'static str {
        match self {
            Structure::Stack => "stack",
            Structure::Queue => "queue",
            Structure::Tree => "tree",
            Structure::Graph => "graph",
        }
    }

    /// Parses the command keyword for a structure.
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.keyword() == word.to_ascii_lowercase())
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A single user intent. Values are carried as raw text and validated by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Push(String),
    Pop,
    Enqueue(String),
    Dequeue,
    Insert(String),
    AddNode(String),
    AddEdge(String, String),
    Traverse(TraversalKind, String),
    /// Forget the last traversal without touching the graph
    ResetTraversal,
    /// Replace a structure's contents with seeded sample data
    Sample(Structure, usize),
    Clear(Structure),
}

/// Reasons a line of text is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown structure '{0}' (expected stack, queue, tree or graph)")]
    UnknownStructure(String),

    #[error("unknown {structure} command '{verb}'")]
    UnknownVerb { structure: &'static str, verb: String },

    #[error("missing {0} command")]
    MissingVerb(&'static str),

    #[error("'{0}' is not a valid sample size")]
    InvalidCount(String),

    #[error("empty command")]
    Empty,
}

impl Command {
    /// Parses `<structure> <verb> [arguments]`.
    ///
    /// Missing value arguments parse as empty text so the core can report
    /// them as `EmptyInput`, the same way a blank text field would.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(CommandError::Empty)?;
        let structure =
            Structure::from_keyword(head).ok_or_else(|| CommandError::UnknownStructure(head.to_string()))?;
        let verb = words
            .next()
            .ok_or(CommandError::MissingVerb(structure.keyword()))?
            .to_ascii_lowercase();
        let args: Vec<&str> = words.collect();
        let rest = args.join(" ");
        let first = args.first().copied().unwrap_or_default().to_string();
        let second = args.get(1).copied().unwrap_or_default().to_string();

        let command = match (structure, verb.as_str()) {
            (Structure::Stack, "push") => Command::Push(rest),
            (Structure::Stack, "pop") => Command::Pop,
            (Structure::Queue, "enqueue") => Command::Enqueue(rest),
            (Structure::Queue, "dequeue") => Command::Dequeue,
            (Structure::Tree, "insert") => Command::Insert(rest),
            (Structure::Graph, "node") => Command::AddNode(first),
            (Structure::Graph, "edge") => Command::AddEdge(first, second),
            (Structure::Graph, "bfs") => Command::Traverse(TraversalKind::Bfs, first),
            (Structure::Graph, "dfs") => Command::Traverse(TraversalKind::Dfs, first),
            (Structure::Graph, "reset") => Command::ResetTraversal,
            (_, "sample") => {
                let count = match args.first() {
                    None => DEFAULT_SAMPLE_SIZE,
                    Some(n) => n
                        .parse()
                        .map_err(|_| CommandError::InvalidCount(n.to_string()))?,
                };
                Command::Sample(structure, count)
            }
            (_, "clear") => Command::Clear(structure),
            _ => {
                return Err(CommandError::UnknownVerb {
                    structure: structure.keyword(),
                    verb,
                })
            }
        };
        Ok(command)
    }
}

/// What a successful command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Stored { structure: Structure, value: String },
    Removed { structure: Structure, value: String },
    EdgeAdded { u: String, v: String, is_new: bool },
    Traversed(Traversal),
    TraversalReset,
    Sampled { structure: Structure, size: usize },
    Cleared(Structure),
}

impl Outcome {
    /// Structure the outcome concerns.
    pub fn structure(&self) -> Structure {
        match self {
            Outcome::Stored { structure, .. }
            | Outcome::Removed { structure, .. }
            | Outcome::Sampled { structure, .. }
            | Outcome::Cleared(structure) => *structure,
            Outcome::EdgeAdded { .. } | Outcome::Traversed(_) | Outcome::TraversalReset => {
                Structure::Graph
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Stored { structure: Structure::Stack, value } => write!(f, "Pushed: {value}"),
            Outcome::Stored { structure: Structure::Queue, value } => write!(f, "Enqueued: {value}"),
            Outcome::Stored { structure: Structure::Tree, value } => write!(f, "Inserted: {value}"),
            Outcome::Stored { value, .. } => write!(f, "Added node: {value}"),
            Outcome::Removed { structure: Structure::Queue, value } => write!(f, "Dequeued: {value}"),
            Outcome::Removed { value, .. } => write!(f, "Popped: {value}"),
            Outcome::EdgeAdded { u, v, is_new: true } => write!(f, "Added edge: {u} - {v}"),
            Outcome::EdgeAdded { u, v, is_new: false } => write!(f, "Edge {u} - {v} already exists"),
            Outcome::Traversed(t) => write!(
                f,
                "{} from {}: {}",
                t.kind(),
                t.source(),
                crate::text::format_order(t.order())
            ),
            Outcome::TraversalReset => f.write_str("Traversal result cleared"),
            Outcome::Sampled { structure, size } => write!(f, "Generated sample {structure} ({size} nodes)"),
            Outcome::Cleared(structure) => write!(f, "Cleared {structure}"),
        }
    }
}

/// Owns one of each structure plus the most recent traversal.
#[derive(Debug, Clone)]
pub struct Session {
    stack: Stack,
    queue: Queue,
    tree: BinarySearchTree,
    graph: Graph,
    traversal: Option<Traversal>,
    seed: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, crate::graph_layout::DEFAULT_SEED)
    }
}

impl Session {
    /// Creates a session with empty structures.
    ///
    /// `capacity` bounds both containers; `seed` drives sample generation.
    pub fn new(capacity: usize, seed: u64) -> Self {
        Self {
            stack: Stack::new(capacity),
            queue: Queue::new(capacity),
            tree: BinarySearchTree::new(),
            graph: Graph::new(),
            traversal: None,
            seed,
        }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn tree(&self) -> &BinarySearchTree {
        &self.tree
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Last traversal, cleared whenever the graph changes.
    pub fn traversal(&self) -> Option<&Traversal> {
        self.traversal.as_ref()
    }

    /// Applies a new capacity to both containers.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.stack.set_capacity(capacity);
        self.queue.set_capacity(capacity);
    }

    /// Applies a command. On error nothing has changed.
    pub fn execute(&mut self, command: Command) -> VizResult<Outcome> {
        let result = self.apply(command);
        match &result {
            Ok(outcome) => tracing::debug!(%outcome, "command applied"),
            Err(err) => tracing::debug!(kind = err.kind(), %err, "command rejected"),
        }
        result
    }

    fn apply(&mut self, command: Command) -> VizResult<Outcome> {
        match command {
            Command::Push(value) => {
                self.stack.push(value.clone())?;
                Ok(Outcome::Stored { structure: Structure::Stack, value })
            }
            Command::Pop => Ok(Outcome::Removed {
                structure: Structure::Stack,
                value: self.stack.pop()?,
            }),
            Command::Enqueue(value) => {
                self.queue.enqueue(value.clone())?;
                Ok(Outcome::Stored { structure: Structure::Queue, value })
            }
            Command::Dequeue => Ok(Outcome::Removed {
                structure: Structure::Queue,
                value: self.queue.dequeue()?,
            }),
            Command::Insert(text) => {
                let key = bst::parse_key(&text)?;
                self.tree.insert(key)?;
                Ok(Outcome::Stored {
                    structure: Structure::Tree,
                    value: key.to_string(),
                })
            }
            Command::AddNode(id) => {
                self.graph.add_node(id.clone())?;
                self.traversal = None;
                Ok(Outcome::Stored { structure: Structure::Graph, value: id })
            }
            Command::AddEdge(u, v) => {
                let is_new = self.graph.add_edge(&u, &v)?;
                self.traversal = None;
                Ok(Outcome::EdgeAdded { u, v, is_new })
            }
            Command::Traverse(kind, source) => {
                let traversal = self.graph.traverse(kind, &source)?;
                self.traversal = Some(traversal.clone());
                Ok(Outcome::Traversed(traversal))
            }
            Command::ResetTraversal => {
                self.traversal = None;
                Ok(Outcome::TraversalReset)
            }
            Command::Sample(structure, count) => Ok(self.sample(structure, count)),
            Command::Clear(structure) => {
                match structure {
                    Structure::Stack => self.stack.clear(),
                    Structure::Queue => self.queue.clear(),
                    Structure::Tree => self.tree.clear(),
                    Structure::Graph => {
                        self.graph.clear();
                        self.traversal = None;
                    }
                }
                Ok(Outcome::Cleared(structure))
            }
        }
    }

    fn sample(&mut self, structure: Structure, count: usize) -> Outcome {
        let seed = self.seed;
        self.seed = self.seed.wrapping_add(1);
        let size = match structure {
            Structure::Tree => {
                self.tree = samples::random_tree(seed, count);
                self.tree.len()
            }
            Structure::Graph => {
                self.graph = samples::random_graph(seed, count, count / 2);
                self.traversal = None;
                self.graph.node_count()
            }
            Structure::Stack => {
                self.stack.clear();
                for key in samples::random_keys(seed, count.min(self.stack.capacity())) {
                    let _ = self.stack.push(key.to_string());
                }
                self.stack.len()
            }
            Structure::Queue => {
                self.queue.clear();
                for key in samples::random_keys(seed, count.min(self.queue.capacity())) {
                    let _ = self.queue.enqueue(key.to_string());
                }
                self.queue.len()
            }
        };
        Outcome::Sampled { structure, size }
    }

    /// Serializable view of every structure.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            stack: ContainerSnapshot::of(&self.stack),
            queue: ContainerSnapshot::of(&self.queue),
            tree: TreeSnapshot {
                size: self.tree.len(),
                height: self.tree.height(),
                in_order: self.tree.in_order(),
                pre_order: self.tree.pre_order(),
                edges: self.tree.edges(),
            },
            graph: GraphSnapshot {
                nodes: self.graph.nodes().map(str::to_string).collect(),
                edges: self
                    .graph
                    .edges()
                    .map(|(u, v)| (u.to_string(), v.to_string()))
                    .collect(),
                traversal: self.traversal.clone(),
            },
        }
    }
}

/// Snapshot of a stack or queue, items listed from the removal end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSnapshot {
    pub items: Vec<String>,
    pub capacity: usize,
}

impl ContainerSnapshot {
    fn of(container: &dyn LinearContainer) -> Self {
        Self {
            items: container.items().into_iter().map(str::to_string).collect(),
            capacity: container.capacity(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    pub size: usize,
    pub height: usize,
    pub in_order: Vec<i64>,
    pub pre_order: Vec<i64>,
    pub edges: Vec<(i64, i64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
    pub traversal: Option<Traversal>,
}

/// State of all four structures at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub stack: ContainerSnapshot,
    pub queue: ContainerSnapshot,
    pub tree: TreeSnapshot,
    pub graph: GraphSnapshot,
}
