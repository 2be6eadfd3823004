pub mod error;
pub mod linear;
pub mod bst;
pub mod graph;
pub mod layout;
pub mod graph_layout;
pub mod samples;
pub mod session;
pub mod text;
pub mod theme;

// Export the failure taxonomy
pub use error::{VizError, VizResult};

// Export the data structures
pub use linear::{LinearContainer, Stack, Queue, DEFAULT_CAPACITY};
pub use bst::{BinarySearchTree, BstNode, parse_key};
pub use graph::{Graph, Traversal, TraversalKind, Steps};

// Export layout computations
pub use layout::{TreeLayout, LayoutConfig, NodePosition};
pub use graph_layout::{GraphPositions, DEFAULT_SEED};

// Export the command layer shared by both front-ends
pub use session::{Session, Command, CommandError, Outcome, Structure, Snapshot, DEFAULT_SAMPLE_SIZE};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, with_alpha};
