//! Text field buffers for the control panels.
//!
//! Buffers are per view so switching views keeps whatever the user typed.

/// Contents of the text inputs of every view.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Value to push onto the stack
    pub stack_value: String,
    /// Value to enqueue
    pub queue_value: String,
    /// Integer text to insert into the tree
    pub tree_key: String,
    /// Name of a node to add
    pub graph_node: String,
    /// First endpoint of an edge to add
    pub edge_from: String,
    /// Second endpoint of an edge to add
    pub edge_to: String,
    /// Node selected as traversal source
    pub start_node: Option<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the start node valid for the given node list.
    ///
    /// Falls back to the first node, like a select box defaulting to index 0.
    pub fn sync_start_node<'a>(&mut self, mut nodes: impl Iterator<Item = &'a str>) {
        let first = nodes.next();
        let still_present = match &self.start_node {
            Some(current) => first == Some(current.as_str()) || nodes.any(|n| n == current),
            None => false,
        };
        if !still_present {
            self.start_node = first.map(str::to_string);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_node_defaults_to_first() {
        let mut input = InputState::new();
        input.sync_start_node(["A", "B"].into_iter());
        assert_eq!(input.start_node.as_deref(), Some("A"));
    }

    #[test]
    fn test_start_node_kept_while_present() {
        let mut input = InputState::new();
        input.start_node = Some("B".to_string());
        input.sync_start_node(["A", "B"].into_iter());
        assert_eq!(input.start_node.as_deref(), Some("B"));

        input.sync_start_node(["A"].into_iter());
        assert_eq!(input.start_node.as_deref(), Some("A"));

        input.sync_start_node(std::iter::empty());
        assert_eq!(input.start_node, None);
    }
}
