use dsviz::{BinarySearchTree, Graph, LinearContainer, Queue, Stack, TraversalKind, VizError};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet, VecDeque};

#[derive(Debug, Clone)]
enum ContainerOp {
    Insert(String),
    Remove,
    Clear,
}

fn container_op() -> impl Strategy<Value = ContainerOp> {
    prop_oneof![
        4 => "[a-z0-9]{1,4}".prop_map(ContainerOp::Insert),
        3 => Just(ContainerOp::Remove),
        1 => Just(ContainerOp::Clear),
    ]
}

/// Edges over nodes "0".."n" as index pairs.
fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..8).prop_flat_map(|n| (Just(n), proptest::collection::vec((0..n, 0..n), 0..16)))
}

fn build_graph(n: usize, edges: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::new();
    for i in 0..n {
        graph.add_node(i.to_string()).unwrap();
    }
    for (u, v) in edges {
        graph.add_edge(&u.to_string(), &v.to_string()).unwrap();
    }
    graph
}

/// Nodes reachable from `source`, computed independently of the traversals.
fn reachable(graph: &Graph, source: &str) -> HashSet<String> {
    let mut seen = HashSet::from([source.to_string()]);
    let mut frontier = vec![source.to_string()];
    while let Some(id) = frontier.pop() {
        for next in graph.neighbors(&id).unwrap_or_default() {
            if seen.insert(next.to_string()) {
                frontier.push(next.to_string());
            }
        }
    }
    seen
}

proptest! {
    #[test]
    fn test_stack_pops_in_reverse(values in proptest::collection::vec("[a-z]{1,3}", 0..10)) {
        let mut stack = Stack::new(10);
        for v in &values {
            stack.push(v.clone()).unwrap();
        }
        let popped: Vec<String> = (0..values.len()).map(|_| stack.pop().unwrap()).collect();
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(popped, expected);
        prop_assert_eq!(stack.pop(), Err(VizError::Underflow { container: "Stack" }));
    }

    #[test]
    fn test_queue_dequeues_in_order(values in proptest::collection::vec("[a-z]{1,3}", 0..10)) {
        let mut queue = Queue::new(10);
        for v in &values {
            queue.enqueue(v.clone()).unwrap();
        }
        let dequeued: Vec<String> = (0..values.len()).map(|_| queue.dequeue().unwrap()).collect();
        prop_assert_eq!(dequeued, values);
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_matches_vecdeque(ops in proptest::collection::vec(container_op(), 1..60), capacity in 1usize..6) {
        let mut queue = Queue::new(capacity);
        let mut model: VecDeque<String> = VecDeque::new();
        for op in ops {
            match op {
                ContainerOp::Insert(v) => {
                    let result = queue.enqueue(v.clone());
                    if model.len() == capacity {
                        prop_assert_eq!(result, Err(VizError::Overflow { container: "Queue", capacity }));
                    } else {
                        prop_assert!(result.is_ok());
                        model.push_back(v);
                    }
                }
                ContainerOp::Remove => match model.pop_front() {
                    Some(expected) => prop_assert_eq!(queue.dequeue().unwrap(), expected),
                    None => prop_assert!(queue.dequeue().is_err()),
                },
                ContainerOp::Clear => {
                    queue.clear();
                    model.clear();
                }
            }
            prop_assert!(queue.len() <= capacity);
            prop_assert_eq!(queue.items(), model.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_stack_never_exceeds_capacity(ops in proptest::collection::vec(container_op(), 1..60), capacity in 1usize..6) {
        let mut stack = Stack::new(capacity);
        let mut model: Vec<String> = Vec::new();
        for op in ops {
            match op {
                ContainerOp::Insert(v) => {
                    if stack.push(v.clone()).is_ok() {
                        model.push(v);
                    }
                }
                ContainerOp::Remove => {
                    prop_assert_eq!(stack.pop().ok(), model.pop());
                }
                ContainerOp::Clear => {
                    stack.clear();
                    model.clear();
                }
            }
            prop_assert!(stack.len() <= capacity);
            prop_assert_eq!(stack.peek(), model.last().map(String::as_str));
        }
    }

    #[test]
    fn test_bst_in_order_is_sorted_dedup(keys in proptest::collection::vec(-50i64..50, 0..40)) {
        let mut tree = BinarySearchTree::new();
        for &k in &keys {
            let _ = tree.insert(k);
        }
        let expected: Vec<i64> = keys.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(tree.len(), expected.len());
        prop_assert_eq!(tree.in_order(), expected);
    }

    #[test]
    fn test_bst_duplicate_insert_is_noop(keys in proptest::collection::vec(-20i64..20, 1..20), pick in any::<prop::sample::Index>()) {
        let tree_keys = keys.clone();
        let mut tree = BinarySearchTree::from_keys(tree_keys);
        let before = (tree.in_order(), tree.pre_order());
        let dup = keys[pick.index(keys.len())];
        prop_assert_eq!(tree.insert(dup), Err(VizError::DuplicateKey { key: dup }));
        prop_assert_eq!((tree.in_order(), tree.pre_order()), before);
    }

    #[test]
    fn test_traversals_visit_reachable_once((n, edges) in graph_strategy(), source in 0usize..8) {
        let graph = build_graph(n, &edges);
        let source = (source % n).to_string();
        let expected = reachable(&graph, &source);

        for kind in [TraversalKind::Bfs, TraversalKind::Dfs] {
            let traversal = graph.traverse(kind, &source).unwrap();
            let order = traversal.order();
            prop_assert_eq!(order.first(), Some(&source));
            let visited: HashSet<String> = order.iter().cloned().collect();
            prop_assert_eq!(visited.len(), order.len(), "{} repeated a node", kind);
            prop_assert_eq!(&visited, &expected);
            prop_assert_eq!(traversal.steps().len(), order.len());
        }
    }

    #[test]
    fn test_bfs_levels_never_decrease((n, edges) in graph_strategy()) {
        let graph = build_graph(n, &edges);
        let order = graph.bfs("0").unwrap();

        // Distance of each node from the source, by an independent BFS.
        let mut dist = std::collections::HashMap::from([("0".to_string(), 0usize)]);
        let mut queue = VecDeque::from(["0".to_string()]);
        while let Some(id) = queue.pop_front() {
            let d = dist[&id];
            for next in graph.neighbors(&id).unwrap_or_default() {
                if !dist.contains_key(next) {
                    dist.insert(next.to_string(), d + 1);
                    queue.push_back(next.to_string());
                }
            }
        }
        let levels: Vec<usize> = order.order().iter().map(|id| dist[id]).collect();
        prop_assert!(levels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_failed_edge_leaves_graph_unchanged((n, edges) in graph_strategy()) {
        let mut graph = build_graph(n, &edges);
        let before: Vec<(String, String)> = graph.edges().map(|(u, v)| (u.to_string(), v.to_string())).collect();
        prop_assert!(graph.add_edge("0", "missing").is_err());
        let after: Vec<(String, String)> = graph.edges().map(|(u, v)| (u.to_string(), v.to_string())).collect();
        prop_assert_eq!(before, after);
    }
}
