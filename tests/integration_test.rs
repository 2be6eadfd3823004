use anyhow::Result;
use dsviz::{
    text, BinarySearchTree, Command, Graph, LayoutConfig, LinearContainer, Outcome, Queue, Session,
    Stack, Structure, TraversalKind, TreeLayout, VizError,
};

fn run(session: &mut Session, lines: &[&str]) -> Result<Vec<Outcome>> {
    let mut outcomes = Vec::new();
    for line in lines {
        outcomes.push(session.execute(Command::parse(line)?)?);
    }
    Ok(outcomes)
}

#[test]
fn test_stack_lifo_through_session() -> Result<()> {
    let mut session = Session::new(3, 42);
    run(&mut session, &["stack push 1", "stack push 2", "stack push 3"])?;

    let err = session.execute(Command::Push("4".into())).unwrap_err();
    assert_eq!(err, VizError::Overflow { container: "Stack", capacity: 3 });
    assert_eq!(session.stack().len(), 3);

    let popped: Vec<String> = run(&mut session, &["stack pop", "stack pop", "stack pop"])?
        .into_iter()
        .map(|o| o.to_string())
        .collect();
    assert_eq!(popped, ["Popped: 3", "Popped: 2", "Popped: 1"]);

    let err = session.execute(Command::Pop).unwrap_err();
    assert_eq!(err, VizError::Underflow { container: "Stack" });
    assert_eq!(session.stack().len(), 0);
    Ok(())
}

#[test]
fn test_queue_fifo_and_blank_input() -> Result<()> {
    let mut queue = Queue::new(4);
    for value in ["a", "b", "c"] {
        queue.enqueue(value)?;
    }
    assert_eq!(queue.enqueue("   "), Err(VizError::EmptyInput { what: "value" }));
    assert_eq!(queue.len(), 3);

    assert_eq!(queue.dequeue()?, "a");
    assert_eq!(queue.dequeue()?, "b");
    queue.enqueue("d")?;
    assert_eq!(queue.items(), ["c", "d"]);
    Ok(())
}

#[test]
fn test_bst_example_tree_and_layout() -> Result<()> {
    let mut tree = BinarySearchTree::new();
    for key in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(key)?;
    }
    assert_eq!(tree.in_order(), [20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(tree.insert(40), Err(VizError::DuplicateKey { key: 40 }));
    assert_eq!(tree.len(), 7);

    let layout = TreeLayout::compute(&tree, LayoutConfig::default());
    let root = layout.position_of(50).unwrap();
    assert_eq!((root.x, root.y), (400.0, 40.0));
    let left = layout.position_of(30).unwrap();
    assert_eq!((left.x, left.y), (200.0, 120.0));
    let far_right = layout.position_of(80).unwrap();
    assert_eq!((far_right.x, far_right.y), (700.0, 200.0));
    assert!(!layout.is_stale(&tree));

    tree.insert(10)?;
    assert!(layout.is_stale(&tree));
    Ok(())
}

#[test]
fn test_graph_traversals_from_example() -> Result<()> {
    let mut graph = Graph::new();
    for id in ["A", "B", "C"] {
        graph.add_node(id)?;
    }
    graph.add_edge("A", "B")?;
    graph.add_edge("B", "C")?;

    assert_eq!(graph.bfs("A")?.order(), ["A", "B", "C"]);
    assert_eq!(graph.dfs("A")?.order(), ["A", "B", "C"]);

    assert_eq!(
        graph.add_edge("X", "Y"),
        Err(VizError::MissingEndpoint { id: "X".into() })
    );
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.bfs("Z").unwrap_err(), VizError::UnknownSource { id: "Z".into() });
    Ok(())
}

#[test]
fn test_bfs_and_dfs_differ_on_branching_graph() -> Result<()> {
    let mut graph = Graph::new();
    for id in ["A", "B", "C", "D", "E"] {
        graph.add_node(id)?;
    }
    for (u, v) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "E")] {
        graph.add_edge(u, v)?;
    }
    assert_eq!(graph.bfs("A")?.order(), ["A", "B", "C", "D", "E"]);
    assert_eq!(graph.dfs("A")?.order(), ["A", "B", "D", "C", "E"]);

    // Unreachable nodes are left out.
    graph.add_node("F")?;
    assert_eq!(graph.bfs("A")?.len(), 5);
    assert_eq!(graph.dfs("F")?.order(), ["F"]);
    Ok(())
}

#[test]
fn test_traversal_steps_restart() -> Result<()> {
    let mut session = Session::default();
    run(
        &mut session,
        &["graph node A", "graph node B", "graph node C", "graph edge A B", "graph edge A C"],
    )?;
    let outcome = session.execute(Command::Traverse(TraversalKind::Bfs, "A".into()))?;
    let Outcome::Traversed(traversal) = outcome else {
        panic!("expected a traversal, got {outcome:?}");
    };

    let first: Vec<Vec<String>> = traversal.steps().map(|s| s.to_vec()).collect();
    let second: Vec<Vec<String>> = traversal.steps().map(|s| s.to_vec()).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    assert_eq!(first[0], ["A"]);
    assert_eq!(first[2], ["A", "B", "C"]);
    Ok(())
}

#[test]
fn test_failed_operations_leave_state_unchanged() -> Result<()> {
    let mut session = Session::new(2, 42);
    run(&mut session, &["tree insert 5", "graph node A"])?;
    let before = session.snapshot();

    for line in ["tree insert 5", "tree insert five", "tree insert", "graph node A", "graph edge A B", "graph bfs Q"] {
        assert!(session.execute(Command::parse(line)?).is_err(), "{line} should fail");
    }
    assert_eq!(session.snapshot(), before);
    Ok(())
}

#[test]
fn test_clear_reports_empty() -> Result<()> {
    let mut session = Session::new(5, 7);
    run(
        &mut session,
        &["stack push x", "queue enqueue y", "tree sample 6", "graph sample 5", "graph bfs A"],
    )?;
    for structure in Structure::ALL {
        session.execute(Command::Clear(structure))?;
    }
    assert!(session.stack().is_empty());
    assert!(session.queue().is_empty());
    assert!(session.tree().is_empty());
    assert!(session.graph().is_empty());
    assert!(session.traversal().is_none());
    Ok(())
}

#[test]
fn test_snapshot_json_shape() -> Result<()> {
    let mut session = Session::new(3, 42);
    run(
        &mut session,
        &["stack push a", "stack push b", "graph node A", "graph node B", "graph edge A B", "graph dfs B"],
    )?;
    let json = serde_json::to_value(session.snapshot())?;
    assert_eq!(json["stack"]["items"], serde_json::json!(["b", "a"]));
    assert_eq!(json["graph"]["edges"], serde_json::json!([["A", "B"]]));
    assert_eq!(json["graph"]["traversal"]["order"], serde_json::json!(["B", "A"]));
    Ok(())
}

#[test]
fn test_text_renderings() -> Result<()> {
    let mut stack = Stack::new(2);
    stack.push("x")?;
    assert!(text::render_stack(&stack).ends_with("1/2"));

    let tree = BinarySearchTree::from_keys([2, 1]);
    assert_eq!(text::render_tree(&tree), "2\n    1\nsize 2 height 2");
    Ok(())
}
