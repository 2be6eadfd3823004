//! Application-level coordination of user intents.
//!
//! Every interaction from the panels ends up here: commands go to the session,
//! their outcome becomes a notice, and dependent state (text buffers, traversal
//! playback, cached layouts) is brought in line with the structures.

use dsviz::{Command, Outcome, Structure};

use crate::app::AppState;
use crate::state::Notice;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Runs a command against the session and records its feedback.
    ///
    /// `now` is the egui clock time, used to start traversal playback.
    pub fn execute(state: &mut AppState, command: Command, now: f64) {
        let view = state.settings.active_view();
        match state.session.execute(command) {
            Ok(outcome) => {
                Self::after_success(state, &outcome, now);
                state.notice = Some(Notice::from_outcome(&outcome));
            }
            Err(err) => {
                tracing::info!(kind = err.kind(), "{err}");
                state.notice = Some(Notice::from_error(&err, view));
            }
        }
    }

    fn after_success(state: &mut AppState, outcome: &Outcome, now: f64) {
        match outcome {
            Outcome::Stored { structure, .. } => Self::clear_input(state, *structure),
            Outcome::EdgeAdded { .. } => {
                state.input.edge_from.clear();
                state.input.edge_to.clear();
            }
            Outcome::Traversed(traversal) => state.playback.start(traversal.clone(), now),
            Outcome::Sampled { structure: Structure::Tree, .. }
            | Outcome::Cleared(Structure::Tree) => state.layout_cache.invalidate_tree(),
            Outcome::Sampled { structure: Structure::Graph, .. }
            | Outcome::Cleared(Structure::Graph) => state.layout_cache.invalidate_graph(),
            _ => {}
        }

        // Any graph change drops the session's traversal; playback follows it.
        if state.session.traversal().is_none() {
            state.playback.reset();
        }
        let nodes = state.session.graph().nodes();
        state.input.sync_start_node(nodes);
    }

    fn clear_input(state: &mut AppState, structure: Structure) {
        match structure {
            Structure::Stack => state.input.stack_value.clear(),
            Structure::Queue => state.input.queue_value.clear(),
            Structure::Tree => state.input.tree_key.clear(),
            Structure::Graph => state.input.graph_node.clear(),
        }
    }

    /// Switches the central view. Feedback from the previous view is dropped.
    pub fn select_view(state: &mut AppState, view: Structure) {
        if state.settings.active_view() != view {
            state.settings.set_active_view(view);
            state.notice = None;
        }
    }

    /// Applies a new stack and queue capacity.
    pub fn set_capacity(state: &mut AppState, capacity: usize) {
        state.settings.set_capacity(capacity);
        state.session.set_capacity(state.settings.capacity());
        tracing::debug!(capacity = state.settings.capacity(), "capacity changed");
    }

    /// Advances traversal playback. Returns true if a repaint is needed.
    pub fn tick_playback(state: &mut AppState, now: f64) -> bool {
        let delay = state.settings.step_delay_secs();
        state.playback.tick(now, delay);
        state.playback.is_playing()
    }
}
