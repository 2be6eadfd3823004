//! Control panel UI rendering
//!
//! Input fields and operation buttons for the active view, followed by the
//! feedback of the last operation.

use dsviz::{Command, LinearContainer, Structure, TraversalKind, DEFAULT_SAMPLE_SIZE};
use eframe::egui;

use crate::app::AppState;
use crate::presentation::color_mapping::notice_color;

/// Result of user interaction with the control panel
pub enum ControlsInteraction {
    /// User asked for an operation on a structure
    Execute(Command),
    /// Play or pause the traversal reveal
    TogglePlayback,
    /// Reveal one more traversal step
    StepPlayback,
    /// Reveal the whole traversal
    ShowAllSteps,
}

/// Renders the controls for the active view.
pub fn render_controls(ui: &mut egui::Ui, state: &mut AppState) -> Option<ControlsInteraction> {
    let view = state.settings.active_view();
    ui.heading(view.title());
    ui.separator();

    let interaction = match view {
        Structure::Stack => stack_controls(ui, state),
        Structure::Queue => queue_controls(ui, state),
        Structure::Tree => tree_controls(ui, state),
        Structure::Graph => graph_controls(ui, state),
    };

    if let Some(notice) = state.active_notice() {
        ui.separator();
        let color = notice_color(notice.level, state.theme.colors());
        ui.colored_label(color, &notice.text);
    }

    interaction
}

/// Single-line text field; true when Enter was pressed in it.
fn submit_field(ui: &mut egui::Ui, buffer: &mut String, hint: &str) -> bool {
    let response = ui.add(egui::TextEdit::singleline(buffer).hint_text(hint).desired_width(140.0));
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

fn stack_controls(ui: &mut egui::Ui, state: &mut AppState) -> Option<ControlsInteraction> {
    let mut command = None;
    ui.horizontal(|ui| {
        let submitted = submit_field(ui, &mut state.input.stack_value, "value");
        if ui.button("Push").clicked() || submitted {
            command = Some(Command::Push(state.input.stack_value.clone()));
        }
    });
    ui.horizontal(|ui| {
        if ui.button("Pop").clicked() {
            command = Some(Command::Pop);
        }
        if ui.button("Random").clicked() {
            command = Some(Command::Sample(Structure::Stack, DEFAULT_SAMPLE_SIZE));
        }
        if ui.button("Clear").clicked() {
            command = Some(Command::Clear(Structure::Stack));
        }
    });

    let stack = state.session.stack();
    ui.label(format!("Size: {} / {}", stack.len(), stack.capacity()));
    ui.label(format!("Top: {}", stack.peek().unwrap_or("-")));
    command.map(ControlsInteraction::Execute)
}

fn queue_controls(ui: &mut egui::Ui, state: &mut AppState) -> Option<ControlsInteraction> {
    let mut command = None;
    ui.horizontal(|ui| {
        let submitted = submit_field(ui, &mut state.input.queue_value, "value");
        if ui.button("Enqueue").clicked() || submitted {
            command = Some(Command::Enqueue(state.input.queue_value.clone()));
        }
    });
    ui.horizontal(|ui| {
        if ui.button("Dequeue").clicked() {
            command = Some(Command::Dequeue);
        }
        if ui.button("Random").clicked() {
            command = Some(Command::Sample(Structure::Queue, DEFAULT_SAMPLE_SIZE));
        }
        if ui.button("Clear").clicked() {
            command = Some(Command::Clear(Structure::Queue));
        }
    });

    let queue = state.session.queue();
    ui.label(format!("Size: {} / {}", queue.len(), queue.capacity()));
    ui.label(format!("Front: {}", queue.peek().unwrap_or("-")));
    ui.label(format!("Rear: {}", queue.rear().unwrap_or("-")));
    command.map(ControlsInteraction::Execute)
}

fn tree_controls(ui: &mut egui::Ui, state: &mut AppState) -> Option<ControlsInteraction> {
    let mut command = None;
    ui.horizontal(|ui| {
        let submitted = submit_field(ui, &mut state.input.tree_key, "integer");
        if ui.button("Insert").clicked() || submitted {
            command = Some(Command::Insert(state.input.tree_key.clone()));
        }
    });
    ui.horizontal(|ui| {
        if ui.button("Random tree").clicked() {
            command = Some(Command::Sample(Structure::Tree, DEFAULT_SAMPLE_SIZE));
        }
        if ui.button("Clear").clicked() {
            command = Some(Command::Clear(Structure::Tree));
        }
    });

    let tree = state.session.tree();
    ui.label(format!("Nodes: {}  Height: {}", tree.len(), tree.height()));
    command.map(ControlsInteraction::Execute)
}

fn graph_controls(ui: &mut egui::Ui, state: &mut AppState) -> Option<ControlsInteraction> {
    let mut interaction = None;
    let mut execute = |command: Command| interaction = Some(ControlsInteraction::Execute(command));

    ui.label("Add node");
    ui.horizontal(|ui| {
        let submitted = submit_field(ui, &mut state.input.graph_node, "name");
        if ui.button("Add").clicked() || submitted {
            execute(Command::AddNode(state.input.graph_node.clone()));
        }
    });

    ui.label("Add edge");
    ui.horizontal(|ui| {
        ui.add(egui::TextEdit::singleline(&mut state.input.edge_from).hint_text("from").desired_width(60.0));
        ui.label("-");
        let submitted = submit_field(ui, &mut state.input.edge_to, "to");
        if ui.button("Connect").clicked() || submitted {
            execute(Command::AddEdge(state.input.edge_from.clone(), state.input.edge_to.clone()));
        }
    });

    ui.separator();
    ui.label("Traversal");
    let graph = state.session.graph();
    state.input.sync_start_node(graph.nodes());
    ui.add_enabled_ui(!graph.is_empty(), |ui| {
        let selected = state.input.start_node.clone().unwrap_or_default();
        egui::ComboBox::from_label("Start node")
            .selected_text(&selected)
            .show_ui(ui, |ui| {
                for id in graph.nodes() {
                    ui.selectable_value(&mut state.input.start_node, Some(id.to_string()), id);
                }
            });
        ui.horizontal(|ui| {
            for kind in [TraversalKind::Bfs, TraversalKind::Dfs] {
                if ui.button(kind.label()).clicked() {
                    execute(Command::Traverse(kind, selected.clone()));
                }
            }
        });
    });

    ui.horizontal(|ui| {
        if ui.button("Random graph").clicked() {
            execute(Command::Sample(Structure::Graph, DEFAULT_SAMPLE_SIZE));
        }
        if ui.button("Clear").clicked() {
            execute(Command::Clear(Structure::Graph));
        }
    });

    if let Some(interaction) = interaction {
        return Some(interaction);
    }
    playback_controls(ui, state)
}

fn playback_controls(ui: &mut egui::Ui, state: &AppState) -> Option<ControlsInteraction> {
    let playback = &state.playback;
    let traversal = playback.traversal()?;
    let mut interaction = None;

    ui.separator();
    ui.label(format!(
        "{} from {}: step {} of {}",
        traversal.kind(),
        traversal.source(),
        playback.shown(),
        playback.total()
    ));
    if let Some(current) = playback.current() {
        ui.label(format!("Current node: {current}"));
    }
    ui.horizontal(|ui| {
        let play_label = if playback.is_playing() { "Pause" } else { "Play" };
        if ui.button(play_label).clicked() {
            interaction = Some(ControlsInteraction::TogglePlayback);
        }
        if ui.add_enabled(!playback.is_finished(), egui::Button::new("Step")).clicked() {
            interaction = Some(ControlsInteraction::StepPlayback);
        }
        if ui.add_enabled(!playback.is_finished(), egui::Button::new("Show all")).clicked() {
            interaction = Some(ControlsInteraction::ShowAllSteps);
        }
        if ui.button("Reset").clicked() {
            interaction = Some(ControlsInteraction::Execute(Command::ResetTraversal));
        }
    });
    interaction
}
