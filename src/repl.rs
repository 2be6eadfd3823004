//! Line-oriented front-end for the data structure visualizer.
//!
//! Reads commands such as `stack push 5` or `graph bfs A` from stdin (or a
//! script file), applies them to a session and prints the affected structure.
//! Run with `help` for the command list.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dsviz::session::{Command, Outcome, Session, Structure};
use dsviz::{text, DEFAULT_CAPACITY, DEFAULT_SEED};

const HELP: &str = "\
Commands:
  stack push <value> | stack pop | stack sample [n] | stack clear
  queue enqueue <value> | queue dequeue | queue sample [n] | queue clear
  tree insert <integer> | tree sample [n] | tree clear
  graph node <id> | graph edge <u> <v> | graph bfs <id> | graph dfs <id>
  graph reset | graph sample [n] | graph clear
  show [stack|queue|tree|graph|json]
  help | quit";

#[derive(Debug, Parser)]
#[command(name = "dsviz-repl", about = "Text front-end for the stack, queue, BST and graph visualizer")]
struct Args {
    /// Capacity of the stack and the queue
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Seed for sample data
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Run commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Print a JSON snapshot after every command instead of text drawings
    #[arg(long)]
    json: bool,
}

/// What the loop should do after a line.
enum Flow {
    Continue,
    Quit,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut session = Session::new(args.capacity, args.seed);
    tracing::info!(capacity = args.capacity, seed = args.seed, "dsviz-repl started");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.script {
        Some(path) => {
            let script = fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            for line in script.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                writeln!(out, "> {line}")?;
                if let Flow::Quit = handle_line(&mut session, line, args.json, &mut out)? {
                    break;
                }
            }
        }
        None => {
            writeln!(out, "dsviz: type 'help' for commands")?;
            let stdin = io::stdin();
            loop {
                write!(out, "> ")?;
                out.flush()?;
                let mut line = String::new();
                if stdin.lock().read_line(&mut line).context("Failed to read stdin")? == 0 {
                    break;
                }
                if let Flow::Quit = handle_line(&mut session, line.trim(), args.json, &mut out)? {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Initializes the tracing subscriber, logging to stderr so stdout stays clean.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn handle_line(session: &mut Session, line: &str, json: bool, out: &mut impl Write) -> Result<Flow> {
    let mut words = line.split_whitespace();
    match words.next() {
        None => return Ok(Flow::Continue),
        Some("quit" | "exit") => return Ok(Flow::Quit),
        Some("help") => {
            writeln!(out, "{HELP}")?;
            return Ok(Flow::Continue);
        }
        Some("show") => {
            match words.next() {
                Some("json") => print_json(session, out)?,
                Some(word) => match Structure::from_keyword(word) {
                    Some(structure) => writeln!(out, "{}", render(session, structure))?,
                    None => writeln!(out, "error: unknown structure '{word}'")?,
                },
                None => {
                    for structure in Structure::ALL {
                        writeln!(out, "== {structure}\n{}", render(session, structure))?;
                    }
                }
            }
            return Ok(Flow::Continue);
        }
        Some(_) => {}
    }

    let command = match Command::parse(line) {
        Ok(command) => command,
        Err(err) => {
            writeln!(out, "error: {err}")?;
            return Ok(Flow::Continue);
        }
    };

    match session.execute(command) {
        Ok(outcome) => {
            writeln!(out, "{outcome}")?;
            if json {
                print_json(session, out)?;
            } else {
                print_affected(session, &outcome, out)?;
            }
        }
        Err(err) if err.is_input_error() => writeln!(out, "warning: {err}")?,
        Err(err) => writeln!(out, "error: {err}")?,
    }
    Ok(Flow::Continue)
}

fn print_affected(session: &Session, outcome: &Outcome, out: &mut impl Write) -> Result<()> {
    // Traversal summaries are already in the outcome line.
    if !matches!(outcome, Outcome::Traversed(_)) {
        writeln!(out, "{}", render(session, outcome.structure()))?;
    }
    Ok(())
}

fn print_json(session: &Session, out: &mut impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(&session.snapshot()).context("Failed to serialize snapshot")?;
    writeln!(out, "{json}")?;
    Ok(())
}

fn render(session: &Session, structure: Structure) -> String {
    match structure {
        Structure::Stack => text::render_stack(session.stack()),
        Structure::Queue => text::render_queue(session.queue()),
        Structure::Tree => text::render_tree(session.tree()),
        Structure::Graph => text::render_graph(session.graph(), session.traversal()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_lines(lines: &[&str]) -> String {
        let mut session = Session::new(2, DEFAULT_SEED);
        let mut out = Vec::new();
        for line in lines {
            handle_line(&mut session, line, false, &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_errors_are_reported_not_fatal() {
        let text = run_lines(&["stack pop", "stack push", "tree insert x", "heap push 1"]);
        assert!(text.contains("error: Stack is empty."));
        assert!(text.contains("warning: Please enter a value."));
        assert!(text.contains("warning: 'x' is not a valid integer."));
        assert!(text.contains("error: unknown structure 'heap'"));
    }

    #[test]
    fn test_overflow_at_capacity() {
        let text = run_lines(&["queue enqueue a", "queue enqueue b", "queue enqueue c"]);
        assert!(text.contains("Front [ a ] [ b ] Rear  2/2"));
        assert!(text.contains("error: Queue is full (capacity 2)."));
    }

    #[test]
    fn test_traversal_line() {
        let text = run_lines(&[
            "graph node A",
            "graph node B",
            "graph node C",
            "graph edge A B",
            "graph edge B C",
            "graph dfs A",
        ]);
        assert!(text.contains("DFS from A: A → B → C"));
    }

    #[test]
    fn test_container_samples_and_missing_verb() {
        let text = run_lines(&["stack sample 5", "queue sample", "graph"]);
        assert!(text.contains("Generated sample Stack (2 nodes)"));
        assert!(text.contains("Generated sample Queue (2 nodes)"));
        assert!(text.contains("error: missing graph command"));
    }

    #[test]
    fn test_quit_stops() {
        let mut session = Session::default();
        let mut out = Vec::new();
        assert!(matches!(handle_line(&mut session, "quit", false, &mut out), Ok(Flow::Quit)));
    }
}
