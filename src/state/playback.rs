//! Step-by-step reveal of the most recent traversal.
//!
//! The graph view highlights the visit order one node at a time. Playback
//! keeps the traversal and how many of its steps are currently shown; time
//! comes from the caller (egui's input clock) so the logic stays testable.

use dsviz::Traversal;

/// Animation state of a traversal reveal.
#[derive(Debug, Clone, Default)]
pub struct TraversalPlayback {
    /// Traversal being revealed
    traversal: Option<Traversal>,
    /// Number of steps currently shown (0 = none yet)
    shown: usize,
    /// Clock time of the last revealed step, in seconds
    last_step_at: f64,
    /// Whether steps advance on their own
    playing: bool,
}

impl TraversalPlayback {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn traversal(&self) -> Option<&Traversal> {
        self.traversal.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Number of revealed steps.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Total number of steps in the current traversal.
    pub fn total(&self) -> usize {
        self.traversal.as_ref().map_or(0, Traversal::len)
    }

    pub fn is_finished(&self) -> bool {
        self.traversal.is_some() && self.shown >= self.total()
    }

    /// Nodes revealed so far, in visit order.
    pub fn visible(&self) -> &[String] {
        match &self.traversal {
            Some(t) if self.shown > 0 => t.step(self.shown - 1).unwrap_or(t.order()),
            _ => &[],
        }
    }

    /// The most recently revealed node.
    pub fn current(&self) -> Option<&str> {
        self.visible().last().map(String::as_str)
    }

    // ===== Mutations =====

    /// Starts revealing `traversal`, showing its first step immediately.
    pub fn start(&mut self, traversal: Traversal, now: f64) {
        self.shown = usize::from(!traversal.is_empty());
        self.traversal = Some(traversal);
        self.last_step_at = now;
        self.playing = !self.is_finished();
    }

    /// Forgets the traversal.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advances one step if `delay` seconds passed since the last one.
    ///
    /// Returns true when a new step became visible.
    pub fn tick(&mut self, now: f64, delay: f64) -> bool {
        if !self.playing || now - self.last_step_at < delay {
            return false;
        }
        self.last_step_at = now;
        self.step_forward()
    }

    /// Reveals the next step. Stops playing at the end.
    pub fn step_forward(&mut self) -> bool {
        let advanced = self.shown < self.total();
        if advanced {
            self.shown += 1;
        }
        if self.is_finished() {
            self.playing = false;
        }
        advanced
    }

    /// Toggles automatic advancing. Restarts from the beginning when finished.
    pub fn toggle_play(&mut self, now: f64) {
        if self.traversal.is_none() {
            return;
        }
        if self.is_finished() {
            self.shown = 1;
            self.last_step_at = now;
            self.playing = self.total() > 1;
        } else {
            self.playing = !self.playing;
            self.last_step_at = now;
        }
    }

    /// Reveals every step at once.
    pub fn show_all(&mut self) {
        self.shown = self.total();
        self.playing = false;
    }
}
