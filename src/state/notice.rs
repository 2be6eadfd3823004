//! Feedback messages shown under the controls.

use dsviz::{Outcome, Structure, VizError};

/// Severity of a notice, mapped to a theme color when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// The latest feedback message and the view it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    pub view: Structure,
}

impl Notice {
    /// Notice for a completed operation.
    pub fn from_outcome(outcome: &Outcome) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: outcome.to_string(),
            view: outcome.structure(),
        }
    }

    /// Notice for a rejected operation.
    ///
    /// Malformed input is a warning; anything the structure refused is an error.
    pub fn from_error(err: &VizError, view: Structure) -> Self {
        let level = if err.is_input_error() {
            NoticeLevel::Warning
        } else {
            NoticeLevel::Error
        };
        Self {
            level,
            text: err.to_string(),
            view,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_follow_error_kind() {
        let warning = Notice::from_error(&VizError::EmptyInput { what: "value" }, Structure::Stack);
        assert_eq!(warning.level, NoticeLevel::Warning);

        let error = Notice::from_error(&VizError::Overflow { container: "Stack", capacity: 2 }, Structure::Stack);
        assert_eq!(error.level, NoticeLevel::Error);
        assert_eq!(error.text, "Stack is full (capacity 2).");
    }

    #[test]
    fn test_success_from_outcome() {
        let outcome = Outcome::Removed {
            structure: Structure::Queue,
            value: "7".to_string(),
        };
        let notice = Notice::from_outcome(&outcome);
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.text, "Dequeued: 7");
        assert_eq!(notice.view, Structure::Queue);
    }
}
