//! Fixed-capacity linear containers: a LIFO [`Stack`] and a FIFO [`Queue`].
//!
//! Both hold opaque string tokens and share the [`LinearContainer`] trait so a
//! presentation layer can render either one with the same code.

use std::collections::VecDeque;

use crate::error::{VizError, VizResult};

/// Capacity used when the caller does not choose one.
pub const DEFAULT_CAPACITY: usize = 10;

/// Common interface of the stack and the queue.
///
/// `insert` and `remove` map onto push/pop for a stack and enqueue/dequeue for
/// a queue. Items are always reported starting at the removal end, so index 0
/// is the stack top or the queue front.
pub trait LinearContainer {
    /// Display name of the container kind ("Stack" or "Queue")
    fn kind(&self) -> &'static str;

    /// Maximum number of items the container accepts
    fn capacity(&self) -> usize;

    /// Current number of items
    fn len(&self) -> usize;

    /// Inserts at the logical top (stack) or rear (queue)
    fn insert(&mut self, value: String) -> VizResult<()>;

    /// Removes from the logical top (stack) or front (queue)
    fn remove(&mut self) -> VizResult<String>;

    /// Returns the item the next `remove` would return
    fn peek(&self) -> Option<&str>;

    /// Items ordered from the removal end
    fn items(&self) -> Vec<&str>;

    /// Drops every item
    fn clear(&mut self);

    /// Returns true if the container holds no items
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if no further insert can succeed
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}

/// Shared admission check for both containers.
fn check_insert(kind: &'static str, value: &str, len: usize, capacity: usize) -> VizResult<()> {
    if value.trim().is_empty() {
        return Err(VizError::EmptyInput { what: "value" });
    }
    if len >= capacity {
        return Err(VizError::Overflow { container: kind, capacity });
    }
    Ok(())
}

/// A bounded last-in, first-out stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    items: Vec<String>,
    capacity: usize,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Stack {
    /// Creates an empty stack holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a value onto the top of the stack.
    ///
    /// Fails with `EmptyInput` for a blank value and `Overflow` when full.
    pub fn push(&mut self, value: impl Into<String>) -> VizResult<()> {
        let value = value.into();
        check_insert("Stack", &value, self.items.len(), self.capacity)?;
        tracing::debug!(%value, size = self.items.len() + 1, "stack push");
        self.items.push(value);
        Ok(())
    }

    /// Removes and returns the most recently pushed value.
    pub fn pop(&mut self) -> VizResult<String> {
        let value = self.items.pop().ok_or(VizError::Underflow { container: "Stack" })?;
        tracing::debug!(%value, size = self.items.len(), "stack pop");
        Ok(value)
    }

    /// Changes the capacity. Items beyond the new capacity are kept; only
    /// further pushes are refused until the stack shrinks below it.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }
}

impl LinearContainer for Stack {
    fn kind(&self) -> &'static str {
        "Stack"
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn insert(&mut self, value: String) -> VizResult<()> {
        self.push(value)
    }

    fn remove(&mut self) -> VizResult<String> {
        self.pop()
    }

    fn peek(&self) -> Option<&str> {
        self.items.last().map(String::as_str)
    }

    fn items(&self) -> Vec<&str> {
        self.items.iter().rev().map(String::as_str).collect()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// A bounded first-in, first-out queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue {
    items: VecDeque<String>,
    capacity: usize,
}

impl Default for Queue {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Queue {
    /// Creates an empty queue holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a value at the rear of the queue.
    pub fn enqueue(&mut self, value: impl Into<String>) -> VizResult<()> {
        let value = value.into();
        check_insert("Queue", &value, self.items.len(), self.capacity)?;
        tracing::debug!(%value, size = self.items.len() + 1, "queue enqueue");
        self.items.push_back(value);
        Ok(())
    }

    /// Removes and returns the earliest enqueued value.
    pub fn dequeue(&mut self) -> VizResult<String> {
        let value = self
            .items
            .pop_front()
            .ok_or(VizError::Underflow { container: "Queue" })?;
        tracing::debug!(%value, size = self.items.len(), "queue dequeue");
        Ok(value)
    }

    /// Returns the value at the rear, the one enqueued last.
    pub fn rear(&self) -> Option<&str> {
        self.items.back().map(String::as_str)
    }

    /// Changes the capacity without dropping items.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }
}

impl LinearContainer for Queue {
    fn kind(&self) -> &'static str {
        "Queue"
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn insert(&mut self, value: String) -> VizResult<()> {
        self.enqueue(value)
    }

    fn remove(&mut self) -> VizResult<String> {
        self.dequeue()
    }

    fn peek(&self) -> Option<&str> {
        self.items.front().map(String::as_str)
    }

    fn items(&self) -> Vec<&str> {
        self.items.iter().map(String::as_str).collect()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_is_lifo() {
        let mut stack = Stack::new(3);
        stack.push("a").unwrap();
        stack.push("b").unwrap();
        stack.push("c").unwrap();

        assert_eq!(stack.peek(), Some("c"));
        assert_eq!(stack.items(), vec!["c", "b", "a"]);
        assert_eq!(stack.pop().unwrap(), "c");
        assert_eq!(stack.pop().unwrap(), "b");
        assert_eq!(stack.pop().unwrap(), "a");
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = Queue::new(3);
        queue.enqueue("a").unwrap();
        queue.enqueue("b").unwrap();

        assert_eq!(queue.peek(), Some("a"));
        assert_eq!(queue.rear(), Some("b"));
        assert_eq!(queue.dequeue().unwrap(), "a");
        assert_eq!(queue.dequeue().unwrap(), "b");
    }

    #[test]
    fn test_pop_empty_underflows() {
        let mut stack = Stack::new(2);
        assert_eq!(stack.pop(), Err(VizError::Underflow { container: "Stack" }));
        assert_eq!(stack.len(), 0);

        let mut queue = Queue::new(2);
        assert_eq!(queue.dequeue(), Err(VizError::Underflow { container: "Queue" }));
    }

    #[test]
    fn test_full_container_overflows_without_mutation() {
        let mut stack = Stack::new(1);
        stack.push("x").unwrap();
        assert!(stack.is_full());
        assert_eq!(
            stack.push("y"),
            Err(VizError::Overflow { container: "Stack", capacity: 1 })
        );
        assert_eq!(stack.items(), vec!["x"]);
    }

    #[test]
    fn test_blank_input_rejected() {
        let mut queue = Queue::new(2);
        assert_eq!(queue.enqueue(""), Err(VizError::EmptyInput { what: "value" }));
        assert_eq!(queue.enqueue("   "), Err(VizError::EmptyInput { what: "value" }));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_blank_checked_before_capacity() {
        let mut stack = Stack::new(0);
        assert!(matches!(stack.push(""), Err(VizError::EmptyInput { .. })));
        assert!(matches!(stack.push("a"), Err(VizError::Overflow { .. })));
    }

    #[test]
    fn test_clear_through_trait() {
        let mut containers: Vec<Box<dyn LinearContainer>> =
            vec![Box::new(Stack::new(4)), Box::new(Queue::new(4))];
        for container in containers.iter_mut() {
            container.insert("1".to_string()).unwrap();
            container.insert("2".to_string()).unwrap();
            container.clear();
            assert!(container.is_empty());
            assert_eq!(container.peek(), None);
        }
    }

    #[test]
    fn test_shrinking_capacity_keeps_items() {
        let mut queue = Queue::new(3);
        queue.enqueue("a").unwrap();
        queue.enqueue("b").unwrap();
        queue.set_capacity(1);
        assert_eq!(queue.len(), 2);
        assert!(queue.is_full());
        assert!(queue.enqueue("c").is_err());
        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        assert!(queue.enqueue("c").is_ok());
    }
}
