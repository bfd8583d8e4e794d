//! Work that must run after the current input event has been fully dispatched.
//!
//! The host widget keeps processing an event after our handler returns, so touching the
//! selection right away would be overwritten. Tasks are queued here and drained on the
//! next turn of the event loop.

use std::collections::VecDeque;

/// Presentation work an editor defers to the next turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorTask {
    /// Select the whole display text.
    SelectAll,
    /// Re-render the display text from the committed value, unless an edit is in progress.
    Redecorate,
}

/// FIFO of deferred tasks.
#[derive(Clone, Debug, Default)]
pub struct DeferredQueue<T> {
    tasks: VecDeque<T>,
}

impl<T> DeferredQueue<T> {
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    pub fn post(&mut self, task: T) {
        self.tasks.push_back(task);
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Takes everything posted so far. Tasks posted afterwards stay queued.
    pub fn drain(&mut self) -> VecDeque<T> {
        std::mem::take(&mut self.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_takes_only_what_was_posted() {
        let mut queue = DeferredQueue::new();
        queue.post(EditorTask::SelectAll);
        queue.post(EditorTask::Redecorate);

        let batch = queue.drain();
        queue.post(EditorTask::SelectAll);

        assert_eq!(
            batch.into_iter().collect::<Vec<_>>(),
            vec![EditorTask::SelectAll, EditorTask::Redecorate]
        );
        assert_eq!(queue.len(), 1);
    }
}
