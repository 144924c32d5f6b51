//! Linear undo/redo history over whole-diagram snapshots.
//!
//! Every recorded mutation pushes a deep copy of the pre-mutation diagram
//! onto the undo stack and clears the redo stack; branching timelines are
//! not supported. Snapshots are full copies rather than diffs, trading
//! memory for simplicity at typical diagram sizes.

use std::collections::VecDeque;
use std::mem;

use log::trace;

use maquette_core::model::Diagram;

/// Undo and redo stacks flanking the live diagram.
///
/// The undo stack is unbounded by default. An optional limit caps its
/// depth; when the cap is reached the oldest snapshot is evicted, which
/// silently shortens how far back a session can undo.
#[derive(Debug, Default)]
pub struct History {
    /// Pre-mutation snapshots, oldest first.
    past: VecDeque<Diagram>,
    /// Undone states available for redo, oldest first.
    future: Vec<Diagram>,
    /// Optional cap on undo depth.
    limit: Option<usize>,
}

impl History {
    /// Create an empty history.
    ///
    /// A `limit` of `None` retains every snapshot for the session lifetime.
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            past: VecDeque::new(),
            future: Vec::new(),
            limit,
        }
    }

    /// Record a pre-mutation snapshot, discarding any redo candidates.
    pub fn record(&mut self, snapshot: Diagram) {
        self.future.clear();
        self.push_past(snapshot);
        trace!(undo_depth = self.past.len(); "Recorded snapshot");
    }

    fn push_past(&mut self, snapshot: Diagram) {
        self.past.push_back(snapshot);
        if let Some(limit) = self.limit {
            while self.past.len() > limit {
                self.past.pop_front();
            }
        }
    }

    /// Swap the live diagram with the most recent snapshot, keeping the
    /// displaced state for redo. Returns false when the undo stack is empty.
    pub fn undo(&mut self, live: &mut Diagram) -> bool {
        match self.past.pop_back() {
            Some(previous) => {
                self.future.push(mem::replace(live, previous));
                true
            }
            None => false,
        }
    }

    /// Symmetric to [`History::undo`]: swap the live diagram with the most
    /// recently undone state. Returns false when the redo stack is empty.
    pub fn redo(&mut self, live: &mut Diagram) -> bool {
        match self.future.pop() {
            Some(next) => {
                self.push_past(mem::replace(live, next));
                true
            }
            None => false,
        }
    }

    /// Whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of snapshots available to undo.
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of states available to redo.
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }
}

#[cfg(test)]
mod tests {
    use maquette_core::identifier::Id;
    use maquette_core::model::Class;

    use super::*;

    fn diagram_with(names: &[&str]) -> Diagram {
        let mut diagram = Diagram::new();
        for name in names {
            diagram.insert_class(Class::new(
                Id::new(name),
                *name,
                0.0,
                0.0,
                Vec::new(),
                Vec::new(),
            ));
        }
        diagram
    }

    #[test]
    fn undo_and_redo_swap_states() {
        let mut history = History::new(None);
        let mut live = diagram_with(&["A"]);

        history.record(Diagram::new());
        assert!(history.undo(&mut live));
        assert!(live.is_empty());
        assert_eq!(history.redo_depth(), 1);

        assert!(history.redo(&mut live));
        assert_eq!(live, diagram_with(&["A"]));
        assert_eq!(history.undo_depth(), 1);
    }

    #[test]
    fn empty_stacks_are_silent_no_ops() {
        let mut history = History::new(None);
        let mut live = diagram_with(&["A"]);
        let before = live.clone();
        assert!(!history.undo(&mut live));
        assert!(!history.redo(&mut live));
        assert_eq!(live, before);
    }

    #[test]
    fn recording_clears_redo_candidates() {
        let mut history = History::new(None);
        let mut live = diagram_with(&["A"]);

        history.record(Diagram::new());
        history.undo(&mut live);
        assert!(history.can_redo());

        history.record(live.clone());
        assert!(!history.can_redo());
    }

    #[test]
    fn limit_evicts_oldest_snapshot() {
        let mut history = History::new(Some(2));
        history.record(diagram_with(&["A"]));
        history.record(diagram_with(&["A", "B"]));
        history.record(diagram_with(&["A", "B", "C"]));

        assert_eq!(history.undo_depth(), 2);

        // the deepest reachable state is the second snapshot
        let mut live = Diagram::new();
        history.undo(&mut live);
        history.undo(&mut live);
        assert_eq!(live, diagram_with(&["A", "B"]));
        assert!(!history.can_undo());
    }

    #[test]
    fn snapshots_are_independent_of_live_state() {
        let mut history = History::new(None);
        let mut live = diagram_with(&["A"]);
        history.record(live.clone());

        // mutate live heavily after recording
        live.clear();
        live.insert_class(Class::new(
            Id::new("Z"),
            "Z",
            9.0,
            9.0,
            Vec::new(),
            Vec::new(),
        ));

        history.undo(&mut live);
        assert_eq!(live, diagram_with(&["A"]));
    }
}
