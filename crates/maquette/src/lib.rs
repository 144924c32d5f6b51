//! Maquette - An editor state core for UML-style class diagrams.
//!
//! Model mutation, linear undo/redo history, and source-skeleton generation
//! for class diagrams. Front ends (canvas, forms, toolbars) issue
//! [`Command`]s against an [`Editor`] session; everything visual stays on
//! their side of the boundary.

pub mod config;
pub mod generate;

mod command;
mod error;
mod history;
mod mutation;

pub use maquette_core::{identifier, model};

pub use command::Command;
pub use error::MaquetteError;
pub use generate::Language;
pub use history::History;
pub use mutation::apply;

use log::{debug, info, trace};

use config::AppConfig;
use model::Diagram;

/// An editing session owning the live diagram and its undo/redo history.
///
/// Every command dispatched through the session is a transaction: the
/// pre-mutation diagram is snapshotted for undo, the command is applied,
/// and the redo stack is cleared. [`Command::MoveClass`] is the one
/// exception — continuous drag positioning would flood the history, so it
/// bypasses snapshotting entirely.
///
/// # Examples
///
/// ```
/// use maquette::{Command, Editor, config::AppConfig};
///
/// let mut editor = Editor::new(AppConfig::default());
/// editor
///     .dispatch(Command::AddClass {
///         name: "Animal".to_string(),
///         x: 40.0,
///         y: 60.0,
///         attributes: Vec::new(),
///         methods: Vec::new(),
///     })
///     .expect("mutation preserves diagram invariants");
/// assert_eq!(editor.diagram().classes().len(), 1);
///
/// assert!(editor.undo());
/// assert!(editor.diagram().is_empty());
/// assert!(editor.redo());
/// assert_eq!(editor.diagram().classes().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Editor {
    diagram: Diagram,
    history: History,
}

impl Editor {
    /// Create an editor session with an empty diagram.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration; the history section controls
    ///   how many undo snapshots are retained.
    pub fn new(config: AppConfig) -> Self {
        info!(history_limit:? = config.history().limit(); "Creating editor session");
        Self {
            diagram: Diagram::new(),
            history: History::new(config.history().limit()),
        }
    }

    /// Borrow the live diagram.
    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Borrow the session history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Apply a command to the live diagram as a recorded transaction.
    ///
    /// Returns whether the diagram changed. Commands that change nothing —
    /// updates or deletes aimed at unknown ids, resetting an already-empty
    /// diagram — are silent no-ops and record no history entry, so a later
    /// undo is unaffected by them.
    ///
    /// # Errors
    ///
    /// Returns [`MaquetteError::Model`] when the applied command leaves the
    /// diagram referentially inconsistent (for example a relation aimed at a
    /// class id that was never inserted). The live diagram is rolled back to
    /// its pre-mutation state first. This is a fail-fast signal of a bug in
    /// the calling layer, not a user-input problem.
    pub fn dispatch(&mut self, command: Command) -> Result<bool, MaquetteError> {
        trace!(command:? = command; "Dispatching command");

        if !command.records_history() {
            return Ok(mutation::apply(&mut self.diagram, command));
        }

        let snapshot = self.diagram.clone();
        if !mutation::apply(&mut self.diagram, command) {
            debug!("Command changed nothing; no history entry recorded");
            return Ok(false);
        }

        if let Err(err) = self.diagram.check_integrity() {
            self.diagram = snapshot;
            return Err(err.into());
        }

        self.history.record(snapshot);
        Ok(true)
    }

    /// Restore the most recent pre-mutation snapshot.
    ///
    /// Returns false, without touching the diagram, when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.diagram);
        debug!(undone; "Undo");
        undone
    }

    /// Reapply the most recently undone state.
    ///
    /// Returns false, without touching the diagram, when there is nothing
    /// to redo.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.diagram);
        debug!(redone; "Redo");
        redone
    }

    /// Whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Generate a source skeleton for the current diagram.
    ///
    /// Pure over the current state: identical diagrams and language always
    /// produce byte-identical output.
    pub fn generate(&self, language: Language) -> String {
        generate::generate(self.diagram.classes(), self.diagram.relations(), language)
    }
}
