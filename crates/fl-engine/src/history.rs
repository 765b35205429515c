//! Undo/redo history over ledger and mission-progress mutations.
//!
//! Each submission pushes a [`HistoryAction`] and forks history: the redo
//! stack is cleared. Undo and redo move one action between the stacks and
//! apply the matching ledger and progress mutation. An action is never on
//! both stacks and is never dropped except by that fork.
//!
//! Removal resolves the entry by identity. The ledger index recorded at push
//! time is tried first and accepted only when the entry there has the same
//! id; otherwise the ledger is searched. The order of removal is unchanged:
//! last submitted is first undone.

use fl_core::entities::Entry;

use crate::error::EngineError;
use crate::ledger::EntryLedger;
use crate::missions::{MissionStore, StatusChange};

/// One reversible submission.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryAction {
    /// Full entry value at submission time.
    pub entry: Entry,
    pub mission_id: String,
    /// Ledger position when the action was pushed.
    pub ledger_index: usize,
}

/// Effect of a single undo or redo step.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryStep {
    pub entry: Entry,
    /// Position the entry was removed from (undo) or inserted at (redo).
    pub ledger_index: usize,
    pub status_change: StatusChange,
}

#[derive(Debug, Clone, Default)]
pub struct HistoryManager {
    undo_stack: Vec<HistoryAction>,
    redo_stack: Vec<HistoryAction>,
}

impl HistoryManager {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Seed history with a fresh submission. Clears the redo stack.
    pub fn record(&mut self, entry: Entry, ledger_index: usize) {
        self.redo_stack.clear();
        let mission_id = entry.mission_id.clone();
        self.undo_stack.push(HistoryAction {
            entry,
            mission_id,
            ledger_index,
        });
    }

    /// Reverse the most recent action.
    ///
    /// # Errors
    ///
    /// - `NothingToUndo` when the undo stack is empty.
    /// - `IndexOutOfRange` when the entry is no longer in the ledger.
    /// - `MissionNotFound` when its mission left the catalog.
    ///
    /// State is unchanged on every error.
    pub fn undo(
        &mut self,
        ledger: &mut EntryLedger,
        store: &mut MissionStore,
    ) -> Result<HistoryStep, EngineError> {
        let action = self.undo_stack.last().ok_or(EngineError::NothingToUndo)?;
        let index = resolve_index(ledger, action)?;
        store.find(&action.mission_id)?;

        let Some(action) = self.undo_stack.pop() else {
            return Err(EngineError::NothingToUndo);
        };
        let entry = ledger.remove_at(index)?;
        let status_change = store.reverse_submission(&action.mission_id)?;
        self.redo_stack.push(action);

        Ok(HistoryStep {
            entry,
            ledger_index: index,
            status_change,
        })
    }

    /// Re-apply the most recently undone action, appending the original
    /// entry snapshot to the end of the ledger.
    ///
    /// # Errors
    ///
    /// - `NothingToRedo` when the redo stack is empty.
    /// - `MissionNotFound` when its mission left the catalog.
    ///
    /// State is unchanged on every error.
    pub fn redo(
        &mut self,
        ledger: &mut EntryLedger,
        store: &mut MissionStore,
    ) -> Result<HistoryStep, EngineError> {
        let action = self.redo_stack.last().ok_or(EngineError::NothingToRedo)?;
        store.find(&action.mission_id)?;

        let Some(action) = self.redo_stack.pop() else {
            return Err(EngineError::NothingToRedo);
        };
        let index = ledger.len();
        ledger.insert_preserving_snapshot(action.entry.clone(), index)?;
        let status_change = store.record_submission(&action.mission_id)?;

        let entry = action.entry.clone();
        self.undo_stack.push(HistoryAction {
            ledger_index: index,
            ..action
        });

        Ok(HistoryStep {
            entry,
            ledger_index: index,
            status_change,
        })
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    #[must_use]
    pub fn undo_actions(&self) -> &[HistoryAction] {
        &self.undo_stack
    }

    #[must_use]
    pub fn redo_actions(&self) -> &[HistoryAction] {
        &self.redo_stack
    }
}

fn resolve_index(ledger: &EntryLedger, action: &HistoryAction) -> Result<usize, EngineError> {
    if ledger
        .get(action.ledger_index)
        .is_some_and(|entry| entry.id == action.entry.id)
    {
        return Ok(action.ledger_index);
    }
    ledger
        .position_of(&action.entry.id)
        .ok_or(EngineError::IndexOutOfRange {
            index: action.ledger_index,
            len: ledger.len(),
        })
}
