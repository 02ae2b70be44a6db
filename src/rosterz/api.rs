//! # API Facade
//!
//! The single entry point for roster operations, regardless of the client
//! driving them. A [`RosterApi`] owns one roster, one expanded-row
//! tracker, and one undo buffer: construct one when the screen session
//! opens, drop it on teardown. There is no shared or global instance.
//!
//! The facade holds no business logic. Intents dispatch to the command
//! layer and return structured results; queries read the components
//! directly. Callers are expected to serialize intents: each operation
//! completes synchronously, and its delta reaches the dependent state
//! inside the call, before the next intent computes anything from
//! indices.

use crate::commands::{self, CmdResult, DisplayRecord};
use crate::error::Result;
use crate::model::Record;
use crate::roster::Roster;
use crate::ui_state::RowUiState;
use crate::undo::UndoBuffer;

/// A screen session over one roster.
#[derive(Debug, Default)]
pub struct RosterApi {
    roster: Roster,
    ui: RowUiState,
    undo: UndoBuffer,
}

impl RosterApi {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Intents ---

    pub fn add_record(&mut self, name: &str, id: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.roster, &mut self.ui, &mut self.undo, name, id)
    }

    pub fn edit_record(&mut self, index: usize, name: &str, id: &str) -> Result<CmdResult> {
        commands::edit::run(&mut self.roster, &mut self.ui, index, name, id)
    }

    pub fn delete_record(&mut self, index: usize) -> Result<CmdResult> {
        commands::delete::run(&mut self.roster, &mut self.ui, &mut self.undo, index)
    }

    pub fn undo_last_delete(&mut self) -> Result<CmdResult> {
        commands::undo::run(&mut self.roster, &mut self.ui, &mut self.undo)
    }

    pub fn toggle_row_expansion(&mut self, index: usize) -> Result<CmdResult> {
        commands::toggle::run(&self.roster, &mut self.ui, index)
    }

    pub fn reset_all(&mut self) -> Result<CmdResult> {
        commands::reset::run(&mut self.roster, &mut self.ui, &mut self.undo)
    }

    // --- Queries ---

    pub fn size(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    pub fn record_at(&self, index: usize) -> Option<&Record> {
        self.roster.get(index)
    }

    pub fn is_row_expanded(&self, index: usize) -> bool {
        self.ui.is_expanded(index)
    }

    pub fn has_pending_undo(&self) -> bool {
        self.undo.is_armed()
    }

    pub fn find_by_id(&self, id: &str) -> Option<usize> {
        self.roster.find_by_id(id)
    }

    /// Listing snapshot for renderers: every record with its current index
    /// and expansion flag.
    pub fn records(&self) -> Vec<DisplayRecord> {
        self.roster
            .iter()
            .enumerate()
            .map(|(index, record)| DisplayRecord {
                record: record.clone(),
                index,
                expanded: self.ui.is_expanded(index),
            })
            .collect()
    }
}
