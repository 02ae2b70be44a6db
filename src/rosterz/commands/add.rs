use crate::commands::{CmdMessage, CmdResult, DisplayRecord};
use crate::error::Result;
use crate::model::Record;
use crate::roster::Roster;
use crate::ui_state::RowUiState;
use crate::undo::UndoBuffer;

pub fn run(
    roster: &mut Roster,
    ui: &mut RowUiState,
    undo: &mut UndoBuffer,
    name: &str,
    id: &str,
) -> Result<CmdResult> {
    let record = Record::new(name.trim(), id.trim());
    let delta = roster.insert(record.clone())?;
    ui.on_delta(delta);
    // The captured undo index no longer matches a removal site once a new
    // row exists.
    undo.clear();

    let index = delta.position();
    let mut result = CmdResult::default().with_delta(delta);
    result.add_message(CmdMessage::success(format!(
        "Record added: {} (#{})",
        record.name, record.id
    )));
    result.affected.push(DisplayRecord {
        record,
        index,
        expanded: ui.is_expanded(index),
    });
    Ok(result)
}
