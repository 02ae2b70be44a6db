use crate::commands::{CmdMessage, CmdResult, DisplayRecord};
use crate::error::Result;
use crate::roster::Roster;
use crate::ui_state::RowUiState;
use crate::undo::UndoBuffer;

pub fn run(
    roster: &mut Roster,
    ui: &mut RowUiState,
    undo: &mut UndoBuffer,
    index: usize,
) -> Result<CmdResult> {
    let (record, delta) = roster.remove_at(index)?;
    ui.on_delta(delta);
    undo.capture(record.clone(), index);

    let mut result = CmdResult::default().with_delta(delta);
    result.add_message(CmdMessage::success(format!(
        "Record deleted: {}",
        record.name
    )));
    result.add_message(CmdMessage::info("undo restores it"));
    result.affected.push(DisplayRecord {
        record,
        index,
        expanded: false,
    });
    Ok(result)
}
