use crate::commands::{CmdMessage, CmdResult, DisplayRecord};
use crate::error::Result;
use crate::model::Record;
use crate::roster::Roster;
use crate::ui_state::RowUiState;

pub fn run(
    roster: &mut Roster,
    ui: &mut RowUiState,
    index: usize,
    name: &str,
    id: &str,
) -> Result<CmdResult> {
    let record = Record::new(name.trim(), id.trim());
    let delta = roster.replace_at(index, record.clone())?;
    // A replace moves no rows; the delta is still forwarded so the
    // tracker sees every structural event.
    ui.on_delta(delta);

    let mut result = CmdResult::default().with_delta(delta);
    result.add_message(CmdMessage::success(format!(
        "Record updated: {} (#{})",
        record.name, record.id
    )));
    result.affected.push(DisplayRecord {
        record,
        index,
        expanded: ui.is_expanded(index),
    });
    Ok(result)
}
