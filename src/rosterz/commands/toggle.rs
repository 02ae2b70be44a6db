use crate::commands::{CmdMessage, CmdResult, DisplayRecord};
use crate::error::{Result, RosterError};
use crate::roster::Roster;
use crate::ui_state::RowUiState;

pub fn run(roster: &Roster, ui: &mut RowUiState, index: usize) -> Result<CmdResult> {
    let Some(record) = roster.get(index) else {
        return Err(RosterError::IndexOutOfRange {
            index,
            len: roster.len(),
        });
    };
    ui.toggle(index);

    let expanded = ui.is_expanded(index);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(if expanded {
        format!("Actions shown for {}", record.name)
    } else {
        format!("Actions hidden for {}", record.name)
    }));
    result.affected.push(DisplayRecord {
        record: record.clone(),
        index,
        expanded,
    });
    Ok(result)
}
