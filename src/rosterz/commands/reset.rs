use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use crate::ui_state::RowUiState;
use crate::undo::UndoBuffer;

pub fn run(roster: &mut Roster, ui: &mut RowUiState, undo: &mut UndoBuffer) -> Result<CmdResult> {
    let delta = roster.clear();
    ui.on_delta(delta);
    undo.clear();

    let mut result = CmdResult::default().with_delta(delta);
    result.add_message(CmdMessage::info(format!(
        "Roster cleared, {} record(s) removed",
        delta.position()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, delete};
    use crate::roster::Delta;

    #[test]
    fn clears_roster_expansion_and_undo() {
        let mut roster = Roster::new();
        let mut ui = RowUiState::new();
        let mut undo = UndoBuffer::new();
        add::run(&mut roster, &mut ui, &mut undo, "Alice", "1").unwrap();
        add::run(&mut roster, &mut ui, &mut undo, "Bob", "2").unwrap();
        ui.toggle(0);
        delete::run(&mut roster, &mut ui, &mut undo, 1).unwrap();

        let result = run(&mut roster, &mut ui, &mut undo).unwrap();
        assert_eq!(result.delta, Some(Delta::RangeReset(1)));
        assert!(roster.is_empty());
        assert_eq!(ui.expanded(), None);
        assert!(!undo.is_armed());
    }

    #[test]
    fn reset_of_an_empty_roster_succeeds() {
        let mut roster = Roster::new();
        let mut ui = RowUiState::new();
        let mut undo = UndoBuffer::new();
        let result = run(&mut roster, &mut ui, &mut undo).unwrap();
        assert_eq!(result.delta, Some(Delta::RangeReset(0)));
    }
}
