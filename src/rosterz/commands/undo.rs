use crate::commands::{CmdMessage, CmdResult, DisplayRecord};
use crate::error::{Result, RosterError};
use crate::roster::Roster;
use crate::ui_state::RowUiState;
use crate::undo::UndoBuffer;

pub fn run(roster: &mut Roster, ui: &mut RowUiState, undo: &mut UndoBuffer) -> Result<CmdResult> {
    let Some((record, index)) = undo.consume() else {
        return Err(RosterError::UndoUnavailable);
    };

    // Rows may have vanished since the capture; clamp to a valid
    // insertion point.
    let target = index.min(roster.len());
    match roster.insert_at(target, record.clone()) {
        Ok(delta) => {
            ui.on_delta(delta);
            let mut result = CmdResult::default().with_delta(delta);
            result.add_message(CmdMessage::success(format!(
                "Record restored: {}",
                record.name
            )));
            result.affected.push(DisplayRecord {
                record,
                index: target,
                expanded: ui.is_expanded(target),
            });
            Ok(result)
        }
        Err(err) => {
            // A failed restore leaves prior state untouched, the buffer
            // included.
            undo.capture(record, index);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, delete, edit};
    use crate::model::Record;
    use crate::roster::Delta;

    fn seeded() -> (Roster, RowUiState, UndoBuffer) {
        let mut roster = Roster::new();
        let mut ui = RowUiState::new();
        let mut undo = UndoBuffer::new();
        for (name, id) in [("Alice", "1"), ("Bob", "2"), ("Carl", "3")] {
            add::run(&mut roster, &mut ui, &mut undo, name, id).unwrap();
        }
        (roster, ui, undo)
    }

    #[test]
    fn restores_at_the_original_position() {
        let (mut roster, mut ui, mut undo) = seeded();
        let before: Vec<Record> = roster.records().to_vec();

        delete::run(&mut roster, &mut ui, &mut undo, 1).unwrap();
        let result = run(&mut roster, &mut ui, &mut undo).unwrap();

        assert_eq!(result.delta, Some(Delta::Inserted(1)));
        assert_eq!(roster.records(), &before[..]);
    }

    #[test]
    fn undo_is_one_shot() {
        let (mut roster, mut ui, mut undo) = seeded();
        delete::run(&mut roster, &mut ui, &mut undo, 0).unwrap();
        run(&mut roster, &mut ui, &mut undo).unwrap();

        let err = run(&mut roster, &mut ui, &mut undo).unwrap_err();
        assert_eq!(err, RosterError::UndoUnavailable);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn nothing_to_undo_on_a_fresh_screen() {
        let (mut roster, mut ui, mut undo) = (Roster::new(), RowUiState::new(), UndoBuffer::new());
        let err = run(&mut roster, &mut ui, &mut undo).unwrap_err();
        assert_eq!(err, RosterError::UndoUnavailable);
    }

    #[test]
    fn restore_position_clamps_to_current_size() {
        let (mut roster, mut ui, mut undo) = seeded();
        // Delete the last row, then shrink the roster below its index.
        delete::run(&mut roster, &mut ui, &mut undo, 2).unwrap();
        let (_, _) = roster.remove_at(0).unwrap();
        let (_, _) = roster.remove_at(0).unwrap();

        let result = run(&mut roster, &mut ui, &mut undo).unwrap();
        assert_eq!(result.delta, Some(Delta::Inserted(0)));
        assert_eq!(roster.get(0).unwrap().name, "Carl");
    }

    #[test]
    fn id_taken_in_the_meantime_fails_and_keeps_the_undo() {
        let (mut roster, mut ui, mut undo) = seeded();
        delete::run(&mut roster, &mut ui, &mut undo, 0).unwrap();
        // Bob (now row 0) takes Alice's old id.
        edit::run(&mut roster, &mut ui, 0, "Bob", "1").unwrap();

        let err = run(&mut roster, &mut ui, &mut undo).unwrap_err();
        assert_eq!(err, RosterError::DuplicateId("1".into()));
        assert_eq!(roster.len(), 2);
        // The capture survives the failure: freeing the id lets the undo
        // succeed after all.
        assert!(undo.is_armed());
        edit::run(&mut roster, &mut ui, 0, "Bob", "2").unwrap();
        assert!(run(&mut roster, &mut ui, &mut undo).is_ok());
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn restore_shifts_the_expanded_row() {
        let (mut roster, mut ui, mut undo) = seeded();
        delete::run(&mut roster, &mut ui, &mut undo, 0).unwrap();
        ui.toggle(0);
        run(&mut roster, &mut ui, &mut undo).unwrap();
        // Alice came back at index 0; the expanded row moved to 1.
        assert!(ui.is_expanded(1));
    }
}
