use rosterz::commands::{CmdMessage, CmdResult, DisplayRecord, MessageLevel};
use rosterz::error::RosterError;
use unicode_width::UnicodeWidthStr;

use super::styles;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => styles::INFO.apply_to(&message.content),
            MessageLevel::Success => styles::SUCCESS.apply_to(&message.content),
            MessageLevel::Warning => styles::WARNING.apply_to(&message.content),
            MessageLevel::Error => styles::ERROR.apply_to(&message.content),
        };
        println!("{}", styled);
    }
}

pub(super) fn print_records(records: &[DisplayRecord], undo_pending: bool) {
    if records.is_empty() {
        println!("No records yet. 'add <id> <name>' creates one.");
    } else {
        let name_width = records
            .iter()
            .map(|dr| dr.record.name.width())
            .max()
            .unwrap_or(0);
        for dr in records {
            let marker = if dr.expanded { "▾" } else { " " };
            let pad = " ".repeat(name_width.saturating_sub(dr.record.name.width()));
            println!(
                "{} {} {}{}  {}",
                marker,
                styles::INDEX.apply_to(format!("{:>3}.", dr.index + 1)),
                styles::NAME.apply_to(&dr.record.name),
                pad,
                styles::ID.apply_to(format!("#{}", dr.record.id)),
            );
            if dr.expanded {
                println!("        {}", styles::INFO.apply_to("[ edit ]  [ delete ]"));
            }
        }
    }
    let undo_note = if undo_pending { ", undo available" } else { "" };
    println!(
        "{}",
        styles::INFO.apply_to(format!("{} record(s){}", records.len(), undo_note))
    );
}

pub(super) fn print_json(records: &[DisplayRecord]) {
    match serde_json::to_string_pretty(records) {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("Error: {}", err),
    }
}

pub(super) fn print_json_result(result: &CmdResult) {
    match serde_json::to_string(result) {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("Error: {}", err),
    }
}

/// Renders a core error the way the screen would: inline field errors for
/// validation, a warning no-op for an empty undo buffer.
pub(super) fn print_error(err: &RosterError, from_undo: bool) {
    let text = match err {
        RosterError::UndoUnavailable => {
            println!("{}", styles::WARNING.apply_to("nothing to undo"));
            return;
        }
        RosterError::DuplicateId(id) if from_undo => {
            format!("cannot restore, id {} now in use", id)
        }
        RosterError::DuplicateId(_) => err.to_string(),
        RosterError::Validation(v) => v.to_string(),
        RosterError::IndexOutOfRange { index, .. } => {
            format!("row {} does not exist", index + 1)
        }
    };
    println!("{}", styles::ERROR.apply_to(text));
}

pub(super) fn print_line_error(text: &str) {
    println!("{}", styles::ERROR.apply_to(text));
}

pub(super) fn print_help() {
    println!("commands:");
    println!("  add <id> <name>         add a record");
    println!("  edit <row> <id> <name>  replace the record at a row");
    println!("  delete <row>            remove a row (undo available)");
    println!("  undo                    restore the last deletion");
    println!("  toggle <row>            show or hide a row's actions");
    println!("  list                    show the roster");
    println!("  clear                   remove every record");
    println!("  dump                    print the roster as JSON");
    println!("  help                    this text");
    println!("  quit                    leave");
}
