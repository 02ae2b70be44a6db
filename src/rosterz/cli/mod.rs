//! Terminal client: a line-oriented session over the API facade.
//!
//! Everything terminal-shaped lives here. Rows are 1-based at the prompt
//! and converted at this boundary; the API speaks 0-based indices
//! re-derived from the latest listing.

mod print;
mod styles;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use rosterz::api::RosterApi;
use rosterz::commands::CmdResult;

use crate::args::Cli;

enum Step {
    Continue,
    Quit,
}

/// Which intent an error came from, for wording that depends on context.
#[derive(Clone, Copy)]
enum Origin {
    General,
    Undo,
}

pub fn run(cli: &Cli) -> Result<()> {
    if cli.plain {
        console::set_colors_enabled(false);
    }
    let attended = console::user_attended();
    if attended {
        println!(
            "rosterz {} (type 'help' for commands)",
            env!("CARGO_PKG_VERSION")
        );
    }

    let mut api = RosterApi::new();
    let stdin = io::stdin();
    loop {
        if attended {
            print!("> ");
            io::stdout().flush()?;
        }
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if let Step::Quit = dispatch(&mut api, cli, line.trim()) {
            break;
        }
    }
    Ok(())
}

fn dispatch(api: &mut RosterApi, cli: &Cli, line: &str) -> Step {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Step::Continue;
    };
    let args: Vec<&str> = parts.collect();

    match command {
        "quit" | "exit" | "q" => return Step::Quit,
        "help" | "?" => print::print_help(),
        "list" | "ls" => print::print_records(&api.records(), api.has_pending_undo()),
        "dump" => print::print_json(&api.records()),
        "add" => handle_add(api, cli, &args),
        "edit" => handle_edit(api, cli, &args),
        "delete" | "del" | "rm" => handle_delete(api, cli, &args),
        "undo" | "u" => report(cli, api.undo_last_delete(), Origin::Undo),
        "toggle" | "t" => handle_toggle(api, cli, &args),
        "clear" => report(cli, api.reset_all(), Origin::General),
        other => print::print_line_error(&format!("unknown command '{}', try 'help'", other)),
    }
    Step::Continue
}

fn handle_add(api: &mut RosterApi, cli: &Cli, args: &[&str]) {
    if args.len() < 2 {
        return print::print_line_error("usage: add <id> <name>");
    }
    let id = args[0];
    let name = args[1..].join(" ");
    report(cli, api.add_record(&name, id), Origin::General);
}

fn handle_edit(api: &mut RosterApi, cli: &Cli, args: &[&str]) {
    if args.len() < 3 {
        return print::print_line_error("usage: edit <row> <id> <name>");
    }
    let Some(index) = resolve_row(api, args[0]) else {
        return;
    };
    let id = args[1];
    let name = args[2..].join(" ");
    report(cli, api.edit_record(index, &name, id), Origin::General);
}

fn handle_delete(api: &mut RosterApi, cli: &Cli, args: &[&str]) {
    if args.len() != 1 {
        return print::print_line_error("usage: delete <row>");
    }
    let Some(index) = resolve_row(api, args[0]) else {
        return;
    };
    report(cli, api.delete_record(index), Origin::General);
}

fn handle_toggle(api: &mut RosterApi, cli: &Cli, args: &[&str]) {
    if args.len() != 1 {
        return print::print_line_error("usage: toggle <row>");
    }
    let Some(index) = resolve_row(api, args[0]) else {
        return;
    };
    report(cli, api.toggle_row_expansion(index), Origin::General);
}

/// Converts a 1-based prompt row into a 0-based index, checked against the
/// current roster so stale rows surface as user errors here rather than as
/// contract violations inside the core.
fn resolve_row(api: &RosterApi, token: &str) -> Option<usize> {
    let Ok(row) = token.parse::<usize>() else {
        print::print_line_error(&format!("'{}' is not a row number", token));
        return None;
    };
    if row == 0 || row > api.size() {
        print::print_line_error(&format!("row {} does not exist", row));
        return None;
    }
    Some(row - 1)
}

fn report(cli: &Cli, outcome: rosterz::error::Result<CmdResult>, origin: Origin) {
    match outcome {
        Ok(result) => {
            if cli.json {
                print::print_json_result(&result);
            } else {
                print::print_messages(&result.messages);
            }
        }
        Err(err) => print::print_error(&err, matches!(origin, Origin::Undo)),
    }
}
