use clap::Parser;

/// An interactive roster editor for the terminal.
#[derive(Parser, Debug)]
#[command(name = "rosterz", version, about)]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub plain: bool,

    /// Emit each command result as a JSON line instead of styled text
    #[arg(long)]
    pub json: bool,
}
