use clap::Parser;

mod args;
mod cli;

use args::Cli;

fn main() {
    let parsed = Cli::parse();
    if let Err(e) = cli::run(&parsed) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
