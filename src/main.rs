use std::path::Path;

use clap::Parser;
use slate::cli::commands::Cli;
use slate::cli::handlers;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand: launch the TUI
            let file = cli.file.clone();
            if let Err(e) = slate::tui::run(file.as_deref().map(Path::new)) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
