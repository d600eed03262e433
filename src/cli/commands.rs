use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "slate", about = concat!("[=] slate v", env!("CARGO_PKG_VERSION"), " - a two-pane terminal list browser"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use an explicit lists.toml instead of discovering one
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every list in display order
    Lists,
    /// Print the tasks of a named list
    Tasks(TasksArgs),
}

#[derive(Args)]
pub struct TasksArgs {
    /// List name (a built-in view, group, or project)
    pub list: String,
}
