use std::path::Path;

use crate::cli::commands::{Cli, Commands, TasksArgs};
use crate::cli::output::{ListJson, TaskJson, TaskListJson};
use crate::data::{self, DataSource};
use crate::views::{self, ListEntry};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data = data::load_data(cli.file.as_deref().map(Path::new))?;

    match cli.command {
        // The TUI (no subcommand) is launched from main.rs
        None => Ok(()),
        Some(Commands::Lists) => cmd_lists(&data.source, json),
        Some(Commands::Tasks(args)) => cmd_tasks(&data.source, args, json),
    }
}

/// Find the first entry whose display name matches, in display order.
/// Built-in views come first, so a group named "Inbox" is shadowed by the
/// built-in Inbox.
pub fn find_entry_by_name(source: &dyn DataSource, name: &str) -> Option<ListEntry> {
    views::all_entries(source)
        .into_iter()
        .find(|e| !e.is_delimiter() && e.name(source) == name)
}

fn entry_kind(entry: &ListEntry) -> &'static str {
    match entry {
        ListEntry::View { .. } => "view",
        ListEntry::Group { .. } => "group",
        ListEntry::Project { .. } => "project",
        ListEntry::Delimiter => "delimiter",
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_lists(source: &dyn DataSource, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let entries = views::all_entries(source);

    if json {
        let out: Vec<ListJson> = entries
            .iter()
            .filter(|e| !e.is_delimiter())
            .map(|e| ListJson {
                name: e.name(source).to_string(),
                kind: entry_kind(e),
                shortcut: match e {
                    ListEntry::View { shortcut, .. } => *shortcut,
                    _ => None,
                },
                task_count: e.tasks(source).len(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for entry in &entries {
        if entry.is_delimiter() {
            continue;
        }
        let count = entry.tasks(source).len();
        if count > 0 {
            println!("{} ({})", entry.label(source), count);
        } else {
            println!("{}", entry.label(source));
        }
    }
    Ok(())
}

fn cmd_tasks(
    source: &dyn DataSource,
    args: TasksArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let entry = find_entry_by_name(source, &args.list)
        .ok_or_else(|| format!("no such list: {}", args.list))?;
    let tasks = entry.tasks(source);

    if json {
        let out = TaskListJson {
            list: entry.name(source).to_string(),
            tasks: tasks
                .into_iter()
                .map(|t| TaskJson { name: t.name })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for task in &tasks {
        println!("{}", task.name);
    }
    Ok(())
}
