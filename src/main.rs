mod cli;
mod debug_log;
mod model;
mod ops;
mod output;
mod store;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Command};
use model::Status;
use ops::Filter;
use store::Store;

const DEFAULT_FILE: &str = "data.json";

fn resolve_file_path(cli_file: Option<String>) -> String {
    cli_file.unwrap_or_else(|| DEFAULT_FILE.to_string())
}

fn ensure_parent_dir(path: &str) -> Result<()> {
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    Ok(())
}

/// A failed save is a warning, not a failure: the mutation already happened
/// in memory and was reported, and the next successful save converges the
/// file. The in-memory state is not rolled back.
fn save_or_warn(store: &Store) {
    if let Err(e) = store.save() {
        eprintln!("warning: failed to save tasks: {e}");
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = resolve_file_path(cli.file);
    ensure_parent_dir(&path)?;
    let mut store = Store::load(&path)?;

    match cli.command {
        Command::Add { description } => {
            let id = ops::add_task(&mut store, &description)?;
            save_or_warn(&store);
            eprintln!("Added task {id}");
        }

        Command::Update { id, description } => {
            ops::update_task(&mut store, id, &description)?;
            save_or_warn(&store);
            eprintln!("Updated task {id}");
        }

        Command::Delete { id } => {
            ops::delete_task(&mut store, id)?;
            save_or_warn(&store);
            eprintln!("Deleted task {id}");
        }

        Command::Mark { status, id } => {
            let status = Status::parse(&status)?;
            ops::set_status(&mut store, id, status)?;
            save_or_warn(&store);
            eprintln!("Marked task {id} as {status}");
        }

        Command::List { filter } => {
            let filter = Filter::parse(&filter)?;
            if store.tasks().is_empty() {
                println!("No tasks found");
            } else {
                let tasks = ops::list_tasks(&store, filter);
                print!("{}", output::format_task_list(&tasks));
            }
        }
    }

    Ok(())
}
