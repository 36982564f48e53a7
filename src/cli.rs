use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskr", about = "Local task tracker")]
pub struct Cli {
    /// Path to the task file [default: data.json]
    #[arg(long, env = "TASKR_FILE", global = true)]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a task
    Add {
        /// Task description
        description: String,
    },

    /// Edit a task's description
    Update {
        /// Task id
        id: u64,
        /// New description
        description: String,
    },

    /// Remove a task
    Delete {
        /// Task id
        id: u64,
    },

    /// Set a task's status
    Mark {
        /// New status (todo, in-progress, done)
        status: String,
        /// Task id
        id: u64,
    },

    /// List tasks
    List {
        /// Filter (all, todo, in-progress, done)
        #[arg(default_value = "all")]
        filter: String,
    },
}
