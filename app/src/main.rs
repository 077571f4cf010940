//! Command-line front end for the todo service.
//!
//! Each subcommand runs one `TodoApi` operation against the default backend
//! and prints the returned JSON, or the error message on failure.

use std::num::NonZeroU32;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;
use todo_core::{ClientConfig, PageRequest, TodoApi, TodoId, TodoItem};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "todo", about = "Manage todo items on the todo backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List one page of todos
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = PageRequest::DEFAULT_SIZE)]
        size: NonZeroU32,
        /// Only todos with this completion flag
        #[arg(long)]
        completed: Option<bool>,
    },
    /// Create a todo
    Add {
        value: String,
        #[arg(long)]
        completed: bool,
    },
    /// Flip a todo's completion flag
    Toggle { id: String },
    /// Delete a todo
    Delete { id: String },
}

async fn run(api: &TodoApi, command: Command) -> todo_core::Result<Value> {
    match command {
        Command::List {
            page,
            size,
            completed,
        } => api.list_todos(PageRequest::new(page, size, completed)).await,
        Command::Add { value, completed } => api.add_todo(&TodoItem::new(value, completed)).await,
        Command::Toggle { id } => api.update_todo_status(&TodoId::from(id)).await,
        Command::Delete { id } => api.delete_todo(&TodoId::from(id)).await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = TodoApi::new(ClientConfig::default())?;

    match run(&api, cli.command).await {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(error = ?e, "request failed");
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
