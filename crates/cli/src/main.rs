use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use contact_list_storage::DatabaseTarget;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "contact-list")]
#[command(about = "Phone contact directory with a web form front end", long_about = None)]
struct Cli {
    /// `postgres://` URL or SQLite file path.
    #[arg(long, global = true, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Create the schema and exit
    Init,
    /// Print contacts whose name contains KEYWORD
    Search {
        #[arg(default_value = "")]
        keyword: String,
    },
    /// Print the contact named NAME, or `null`
    Get { name: String },
    /// Add a contact
    Add { name: String, number: String },
    /// Change the number of an existing contact
    Update { name: String, number: String },
    /// Remove a contact
    Delete { name: String },
}

pub(crate) fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("contact-list")
        .join("contacts.db")
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Resolves the configured database, creating the SQLite parent directory.
fn resolve_database_url(configured: Option<String>) -> Result<String> {
    let url = match configured.filter(|u| !u.trim().is_empty()) {
        Some(url) => url,
        None => default_db_path().to_string_lossy().into_owned(),
    };
    if let DatabaseTarget::Sqlite(path) = DatabaseTarget::parse(&url) {
        ensure_db_dir(Path::new(path))?;
    }
    Ok(url)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let database_url = resolve_database_url(cli.database_url)?;

    let command =
        cli.command.unwrap_or(Commands::Serve { port: 8080, host: "127.0.0.1".to_owned() });
    match command {
        Commands::Serve { port, host } => commands::serve::run(&database_url, port, &host).await,
        Commands::Init => commands::contacts::run_init(&database_url).await,
        Commands::Search { keyword } => {
            commands::contacts::run_search(&database_url, &keyword).await
        },
        Commands::Get { name } => commands::contacts::run_get(&database_url, &name).await,
        Commands::Add { name, number } => {
            commands::contacts::run_add(&database_url, &name, &number).await
        },
        Commands::Update { name, number } => {
            commands::contacts::run_update(&database_url, &name, &number).await
        },
        Commands::Delete { name } => commands::contacts::run_delete(&database_url, &name).await,
    }
}
