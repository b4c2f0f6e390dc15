//! User Directory - command-line access to a seeded in-memory directory.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::{AppError, AppResult};
use user_directory_lib::config::{UserDirectoryConfig, ENV_SEED_FILE};
use user_directory_lib::service::UserDirectory;

#[derive(Parser)]
#[command(name = "user-directory")]
#[command(author, version, about = "In-memory user directory", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file with the users to seed the directory with
    #[arg(short, long, global = true, env = ENV_SEED_FILE)]
    seed_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every user as a JSON line
    List,
    /// Look up a user by username and password
    Login {
        #[arg(short, long)]
        username: Option<String>,
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Print the users keyed by id
    ById,
    /// Delete a user through the persistence collaborator
    Delete {
        #[arg(long)]
        id: i32,
        /// How many times to issue the delete
        #[arg(long, default_value = "1")]
        repeat: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = UserDirectoryConfig::from_env().with_seed_file(cli.seed_file.clone());
    init_tracing(cli.verbose, &config.service.log_level);
    tracing::debug!(?config, "Configuration loaded");

    match run(cli.command, &config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!(code = e.code(), "Command failed: {}", e);
            eprintln!("error: {}", e.user_message());
            std::process::exit(2);
        }
    }
}

/// Run a command. `Ok(false)` means the command ran but found nothing.
fn run(command: Commands, config: &UserDirectoryConfig) -> AppResult<bool> {
    let directory = user_directory_lib::bootstrap(config)?;

    match command {
        Commands::List => {
            for user in directory.get_all() {
                println!("{}", to_json(user)?);
            }
            Ok(true)
        }
        Commands::Login { username, password } => {
            match directory.login(username.as_deref(), password.as_deref())? {
                Some(user) => {
                    println!("{}", to_json(user)?);
                    Ok(true)
                }
                None => {
                    println!("no matching user");
                    Ok(false)
                }
            }
        }
        Commands::ById => {
            let by_id: BTreeMap<_, _> = directory.get_all_converted_by_id().into_iter().collect();
            let pretty = serde_json::to_string_pretty(&by_id)
                .map_err(|e| AppError::internal(e.to_string()))?;
            println!("{}", pretty);
            Ok(true)
        }
        Commands::Delete { id, repeat } => delete(&directory, id, repeat),
    }
}

fn delete(directory: &UserDirectory, id: i32, repeat: u32) -> AppResult<bool> {
    for _ in 0..repeat {
        println!("{}", directory.delete(id)?);
    }
    println!("users in directory: {}", directory.len());
    Ok(true)
}

fn to_json<T: serde::Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string(value).map_err(|e| AppError::internal(e.to_string()))
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool, configured_level: &str) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| configured_level.to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
