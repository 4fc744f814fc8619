//! 9de: control client.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use ui9_cli::cli::{Cli, Commands, ConfigAction};
use ui9_cli::commands;
use ui9_config::{config_path, ConfigSnapshot, ProcessEnv};
use ui9_ctl::{socket_path, Client};

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let client = Client::new(cli.socket.unwrap_or_else(|| socket_path(&ProcessEnv)));
    let path = cli.config.unwrap_or_else(|| config_path(&ProcessEnv));

    match cli.command {
        Commands::Ctl { words } => {
            let reply = commands::ctl(&client, &words)?;
            println!("{reply}");
            if commands::is_rejection(&reply) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Status { json } => {
            print!("{}", commands::status(&client, json)?);
            if json {
                println!();
            }
        }
        Commands::Events => {
            commands::events(&client, &mut io::stdout().lock())?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Get { key } => {
                let cfg = load(&path)?;
                println!("{}", commands::config_get(&cfg, &key)?);
            }
            ConfigAction::Set {
                key,
                value,
                no_reload,
            } => {
                commands::config_set(&path, &key, &value)?;
                if !no_reload {
                    if let Some(reply) = commands::request_reload(&client) {
                        println!("{reply}");
                    }
                }
            }
            ConfigAction::Show => {
                println!("{}", commands::config_show(&load(&path)?)?);
            }
            ConfigAction::Path => println!("{}", path.display()),
        },
    }
    Ok(ExitCode::SUCCESS)
}

fn load(path: &std::path::Path) -> Result<ConfigSnapshot> {
    ConfigSnapshot::load(path, &ProcessEnv)
        .with_context(|| format!("Failed to load {}", path.display()))
}
