// SPDX-FileCopyrightText: 2026 Sysgate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sysgate - a safety gateway for system-inspection CLI utilities.
//!
//! This is the binary entry point. It wires the catalog, schema store,
//! configuration, and terminal confirmer into a [`Gateway`] and exposes
//! `list`, `run`, and `scan` subcommands.

mod confirm;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use sysgate_catalog::{SchemaStore, load_catalog, scan_directory};
use sysgate_config::SysgateConfig;
use sysgate_gateway::Gateway;
use tracing::info;

use crate::confirm::TerminalConfirmer;

/// Sysgate - a safety gateway for system-inspection CLI utilities.
#[derive(Parser, Debug)]
#[command(name = "sysgate", version, about, long_about = None)]
struct Cli {
    /// Path to an explicit config file (defaults to the XDG hierarchy).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tools in the catalog.
    List,
    /// Run one tool through the gateway and print the JSON result.
    Run {
        /// Tool name as registered in the catalog.
        tool: String,
        /// Raw arguments, joined with spaces before sanitization.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Scan a directory of executables and write a catalog record.
    Scan {
        /// Directory tree to scan for *.exe files.
        dir: PathBuf,
        /// Output path for the catalog JSON.
        #[arg(long, default_value = "binaries.json")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            sysgate_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.gateway.log_level);

    let exit_code = match cli.command {
        Commands::List => cmd_list(&config),
        Commands::Run { tool, args } => cmd_run(config, &tool, &args.join(" ")).await,
        Commands::Scan { dir, output } => cmd_scan(&dir, &output),
    };
    std::process::exit(exit_code);
}

fn load_config(
    path: Option<&Path>,
) -> Result<SysgateConfig, Vec<sysgate_config::ConfigError>> {
    match path {
        Some(path) => sysgate_config::load_and_validate_path(path),
        None => sysgate_config::load_and_validate(),
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sysgate={log_level},audit=info,warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn cmd_list(config: &SysgateConfig) -> i32 {
    let catalog = match load_catalog(Path::new(&config.paths.catalog)) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("sysgate: {e}");
            return 1;
        }
    };

    for entry in catalog.list() {
        let marker = if entry.destructive { " [destructive]" } else { "" };
        println!("{:<24} {:<12} {}{}", entry.name, entry.category, entry.exe, marker);
    }
    0
}

async fn cmd_run(config: SysgateConfig, tool: &str, args: &str) -> i32 {
    let catalog = match load_catalog(Path::new(&config.paths.catalog)) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("sysgate: {e}");
            return 1;
        }
    };
    let schemas = SchemaStore::load(Path::new(&config.paths.schemas));

    let gateway = Gateway::new(config, catalog, schemas, Arc::new(TerminalConfirmer));
    let wire = gateway.invoke(tool, args).await;

    match serde_json::to_string_pretty(&wire) {
        Ok(rendered) => {
            println!("{rendered}");
            if wire.get("error").is_some() { 1 } else { 0 }
        }
        Err(e) => {
            eprintln!("sysgate: failed to render result: {e}");
            1
        }
    }
}

fn cmd_scan(dir: &Path, output: &Path) -> i32 {
    if !dir.is_dir() {
        eprintln!("sysgate: {} is not a directory", dir.display());
        return 1;
    }

    let entries = scan_directory(dir);
    let rendered = match serde_json::to_string_pretty(&entries) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("sysgate: failed to serialize catalog: {e}");
            return 1;
        }
    };
    if let Err(e) = std::fs::write(output, rendered) {
        eprintln!("sysgate: failed to write {}: {e}", output.display());
        return 1;
    }

    info!(count = entries.len(), output = %output.display(), "catalog written");
    println!("wrote {} entries to {}", entries.len(), output.display());
    0
}
