//! CLI for the urlblock lookup tool.

mod commands;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::blocklist::{load_blocklist, Blocklist};
use crate::config::{self, UrlBlockConfig};
use commands::{run_check, run_list};

/// Top-level CLI for urlblock.
#[derive(Debug, Parser)]
#[command(name = "urlblock")]
#[command(about = "urlblock: case-insensitive exact-match URL blocklist lookups", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check one or more URLs against the blocklist.
    Check {
        /// Blocklist file (one URL per line). Defaults to `blocklist_path` from config.toml.
        #[arg(long, short = 'b', value_name = "PATH")]
        blocklist: Option<PathBuf>,

        /// URLs to check. Compared case-insensitively, otherwise exactly.
        #[arg(required = true, value_name = "URL")]
        urls: Vec<String>,
    },

    /// Print the normalized blocklist entries, sorted.
    List {
        /// Blocklist file (one URL per line). Defaults to `blocklist_path` from config.toml.
        #[arg(long, short = 'b', value_name = "PATH")]
        blocklist: Option<PathBuf>,
    },
}

impl CliCommand {
    /// Parses arguments and runs the command. Returns `true` if any checked URL was blocked.
    pub fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        let cfg = match cli.command.blocklist_override() {
            // The config only supplies the blocklist path, so skip it when one is given.
            Some(_) => UrlBlockConfig::default(),
            None => config::load()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        cli.command.run(&cfg)
    }

    /// The `--blocklist` path given on the command line, if any.
    pub fn blocklist_override(&self) -> Option<&Path> {
        match self {
            CliCommand::Check { blocklist, .. } | CliCommand::List { blocklist } => {
                blocklist.as_deref()
            }
        }
    }

    pub fn run(self, cfg: &UrlBlockConfig) -> Result<bool> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match self {
            CliCommand::Check { blocklist, urls } => {
                let blocklist = open_blocklist(cfg, blocklist.as_deref())?;
                if blocklist.is_empty() {
                    eprintln!("urlblock: warning: blocklist is empty; nothing will be blocked");
                }
                let blocked = run_check(&blocklist, &urls, &mut out)?;
                Ok(blocked > 0)
            }
            CliCommand::List { blocklist } => {
                let blocklist = open_blocklist(cfg, blocklist.as_deref())?;
                run_list(&blocklist, &mut out)?;
                Ok(false)
            }
        }
    }
}

/// Loads the blocklist named on the command line or in the config.
/// An unreadable file yields an empty blocklist (logged by the loader).
fn open_blocklist(cfg: &UrlBlockConfig, override_path: Option<&Path>) -> Result<Blocklist> {
    let path = cfg.resolve_blocklist_path(override_path).ok_or_else(|| {
        anyhow!("no blocklist configured; pass --blocklist or set blocklist_path in config.toml")
    })?;
    Ok(load_blocklist(&path))
}

#[cfg(test)]
mod tests;
