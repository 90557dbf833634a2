//! Config command - inspect and edit the JSON configuration file.
//!
//! Every subcommand works on the file named by `--config`, or on the default
//! location when that flag is absent.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use boletas_core::models::config::BoletasConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration as JSON
    Show,

    /// Write a configuration file with default values
    Init {
        /// Write here instead of the config location
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one value by dotted key (e.g. "export.delimiter")
    Get { key: String },

    /// Change one value by dotted key
    Set { key: String, value: String },

    /// Print the config file location
    Path,
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => {
            if !path.exists() {
                eprintln!("{} {} not found, showing defaults", style("ℹ").blue(), path.display());
            }
            println!("{}", serde_json::to_string_pretty(&load_or_default(&path)?)?);
        }
        ConfigCommand::Init { output, force } => {
            let target = output.unwrap_or(path);
            if target.exists() && !force {
                anyhow::bail!("{} already exists, pass --force to overwrite", target.display());
            }
            save(&BoletasConfig::default(), &target)?;
            println!("{} Wrote defaults to {}", style("✓").green(), target.display());
        }
        ConfigCommand::Get { key } => {
            let json = serde_json::to_value(load_or_default(&path)?)?;
            println!("{}", serde_json::to_string_pretty(lookup(&json, &key)?)?);
        }
        ConfigCommand::Set { key, value } => {
            let updated = apply(load_or_default(&path)?, &key, &value)?;
            save(&updated, &path)?;
            println!("{} {} updated in {}", style("✓").green(), key, path.display());
        }
        ConfigCommand::Path => {
            let status = if path.exists() {
                style("exists").green()
            } else {
                style("not created").yellow()
            };
            println!("{} ({})", path.display(), status);
        }
    }

    Ok(())
}

pub(crate) fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("boletas")
        .join("config.json")
}

fn load_or_default(path: &Path) -> anyhow::Result<BoletasConfig> {
    if path.exists() {
        Ok(BoletasConfig::from_file(path)?)
    } else {
        Ok(BoletasConfig::default())
    }
}

fn save(config: &BoletasConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;
    Ok(())
}

fn lookup<'a>(json: &'a Value, key: &str) -> anyhow::Result<&'a Value> {
    key.split('.')
        .try_fold(json, |node, part| node.get(part))
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))
}

/// Replace the value at `key`, keeping the config valid.
///
/// String settings take the raw text as-is; other settings parse it as JSON
/// (`true`, `3`, ...).
fn apply(config: BoletasConfig, key: &str, raw: &str) -> anyhow::Result<BoletasConfig> {
    let mut json = serde_json::to_value(config)?;

    let slot = key
        .split('.')
        .try_fold(&mut json, |node, part| node.get_mut(part))
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;

    *slot = match &*slot {
        Value::String(_) => Value::String(raw.to_string()),
        Value::Object(_) => anyhow::bail!("{} is a section, set one of its keys", key),
        _ => serde_json::from_str(raw)
            .map_err(|_| anyhow::anyhow!("Invalid value for {}: {}", key, raw))?,
    };

    serde_json::from_value(json).map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))
}
