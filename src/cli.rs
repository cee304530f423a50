//! Command line interface for note-vault

use crate::config::Config;
use crate::vault::{Note, NoteKind, NoteVault};
use anyhow::{Context, Result};
use clap::Parser;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_COMMIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "note-vault")]
#[command(about = "Classify a note directory into daily, weekly and general notes", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Note root (default: ~/notes)
    #[arg(short, long, env = "NOTE_VAULT_ROOT")]
    pub root: Option<PathBuf>,

    /// Config file (default: platform config dir, if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Buckets to print; repeat for several
    #[arg(short, long = "kind", value_enum)]
    pub kinds: Vec<NoteKind>,

    /// Follow symbolic links during the walk
    #[arg(long)]
    pub follow_links: bool,

    /// Print a JSON object keyed by kind instead of one path per line
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the effective configuration: file, then environment, then flags
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let mut config = Config::from_file(path)?;
                config.apply_env_overrides();
                config
            }
            None => Config::new()?,
        };

        if let Some(root) = &self.root {
            config.vault.root = Some(root.clone());
        }
        if self.follow_links {
            config.vault.follow_links = true;
        }
        if !self.kinds.is_empty() {
            config.output.kinds = self.kinds.clone();
        }

        // Roots given on the command line may be relative
        if let Some(root) = config.vault.root.take() {
            let root = if root.is_absolute() {
                root
            } else {
                std::env::current_dir()
                    .context("Failed to resolve current directory")?
                    .join(root)
            };
            config.vault.root = Some(root);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Build the vault, walk it, and print the selected buckets to `out`
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = cli.resolve_config()?;

    let mut vault = NoteVault::from_config(&config.vault)?;
    vault
        .initialize()
        .with_context(|| format!("Failed to index notes under {}", vault.root().display()))?;

    let mut kinds = config.output.kinds.clone();
    kinds.sort();
    kinds.dedup();

    if cli.json {
        let listing: BTreeMap<NoteKind, &[Note]> =
            kinds.iter().map(|&kind| (kind, vault.notes(kind))).collect();
        serde_json::to_writer_pretty(&mut *out, &listing)
            .context("Failed to serialize note listing")?;
        writeln!(out)?;
    } else {
        for kind in kinds {
            for note in vault.notes(kind) {
                writeln!(out, "{}", note)?;
            }
        }
    }

    Ok(())
}
