//! # Note Vault - daily, weekly and general note indexing
//!
//! Scans a directory tree of text notes once and sorts every path it visits
//! into one of three buckets, based on filename pattern and location:
//!
//! - **Daily notes**: `<root>/dailies/YYYY-MM-DD.md`
//! - **Weekly notes**: `<root>/weeklies/YYYY-Www.md`
//! - **General notes**: any other path containing `.md`
//!
//! Everything else is skipped. Note contents are never read or modified.
//!
//! ## Modules
//!
//! - [`vault`]: `NoteVault`, the filename patterns, and the classifying walk
//! - [`config`]: Configuration management with environment variable support
//! - [`cli`]: Command line front end used by the `note-vault` binary
//! - [`error`]: Error types for configuration, pattern and traversal failures
//! - [`paths`]: Home, default root and config paths
//!
//! ## Usage Example
//!
//! ```no_run
//! use note_vault::vault::NoteVault;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut vault = NoteVault::create("/home/me/notes")?;
//!     vault.initialize()?;
//!
//!     for daily in vault.daily_notes() {
//!         println!("{}", daily);
//!     }
//!     Ok(())
//! }
//! ```

/// Command line front end
pub mod cli;

/// Configuration management with environment variable overrides
pub mod config;

/// Error types and utilities
pub mod error;

/// Platform paths: home directory, default note root, config file
pub mod paths;

/// Note vault: patterns, classification and the directory walk
pub mod vault;
