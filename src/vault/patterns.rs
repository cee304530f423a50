//! Filename patterns for daily and weekly notes

use super::note::NoteKind;
use crate::error::PatternError;
use regex::Regex;
use std::path::{MAIN_SEPARATOR, Path};

/// `YYYY-MM-DD.md`, ASCII digits only
pub const DAILY_NOTE_FILENAME: &str = r"[0-9]{4}-[0-9]{2}-[0-9]{2}\.md";

/// `YYYY-Www.md`, ASCII digits only
pub const WEEKLY_NOTE_FILENAME: &str = r"[0-9]{4}-W[0-9]{2}\.md";

pub const DAILY_DIR: &str = "dailies";
pub const WEEKLY_DIR: &str = "weeklies";

/// Substring that marks any other path as a general note
pub const MARKDOWN_MARKER: &str = ".md";

/// Compiled daily/weekly patterns anchored to one note root
#[derive(Debug, Clone)]
pub struct NotePatterns {
    daily: Regex,
    weekly: Regex,
}

impl NotePatterns {
    /// Compile both patterns for `root`.
    ///
    /// The root is matched literally and trailing separators are ignored, so
    /// `/vault` and `/vault/` produce the same patterns.
    pub fn compile(root: &Path) -> Result<Self, PatternError> {
        let prefix = root_prefix(root);
        let sep = regex::escape(&MAIN_SEPARATOR.to_string());

        let daily = compile_pattern(
            "daily",
            format!("^{prefix}{DAILY_DIR}{sep}{DAILY_NOTE_FILENAME}$"),
        )?;
        let weekly = compile_pattern(
            "weekly",
            format!("^{prefix}{WEEKLY_DIR}{sep}{WEEKLY_NOTE_FILENAME}$"),
        )?;

        Ok(Self { daily, weekly })
    }

    /// Literal text of the daily pattern
    pub fn daily_pattern(&self) -> &str {
        self.daily.as_str()
    }

    /// Literal text of the weekly pattern
    pub fn weekly_pattern(&self) -> &str {
        self.weekly.as_str()
    }

    pub fn is_daily(&self, path: &str) -> bool {
        self.daily.is_match(path)
    }

    pub fn is_weekly(&self, path: &str) -> bool {
        self.weekly.is_match(path)
    }

    /// Classify a visited path, first match wins.
    ///
    /// Returns `None` for paths that belong in no bucket.
    pub fn classify(&self, path: &str) -> Option<NoteKind> {
        if self.is_daily(path) {
            Some(NoteKind::Daily)
        } else if self.is_weekly(path) {
            Some(NoteKind::Weekly)
        } else if path.contains(MARKDOWN_MARKER) {
            Some(NoteKind::General)
        } else {
            None
        }
    }
}

/// Escaped root followed by one separator
fn root_prefix(root: &Path) -> String {
    let root = root.to_string_lossy();
    let trimmed = root.trim_end_matches(['/', MAIN_SEPARATOR]);
    format!(
        "{}{}",
        regex::escape(trimmed),
        regex::escape(&MAIN_SEPARATOR.to_string())
    )
}

fn compile_pattern(kind: &'static str, pattern: String) -> Result<Regex, PatternError> {
    Regex::new(&pattern).map_err(|source| PatternError::CompileFailed {
        kind,
        pattern,
        source,
    })
}
