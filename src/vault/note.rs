//! Note identifiers and note categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A note, identified by the path at which the walk found it.
///
/// No content is parsed; the path is treated as an opaque identifier. It is
/// always valid UTF-8: the walk skips paths that are not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note(String);

impl Note {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Note {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl From<&str> for Note {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl AsRef<str> for Note {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The bucket a note is classified into
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    /// `dailies/YYYY-MM-DD.md`
    Daily,
    /// `weeklies/YYYY-Www.md`
    Weekly,
    /// Any other path containing `.md`
    General,
}

impl NoteKind {
    /// All kinds, in classification precedence order
    pub const ALL: [NoteKind; 3] = [NoteKind::Daily, NoteKind::Weekly, NoteKind::General];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteKind::Daily => "daily",
            NoteKind::Weekly => "weekly",
            NoteKind::General => "general",
        }
    }
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(NoteKind::Daily),
            "weekly" => Ok(NoteKind::Weekly),
            "general" => Ok(NoteKind::General),
            other => Err(format!(
                "unknown note kind '{}', expected daily, weekly or general",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_display_is_path() {
        let note = Note::new("/vault/dailies/2024-01-05.md");
        assert_eq!(note.to_string(), "/vault/dailies/2024-01-05.md");
        assert_eq!(note.path(), Path::new("/vault/dailies/2024-01-05.md"));
    }

    #[test]
    fn test_note_serializes_as_plain_string() {
        let note = Note::from("/vault/notes/todo.md");
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, "\"/vault/notes/todo.md\"");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("daily".parse::<NoteKind>().unwrap(), NoteKind::Daily);
        assert_eq!("Weekly".parse::<NoteKind>().unwrap(), NoteKind::Weekly);
        assert_eq!("GENERAL".parse::<NoteKind>().unwrap(), NoteKind::General);
        assert!("monthly".parse::<NoteKind>().is_err());
    }

    #[test]
    fn test_kind_display_round_trips_serde_name() {
        for kind in NoteKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }
}
