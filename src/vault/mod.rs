//! Note vault: one walk over a note root, bucketing every path it visits
//!
//! Classification runs in strict order and stops at the first match:
//! daily pattern, weekly pattern, any path containing `.md`, otherwise the
//! path is discarded.

mod note;
mod patterns;

pub use note::{Note, NoteKind};
pub use patterns::{
    DAILY_DIR, DAILY_NOTE_FILENAME, MARKDOWN_MARKER, NotePatterns, WEEKLY_DIR,
    WEEKLY_NOTE_FILENAME,
};

use crate::config::VaultConfig;
use crate::error::{ConfigError, TraversalError, VaultError};
use crate::paths::PlatformPaths;
use std::fs;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Default)]
struct Buckets {
    daily: Vec<Note>,
    weekly: Vec<Note>,
    general: Vec<Note>,
}

impl Buckets {
    fn push(&mut self, kind: NoteKind, note: Note) {
        match kind {
            NoteKind::Daily => self.daily.push(note),
            NoteKind::Weekly => self.weekly.push(note),
            NoteKind::General => self.general.push(note),
        }
    }
}

/// A note root and the notes found under it, split into daily, weekly and
/// general buckets in traversal order.
#[derive(Debug)]
pub struct NoteVault {
    pub(crate) root: PathBuf,
    patterns: NotePatterns,
    pub(crate) follow_links: bool,
    pub(crate) sort_entries: bool,
    daily_notes: Vec<Note>,
    weekly_notes: Vec<Note>,
    general_notes: Vec<Note>,
}

impl NoteVault {
    /// Create a vault rooted at `root`.
    ///
    /// The root is stat'ed eagerly; a missing or unreadable root is a
    /// configuration error and no vault is produced.
    pub fn create(root: impl AsRef<Path>) -> Result<Self, VaultError> {
        let root = normalize_root(root.as_ref());

        fs::metadata(&root).map_err(|source| ConfigError::RootNotFound {
            path: root.display().to_string(),
            source,
        })?;

        let patterns = NotePatterns::compile(&root)?;
        tracing::debug!("Compiled daily pattern: {}", patterns.daily_pattern());
        tracing::debug!("Compiled weekly pattern: {}", patterns.weekly_pattern());

        Ok(Self {
            root,
            patterns,
            follow_links: false,
            sort_entries: true,
            daily_notes: Vec::new(),
            weekly_notes: Vec::new(),
            general_notes: Vec::new(),
        })
    }

    /// Create a vault rooted at `<home>/notes`
    pub fn with_default_root() -> Result<Self, VaultError> {
        let root = PlatformPaths::default_note_root().ok_or(ConfigError::HomeDirUnavailable)?;
        Self::create(root)
    }

    /// Create a vault from configuration, falling back to the default root
    pub fn from_config(config: &VaultConfig) -> Result<Self, VaultError> {
        let vault = match &config.root {
            Some(root) => Self::create(root)?,
            None => Self::with_default_root()?,
        };

        Ok(vault
            .with_follow_links(config.follow_links)
            .with_sort_entries(config.sort_entries))
    }

    /// Follow symbolic links during the walk. Broken links then abort it.
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Visit directory entries in file-name order instead of raw filesystem order
    pub fn with_sort_entries(mut self, sort_entries: bool) -> Self {
        self.sort_entries = sort_entries;
        self
    }

    /// Walk the root once and classify every visited path.
    ///
    /// The first walk error aborts the traversal; notes gathered during a
    /// failed run are dropped and the vault is left as it was. Meant to be
    /// called once: a second call appends the same notes again.
    pub fn initialize(&mut self) -> Result<(), VaultError> {
        let mut walker = WalkDir::new(&self.root).follow_links(self.follow_links);
        if self.sort_entries {
            walker = walker.sort_by_file_name();
        }

        let mut buckets = Buckets::default();
        let mut visited = 0usize;

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let err = TraversalError::from(err);
                    tracing::warn!("Note walk aborted after {} paths: {}", visited, err);
                    return Err(err.into());
                }
            };
            visited += 1;

            let Some(path) = entry.path().to_str() else {
                tracing::warn!("Skipping path that is not valid UTF-8: {:?}", entry.path());
                continue;
            };
            match self.patterns.classify(path) {
                Some(kind) => {
                    tracing::debug!("Classified {} note: {}", kind, path);
                    buckets.push(kind, Note::new(path));
                }
                None => tracing::trace!("Skipping: {}", path),
            }
        }

        tracing::info!(
            "Indexed {:?}: {} daily, {} weekly, {} general notes ({} paths visited)",
            self.root,
            buckets.daily.len(),
            buckets.weekly.len(),
            buckets.general.len(),
            visited
        );

        self.daily_notes.extend(buckets.daily);
        self.weekly_notes.extend(buckets.weekly);
        self.general_notes.extend(buckets.general);
        Ok(())
    }

    /// Read a note's content. Content access is not implemented yet.
    pub fn read_note(&self, name: &str) -> Result<String, VaultError> {
        tracing::debug!("read_note requested for {}", name);
        Err(VaultError::Unimplemented("read_note"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn patterns(&self) -> &NotePatterns {
        &self.patterns
    }

    pub fn daily_notes(&self) -> &[Note] {
        &self.daily_notes
    }

    pub fn weekly_notes(&self) -> &[Note] {
        &self.weekly_notes
    }

    pub fn general_notes(&self) -> &[Note] {
        &self.general_notes
    }

    /// Notes in one bucket, in traversal order
    pub fn notes(&self, kind: NoteKind) -> &[Note] {
        match kind {
            NoteKind::Daily => self.daily_notes(),
            NoteKind::Weekly => self.weekly_notes(),
            NoteKind::General => self.general_notes(),
        }
    }

    /// Total number of classified notes across all buckets
    pub fn len(&self) -> usize {
        self.daily_notes.len() + self.weekly_notes.len() + self.general_notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Strip trailing separators so walked paths read `<root>/dailies/...`.
///
/// The filesystem root stays `/`. Roots that are not valid UTF-8 are kept as given.
fn normalize_root(root: &Path) -> PathBuf {
    let Some(text) = root.to_str() else {
        return root.to_path_buf();
    };

    let trimmed = text.trim_end_matches(['/', MAIN_SEPARATOR]);
    if trimmed.len() == text.len() {
        root.to_path_buf()
    } else if trimmed.is_empty() {
        PathBuf::from(MAIN_SEPARATOR.to_string())
    } else {
        PathBuf::from(trimmed)
    }
}
