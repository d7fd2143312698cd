// src/release.rs

use log::warn;

use std::fs;
use std::path::PathBuf;

/// Tracks whether the "what's new" notice for the running version has been
/// shown and dismissed.
#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    pub last_seen_version: Option<String>,
    pub acknowledged_this_session: bool,
}

/// Where the last acknowledged version is remembered between runs.
pub trait VersionStore {
    fn load_last_seen(&self) -> Option<String>;
    fn save_last_seen(&self, version: &str);
}

/// File-backed store holding the bare version string. Failures to persist
/// only mean the notice shows again next run.
pub struct FileVersionStore {
    path: PathBuf,
}

impl FileVersionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileVersionStore { path: path.into() }
    }
}

impl VersionStore for FileVersionStore {
    fn load_last_seen(&self) -> Option<String> {
        let text = fs::read_to_string(&self.path).ok()?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn save_last_seen(&self, version: &str) {
        if let Err(e) = fs::write(&self.path, version) {
            warn!("could not persist seen version to {}: {e}", self.path.display());
        }
    }
}

pub fn load_state(store: &dyn VersionStore) -> NotificationState {
    NotificationState {
        last_seen_version: store.load_last_seen(),
        acknowledged_this_session: false,
    }
}

/// The notice shows once per new version, until acknowledged.
pub fn should_notify(state: &NotificationState, current_version: &str) -> bool {
    if state.acknowledged_this_session {
        return false;
    }
    state.last_seen_version.as_deref() != Some(current_version)
}

pub fn acknowledge(
    state: &mut NotificationState,
    current_version: &str,
    store: &dyn VersionStore,
) {
    state.acknowledged_this_session = true;
    state.last_seen_version = Some(current_version.to_string());
    store.save_last_seen(current_version);
}

/// Pulls the entry for `version` out of a markdown release-notes document.
/// Entries start with a `- **v<version>` line and run until the next entry.
pub fn latest_release_summary(notes: &str, version: &str) -> Option<String> {
    let header_prefix = format!("- **v{version}");
    let mut lines = notes.lines();
    let mut collected: Vec<&str> = Vec::new();

    for line in lines.by_ref() {
        if line.trim_start().starts_with(&header_prefix) {
            collected.push(line);
            break;
        }
    }
    if collected.is_empty() {
        return None;
    }
    for line in lines {
        if line.trim_start().starts_with("- **v") {
            break;
        }
        collected.push(line);
    }

    let summary = collected.join("\n").trim_end().to_string();
    Some(summary)
}


// src/release.rs
