use std::fs;
use std::path::Path;

use lingo_core::{LangProfile, LingoResult, ProfileRegistry};
use tracing::{debug, info};

/// Reads every profile file in `dir` (dot-files ignored) and merges the
/// batch into a registry. File order is made deterministic by sorting on
/// file name; the record's `name` field decides the language, not the
/// file name.
pub fn load_profiles(dir: &Path) -> LingoResult<ProfileRegistry> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        paths.push(path);
    }
    paths.sort();

    let mut profiles = Vec::with_capacity(paths.len());
    for path in &paths {
        let data = fs::read_to_string(path)?;
        let profile: LangProfile = serde_json::from_str(&data)?;
        debug!("decoded '{}' from {}", profile.name, path.display());
        profiles.push(profile);
    }

    info!("📂 Loaded {} profiles from {}", profiles.len(), dir.display());
    ProfileRegistry::from_profiles(&profiles)
}
