//! Runner configuration, read from the environment.

use std::path::{Path, PathBuf};

/// Environment variable naming the JSON project snapshot to load.
pub const DATA_PATH_VAR: &str = "WORLDCODEX_DATA";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Snapshot to seed the in-memory store with; empty store when unset.
    pub data_path: Option<PathBuf>,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_path = lookup(DATA_PATH_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        Self { data_path }
    }
}

/// Loads `.env.local` then `.env` from the repo root, if present.
///
/// Values already set in the process environment win.
pub fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
