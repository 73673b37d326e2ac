//! Engine configuration loaded from the environment.

use std::path::PathBuf;

/// Default tracing filter when neither `RUST_LOG` nor `TALLY_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "tally_engine=info";

/// Runtime configuration for the engine binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fallback tracing filter (`RUST_LOG` still wins when set)
    pub log_filter: String,
    /// Scenario file replayed when no path is given on the command line
    pub scenario_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            scenario_path: None,
        }
    }
}

impl EngineConfig {
    /// Load `.env.local` / `.env` from the repo root, then read the process
    /// environment.
    pub fn from_env() -> Self {
        load_dotenv_from_repo_root();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();
        Self {
            log_filter: get("TALLY_LOG").unwrap_or(defaults.log_filter),
            scenario_path: get("TALLY_SCENARIO").map(PathBuf::from),
        }
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
