//! Configuration module for StarData
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (STARDATA_*)
//! 3. Project config (./stardata.toml)
//! 4. User config (<config dir>/stardata/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! An explicit `--config` file replaces 3 and 4.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{StarDataError, StarDataResult};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "stardata.toml";

/// Data file used when nothing else is configured
pub const DEFAULT_DATA_FILE: &str = "stars.csv";

/// Verbosity level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Level requested by a repeated `-v` flag
    pub fn from_flag_count(count: u8) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(Verbosity::Verbose),
            _ => Some(Verbosity::Debug),
        }
    }

    fn from_env(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }
}

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub format: OutputFormat,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Non-fatal configuration problem surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key the schema does not know
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// A discovered config file that could not be used
    Ignored { file: PathBuf, message: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::Ignored { file, message } => {
                write!(f, "ignoring config {}: {}", file.display(), message)
            }
        }
    }
}

/// Configuration together with where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the values were read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StarDataResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StarDataResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path).map_err(|source| StarDataError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| StarDataError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .rsplit('.')
                    .next()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning::UnknownKey {
                    line: find_line_number(&content, &key),
                    suggestion: suggest_key(&key),
                    key,
                    file: path.to_path_buf(),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Resolve configuration for a run.
    ///
    /// An `explicit` file must load; discovered project/user files that fail
    /// to load are skipped with a warning. Environment overrides are applied
    /// last.
    pub fn resolve(explicit: Option<&Path>, project_root: &Path) -> StarDataResult<LoadedConfig> {
        if let Some(path) = explicit {
            let (config, warnings) = Self::load_with_warnings(path)?;
            return Ok(LoadedConfig {
                config: config.with_env_overrides(),
                source: Some(path.to_path_buf()),
                warnings,
            });
        }

        let mut ignored = Vec::new();
        let candidates = [
            Some(project_root.join(PROJECT_CONFIG_FILE)),
            user_config_path(),
        ];

        for path in candidates.into_iter().flatten() {
            if !path.is_file() {
                continue;
            }
            match Self::load_with_warnings(&path) {
                Ok((config, mut warnings)) => {
                    ignored.append(&mut warnings);
                    return Ok(LoadedConfig {
                        config: config.with_env_overrides(),
                        source: Some(path),
                        warnings: ignored,
                    });
                }
                Err(err) => ignored.push(ConfigWarning::Ignored {
                    file: path,
                    message: err.to_string(),
                }),
            }
        }

        Ok(LoadedConfig {
            config: Self::default().with_env_overrides(),
            source: None,
            warnings: ignored,
        })
    }

    /// Apply environment variable overrides (STARDATA_* prefix)
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        // STARDATA_FILE
        if let Some(file) = lookup("STARDATA_FILE").filter(|f| !f.trim().is_empty()) {
            self.storage.data_file = PathBuf::from(file);
        }

        // STARDATA_VERBOSITY
        if let Some(verbosity) = lookup("STARDATA_VERBOSITY") {
            self.output.verbosity = Verbosity::from_env(&verbosity);
        }

        // STARDATA_OUTPUT
        if let Some(format) = lookup("STARDATA_OUTPUT") {
            self.output.format = match format.to_lowercase().as_str() {
                "json" => OutputFormat::Json,
                _ => OutputFormat::Text,
            };
        }

        self
    }
}

/// `<config dir>/stardata/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stardata").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["storage", "data_file", "output", "verbosity", "format"];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
