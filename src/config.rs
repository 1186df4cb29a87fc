use crate::*;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, ErrorKind, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

pub const CONFIG_FILE: &str = "jsonx.conf";
pub const DEFAULT_EDITOR: &str = "TextEdit";

/// Persisted user preferences, stored as `{"editor": "<name>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Application used to open decompressed files.
    pub editor: String,
}

impl Config {
    pub fn new(editor: impl Into<String>) -> Self {
        Self {
            editor: editor.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_EDITOR)
    }
}

/// `$HOME/jsonx.conf`
#[throws]
pub fn resolve_path() -> PathBuf {
    dirs::home_dir().ok_or(Error::HomeDir)?.join(CONFIG_FILE)
}

#[throws]
pub fn load() -> Config {
    load_from(&resolve_path()?)?
}

#[throws]
pub fn save(config: &Config) {
    save_to(&resolve_path()?, config)?
}

/// Reads the config at `path`. A missing file yields the defaults and is
/// never created as a side effect.
#[throws]
pub fn load_from(path: &Path) -> Config {
    match File::open(path) {
        Ok(file) => {
            let config: Config =
                serde_json::from_reader(BufReader::new(file)).map_err(|err| Error::ConfigRead {
                    path: path.to_path_buf(),
                    source: err.into(),
                })?;
            debug!("Loaded config from {}", path.display());
            config
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("No config at {}, using defaults", path.display());
            Config::default()
        }
        Err(source) => throw!(Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Creates or truncates `path` and writes `config` into it.
#[throws]
pub fn save_to(path: &Path, config: &Config) {
    let write_error = |source| Error::ConfigWrite {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(write_error)?;
    serde_json::to_writer(&mut file, config).map_err(|err| write_error(err.into()))?;
    file.write_all(b"\n").map_err(write_error)?;
    info!("Default editor set to {:?} in {}", config.editor, path.display());
}
