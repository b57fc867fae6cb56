use std::env;
use std::fs;
use std::path::Path;

use crate::error::{ConvaiError, Result};

pub const API_KEY_VAR: &str = "ELEVENLABS_API_KEY";
pub const DEFAULT_ENV_FILE: &str = ".env";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Precedence:
    /// 1) --api-key flag
    /// 2) ELEVENLABS_API_KEY in the process environment
    /// 3) ELEVENLABS_API_KEY in the env file (default `.env`)
    pub fn resolve(explicit_key: Option<&str>, env_file: &Path) -> Result<Self> {
        let env_value = env::var(API_KEY_VAR).ok();
        Self::resolve_from(explicit_key, env_value.as_deref(), env_file)
    }

    fn resolve_from(
        explicit_key: Option<&str>,
        env_value: Option<&str>,
        env_file: &Path,
    ) -> Result<Self> {
        if let Some(key) = explicit_key.map(str::trim).filter(|key| !key.is_empty()) {
            return Ok(Self {
                api_key: key.to_string(),
            });
        }

        if let Some(key) = env_value.filter(|key| !key.is_empty()) {
            return Ok(Self {
                api_key: key.to_string(),
            });
        }

        if let Some(key) = read_env_file_key(env_file, API_KEY_VAR)? {
            return Ok(Self { api_key: key });
        }

        Err(ConvaiError::MissingApiKey(API_KEY_VAR.to_string()))
    }
}

fn read_env_file_key(path: &Path, name: &str) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConvaiError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    for line in contents.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };
        if key.trim() != name {
            continue;
        }

        let value = strip_quotes(value.trim());
        if !value.is_empty() {
            return Ok(Some(value.to_string()));
        }
    }

    Ok(None)
}

fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .or_else(|| {
            value
                .strip_prefix('\'')
                .and_then(|rest| rest.strip_suffix('\''))
        })
        .unwrap_or(value)
}
