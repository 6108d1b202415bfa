use config::{Config, Environment, File};
use fcompat_domain::config::CompatConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prefix of environment overrides, e.g. `FCOMPAT__RESOLVER__REQUEST_DELAY_SECONDS`.
pub const ENV_PREFIX: &str = "FCOMPAT";
/// File stem looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_STEM: &str = "fcompat";

/// Custom error type for config loading.
#[fcompat_derive::fcompat_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file layered with environment overrides.
///
/// 1. **Base File**: an explicit `path` is required to exist. Without one, an optional
///    `fcompat.{toml,json,yaml}` in the working directory is used when present.
/// 2. **Environment Overrides**: variables prefixed with `FCOMPAT__`; nested keys use double
///    underscores (`FCOMPAT__RESOLVER__REQUEST_DELAY_SECONDS` maps to
///    `resolver.request_delay_seconds`).
///
/// Missing keys fall back to the `serde` defaults of `T`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or the merged sources
/// do not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_with_env(path.map(|p| p.as_ref().to_path_buf()), None)
}

/// Loads the engine's [`CompatConfig`].
///
/// # Errors
/// See [`load_config`].
pub fn load_compat_config(path: Option<impl AsRef<Path>>) -> Result<CompatConfig, ConfigError> {
    load_config(path)
}

/// Same as [`load_config`] with an explicit environment snapshot instead of the process
/// environment.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: config::Map<String, String>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_with_env(path.map(|p| p.as_ref().to_path_buf()), Some(env))
}

fn load_with_env<T>(
    path: Option<PathBuf>,
    env: Option<config::Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            File::from(path.as_path()).required(true)
        },
        None => {
            debug!("No config path given, probing '{DEFAULT_CONFIG_STEM}' in the working dir");
            File::with_name(DEFAULT_CONFIG_STEM).required(false)
        },
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true).source(env),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
