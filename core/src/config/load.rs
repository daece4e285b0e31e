use std::path::Path;

use crate::error::ConfigError;
use crate::redirect::Stream;

use super::types::AppConfig;

/// Looked up in the working directory by [`load_default`].
pub const DEFAULT_CONFIG_FILE: &str = "buildio.toml";

const ENV_STREAM_OVERRIDES: [(Stream, &str); 3] = [
    (Stream::Stdin, "BUILDIO_STDIN"),
    (Stream::Stdout, "BUILDIO_STDOUT"),
    (Stream::Stderr, "BUILDIO_STDERR"),
];

const ENV_LOG_LEVEL: &str = "BUILDIO_LOG";

pub fn load_from_str(s: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str::<AppConfig>(s)?)
}

pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let cfg = load_from_str(&s)?;

    tracing::debug!(
        target: "buildio.config",
        path = %path.display(),
        io = %cfg.io,
        "config loaded"
    );
    Ok(cfg)
}

/// `buildio.toml` from the working directory (defaults when absent), then
/// environment overrides.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    let path = Path::new(DEFAULT_CONFIG_FILE);
    let mut cfg = if path.exists() {
        load_from_path(path)?
    } else {
        tracing::debug!(
            target: "buildio.config",
            "no {DEFAULT_CONFIG_FILE} in working directory, using defaults"
        );
        AppConfig::default()
    };

    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

pub fn apply_env_overrides(cfg: &mut AppConfig) {
    apply_env_overrides_from(cfg, |key| std::env::var(key).ok());
}

/// Applies `BUILDIO_STDIN`, `BUILDIO_STDOUT`, `BUILDIO_STDERR` and
/// `BUILDIO_LOG` as returned by `lookup`. Blank values are ignored; anything
/// else replaces the configured value verbatim.
pub fn apply_env_overrides_from<F>(cfg: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = cfg.io.to_builder();
    let mut changed = false;

    for (stream, key) in ENV_STREAM_OVERRIDES {
        if let Some(v) = lookup(key) {
            if !v.trim().is_empty() {
                tracing::debug!(
                    target: "buildio.config",
                    env = key,
                    stream = %stream,
                    descriptor = %v,
                    "redirect overridden from environment"
                );
                builder.set(stream, v);
                changed = true;
            }
        }
    }

    if changed {
        cfg.io = builder.build();
    }

    if let Some(v) = lookup(ENV_LOG_LEVEL) {
        if !v.trim().is_empty() {
            cfg.logging.level = v;
        }
    }
}
