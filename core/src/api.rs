//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `buildio_core::api` instead of reaching into internal modules.

pub use crate::config::{
    apply_env_overrides, apply_env_overrides_from, load_default, load_from_path, load_from_str,
    AppConfig, LoggingConfig, DEFAULT_CONFIG_FILE,
};
pub use crate::error::ConfigError;
pub use crate::redirect::{RedirectSpec, RedirectSpecBuilder, Stream, INHERIT};
