mod load;
mod types;

pub use load::{
    apply_env_overrides, apply_env_overrides_from, load_default, load_from_path, load_from_str,
    DEFAULT_CONFIG_FILE,
};
pub use types::{AppConfig, LoggingConfig};
