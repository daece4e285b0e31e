use buildio_core::api::ConfigError;
use buildio_plugins::RedirectError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("{}: {}", .0, .0.root())]
    Redirect(#[from] RedirectError),
    #[error("logging setup failed: {0}")]
    Logging(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
