use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Inspect and check stdio redirects for spawned build processes")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file to load. Defaults to ./buildio.toml when it exists.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Redirect descriptor for stdin, e.g. `read:/tmp/in.txt`.
    /// Takes precedence over the config file and BUILDIO_STDIN.
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub stdin: Option<String>,

    /// Redirect descriptor for stdout, e.g. `append:build.log`.
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub stdout: Option<String>,

    /// Redirect descriptor for stderr, e.g. `err2out`.
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub stderr: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ShowArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the effective redirects and their fingerprint (default).
    Show(ShowArgs),
    /// Decode every descriptor and report the first invalid one.
    Check,
}
