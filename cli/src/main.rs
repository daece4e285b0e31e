use clap::Parser;
mod commands;
mod error;
use buildio_core::api as core_api;
use commands::cli;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() {
    let exit = match real_main() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

fn real_main() -> Result<i32, error::CliError> {
    let args = cli::Args::parse();

    let cfg = load_config(&args, |key| std::env::var(key).ok())?;
    init_tracing(&cfg.logging).map_err(error::CliError::Logging)?;

    let spec = commands::effective_spec(&cfg.io, &args);
    tracing::debug!(target: "buildio.cli", io = %spec, "effective redirects");

    let command = args
        .command
        .clone()
        .unwrap_or(cli::Commands::Show(cli::ShowArgs {
            format: cli::OutputFormat::Text,
        }));

    match command {
        cli::Commands::Show(show_args) => {
            println!("{}", commands::show::render_show(&spec, show_args.format)?);
        }
        cli::Commands::Check => {
            println!("{}", commands::check::render_check(&spec)?);
        }
    }
    Ok(0)
}

/// `--config` when given, with `lookup` supplying the environment overrides;
/// otherwise `load_default`, which reads the process environment itself.
fn load_config<F>(args: &cli::Args, lookup: F) -> Result<core_api::AppConfig, error::CliError>
where
    F: Fn(&str) -> Option<String>,
{
    match &args.config {
        Some(path) => {
            let mut cfg = core_api::load_from_path(path)?;
            core_api::apply_env_overrides_from(&mut cfg, lookup);
            Ok(cfg)
        }
        None => Ok(core_api::load_default()?),
    }
}

fn exit_code_for_error(e: &error::CliError) -> i32 {
    // 2: rejected redirect descriptor
    // 11: config error
    // 50: internal/uncategorized
    match e {
        error::CliError::Redirect(_) => 2,
        error::CliError::Config(_) => 11,
        error::CliError::Logging(_) => 11,
        error::CliError::Json(_) => 50,
    }
}

fn init_tracing(logging: &core_api::LoggingConfig) -> Result<(), String> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(logging.level.clone()).map_err(|e| e.to_string())?,
    };

    let json_layer = logging.json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });

    let text_layer = (!logging.json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    Ok(())
}
