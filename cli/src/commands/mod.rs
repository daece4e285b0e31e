pub mod check;
pub mod cli;
pub mod show;

use buildio_core::RedirectSpec;

/// Layers command-line overrides on top of the configured spec.
pub fn effective_spec(configured: &RedirectSpec, args: &cli::Args) -> RedirectSpec {
    let mut builder = configured.to_builder();
    if let Some(v) = &args.stdin {
        builder.stdin(v.as_str());
    }
    if let Some(v) = &args.stdout {
        builder.stdout(v.as_str());
    }
    if let Some(v) = &args.stderr {
        builder.stderr(v.as_str());
    }
    builder.build()
}
