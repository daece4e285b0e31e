use buildio_core::RedirectSpec;

use super::cli::OutputFormat;
use crate::error::CliError;

pub fn render_show(spec: &RedirectSpec, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{spec}\nfingerprint: {:016x}",
            spec.fingerprint()
        )),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "io": spec,
                "fingerprint": spec.fingerprint(),
            });
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }
}
