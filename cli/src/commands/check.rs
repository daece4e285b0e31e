use buildio_core::{RedirectSpec, Stream};
use buildio_plugins::{resolve, RedirectError};

/// One `<stream>: <redirect>` line per stream in canonical descriptor form.
pub fn render_check(spec: &RedirectSpec) -> Result<String, RedirectError> {
    let resolved = resolve(spec)?;
    let lines: Vec<String> = Stream::ALL
        .into_iter()
        .map(|stream| format!("{stream}: {}", resolved.get(stream)))
        .collect();
    Ok(lines.join("\n"))
}
