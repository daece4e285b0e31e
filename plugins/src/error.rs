use buildio_core::Stream;
use thiserror::Error;

use crate::redirect::Scheme;

#[derive(Debug, Error)]
pub enum RedirectError {
    #[error("empty redirect descriptor")]
    Empty,

    #[error("unknown redirect scheme: {0:?}")]
    UnknownScheme(String),

    #[error("redirect scheme '{0}' requires a path, e.g. '{0}:/path/to/file'")]
    MissingPath(Scheme),

    #[error("redirect scheme '{0}' does not take a path")]
    UnexpectedPath(Scheme),

    #[error("redirect scheme '{scheme}' cannot be used for {stream}")]
    NotApplicable { stream: Stream, scheme: Scheme },

    #[error("invalid {stream} redirect {descriptor:?}")]
    Stream {
        stream: Stream,
        descriptor: String,
        #[source]
        source: Box<RedirectError>,
    },
}

impl RedirectError {
    /// The stream-independent cause, unwrapping [`RedirectError::Stream`].
    pub fn root(&self) -> &RedirectError {
        match self {
            RedirectError::Stream { source, .. } => source.root(),
            other => other,
        }
    }
}
