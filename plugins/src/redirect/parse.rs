use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use buildio_core::Stream;

use super::scheme::Scheme;
use crate::error::RedirectError;

/// A decoded redirect descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    Inherit,
    Read(PathBuf),
    Write(PathBuf),
    Append(PathBuf),
    /// stderr only: share whatever stdout is connected to.
    Err2Out,
}

impl Redirect {
    pub fn scheme(&self) -> Scheme {
        match self {
            Redirect::Inherit => Scheme::Inherit,
            Redirect::Read(_) => Scheme::Read,
            Redirect::Write(_) => Scheme::Write,
            Redirect::Append(_) => Scheme::Append,
            Redirect::Err2Out => Scheme::Err2Out,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Redirect::Read(p) | Redirect::Write(p) | Redirect::Append(p) => Some(p.as_path()),
            Redirect::Inherit | Redirect::Err2Out => None,
        }
    }

    /// Encodes back into the descriptor grammar accepted by [`parse_descriptor`].
    pub fn to_descriptor(&self) -> String {
        match self.path() {
            Some(p) => format!("{}:{}", self.scheme(), p.display()),
            None => self.scheme().as_str().to_string(),
        }
    }

    /// stdin takes `inherit` or `read`; stdout takes `inherit`, `write` or
    /// `append`; stderr additionally takes `err2out`.
    pub fn check_stream(&self, stream: Stream) -> Result<(), RedirectError> {
        let ok = match (stream, self) {
            (_, Redirect::Inherit) => true,
            (Stream::Stdin, Redirect::Read(_)) => true,
            (Stream::Stdout | Stream::Stderr, Redirect::Write(_) | Redirect::Append(_)) => true,
            (Stream::Stderr, Redirect::Err2Out) => true,
            _ => false,
        };
        if ok {
            Ok(())
        } else {
            Err(RedirectError::NotApplicable {
                stream,
                scheme: self.scheme(),
            })
        }
    }
}

impl fmt::Display for Redirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_descriptor())
    }
}

impl FromStr for Redirect {
    type Err = RedirectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_descriptor(s)
    }
}

/// Decodes `inherit`, `err2out`, `read:<path>`, `write:<path>` or
/// `append:<path>`.
///
/// The keyword ends at the first `:`; everything after it is the path, taken
/// verbatim, so paths may themselves contain `:`.
pub fn parse_descriptor(descriptor: &str) -> Result<Redirect, RedirectError> {
    if descriptor.is_empty() {
        return Err(RedirectError::Empty);
    }

    let (keyword, path) = match descriptor.split_once(':') {
        Some((keyword, path)) => (keyword, Some(path)),
        None => (descriptor, None),
    };
    let scheme: Scheme = keyword.parse()?;

    if !scheme.takes_path() {
        return match path {
            Some(_) => Err(RedirectError::UnexpectedPath(scheme)),
            None if scheme == Scheme::Inherit => Ok(Redirect::Inherit),
            None => Ok(Redirect::Err2Out),
        };
    }

    let path = match path {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => return Err(RedirectError::MissingPath(scheme)),
    };
    Ok(match scheme {
        Scheme::Read => Redirect::Read(path),
        Scheme::Write => Redirect::Write(path),
        _ => Redirect::Append(path),
    })
}
