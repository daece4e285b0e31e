use std::fmt;
use std::str::FromStr;

use crate::error::RedirectError;

/// Keywords that start a redirect descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Append,
    Err2Out,
    Inherit,
    Read,
    Write,
}

impl Scheme {
    pub const ALL: [Scheme; 5] = [
        Scheme::Append,
        Scheme::Err2Out,
        Scheme::Inherit,
        Scheme::Read,
        Scheme::Write,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Append => "append",
            Scheme::Err2Out => "err2out",
            Scheme::Inherit => "inherit",
            Scheme::Read => "read",
            Scheme::Write => "write",
        }
    }

    /// Whether descriptors with this scheme carry a `:<path>` suffix.
    pub fn takes_path(self) -> bool {
        matches!(self, Scheme::Append | Scheme::Read | Scheme::Write)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = RedirectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == s)
            .ok_or_else(|| RedirectError::UnknownScheme(s.to_string()))
    }
}
