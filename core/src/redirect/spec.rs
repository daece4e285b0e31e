use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::builder::RedirectSpecBuilder;
use super::fingerprint;
use super::stream::Stream;

/// Keyword every descriptor defaults to when it is never set.
pub const INHERIT: &str = "inherit";

lazy_static! {
    static ref INHERIT_ALL: RedirectSpec = RedirectSpec::new(
        INHERIT.to_string(),
        INHERIT.to_string(),
        INHERIT.to_string(),
    );
}

fn default_descriptor() -> String {
    INHERIT.to_string()
}

/// How the three standard streams of an externally spawned process are handled.
///
/// Each field is an opaque redirect descriptor such as `inherit`, `err2out`
/// or `write:/tmp/out.txt`. Descriptors are stored exactly as supplied; decoding
/// them into OS-level redirects is left to the consumer of this value.
///
/// Instances are immutable. Use [`RedirectSpec::builder`] to create one, or
/// [`RedirectSpec::inherit_all`] for the shared "inherit everything" value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RedirectSpec {
    #[serde(default = "default_descriptor")]
    stdin: String,

    #[serde(default = "default_descriptor")]
    stdout: String,

    #[serde(default = "default_descriptor")]
    stderr: String,
}

impl RedirectSpec {
    pub(super) fn new(stdin: String, stdout: String, stderr: String) -> Self {
        Self {
            stdin,
            stdout,
            stderr,
        }
    }

    pub fn builder() -> RedirectSpecBuilder {
        RedirectSpecBuilder::new()
    }

    /// The shared instance with all three streams set to `inherit`.
    ///
    /// Every call returns the same `'static` reference.
    pub fn inherit_all() -> &'static RedirectSpec {
        &INHERIT_ALL
    }

    pub fn stdin(&self) -> &str {
        &self.stdin
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn get(&self, stream: Stream) -> &str {
        match stream {
            Stream::Stdin => &self.stdin,
            Stream::Stdout => &self.stdout,
            Stream::Stderr => &self.stderr,
        }
    }

    /// Descriptors paired with their stream, in stdin, stdout, stderr order.
    pub fn iter(&self) -> impl Iterator<Item = (Stream, &str)> + '_ {
        Stream::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    /// A builder preloaded with this value's descriptors.
    pub fn to_builder(&self) -> RedirectSpecBuilder {
        let mut builder = RedirectSpecBuilder::new();
        builder
            .stdin(self.stdin.as_str())
            .stdout(self.stdout.as_str())
            .stderr(self.stderr.as_str());
        builder
    }

    /// Hash that stays the same across processes, platforms and toolchains.
    ///
    /// `Hash` is fine for in-memory maps; use this for anything persisted,
    /// such as cache keys derived from the configuration.
    pub fn fingerprint(&self) -> u64 {
        fingerprint::combine([&self.stderr, &self.stdin, &self.stdout].map(String::as_str))
    }
}

impl Default for RedirectSpec {
    fn default() -> Self {
        Self::inherit_all().clone()
    }
}

impl fmt::Display for RedirectSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RedirectSpec [stdin={}, stdout={}, stderr={}]",
            self.stdin, self.stdout, self.stderr
        )
    }
}
