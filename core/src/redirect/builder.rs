use super::spec::{RedirectSpec, INHERIT};
use super::stream::Stream;

/// Accumulates descriptors for a [`RedirectSpec`].
///
/// Setters store the value verbatim and never fail; the last call for a
/// stream wins. `build` can be called any number of times and each result is
/// an independent snapshot.
#[derive(Debug, Clone)]
pub struct RedirectSpecBuilder {
    stdin: String,
    stdout: String,
    stderr: String,
}

impl RedirectSpecBuilder {
    pub fn new() -> Self {
        Self {
            stdin: INHERIT.to_string(),
            stdout: INHERIT.to_string(),
            stderr: INHERIT.to_string(),
        }
    }

    pub fn stdin(&mut self, value: impl Into<String>) -> &mut Self {
        self.stdin = value.into();
        self
    }

    pub fn stdout(&mut self, value: impl Into<String>) -> &mut Self {
        self.stdout = value.into();
        self
    }

    pub fn stderr(&mut self, value: impl Into<String>) -> &mut Self {
        self.stderr = value.into();
        self
    }

    pub fn set(&mut self, stream: Stream, value: impl Into<String>) -> &mut Self {
        match stream {
            Stream::Stdin => self.stdin(value),
            Stream::Stdout => self.stdout(value),
            Stream::Stderr => self.stderr(value),
        }
    }

    pub fn build(&self) -> RedirectSpec {
        RedirectSpec::new(self.stdin.clone(), self.stdout.clone(), self.stderr.clone())
    }
}

impl Default for RedirectSpecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_store_values_verbatim() {
        for raw in ["", "  write:/tmp/out.txt  ", "WRITE:x", "bogus", "read:C:\\in.txt"] {
            let spec = RedirectSpec::builder().stdout(raw).build();
            assert_eq!(spec.stdout(), raw);
        }
    }

    #[test]
    fn last_write_wins() {
        let spec = RedirectSpec::builder().stderr("a").stderr("b").build();
        assert_eq!(spec.stderr(), "b");
    }

    #[test]
    fn set_dispatches_by_stream() {
        let spec = RedirectSpec::builder()
            .set(Stream::Stdin, "read:in")
            .set(Stream::Stdout, "write:out")
            .set(Stream::Stderr, "err2out")
            .build();
        assert_eq!(spec.stdin(), "read:in");
        assert_eq!(spec.stdout(), "write:out");
        assert_eq!(spec.stderr(), "err2out");
    }

    #[test]
    fn built_values_are_snapshots() {
        let mut builder = RedirectSpecBuilder::new();
        builder.stdout("write:first");
        let first = builder.build();

        builder.stdout("write:second");
        let second = builder.build();

        assert_eq!(first.stdout(), "write:first");
        assert_eq!(second.stdout(), "write:second");
        assert_ne!(first, second);
    }

    #[test]
    fn example_triple_differs_from_default() {
        let spec = RedirectSpec::builder()
            .stdin("read:/tmp/in.txt")
            .stdout("write:/tmp/out.txt")
            .stderr("err2out")
            .build();
        assert_eq!(spec.stdin(), "read:/tmp/in.txt");
        assert_eq!(spec.stdout(), "write:/tmp/out.txt");
        assert_eq!(spec.stderr(), "err2out");
        assert_ne!(spec, *RedirectSpec::inherit_all());
    }
}
