use buildio_core::{RedirectSpec, Stream};

use super::parse::{parse_descriptor, Redirect};
use crate::error::RedirectError;

/// All three streams of a [`RedirectSpec`], decoded and checked against the
/// streams they are attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRedirects {
    stdin: Redirect,
    stdout: Redirect,
    stderr: Redirect,
}

impl ResolvedRedirects {
    pub fn stdin(&self) -> &Redirect {
        &self.stdin
    }

    pub fn stdout(&self) -> &Redirect {
        &self.stdout
    }

    pub fn stderr(&self) -> &Redirect {
        &self.stderr
    }

    pub fn get(&self, stream: Stream) -> &Redirect {
        match stream {
            Stream::Stdin => &self.stdin,
            Stream::Stdout => &self.stdout,
            Stream::Stderr => &self.stderr,
        }
    }
}

/// Decodes stdin, stdout and stderr in that order, stopping at the first
/// rejected descriptor.
pub fn resolve(spec: &RedirectSpec) -> Result<ResolvedRedirects, RedirectError> {
    let resolved = ResolvedRedirects {
        stdin: resolve_stream(spec, Stream::Stdin)?,
        stdout: resolve_stream(spec, Stream::Stdout)?,
        stderr: resolve_stream(spec, Stream::Stderr)?,
    };

    tracing::debug!(
        target: "buildio.redirect",
        stdin = %resolved.stdin,
        stdout = %resolved.stdout,
        stderr = %resolved.stderr,
        "redirects resolved"
    );
    Ok(resolved)
}

fn resolve_stream(spec: &RedirectSpec, stream: Stream) -> Result<Redirect, RedirectError> {
    let descriptor = spec.get(stream);
    parse_descriptor(descriptor)
        .and_then(|redirect| {
            redirect.check_stream(stream)?;
            Ok(redirect)
        })
        .map_err(|e| {
            tracing::debug!(
                target: "buildio.redirect",
                stream = %stream,
                descriptor = %descriptor,
                error = %e,
                "redirect descriptor rejected"
            );
            RedirectError::Stream {
                stream,
                descriptor: descriptor.to_string(),
                source: Box::new(e),
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn inherit_all_resolves_to_inherit() {
        let resolved = resolve(RedirectSpec::inherit_all()).unwrap();
        for stream in Stream::ALL {
            assert_eq!(*resolved.get(stream), Redirect::Inherit);
        }
    }

    #[test]
    fn full_spec_resolves() {
        let spec = RedirectSpec::builder()
            .stdin("read:/tmp/in.txt")
            .stdout("write:/tmp/out.txt")
            .stderr("err2out")
            .build();
        let resolved = resolve(&spec).unwrap();
        assert_eq!(
            *resolved.stdin(),
            Redirect::Read(PathBuf::from("/tmp/in.txt"))
        );
        assert_eq!(
            *resolved.stdout(),
            Redirect::Write(PathBuf::from("/tmp/out.txt"))
        );
        assert_eq!(*resolved.stderr(), Redirect::Err2Out);
    }

    #[test]
    fn error_names_the_offending_stream() {
        let spec = RedirectSpec::builder().stdout("err2out").build();
        let err = resolve(&spec).unwrap_err();
        match &err {
            RedirectError::Stream {
                stream, descriptor, ..
            } => {
                assert_eq!(*stream, Stream::Stdout);
                assert_eq!(descriptor, "err2out");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(err.root(), RedirectError::NotApplicable { .. }));
    }

    #[test]
    fn first_bad_stream_wins() {
        let spec = RedirectSpec::builder()
            .stdin("")
            .stderr("bogus")
            .build();
        let err = resolve(&spec).unwrap_err();
        assert!(matches!(
            err,
            RedirectError::Stream {
                stream: Stream::Stdin,
                ..
            }
        ));
        assert!(matches!(err.root(), RedirectError::Empty));
    }

    #[test]
    fn rejection_is_left_to_the_caller_to_report() {
        let captured = CapturedLog::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish();

        let spec = RedirectSpec::builder().stdin("bogus").build();
        tracing::subscriber::with_default(subscriber, || {
            assert!(resolve(&spec).is_err());
        });

        let logged = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logged, "");
    }
}
