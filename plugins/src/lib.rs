//! Decoding of redirect descriptors held by [`buildio_core::RedirectSpec`].
//!
//! The core crate stores descriptors as opaque strings; this crate owns the
//! grammar and turns a spec into `std::process::Stdio` handles.

pub mod error;
pub mod redirect;

pub use error::RedirectError;
pub use redirect::{parse_descriptor, resolve, Redirect, ResolvedRedirects, Scheme, StdioTriple};
