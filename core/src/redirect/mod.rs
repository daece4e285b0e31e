mod builder;
mod fingerprint;
mod spec;
mod stream;

pub use builder::RedirectSpecBuilder;
pub use spec::{RedirectSpec, INHERIT};
pub use stream::Stream;
