pub mod api;
pub mod config;
pub mod error;
pub mod redirect;

pub use redirect::{RedirectSpec, RedirectSpecBuilder, Stream};
