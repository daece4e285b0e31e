mod open;
mod parse;
mod resolve;
mod scheme;

pub use open::StdioTriple;
pub use parse::{parse_descriptor, Redirect};
pub use resolve::{resolve, ResolvedRedirects};
pub use scheme::Scheme;
