mod archive;
mod header;
mod index;
mod not_found;
mod post;
mod preamble;

pub mod social;

pub use archive::*;
pub use index::*;
pub use not_found::*;
pub use post::*;
pub use preamble::*;
