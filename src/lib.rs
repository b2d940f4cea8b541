//! Escape script text so it can be embedded in an XML document, and back.
#[macro_use]
extern crate tracing;

pub mod escape;
mod transform;
pub use transform::*;
pub mod unescape;
