#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

// Class descriptors, signatures and resolved type tokens
mod types;
pub use types::*;

// Built-in classes every descriptor can refer to
pub mod lang;

// The immutable property chain
mod path;
pub use path::*;
