#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

#[cfg(feature = "log")]
#[allow(unused_imports)]
pub(crate) use log::{debug, trace};

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($tt:tt)*) => {};
}

#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($tt:tt)*) => {};
}

#[cfg(not(feature = "log"))]
#[allow(unused_imports)]
pub(crate) use {debug, trace};

mod error;
pub use error::*;

mod maker;
pub use maker::*;

// Thread-local path under construction
mod current;

// Accessor names to property names
mod naming;

// The handler behind every mock the façade hands out
mod handler;

// Process-wide mock cache
mod mocker;

mod magic;
pub use magic::*;
