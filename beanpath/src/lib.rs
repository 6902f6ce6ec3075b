#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub use beanpath_core::*;
pub use beanpath_reflect::*;

// Paths and mocks cross threads freely; captures stay on their own.
static_assertions::assert_impl_all!(Path: Send, Sync, Clone);
static_assertions::assert_impl_all!(Mock: Send, Sync);
static_assertions::assert_impl_all!(Returned: Send, Sync, Clone);
static_assertions::assert_impl_all!(BeanPathError: Send, Sync, core::error::Error);
static_assertions::assert_impl_all!(TypeToken: Send, Sync, core::hash::Hash, Eq);
static_assertions::assert_impl_all!(Class: Sync);
