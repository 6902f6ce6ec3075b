use alloc::string::String;

use beanpath_core::{Class, TypeError, TypeToken, Value};
use owo_colors::OwoColorize;

/// Errors that can occur when capturing bean paths.
#[derive(Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum BeanPathError {
    /// A mock was asked to invoke a method its class does not have
    NoSuchMethod {
        /// The mocked class
        class: &'static Class,
        /// The requested method name
        method: String,
        /// The number of arguments given
        arity: usize,
    },

    /// A capture was attempted while no path was being recorded
    NoCurrentPath,

    /// A mock could not be generated for a type
    MockCreation {
        /// The type to mock
        token: TypeToken,
        /// Why the mock maker refused it
        cause: MakeError,
    },

    /// A chain was continued past a value that is not a mock, typically the
    /// `Null` returned for a property of a final type
    NotAMock {
        /// The method that was invoked on the value
        method: String,
        /// The value itself
        value: Value,
    },

    /// A type token could not be built
    InvalidType(TypeError),
}

impl core::fmt::Display for BeanPathError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BeanPathError::NoSuchMethod {
                class,
                method,
                arity,
            } => write!(
                f,
                "No method '{}' taking {} argument(s) in {}",
                method.red(),
                arity,
                class.blue()
            ),
            BeanPathError::NoCurrentPath => write!(
                f,
                "No current path. Probably your call chain contains a {} method.",
                "final".yellow()
            ),
            BeanPathError::MockCreation { token, cause } => {
                write!(f, "Failed to mock type [{}]: {}", token.blue(), cause)
            }
            BeanPathError::NotAMock { method, value } => write!(
                f,
                "Cannot invoke '{}' on {}: not a mock, the chain ended at a final type",
                method.red(),
                value.yellow()
            ),
            BeanPathError::InvalidType(err) => write!(f, "Invalid type: {}", err),
        }
    }
}

impl core::error::Error for BeanPathError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            BeanPathError::MockCreation { cause, .. } => Some(cause),
            BeanPathError::InvalidType(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TypeError> for BeanPathError {
    fn from(err: TypeError) -> Self {
        BeanPathError::InvalidType(err)
    }
}

/// Reasons for [`crate::MockMaker`] to refuse a class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MakeError {
    /// The class can not be extended: final classes, enums and arrays
    FinalClass {
        /// The class
        class: &'static Class,
    },

    /// Primitives have no instances to stand in for
    Primitive {
        /// The primitive class
        class: &'static Class,
    },
}

impl core::fmt::Display for MakeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MakeError::FinalClass { class } => {
                write!(f, "Cannot subclass final class {}", class.red())
            }
            MakeError::Primitive { class } => {
                write!(f, "Cannot subclass primitive type {}", class.red())
            }
        }
    }
}

impl core::error::Error for MakeError {}
