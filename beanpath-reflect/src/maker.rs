use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::format;
use alloc::string::{String, ToString};
use core::sync::atomic::{AtomicU64, Ordering};

use beanpath_core::{Class, DeclaredMethod, TypeToken, Value};

use crate::{BeanPathError, MakeError, current, trace};

/// Receives the calls a [`Mock`] intercepts.
///
/// Only overridable methods reach the handler: `equals`, `hashCode` and
/// `toString` are answered by the mock itself, and private, static and
/// final methods run their real body instead.
pub trait InvocationHandler: Send + Sync {
    /// Handles the call of `method` on `mock` with `args`
    fn invoke(
        &self,
        mock: &Mock,
        method: DeclaredMethod,
        args: &[Value],
    ) -> Result<Returned, BeanPathError>;

    /// Called when a call on the mock fails before reaching the handler,
    /// e.g. because the method does not exist.
    fn abandon(&self) {}
}

/// Generates [`Mock`]s: stand-ins for a class that route every overridable
/// method call through an [`InvocationHandler`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MockMaker;

static COUNTER: AtomicU64 = AtomicU64::new(0);

impl MockMaker {
    /// Generates a mock of `token` delegating to `handler`.
    ///
    /// Fails for classes that can not be extended: final classes, enums,
    /// arrays and primitives.
    pub fn create_mock(
        token: TypeToken,
        handler: impl InvocationHandler + 'static,
    ) -> Result<Mock, MakeError> {
        let class = token.raw_class();
        if class.primitive().is_some() {
            return Err(MakeError::Primitive { class });
        }
        if class.is_final() {
            return Err(MakeError::FinalClass { class });
        }

        let type_name = format!(
            "beanpath.BeanPathMock_of_{}_${}",
            class.name,
            COUNTER.fetch_add(1, Ordering::Relaxed)
        );
        trace!("Generated {} for {}", type_name, token);

        Ok(Mock {
            token,
            class,
            type_name,
            handler: Box::new(handler),
        })
    }
}

/// A stand-in for an instance of a class.
///
/// Methods are invoked by name through [`Mock::invoke`] and
/// [`Mock::invoke_with`]. Mocks have identity semantics: a mock equals only
/// itself, hashes by address, and displays as `<type name>@<hex hash>`.
pub struct Mock {
    token: TypeToken,
    class: &'static Class,
    type_name: String,
    handler: Box<dyn InvocationHandler>,
}

impl Mock {
    /// The type this mock stands in for
    pub fn token(&self) -> &TypeToken {
        &self.token
    }

    /// The class this mock extends
    pub fn class(&self) -> &'static Class {
        self.class
    }

    /// Name of the generated type, e.g.
    /// `beanpath.BeanPathMock_of_beans.Person_$0`
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Address-derived hash, stable for the lifetime of the mock
    pub fn identity_hash(&self) -> u32 {
        let addr = core::ptr::from_ref(self) as usize as u64;
        (addr ^ (addr >> 32)) as u32
    }

    /// Invokes the no-argument method `name`
    pub fn invoke(&self, name: &str) -> Result<Returned, BeanPathError> {
        self.invoke_with(name, &[])
    }

    /// Invokes the method `name` taking `args.len()` arguments.
    ///
    /// `equals` invoked this way always answers `false`: a [`Value`] never
    /// holds a mock, not even this one. Compare mocks with `==` instead,
    /// which is identity.
    pub fn invoke_with(&self, name: &str, args: &[Value]) -> Result<Returned, BeanPathError> {
        let Some(method) = self.class.find_method(name, args.len()) else {
            self.handler.abandon();
            return Err(BeanPathError::NoSuchMethod {
                class: self.class,
                method: name.to_string(),
                arity: args.len(),
            });
        };

        if let Some(value) = self.identity_method(name, args) {
            return Ok(Returned::Value(value));
        }

        let method = method.bridged();
        if !method.is_interceptable() {
            trace!("{} falls through to {}", self.type_name, method.method);
            return Ok(Returned::Value(method.method.call_real(args)));
        }

        self.handler.invoke(self, method, args)
    }

    fn identity_method(&self, name: &str, args: &[Value]) -> Option<Value> {
        match (name, args.len()) {
            // plain values are never mocks
            ("equals", 1) => Some(Value::Bool(false)),
            ("hashCode", 0) => Some(Value::Int(self.identity_hash() as i32)),
            ("toString", 0) => Some(Value::Str(Cow::Owned(self.to_string()))),
            _ => None,
        }
    }
}

impl PartialEq for Mock {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other)
    }
}

impl Eq for Mock {}

impl core::hash::Hash for Mock {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::ptr::hash(self, state)
    }
}

impl core::fmt::Display for Mock {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}@{:x}", self.type_name, self.identity_hash())
    }
}

impl core::fmt::Debug for Mock {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mock")
            .field("token", &self.token)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// What an invocation on a [`Mock`] returned: a plain value, or another mock
/// to continue the chain on.
#[derive(Debug, Clone, PartialEq)]
pub enum Returned {
    /// A plain value: a primitive default, a real method's result, or `Null`
    Value(Value),

    /// A mock of the returned type
    Mock(&'static Mock),
}

impl Returned {
    /// Invokes the no-argument method `name` on the returned mock.
    ///
    /// Fails with [`BeanPathError::NotAMock`] when a plain value was returned.
    pub fn invoke(&self, name: &str) -> Result<Returned, BeanPathError> {
        self.invoke_with(name, &[])
    }

    /// Invokes the method `name` with `args` on the returned mock.
    ///
    /// Fails with [`BeanPathError::NotAMock`] when a plain value was returned,
    /// dropping the path the broken chain recorded on this thread.
    pub fn invoke_with(&self, name: &str, args: &[Value]) -> Result<Returned, BeanPathError> {
        match self {
            Returned::Mock(mock) => mock.invoke_with(name, args),
            Returned::Value(value) => {
                current::evict();
                Err(BeanPathError::NotAMock {
                    method: name.to_string(),
                    value: value.clone(),
                })
            }
        }
    }

    /// The returned mock, if any
    pub fn as_mock(&self) -> Option<&'static Mock> {
        match self {
            Returned::Mock(mock) => Some(*mock),
            Returned::Value(_) => None,
        }
    }

    /// The returned value, if any
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Returned::Value(value) => Some(value),
            Returned::Mock(_) => None,
        }
    }

    /// Whether `Null` was returned
    pub fn is_null(&self) -> bool {
        matches!(self, Returned::Value(Value::Null))
    }
}

impl From<&'static Mock> for Returned {
    fn from(mock: &'static Mock) -> Self {
        Returned::Mock(mock)
    }
}

impl From<Value> for Returned {
    fn from(value: Value) -> Self {
        Returned::Value(value)
    }
}
