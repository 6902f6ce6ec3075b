use bitflags::bitflags;

use super::{Class, GenericType, Value};
use crate::lang;

/// Real behavior of a method, run when a call cannot be intercepted.
pub type MethodBody = fn(args: &[Value]) -> Value;

/// Describes a method of a [`Class`]
#[derive(Clone, Copy)]
#[non_exhaustive]
pub struct Method {
    /// Name of the method, e.g. `getDocument`
    pub name: &'static str,

    /// Declared parameter types
    pub params: &'static [GenericType],

    /// Declared return type, possibly mentioning type variables of the
    /// declaring class
    pub returns: GenericType,

    /// Modifiers (private, final, ...)
    pub flags: MethodFlags,

    /// Real implementation, if the descriptor provides one
    pub body: Option<MethodBody>,
}

bitflags! {
    /// Modifiers of a method
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MethodFlags: u32 {
        /// No modifiers
        const EMPTY = 0;

        /// Invisible to subclasses, hence never intercepted
        const PRIVATE = 1 << 0;

        /// Cannot be overridden (unless declared by an interface)
        const FINAL = 1 << 1;

        /// Not dispatched on an instance
        const STATIC = 1 << 2;

        /// Compiler-generated forwarder to the method with the same name and
        /// arity in the same class
        const BRIDGE = 1 << 3;
    }
}

impl Default for MethodFlags {
    #[inline(always)]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl core::fmt::Display for MethodFlags {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }

        let flags = [
            (MethodFlags::PRIVATE, "private"),
            (MethodFlags::STATIC, "static"),
            (MethodFlags::FINAL, "final"),
            (MethodFlags::BRIDGE, "bridge"),
        ];

        let mut is_first = true;
        for (flag, name) in flags {
            if self.contains(flag) {
                if !is_first {
                    write!(f, " ")?;
                }
                is_first = false;
                write!(f, "{}", name)?;
            }
        }

        Ok(())
    }
}

impl Method {
    /// Returns a builder for a method named `name`
    pub const fn builder(name: &'static str) -> MethodBuilder {
        MethodBuilder::new(name)
    }

    /// Whether the method is private
    pub fn is_private(&self) -> bool {
        self.flags.contains(MethodFlags::PRIVATE)
    }

    /// Whether the method is final
    pub fn is_final(&self) -> bool {
        self.flags.contains(MethodFlags::FINAL)
    }

    /// Whether the method is static
    pub fn is_static(&self) -> bool {
        self.flags.contains(MethodFlags::STATIC)
    }

    /// Whether the method is a bridge method
    pub fn is_bridge(&self) -> bool {
        self.flags.contains(MethodFlags::BRIDGE)
    }

    /// Whether a generated subclass of `declaring` could override this method.
    ///
    /// Private and static methods never can; final methods can only when
    /// they are declared by an interface.
    pub fn is_interceptable_in(&self, declaring: &Class) -> bool {
        !self.is_private() && !self.is_static() && (!self.is_final() || declaring.is_interface())
    }

    /// Runs the real body, or yields [`Value::Null`] when there is none
    pub fn call_real(&self, args: &[Value]) -> Value {
        match self.body {
            Some(body) => body(args),
            None => Value::Null,
        }
    }
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other)
    }
}

impl Eq for Method {}

impl core::fmt::Debug for Method {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Method")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("returns", &self.returns)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

impl core::fmt::Display for Method {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}(", self.returns, self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ")")
    }
}

fn void() -> &'static Class {
    &lang::primitive::VOID
}

/// Builder for [`Method`]
pub struct MethodBuilder {
    name: &'static str,
    params: &'static [GenericType],
    returns: Option<GenericType>,
    flags: MethodFlags,
    body: Option<MethodBody>,
}

impl MethodBuilder {
    /// Creates a new MethodBuilder
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            params: &[],
            returns: None,
            flags: MethodFlags::EMPTY,
            body: None,
        }
    }

    /// Sets the parameter types
    pub const fn params(mut self, params: &'static [GenericType]) -> Self {
        self.params = params;
        self
    }

    /// Sets the return type. Defaults to `void`.
    pub const fn returns(mut self, returns: GenericType) -> Self {
        self.returns = Some(returns);
        self
    }

    /// Sets the modifiers
    pub const fn flags(mut self, flags: MethodFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the real implementation
    pub const fn body(mut self, body: MethodBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the Method
    pub const fn build(self) -> Method {
        if self.name.is_empty() {
            panic!("Argument 'name' must not be empty");
        }
        Method {
            name: self.name,
            params: self.params,
            returns: match self.returns {
                Some(returns) => returns,
                None => GenericType::Class(void),
            },
            flags: self.flags,
            body: self.body,
        }
    }
}
