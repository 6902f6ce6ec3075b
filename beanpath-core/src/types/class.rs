use alloc::vec::Vec;
use bitflags::bitflags;

use super::{GenericType, Method, Primitive, TypeParam};
use crate::lang;

/// Lazily resolves a class descriptor. Signatures hold these instead of plain
/// references so descriptors can point at themselves and at each other.
pub type ClassFn = fn() -> &'static Class;

/// Describes a class or interface: its name, modifiers, type parameters,
/// super types and methods.
///
/// Descriptors are meant to live in `static` items and are compared by
/// address, like the class objects of a reflective runtime.
///
/// ```rust
/// use beanpath_core::{lang, Class, GenericType, Method};
///
/// static DOCUMENT: Class = Class::builder("beans.Document")
///     .methods(&const {
///         [
///             Method::builder("getNumber")
///                 .returns(GenericType::Class(|| &lang::STRING))
///                 .build(),
///         ]
///     })
///     .build();
///
/// assert_eq!(DOCUMENT.simple_name(), "Document");
/// assert!(DOCUMENT.find_method("getNumber", 0).is_some());
/// ```
#[non_exhaustive]
pub struct Class {
    /// Qualified name, dot-delimited, e.g. `beans.Person`
    pub name: &'static str,

    /// Class, interface, enum, primitive or array
    pub kind: ClassKind,

    /// Modifiers of the class itself
    pub flags: ClassFlags,

    /// Declared type variables, in order
    pub type_params: &'static [TypeParam],

    /// Direct superclass, if any. Everything implicitly extends [`lang::OBJECT`].
    pub superclass: Option<GenericType>,

    /// Directly implemented (or, for interfaces, extended) interfaces
    pub interfaces: &'static [GenericType],

    /// Methods declared by this class, in declaration order
    pub methods: &'static [Method],
}

/// What sort of type a [`Class`] describes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ClassKind {
    /// A regular class, possibly abstract
    Class,
    /// An interface: its methods are always overridable
    Interface,
    /// An enumeration: never extensible
    Enum,
    /// A primitive type such as `int` or `void`
    Primitive(Primitive),
    /// An array of the given component class
    Array(&'static Class),
}

bitflags! {
    /// Modifiers of a class
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClassFlags: u32 {
        /// No modifiers
        const EMPTY = 0;

        /// The class cannot be extended, hence cannot be mocked
        const FINAL = 1 << 0;

        /// The class cannot be instantiated directly
        const ABSTRACT = 1 << 1;
    }
}

impl Default for ClassFlags {
    #[inline(always)]
    fn default() -> Self {
        Self::EMPTY
    }
}

/// A method together with the class that declares it, as returned by
/// [`Class::find_method`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeclaredMethod {
    /// The class whose `methods` contain [`DeclaredMethod::method`]
    pub declaring: &'static Class,
    /// The method itself
    pub method: &'static Method,
}

impl DeclaredMethod {
    /// Whether a mock may intercept calls to this method
    pub fn is_interceptable(&self) -> bool {
        self.method.is_interceptable_in(self.declaring)
    }

    /// The non-bridge method this bridge method forwards to: same name and
    /// arity, same declaring class. Returns `self` for regular methods.
    pub fn bridged(self) -> DeclaredMethod {
        if !self.method.is_bridge() {
            return self;
        }
        self.declaring
            .methods
            .iter()
            .find(|m| {
                !m.is_bridge()
                    && m.name == self.method.name
                    && m.params.len() == self.method.params.len()
            })
            .map(|method| DeclaredMethod {
                declaring: self.declaring,
                method,
            })
            .unwrap_or(self)
    }
}

impl Class {
    /// Returns a builder for a class named `name`
    pub const fn builder(name: &'static str) -> ClassBuilder {
        ClassBuilder::new(name)
    }

    /// The class name without its dot-delimited qualifier
    pub fn simple_name(&self) -> &'static str {
        match self.name.rfind('.') {
            Some(dot) => &self.name[dot + 1..],
            None => self.name,
        }
    }

    /// Whether this class can never be extended: explicitly final classes,
    /// enums, primitives and arrays.
    pub fn is_final(&self) -> bool {
        self.flags.contains(ClassFlags::FINAL)
            || matches!(
                self.kind,
                ClassKind::Enum | ClassKind::Primitive(_) | ClassKind::Array(_)
            )
    }

    /// Whether this class describes an interface
    pub fn is_interface(&self) -> bool {
        matches!(self.kind, ClassKind::Interface)
    }

    /// Whether this class declares type parameters
    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }

    /// The primitive this class stands for, if any
    pub fn primitive(&self) -> Option<Primitive> {
        match self.kind {
            ClassKind::Primitive(p) => Some(p),
            _ => None,
        }
    }

    /// The declared type parameter named `name`
    pub fn type_param(&self, name: &str) -> Option<&'static TypeParam> {
        self.type_params.iter().find(|p| p.name == name)
    }

    /// Finds the method callable as `name` with `arity` arguments.
    ///
    /// Looks at the class itself first, then walks its superclass chain and
    /// its interfaces depth-first in declaration order, and finally
    /// [`lang::OBJECT`]. The first match wins, so overrides shadow the
    /// methods they override.
    pub fn find_method(&'static self, name: &str, arity: usize) -> Option<DeclaredMethod> {
        let mut visited = Vec::new();
        self.find_declared(name, arity, &mut visited)
            .or_else(|| lang::OBJECT.find_declared(name, arity, &mut visited))
    }

    fn find_declared(
        &'static self,
        name: &str,
        arity: usize,
        visited: &mut Vec<&'static Class>,
    ) -> Option<DeclaredMethod> {
        if visited.contains(&self) {
            return None;
        }
        visited.push(self);

        if let Some(method) = self
            .methods
            .iter()
            .find(|m| m.name == name && m.params.len() == arity)
        {
            return Some(DeclaredMethod {
                declaring: self,
                method,
            });
        }

        self.superclass
            .iter()
            .chain(self.interfaces)
            .filter_map(GenericType::class)
            .find_map(|super_type| super_type.find_declared(name, arity, visited))
    }

    /// Builds the descriptor of an array of `component`. Used by
    /// [`lang::array_of`], which interns the result.
    pub(crate) fn array(name: &'static str, component: &'static Class) -> Class {
        Class {
            name,
            kind: ClassKind::Array(component),
            flags: ClassFlags::FINAL,
            type_params: &[],
            superclass: Some(GenericType::Class(|| &lang::OBJECT)),
            interfaces: &[],
            methods: &[],
        }
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other)
    }
}

impl Eq for Class {}

impl core::hash::Hash for Class {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::ptr::hash(self, state)
    }
}

impl core::fmt::Debug for Class {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

impl core::fmt::Display for Class {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name)
    }
}

/// Builder for [`Class`]
pub struct ClassBuilder {
    name: &'static str,
    kind: ClassKind,
    flags: ClassFlags,
    type_params: &'static [TypeParam],
    superclass: Option<GenericType>,
    interfaces: &'static [GenericType],
    methods: &'static [Method],
}

impl ClassBuilder {
    /// Creates a new ClassBuilder for a plain, non-final class
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            kind: ClassKind::Class,
            flags: ClassFlags::EMPTY,
            type_params: &[],
            superclass: None,
            interfaces: &[],
            methods: &[],
        }
    }

    /// Sets the kind of the class
    pub const fn kind(mut self, kind: ClassKind) -> Self {
        self.kind = kind;
        self
    }

    /// Marks the class as an interface
    pub const fn interface(self) -> Self {
        self.kind(ClassKind::Interface)
    }

    /// Marks the class as an enumeration
    pub const fn enumeration(self) -> Self {
        self.kind(ClassKind::Enum)
    }

    /// Sets the modifiers of the class
    pub const fn flags(mut self, flags: ClassFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the declared type parameters
    pub const fn type_params(mut self, type_params: &'static [TypeParam]) -> Self {
        self.type_params = type_params;
        self
    }

    /// Sets the direct superclass
    pub const fn superclass(mut self, superclass: GenericType) -> Self {
        self.superclass = Some(superclass);
        self
    }

    /// Sets the directly implemented interfaces
    pub const fn interfaces(mut self, interfaces: &'static [GenericType]) -> Self {
        self.interfaces = interfaces;
        self
    }

    /// Sets the declared methods
    pub const fn methods(mut self, methods: &'static [Method]) -> Self {
        self.methods = methods;
        self
    }

    /// Builds the Class
    pub const fn build(self) -> Class {
        if self.name.is_empty() {
            panic!("Argument 'name' must not be empty");
        }
        Class {
            name: self.name,
            kind: self.kind,
            flags: self.flags,
            type_params: self.type_params,
            superclass: self.superclass,
            interfaces: self.interfaces,
            methods: self.methods,
        }
    }
}
