use alloc::sync::Arc;
use alloc::vec::Vec;

use super::{Class, DeclaredMethod, GenericType};
use crate::lang;

/// A fully resolved type: a class, possibly with generic arguments.
///
/// Tokens are what mocks are generated for and cached by, so two tokens are
/// equal exactly when they denote the same parameterization: `List<String>`
/// and `List<Integer>` differ, `Identified<?>` equals `Identified<?>`.
///
/// Generic arguments are always supplied explicitly:
///
/// ```rust
/// use beanpath_core::{lang, TypeToken};
///
/// let strings = TypeToken::parameterized(&lang::LIST, [TypeToken::of(&lang::STRING)]).unwrap();
/// assert_eq!(strings.to_string(), "List<String>");
/// assert_eq!(strings.raw_class(), &lang::LIST);
///
/// // a generic class needs all of its arguments
/// assert!(TypeToken::parameterized(&lang::MAP, [TypeToken::of(&lang::STRING)]).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum TypeToken {
    /// A class used without type arguments
    Class(&'static Class),

    /// A generic class together with one argument per type parameter
    Parameterized(&'static Class, Arc<[TypeToken]>),

    /// An array of the component type
    Array(Arc<TypeToken>),

    /// A wildcard argument, `?` or `? extends Bound`
    Wildcard(Option<Arc<TypeToken>>),

    /// A type variable nothing bound
    Variable(TypeVariable),
}

/// A type variable, identified by its declaring class and its name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeVariable {
    /// The class declaring the variable
    pub declared_by: &'static Class,
    /// The variable name
    pub name: &'static str,
}

impl TypeVariable {
    /// The class this variable erases to: its bound's, or [`lang::OBJECT`]
    pub fn erasure(&self) -> &'static Class {
        match self.declared_by.type_param(self.name).and_then(|p| p.bound) {
            Some(bound) => erase(&bound, self.declared_by),
            None => &lang::OBJECT,
        }
    }
}

/// Errors encountered when building a [`TypeToken`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TypeError {
    /// Type arguments were given for a class that declares no type parameters
    NotGeneric {
        /// The class
        class: &'static Class,
    },

    /// The number of type arguments does not match the declared parameters
    ArityMismatch {
        /// The generic class
        class: &'static Class,
        /// Number of declared type parameters
        expected: usize,
        /// Number of type arguments given
        actual: usize,
    },
}

impl core::fmt::Display for TypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TypeError::NotGeneric { class } => {
                write!(f, "{} declares no type parameters", class)
            }
            TypeError::ArityMismatch {
                class,
                expected,
                actual,
            } if actual < expected => write!(
                f,
                "Missing type argument: {} declares {} type parameter(s), got {}",
                class, expected, actual
            ),
            TypeError::ArityMismatch {
                class,
                expected,
                actual,
            } => write!(
                f,
                "Too many type arguments: {} declares {} type parameter(s), got {}",
                class, expected, actual
            ),
        }
    }
}

impl core::error::Error for TypeError {}

type Bindings = Vec<(TypeVariable, TypeToken)>;

impl TypeToken {
    /// The raw token of `class`. Type variables of a generic class stay
    /// unbound and resolve to their erasure.
    pub fn of(class: &'static Class) -> Self {
        TypeToken::Class(class)
    }

    /// `class` applied to `args`, one per declared type parameter
    pub fn parameterized(
        class: &'static Class,
        args: impl IntoIterator<Item = TypeToken>,
    ) -> Result<Self, TypeError> {
        let args: Arc<[TypeToken]> = args.into_iter().collect();
        if !class.is_generic() {
            return Err(TypeError::NotGeneric { class });
        }
        if args.len() != class.type_params.len() {
            return Err(TypeError::ArityMismatch {
                class,
                expected: class.type_params.len(),
                actual: args.len(),
            });
        }
        Ok(TypeToken::Parameterized(class, args))
    }

    /// An array of `component`
    pub fn array_of(component: TypeToken) -> Self {
        TypeToken::Array(Arc::new(component))
    }

    /// A wildcard with an optional upper bound
    pub fn wildcard(upper: Option<TypeToken>) -> Self {
        TypeToken::Wildcard(upper.map(Arc::new))
    }

    /// The class this token erases to.
    ///
    /// Wildcards erase to their upper bound and unbound variables to their
    /// declared bound, both defaulting to [`lang::OBJECT`]. Arrays erase to
    /// the interned array class of their component's erasure.
    pub fn raw_class(&self) -> &'static Class {
        match self {
            TypeToken::Class(class) | TypeToken::Parameterized(class, _) => *class,
            TypeToken::Array(component) => lang::array_of(component.raw_class()),
            TypeToken::Wildcard(Some(upper)) => upper.raw_class(),
            TypeToken::Wildcard(None) => &lang::OBJECT,
            TypeToken::Variable(variable) => variable.erasure(),
        }
    }

    /// The type arguments, empty unless parameterized
    pub fn args(&self) -> &[TypeToken] {
        match self {
            TypeToken::Parameterized(_, args) => args,
            _ => &[],
        }
    }

    /// Resolves `ty`, written in a signature of `declaring`, in the context
    /// of this token.
    ///
    /// Type variables are looked up among the arguments of this token and
    /// among the arguments this token's classes pass to their super types:
    /// for `class Person extends Identified<Long>`, resolving `T` declared by
    /// `Identified` against `Person` yields `Long`.
    pub fn resolve(&self, declaring: &'static Class, ty: &GenericType) -> TypeToken {
        let mut bindings = Vec::new();
        collect_bindings(self, &mut bindings, &mut Vec::new());
        substitute(ty, declaring, &bindings)
    }

    /// Resolves the return type of `method` against this token, skipping
    /// the hierarchy walk when the declared type is a plain class.
    pub fn resolve_return_type(&self, method: &DeclaredMethod) -> TypeToken {
        match method.method.returns {
            GenericType::Class(class) => TypeToken::Class(class()),
            ref returns => self.resolve(method.declaring, returns),
        }
    }
}

impl From<&'static Class> for TypeToken {
    fn from(class: &'static Class) -> Self {
        TypeToken::of(class)
    }
}

fn collect_bindings(token: &TypeToken, out: &mut Bindings, visited: &mut Vec<&'static Class>) {
    let (class, args) = match token {
        TypeToken::Class(class) => (*class, None),
        TypeToken::Parameterized(class, args) => (*class, Some(args)),
        TypeToken::Wildcard(Some(upper)) => return collect_bindings(upper, out, visited),
        _ => return,
    };
    if visited.contains(&class) {
        return;
    }
    visited.push(class);

    if let Some(args) = args {
        for (param, arg) in class.type_params.iter().zip(args.iter()) {
            let variable = TypeVariable {
                declared_by: class,
                name: param.name,
            };
            out.push((variable, arg.clone()));
        }
    }

    for super_type in class.superclass.iter().chain(class.interfaces) {
        let resolved = substitute(super_type, class, out);
        collect_bindings(&resolved, out, visited);
    }
}

fn substitute(ty: &GenericType, declaring: &'static Class, bindings: &Bindings) -> TypeToken {
    match ty {
        GenericType::Class(class) => TypeToken::Class(class()),
        GenericType::Parameterized(class, args) => TypeToken::Parameterized(
            class(),
            args.iter()
                .map(|arg| substitute(arg, declaring, bindings))
                .collect(),
        ),
        GenericType::Variable(name) => {
            let variable = TypeVariable {
                declared_by: declaring,
                name: *name,
            };
            bindings
                .iter()
                .find(|(bound, _)| *bound == variable)
                .map(|(_, token)| token.clone())
                .unwrap_or(TypeToken::Variable(variable))
        }
        GenericType::Wildcard(upper) => TypeToken::Wildcard(
            upper.map(|upper| Arc::new(substitute(upper, declaring, bindings))),
        ),
        GenericType::Array(component) => {
            TypeToken::Array(Arc::new(substitute(component, declaring, bindings)))
        }
    }
}

fn erase(ty: &GenericType, declaring: &'static Class) -> &'static Class {
    match ty {
        GenericType::Class(class) | GenericType::Parameterized(class, _) => class(),
        GenericType::Variable(name) => TypeVariable {
            declared_by: declaring,
            name: *name,
        }
        .erasure(),
        GenericType::Wildcard(Some(upper)) => erase(upper, declaring),
        GenericType::Wildcard(None) => &lang::OBJECT,
        GenericType::Array(component) => lang::array_of(erase(component, declaring)),
    }
}

impl core::fmt::Display for TypeToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TypeToken::Class(class) => f.write_str(class.simple_name()),
            TypeToken::Parameterized(class, args) => {
                write!(f, "{}<", class.simple_name())?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ">")
            }
            TypeToken::Array(component) => write!(f, "{component}[]"),
            TypeToken::Wildcard(None) => f.write_str("?"),
            TypeToken::Wildcard(Some(upper)) => write!(f, "? extends {upper}"),
            TypeToken::Variable(variable) => f.write_str(variable.name),
        }
    }
}

impl core::fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "TypeToken({self})")
    }
}
