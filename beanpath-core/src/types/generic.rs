use super::{Class, ClassFn};

/// A type as written in a signature: the return type of a method, a
/// superclass, a type argument.
///
/// Unlike [`super::TypeToken`], a `GenericType` may mention type variables of
/// the class that declares the signature; they only get a meaning once
/// resolved against a concrete token.
#[derive(Clone, Copy)]
pub enum GenericType {
    /// A plain class, e.g. `String` or `int`
    Class(ClassFn),

    /// A generic class applied to type arguments, e.g. `List<E>`
    Parameterized(ClassFn, &'static [GenericType]),

    /// A type variable of the declaring class, e.g. `T`
    Variable(&'static str),

    /// `?` (`None`) or `? extends Bound`
    Wildcard(Option<&'static GenericType>),

    /// An array of the component type, e.g. `byte[]`
    Array(&'static GenericType),
}

impl GenericType {
    /// The class of a plain or parameterized type, `None` for variables,
    /// wildcards and arrays.
    pub fn class(&self) -> Option<&'static Class> {
        match self {
            GenericType::Class(class) | GenericType::Parameterized(class, _) => Some(class()),
            _ => None,
        }
    }
}

impl core::fmt::Display for GenericType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GenericType::Class(class) => write!(f, "{}", class().simple_name()),
            GenericType::Parameterized(class, args) => {
                write!(f, "{}<", class().simple_name())?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ">")
            }
            GenericType::Variable(name) => f.write_str(name),
            GenericType::Wildcard(None) => f.write_str("?"),
            GenericType::Wildcard(Some(bound)) => write!(f, "? extends {bound}"),
            GenericType::Array(component) => write!(f, "{component}[]"),
        }
    }
}

impl core::fmt::Debug for GenericType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "GenericType({self})")
    }
}

/// A declared type variable
#[derive(Clone, Copy, Debug)]
pub struct TypeParam {
    /// Name of the variable, e.g. `T`
    pub name: &'static str,

    /// Upper bound. Unbounded variables erase to [`crate::lang::OBJECT`].
    pub bound: Option<GenericType>,
}

impl TypeParam {
    /// An unbounded type variable
    pub const fn new(name: &'static str) -> Self {
        Self { name, bound: None }
    }

    /// A type variable with an upper bound, e.g. `N extends Number`
    pub const fn bounded(name: &'static str, bound: GenericType) -> Self {
        Self {
            name,
            bound: Some(bound),
        }
    }
}
