use super::{Class, Value};
use crate::lang;

/// The primitive kinds a class descriptor can stand for.
///
/// Primitives are never mocked: an accessor returning one records its wrapper
/// class in the path and hands back [`Primitive::default_value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Primitive {
    /// `boolean`, wrapped by `Boolean`
    Boolean,
    /// `char`, wrapped by `Character`
    Char,
    /// `byte`, wrapped by `Byte`
    Byte,
    /// `short`, wrapped by `Short`
    Short,
    /// `int`, wrapped by `Integer`
    Int,
    /// `long`, wrapped by `Long`
    Long,
    /// `float`, wrapped by `Float`
    Float,
    /// `double`, wrapped by `Double`
    Double,
    /// `void`, wrapped by the dedicated `Void` class
    Void,
}

impl Primitive {
    /// Every primitive kind, `void` last
    pub const ALL: [Primitive; 9] = [
        Primitive::Boolean,
        Primitive::Char,
        Primitive::Byte,
        Primitive::Short,
        Primitive::Int,
        Primitive::Long,
        Primitive::Float,
        Primitive::Double,
        Primitive::Void,
    ];

    /// The keyword naming this primitive, e.g. `int`
    pub const fn keyword(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Char => "char",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::Void => "void",
        }
    }

    /// The class descriptor of the primitive itself
    pub fn class(self) -> &'static Class {
        use lang::primitive::*;
        match self {
            Primitive::Boolean => &BOOLEAN,
            Primitive::Char => &CHAR,
            Primitive::Byte => &BYTE,
            Primitive::Short => &SHORT,
            Primitive::Int => &INT,
            Primitive::Long => &LONG,
            Primitive::Float => &FLOAT,
            Primitive::Double => &DOUBLE,
            Primitive::Void => &VOID,
        }
    }

    /// The reference type this primitive boxes to
    pub fn wrapper(self) -> &'static Class {
        match self {
            Primitive::Boolean => &lang::BOOLEAN,
            Primitive::Char => &lang::CHARACTER,
            Primitive::Byte => &lang::BYTE,
            Primitive::Short => &lang::SHORT,
            Primitive::Int => &lang::INTEGER,
            Primitive::Long => &lang::LONG,
            Primitive::Float => &lang::FLOAT,
            Primitive::Double => &lang::DOUBLE,
            Primitive::Void => &lang::VOID,
        }
    }

    /// Zero, `false`, `'\0'`, or [`Value::Null`] for `void`
    pub fn default_value(self) -> Value {
        match self {
            Primitive::Boolean => Value::Bool(false),
            Primitive::Char => Value::Char('\0'),
            Primitive::Byte => Value::Byte(0),
            Primitive::Short => Value::Short(0),
            Primitive::Int => Value::Int(0),
            Primitive::Long => Value::Long(0),
            Primitive::Float => Value::Float(0.0),
            Primitive::Double => Value::Double(0.0),
            Primitive::Void => Value::Null,
        }
    }
}

impl core::fmt::Display for Primitive {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.keyword())
    }
}
