//! Classes of the primitive types. See [`crate::Primitive`].

use crate::{Class, ClassFlags, ClassKind, Primitive};

macro_rules! primitive_class {
    ($(#[$meta:meta])* $name:ident, $kind:ident) => {
        $(#[$meta])*
        pub static $name: Class = Class::builder(Primitive::$kind.keyword())
            .kind(ClassKind::Primitive(Primitive::$kind))
            .flags(ClassFlags::FINAL)
            .build();
    };
}

primitive_class!(
    /// `boolean`
    BOOLEAN, Boolean
);
primitive_class!(
    /// `char`
    CHAR, Char
);
primitive_class!(
    /// `byte`
    BYTE, Byte
);
primitive_class!(
    /// `short`
    SHORT, Short
);
primitive_class!(
    /// `int`
    INT, Int
);
primitive_class!(
    /// `long`
    LONG, Long
);
primitive_class!(
    /// `float`
    FLOAT, Float
);
primitive_class!(
    /// `double`
    DOUBLE, Double
);
primitive_class!(
    /// `void`
    VOID, Void
);
