//! Built-in classes: the universal object type, strings, numbers, the
//! wrappers primitives box to, and a handful of generic collection interfaces.

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, PoisonError};

use alloc::boxed::Box;
use alloc::format;

use crate::{Class, ClassFlags, GenericType, Method, TypeParam};

mod collections;
pub use collections::*;

pub mod primitive;

/// The universal object type. Every class implicitly extends it, and its
/// `equals`, `hashCode` and `toString` are found on every class.
pub static OBJECT: Class = Class::builder("lang.Object")
    .methods(&const {
        [
            Method::builder("equals")
                .params(&const { [GenericType::Class(|| &OBJECT)] })
                .returns(GenericType::Class(|| &primitive::BOOLEAN))
                .build(),
            Method::builder("hashCode")
                .returns(GenericType::Class(|| &primitive::INT))
                .build(),
            Method::builder("toString")
                .returns(GenericType::Class(|| &STRING))
                .build(),
        ]
    })
    .build();

/// Strings. Final, so an accessor returning one ends a chain.
pub static STRING: Class = Class::builder("lang.String")
    .flags(ClassFlags::FINAL)
    .methods(&const {
        [
            Method::builder("length")
                .returns(GenericType::Class(|| &primitive::INT))
                .build(),
            Method::builder("isEmpty")
                .returns(GenericType::Class(|| &primitive::BOOLEAN))
                .build(),
            Method::builder("getBytes")
                .returns(GenericType::Array(&const {
                    GenericType::Class(|| &primitive::BYTE)
                }))
                .build(),
            Method::builder("trim")
                .returns(GenericType::Class(|| &STRING))
                .build(),
        ]
    })
    .build();

/// Abstract base of the numeric wrappers
pub static NUMBER: Class = Class::builder("lang.Number")
    .flags(ClassFlags::ABSTRACT)
    .methods(&const {
        [
            Method::builder("intValue")
                .returns(GenericType::Class(|| &primitive::INT))
                .build(),
            Method::builder("longValue")
                .returns(GenericType::Class(|| &primitive::LONG))
                .build(),
            Method::builder("doubleValue")
                .returns(GenericType::Class(|| &primitive::DOUBLE))
                .build(),
        ]
    })
    .build();

/// Abstract base of enumerations, `E` being the enumeration itself
pub static ENUM: Class = Class::builder("lang.Enum")
    .flags(ClassFlags::ABSTRACT)
    .type_params(&const { [TypeParam::new("E")] })
    .methods(&const {
        [
            Method::builder("name")
                .returns(GenericType::Class(|| &STRING))
                .flags(crate::MethodFlags::FINAL)
                .build(),
            Method::builder("ordinal")
                .returns(GenericType::Class(|| &primitive::INT))
                .flags(crate::MethodFlags::FINAL)
                .build(),
        ]
    })
    .build();

/// Wrapper of `boolean`
pub static BOOLEAN: Class = Class::builder("lang.Boolean")
    .flags(ClassFlags::FINAL)
    .build();

/// Wrapper of `char`
pub static CHARACTER: Class = Class::builder("lang.Character")
    .flags(ClassFlags::FINAL)
    .build();

/// Wrapper of `byte`
pub static BYTE: Class = Class::builder("lang.Byte")
    .flags(ClassFlags::FINAL)
    .superclass(GenericType::Class(|| &NUMBER))
    .build();

/// Wrapper of `short`
pub static SHORT: Class = Class::builder("lang.Short")
    .flags(ClassFlags::FINAL)
    .superclass(GenericType::Class(|| &NUMBER))
    .build();

/// Wrapper of `int`
pub static INTEGER: Class = Class::builder("lang.Integer")
    .flags(ClassFlags::FINAL)
    .superclass(GenericType::Class(|| &NUMBER))
    .build();

/// Wrapper of `long`
pub static LONG: Class = Class::builder("lang.Long")
    .flags(ClassFlags::FINAL)
    .superclass(GenericType::Class(|| &NUMBER))
    .build();

/// Wrapper of `float`
pub static FLOAT: Class = Class::builder("lang.Float")
    .flags(ClassFlags::FINAL)
    .superclass(GenericType::Class(|| &NUMBER))
    .build();

/// Wrapper of `double`
pub static DOUBLE: Class = Class::builder("lang.Double")
    .flags(ClassFlags::FINAL)
    .superclass(GenericType::Class(|| &NUMBER))
    .build();

/// What `void` boxes to
pub static VOID: Class = Class::builder("lang.Void")
    .flags(ClassFlags::FINAL)
    .build();

/// The class of arrays of `component`, e.g. `lang.String[]`.
///
/// Array classes are created on first request and interned for the rest of
/// the process, so asking twice yields the same descriptor.
pub fn array_of(component: &'static Class) -> &'static Class {
    static ARRAYS: LazyLock<Mutex<HashMap<&'static Class, &'static Class>>> =
        LazyLock::new(Default::default);

    let mut arrays = ARRAYS.lock().unwrap_or_else(PoisonError::into_inner);
    *arrays.entry(component).or_insert_with(|| {
        let name: &'static str = Box::leak(format!("{}[]", component.name).into_boxed_str());
        let class: &'static Class = Box::leak(Box::new(Class::array(name, component)));
        class
    })
}
