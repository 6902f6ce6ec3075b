//! Bean descriptors shared by the integration tests
#![allow(dead_code)]

use beanpath::{
    Class, ClassFlags, GenericType, Method, MethodFlags, TypeParam, Value, lang,
};

/// `abstract class Identified<T> { T getId() }`
pub static IDENTIFIED: Class = Class::builder("beans.Identified")
    .flags(ClassFlags::ABSTRACT)
    .type_params(&const { [TypeParam::new("T")] })
    .methods(&const {
        [Method::builder("getId")
            .returns(GenericType::Variable("T"))
            .build()]
    })
    .build();

/// `class Person extends Identified<Long>`
pub static PERSON: Class = Class::builder("beans.Person")
    .superclass(GenericType::Parameterized(
        || &IDENTIFIED,
        &const { [GenericType::Class(|| &lang::LONG)] },
    ))
    .methods(&const {
        [
            Method::builder("getName")
                .returns(GenericType::Class(|| &lang::STRING))
                .body(|_| Value::from("John Smith"))
                .build(),
            Method::builder("getAge")
                .returns(GenericType::Class(|| &lang::primitive::INT))
                .body(|_| Value::Int(27))
                .build(),
            Method::builder("getDocument")
                .returns(GenericType::Class(|| &DOCUMENT))
                .build(),
            Method::builder("getBestFriend")
                .returns(GenericType::Class(|| &PERSON))
                .build(),
            Method::builder("getGender")
                .returns(GenericType::Class(|| &GENDER))
                .build(),
            Method::builder("withParam")
                .params(&const { [GenericType::Class(|| &lang::primitive::INT)] })
                .returns(GenericType::Class(|| &lang::STRING))
                .build(),
            Method::builder("getNumbers")
                .returns(GenericType::Parameterized(
                    || &lang::LIST,
                    &const {
                        [GenericType::Wildcard(Some(&const {
                            GenericType::Class(|| &lang::NUMBER)
                        }))]
                    },
                ))
                .build(),
            Method::builder("getStuff")
                .returns(GenericType::Parameterized(
                    || &lang::ITERATOR,
                    &const { [GenericType::Wildcard(None)] },
                ))
                .build(),
            Method::builder("sleep").build(),
        ]
    })
    .build();

/// `class Document { String getNumber(); String getIssuedBy() }`
pub static DOCUMENT: Class = Class::builder("beans.Document")
    .methods(&const {
        [
            Method::builder("getNumber")
                .returns(GenericType::Class(|| &lang::STRING))
                .build(),
            Method::builder("getIssuedBy")
                .returns(GenericType::Class(|| &lang::STRING))
                .build(),
        ]
    })
    .build();

/// `enum Gender { MALE, FEMALE }`
pub static GENDER: Class = Class::builder("beans.Gender")
    .enumeration()
    .superclass(GenericType::Parameterized(
        || &lang::ENUM,
        &const { [GenericType::Class(|| &GENDER)] },
    ))
    .build();

macro_rules! string_accessors {
    ($($name:literal),* $(,)?) => {
        [$(
            Method::builder($name)
                .returns(GenericType::Class(|| &lang::STRING))
                .build()
        ),*]
    };
}

/// Accessors named every which way
pub static NAMES_BEAN: Class = Class::builder("beans.NamesBean")
    .methods(&const {
        string_accessors!(
            "getProperty",
            "isProperty",
            "getA",
            "getUTC",
            "property",
            "is",
            "get",
            "getting",
            "isabel",
        )
    })
    .build();

macro_rules! primitive_accessors {
    ($($name:literal => $class:ident),* $(,)?) => {
        [$(
            Method::builder($name)
                .returns(GenericType::Class(|| &lang::primitive::$class))
                .build()
        ),*]
    };
}

/// One accessor per primitive type
pub static PRIMITIVE_BEAN: Class = Class::builder("beans.PrimitiveBean")
    .methods(&const {
        primitive_accessors!(
            "getBoolean" => BOOLEAN,
            "getChar" => CHAR,
            "getByte" => BYTE,
            "getShort" => SHORT,
            "getInt" => INT,
            "getLong" => LONG,
            "getFloat" => FLOAT,
            "getDouble" => DOUBLE,
            "getVoid" => VOID,
        )
    })
    .build();

/// Keeps its secrets out of reach of any mock
pub static PARANOID_PERSON: Class = Class::builder("beans.ParanoidPerson")
    .methods(&const {
        [
            Method::builder("getSecret")
                .returns(GenericType::Class(|| &lang::STRING))
                .flags(MethodFlags::PRIVATE)
                .body(|_| Value::from("The Secret"))
                .build(),
            Method::builder("getFinalSecret")
                .returns(GenericType::Class(|| &lang::STRING))
                .flags(MethodFlags::FINAL)
                .body(|_| Value::from("The Final Secret"))
                .build(),
        ]
    })
    .build();

/// `class MyStringCallable implements Callable<String>`, with the bridge
/// method a compiler would emit for the erased `Object call()`
pub static MY_STRING_CALLABLE: Class = Class::builder("beans.MyStringCallable")
    .interfaces(&const {
        [GenericType::Parameterized(
            || &lang::CALLABLE,
            &const { [GenericType::Class(|| &lang::STRING)] },
        )]
    })
    .methods(&const {
        [
            Method::builder("call")
                .returns(GenericType::Class(|| &lang::OBJECT))
                .flags(MethodFlags::BRIDGE)
                .build(),
            Method::builder("call")
                .returns(GenericType::Class(|| &lang::STRING))
                .build(),
        ]
    })
    .build();

/// An abstract class nobody could instantiate
pub static UNINSTANTIABLE: Class = Class::builder("beans.Uninstantiable")
    .flags(ClassFlags::ABSTRACT)
    .build();
