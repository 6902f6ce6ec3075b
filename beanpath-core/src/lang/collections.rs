use super::{OBJECT, primitive};
use crate::{Class, GenericType, Method, TypeParam};

/// `Iterable<T>`
pub static ITERABLE: Class = Class::builder("lang.Iterable")
    .interface()
    .type_params(&const { [TypeParam::new("T")] })
    .methods(&const {
        [Method::builder("iterator")
            .returns(GenericType::Parameterized(
                || &ITERATOR,
                &const { [GenericType::Variable("T")] },
            ))
            .build()]
    })
    .build();

/// `Iterator<E>`
pub static ITERATOR: Class = Class::builder("lang.Iterator")
    .interface()
    .type_params(&const { [TypeParam::new("E")] })
    .methods(&const {
        [
            Method::builder("hasNext")
                .returns(GenericType::Class(|| &primitive::BOOLEAN))
                .build(),
            Method::builder("next")
                .returns(GenericType::Variable("E"))
                .build(),
        ]
    })
    .build();

/// `Collection<E> extends Iterable<E>`
pub static COLLECTION: Class = Class::builder("lang.Collection")
    .interface()
    .type_params(&const { [TypeParam::new("E")] })
    .interfaces(&const {
        [GenericType::Parameterized(
            || &ITERABLE,
            &const { [GenericType::Variable("E")] },
        )]
    })
    .methods(&const {
        [
            Method::builder("size")
                .returns(GenericType::Class(|| &primitive::INT))
                .build(),
            Method::builder("isEmpty")
                .returns(GenericType::Class(|| &primitive::BOOLEAN))
                .build(),
        ]
    })
    .build();

/// `List<E> extends Collection<E>`
pub static LIST: Class = Class::builder("lang.List")
    .interface()
    .type_params(&const { [TypeParam::new("E")] })
    .interfaces(&const {
        [GenericType::Parameterized(
            || &COLLECTION,
            &const { [GenericType::Variable("E")] },
        )]
    })
    .methods(&const {
        [Method::builder("get")
            .params(&const { [GenericType::Class(|| &primitive::INT)] })
            .returns(GenericType::Variable("E"))
            .build()]
    })
    .build();

/// `Map<K, V>`
pub static MAP: Class = Class::builder("lang.Map")
    .interface()
    .type_params(&const { [TypeParam::new("K"), TypeParam::new("V")] })
    .methods(&const {
        [
            Method::builder("get")
                .params(&const { [GenericType::Class(|| &OBJECT)] })
                .returns(GenericType::Variable("V"))
                .build(),
            Method::builder("size")
                .returns(GenericType::Class(|| &primitive::INT))
                .build(),
        ]
    })
    .build();

/// `Callable<V>`
pub static CALLABLE: Class = Class::builder("lang.Callable")
    .interface()
    .type_params(&const { [TypeParam::new("V")] })
    .methods(&const {
        [Method::builder("call")
            .returns(GenericType::Variable("V"))
            .build()]
    })
    .build();
