use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use beanpath::{
    BeanPathError, DeclaredMethod, InvocationHandler, MakeError, Mock, MockMaker, Returned,
    TypeToken, Value, lang,
};

mod beans;
use beans::*;

/// Fails the test on any call reaching it
struct Unreachable;

impl InvocationHandler for Unreachable {
    fn invoke(
        &self,
        _mock: &Mock,
        method: DeclaredMethod,
        _args: &[Value],
    ) -> Result<Returned, BeanPathError> {
        panic!("{} should not reach the handler", method.method)
    }
}

fn person_mock() -> Result<Mock, MakeError> {
    MockMaker::create_mock(TypeToken::of(&PERSON), Unreachable)
}

#[test]
fn creating_several_mocks_of_same_type() -> eyre::Result<()> {
    beanpath_testhelpers::setup();

    let first = person_mock()?;
    let second = person_mock()?;

    assert_ne!(first, second);
    assert_ne!(first.type_name(), second.type_name());
    assert_eq!(first.token(), second.token());

    Ok(())
}

#[test]
fn naming_policy() -> eyre::Result<()> {
    beanpath_testhelpers::setup();

    let mock = person_mock()?;

    assert!(
        mock.type_name()
            .starts_with("beanpath.BeanPathMock_of_beans.Person_$"),
        "{}",
        mock.type_name()
    );

    Ok(())
}

#[test]
fn bridge_method_delegation() -> eyre::Result<()> {
    beanpath_testhelpers::setup();

    static WAS_INVOKED: AtomicBool = AtomicBool::new(false);

    struct ExpectsRealCall;

    impl InvocationHandler for ExpectsRealCall {
        fn invoke(
            &self,
            _mock: &Mock,
            method: DeclaredMethod,
            _args: &[Value],
        ) -> Result<Returned, BeanPathError> {
            assert_eq!(method.declaring, &MY_STRING_CALLABLE);
            assert!(!method.method.is_bridge());
            assert_eq!(method.method.returns.class(), Some(&lang::STRING));
            WAS_INVOKED.store(true, Ordering::SeqCst);
            Ok(Returned::Value(Value::Null))
        }
    }

    let mock = MockMaker::create_mock(TypeToken::of(&MY_STRING_CALLABLE), ExpectsRealCall)?;
    mock.invoke("call")?;

    assert!(WAS_INVOKED.load(Ordering::SeqCst));

    Ok(())
}

#[test]
fn equals_method_implementation() -> eyre::Result<()> {
    beanpath_testhelpers::setup();

    let mock = person_mock()?;

    assert_eq!(mock, mock);
    assert_ne!(mock, person_mock()?);
    assert_eq!(
        mock.invoke_with("equals", &[Value::Null])?
            .as_value()
            .and_then(Value::as_bool),
        Some(false)
    );
    assert_eq!(
        mock.invoke_with("equals", &["a string".into()])?,
        Returned::Value(Value::Bool(false))
    );

    Ok(())
}

#[test]
fn hash_code_method_implementation() -> eyre::Result<()> {
    beanpath_testhelpers::setup();

    let mock = person_mock()?;

    assert_eq!(mock.invoke("hashCode")?, mock.invoke("hashCode")?);
    assert_eq!(
        mock.invoke("hashCode")?,
        Returned::Value(Value::Int(mock.identity_hash() as i32))
    );

    let mocks = [person_mock()?, person_mock()?];
    let set: HashSet<&Mock> = mocks.iter().chain(mocks.iter()).collect();
    assert_eq!(set.len(), 2);

    Ok(())
}

#[test]
fn to_string_method_implementation() -> eyre::Result<()> {
    beanpath_testhelpers::setup();

    let mock = person_mock()?;

    let returned = mock.invoke("toString")?;
    let string = returned.as_value().and_then(Value::as_str).unwrap_or_default();
    assert!(string.starts_with("beanpath.BeanPathMock_of_beans.Person"), "{string}");
    assert!(string.contains('@'), "{string}");
    assert_eq!(string, mock.to_string());
    assert_eq!(
        string,
        format!("{}@{:x}", mock.type_name(), mock.identity_hash())
    );

    Ok(())
}

#[test]
fn refuses_what_can_not_be_subclassed() {
    beanpath_testhelpers::setup();

    for class in [&lang::STRING, &lang::INTEGER, &GENDER] {
        assert_eq!(
            MockMaker::create_mock(TypeToken::of(class), Unreachable).unwrap_err(),
            MakeError::FinalClass { class }
        );
    }

    let bytes = TypeToken::array_of(TypeToken::of(&lang::primitive::BYTE));
    assert!(matches!(
        MockMaker::create_mock(bytes, Unreachable),
        Err(MakeError::FinalClass { .. })
    ));

    assert_eq!(
        MockMaker::create_mock(TypeToken::of(&lang::primitive::LONG), Unreachable).unwrap_err(),
        MakeError::Primitive {
            class: &lang::primitive::LONG
        }
    );
}

#[test]
fn interfaces_and_abstract_classes_can_be_mocked() -> eyre::Result<()> {
    beanpath_testhelpers::setup();

    let list = MockMaker::create_mock(
        TypeToken::parameterized(&lang::LIST, [TypeToken::of(&PERSON)])?,
        Unreachable,
    )?;
    assert_eq!(list.class(), &lang::LIST);
    assert_eq!(list.token().to_string(), "List<Person>");

    for class in [&IDENTIFIED, &lang::NUMBER, &UNINSTANTIABLE] {
        let mock = MockMaker::create_mock(TypeToken::of(class), Unreachable)?;
        assert_eq!(mock.class(), class);
        assert!(!mock.class().is_final());
    }

    Ok(())
}
