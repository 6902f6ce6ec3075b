use alloc::string::{String, ToString};

use beanpath_core::{Class, Path, TypeToken};

use crate::{BeanPathError, Mock, current, mocker};

/// The mock standing in for an instance of `class`, to start a chain on.
///
/// Mocks are cached: every call with the same class returns the very same
/// mock.
///
/// Fails with [`BeanPathError::MockCreation`] for classes that can not be
/// mocked, e.g. final ones.
pub fn root(class: &'static Class) -> Result<&'static Mock, BeanPathError> {
    mocker::obtain_mock(TypeToken::of(class))
}

/// Like [`root`], for a type with generic arguments:
///
/// ```rust
/// use beanpath_core::{lang, TypeToken};
/// use beanpath_reflect::{capture, root_of};
///
/// # fn main() -> Result<(), beanpath_reflect::BeanPathError> {
/// let strings = root_of(TypeToken::parameterized(&lang::LIST, [TypeToken::of(&lang::STRING)])?)?;
/// let path = capture(strings.invoke_with("get", &[0.into()])?)?;
/// assert_eq!(path.ty(), &lang::STRING);
/// # Ok(())
/// # }
/// ```
pub fn root_of(token: TypeToken) -> Result<&'static Mock, BeanPathError> {
    mocker::obtain_mock(token)
}

/// Takes the path recorded by the call chain evaluated as its argument.
///
/// The argument itself is ignored: what matters is that evaluating it
/// invoked accessors on a mock obtained from [`root`]. Fails with
/// [`BeanPathError::NoCurrentPath`] when no accessor was intercepted, which
/// typically means the chain ended in a final method.
pub fn capture<T>(_chain: T) -> Result<Path, BeanPathError> {
    current::evict().ok_or(BeanPathError::NoCurrentPath)
}

/// [`capture`], in dot-delimited notation: `document.issuedBy`
pub fn capture_dotted<T>(chain: T) -> Result<String, BeanPathError> {
    Ok(capture(chain)?.to_dot_delimited_string().to_string())
}
