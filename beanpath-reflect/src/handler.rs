use beanpath_core::{Class, DeclaredMethod, Primitive, TypeToken, Value};

use crate::{BeanPathError, InvocationHandler, Mock, Returned, current, mocker, naming, trace};

/// Records every intercepted accessor call as a path segment.
///
/// Returns primitive defaults for primitive properties, `Null` for
/// properties of final types, and otherwise a mock of the property type so
/// the chain can go on.
pub(crate) struct PathRecorder {
    token: TypeToken,
    raw: &'static Class,
}

impl PathRecorder {
    pub(crate) fn new(token: TypeToken) -> Self {
        let raw = token.raw_class();
        PathRecorder { token, raw }
    }
}

impl InvocationHandler for PathRecorder {
    fn invoke(
        &self,
        _mock: &Mock,
        method: DeclaredMethod,
        _args: &[Value],
    ) -> Result<Returned, BeanPathError> {
        current::init_if_not_already(self.raw);

        let returns = self.token.resolve_return_type(&method);
        let raw = returns.raw_class();
        let primitive = raw.primitive();

        let name = naming::strip_get_is_prefix(method.method.name);
        trace!("Recording {}: {} on {}", name, returns, self.token);
        current::append(name, primitive.map_or(raw, Primitive::wrapper));

        if let Some(primitive) = primitive {
            return Ok(Returned::Value(primitive.default_value()));
        }
        if raw.is_final() {
            return Ok(Returned::Value(Value::Null));
        }
        match mocker::obtain_mock(returns) {
            Ok(mock) => Ok(Returned::Mock(mock)),
            Err(err) => {
                current::evict();
                Err(err)
            }
        }
    }

    fn abandon(&self) {
        current::evict();
    }
}
