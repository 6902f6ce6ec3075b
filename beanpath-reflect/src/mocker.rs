use alloc::boxed::Box;
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, PoisonError, RwLock};

use beanpath_core::TypeToken;

use crate::handler::PathRecorder;
use crate::{BeanPathError, Mock, MockMaker, debug};

/// Generated mocks by exact type, generic arguments included. Mocks are never
/// evicted and live as long as the process.
static CACHE: LazyLock<RwLock<HashMap<TypeToken, &'static Mock>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Serializes mock generation so a type is never mocked twice
static CREATION: Mutex<()> = Mutex::new(());

fn lookup(token: &TypeToken) -> Option<&'static Mock> {
    CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(token)
        .copied()
}

/// The recording mock of `token`, generated on first use
pub(crate) fn obtain_mock(token: TypeToken) -> Result<&'static Mock, BeanPathError> {
    if let Some(mock) = lookup(&token) {
        return Ok(mock);
    }

    let _guard = CREATION.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(mock) = lookup(&token) {
        return Ok(mock);
    }

    let mock = MockMaker::create_mock(token.clone(), PathRecorder::new(token.clone())).map_err(
        |cause| BeanPathError::MockCreation {
            token: token.clone(),
            cause,
        },
    )?;
    let mock: &'static Mock = Box::leak(Box::new(mock));
    debug!("Cached {} for {}", mock, token);

    CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(token, mock);
    Ok(mock)
}
