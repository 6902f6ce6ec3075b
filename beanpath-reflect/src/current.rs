use core::cell::RefCell;

use beanpath_core::{Class, Path};

use crate::trace;

thread_local! {
    static CURRENT: RefCell<Option<Path>> = const { RefCell::new(None) };
}

/// Starts a path rooted at `ty`, unless this thread already records one
pub(crate) fn init_if_not_already(ty: &'static Class) {
    CURRENT.with_borrow_mut(|current| {
        if current.is_none() {
            trace!("Starting path at {}", ty);
            *current = Some(Path::root(ty));
        }
    });
}

/// Appends a segment to the path this thread records
pub(crate) fn append(name: impl Into<alloc::borrow::Cow<'static, str>>, ty: &'static Class) {
    CURRENT.with_borrow_mut(|current| {
        // started by `init_if_not_already`
        if let Some(path) = current {
            *path = path.append(name, ty);
        }
    });
}

/// Takes the path this thread records, leaving none
pub(crate) fn evict() -> Option<Path> {
    CURRENT.with_borrow_mut(Option::take)
}
