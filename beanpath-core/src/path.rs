//! Immutable chains of bean properties

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::hash::{Hash, Hasher};
use std::hash::DefaultHasher;
use std::sync::OnceLock;

use crate::Class;

/// Pseudo name carried by every root path
pub const ROOT_NAME: &str = "<root>";

/// Models a chain of bean properties in an object oriented manner.
///
/// A path is either a root, denoting the bean the chain starts from, or a
/// named, typed segment appended to a parent path. Paths are never mutated:
/// [`Path::append`] returns a new path and leaves its receiver intact, and
/// cloning is a reference count bump.
///
/// Derived forms (the dot-delimited string, the debug string, the hash) are
/// computed on first use and cached for the lifetime of the node.
#[derive(Clone)]
pub struct Path(Arc<Node>);

struct Node {
    parent: Option<Path>,
    name: Cow<'static, str>,
    ty: &'static Class,

    dotted: OnceLock<String>,
    display: OnceLock<String>,
    hash: OnceLock<u64>,
}

// Unlinks ancestors in a loop, so dropping a deep path does not recurse.
impl Drop for Node {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(Path(node)) = parent {
            parent = Arc::into_inner(node).and_then(|mut node| node.parent.take());
        }
    }
}

impl Path {
    fn new(parent: Option<Path>, name: Cow<'static, str>, ty: &'static Class) -> Self {
        Path(Arc::new(Node {
            parent,
            name,
            ty,
            dotted: OnceLock::new(),
            display: OnceLock::new(),
            hash: OnceLock::new(),
        }))
    }

    /// Creates the root path of type `ty`, with pseudo name [`ROOT_NAME`] and
    /// no parent
    pub fn root(ty: &'static Class) -> Self {
        Path::new(None, Cow::Borrowed(ROOT_NAME), ty)
    }

    /// Appends a segment to this path and returns the new path.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn append(&self, name: impl Into<Cow<'static, str>>, ty: &'static Class) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "Argument 'name' must not be empty");
        Path::new(Some(self.clone()), name, ty)
    }

    /// Whether this path is a root.
    ///
    /// Always `self.parent().is_none()`, and always `!self.has_parent()`.
    pub fn is_root(&self) -> bool {
        self.0.parent.is_none()
    }

    /// Whether this path has a parent.
    ///
    /// Always `self.parent().is_some()`, and always `!self.is_root()`.
    pub fn has_parent(&self) -> bool {
        self.0.parent.is_some()
    }

    /// This path without its last segment, or `None` for a root
    pub fn parent(&self) -> Option<&Path> {
        self.0.parent.as_ref()
    }

    /// The root this path grows from: a vacuous path denoting the bean the
    /// property chain is applied to. A root is its own root.
    pub fn root_path(&self) -> &Path {
        let mut path = self;
        while let Some(parent) = path.parent() {
            path = parent;
        }
        path
    }

    /// Name of the last segment, i.e. of the last property in the chain
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Type of the last segment, i.e. of the last property in the chain
    pub fn ty(&self) -> &'static Class {
        self.0.ty
    }

    /// Number of segments below the root; zero for a root
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut path = self;
        while let Some(parent) = path.parent() {
            depth += 1;
            path = parent;
        }
        depth
    }

    /// Iterates over the nodes of this path, from the root to `self`.
    ///
    /// Yields at least one node: `self`, when `self` is a root.
    pub fn iter(&self) -> Iter<'_> {
        let mut nodes = Vec::with_capacity(self.depth() + 1);
        let mut path = Some(self);
        while let Some(p) = path {
            nodes.push(p);
            path = p.parent();
        }
        nodes.reverse();
        Iter {
            nodes: nodes.into_iter(),
        }
    }

    /// The path in the familiar dot-delimited notation, e.g. `foo.bar.baz`.
    ///
    /// The nameless root is not included, so a root yields an empty string.
    pub fn to_dot_delimited_string(&self) -> &str {
        self.0.dotted.get_or_init(|| {
            let mut dotted = String::with_capacity(32);
            for node in self.iter().skip(1) {
                if !dotted.is_empty() {
                    dotted.push('.');
                }
                dotted.push_str(node.name());
            }
            dotted
        })
    }

    /// Hash of the whole chain, consistent with equality
    pub fn hash_code(&self) -> u64 {
        if let Some(hash) = self.0.hash.get() {
            return *hash;
        }

        // walk up to the nearest hashed ancestor, then hash back down
        let mut pending = Vec::new();
        let mut parent_hash = None;
        let mut ancestor = self.parent();
        while let Some(path) = ancestor {
            if let Some(hash) = path.0.hash.get() {
                parent_hash = Some(*hash);
                break;
            }
            pending.push(path);
            ancestor = path.parent();
        }
        for path in pending.into_iter().rev() {
            parent_hash = Some(*path.0.hash.get_or_init(move || path.node_hash(parent_hash)));
        }
        *self.0.hash.get_or_init(move || self.node_hash(parent_hash))
    }

    fn node_hash(&self, parent_hash: Option<u64>) -> u64 {
        let mut hasher = DefaultHasher::new();
        if let Some(parent_hash) = parent_hash {
            hasher.write_u64(parent_hash);
        }
        self.0.name.hash(&mut hasher);
        self.0.ty.hash(&mut hasher);
        hasher.finish()
    }

    /// Whether both paths are the very same node
    pub fn ptr_eq(&self, other: &Path) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    // Debug representation, e.g. `<root>:Person/document:Document`.
    // Not meant to be parsed.
    fn display(&self) -> &str {
        self.0.display.get_or_init(|| {
            let mut display = String::with_capacity(32);
            for node in self.iter() {
                if node.has_parent() {
                    display.push('/');
                }
                display.push_str(node.name());
                display.push(':');
                display.push_str(node.ty().simple_name());
            }
            display
        })
    }
}

/// Two paths are equal when they represent the same property chain on the
/// same root type.
impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        let (mut left, mut right) = (self, other);
        loop {
            if left.ptr_eq(right) {
                return true;
            }
            if left.hash_code() != right.hash_code()
                || left.0.ty != right.0.ty
                || left.0.name != right.0.name
            {
                return false;
            }
            match (left.parent(), right.parent()) {
                (Some(l), Some(r)) => (left, right) = (l, r),
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}

impl Eq for Path {}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl core::fmt::Display for Path {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.display())
    }
}

impl core::fmt::Debug for Path {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Path({})", self.display())
    }
}

/// Iterator over the nodes of a [`Path`], root first
pub struct Iter<'a> {
    nodes: alloc::vec::IntoIter<&'a Path>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Path;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.nodes.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Path;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
