use beanpath_core::{Class, GenericType, Method, Path, ROOT_NAME, lang};
use std::collections::HashSet;

static DATA_SOURCE: Class = Class::builder("sql.DataSource")
    .interface()
    .methods(&const {
        [Method::builder("getConnection")
            .returns(GenericType::Class(|| &CONNECTION))
            .build()]
    })
    .build();

static CONNECTION: Class = Class::builder("sql.Connection")
    .interface()
    .methods(&const {
        [Method::builder("getMetaData")
            .returns(GenericType::Class(|| &DATABASE_META_DATA))
            .build()]
    })
    .build();

static DATABASE_META_DATA: Class = Class::builder("sql.DatabaseMetaData")
    .interface()
    .build();

fn meta_data_path() -> Path {
    Path::root(&DATA_SOURCE)
        .append("connection", &CONNECTION)
        .append("metaData", &DATABASE_META_DATA)
}

fn assert_path_is(name: &str, ty: &'static Class, is_root: bool, path: &Path) {
    assert_eq!(path.name(), name);
    assert_eq!(path.ty(), ty);
    assert_eq!(path.is_root(), is_root);
}

#[test]
fn basic() {
    beanpath_testhelpers::setup();

    let path = meta_data_path();

    assert_path_is("metaData", &DATABASE_META_DATA, false, &path);
    let connection = path.parent().unwrap();
    assert_path_is("connection", &CONNECTION, false, connection);
    let root = connection.parent().unwrap();
    assert_path_is(ROOT_NAME, &DATA_SOURCE, true, root);
    assert!(root.parent().is_none());
}

#[test]
fn path_invariants() {
    beanpath_testhelpers::setup();

    let path = Path::root(&DATA_SOURCE).append("connection", &CONNECTION);

    assert_eq!(path.has_parent(), path.parent().is_some());
    assert_eq!(path.is_root(), path.root_path().ptr_eq(&path));
    assert_eq!(!path.is_root(), path.has_parent());
    assert!(path.root_path().ptr_eq(path.root_path().root_path()));
}

#[test]
fn root_invariants() {
    beanpath_testhelpers::setup();

    let root = Path::root(&DATA_SOURCE);

    assert!(root.is_root());
    assert!(!root.has_parent());
    assert_path_is(ROOT_NAME, &DATA_SOURCE, true, &root);
    assert!(root.parent().is_none());
    assert!(root.root_path().ptr_eq(&root));
    assert_eq!(root.depth(), 0);
}

#[test]
fn append_leaves_receiver_intact() {
    beanpath_testhelpers::setup();

    let connection = Path::root(&DATA_SOURCE).append("connection", &CONNECTION);
    let meta_data = connection.append("metaData", &DATABASE_META_DATA);

    assert_eq!(connection.depth(), 1);
    assert_eq!(meta_data.depth(), 2);
    assert!(meta_data.parent().unwrap().ptr_eq(&connection));
    assert_eq!(connection.name(), "connection");
}

#[test]
#[should_panic(expected = "Argument 'name' must not be empty")]
fn append_rejects_empty_name() {
    Path::root(&DATA_SOURCE).append("", &CONNECTION);
}

#[test]
fn dot_delimited_string_representation() {
    beanpath_testhelpers::setup();

    let path = meta_data_path();

    assert_eq!(path.to_dot_delimited_string(), "connection.metaData");
    // cached: same allocation every time
    assert!(core::ptr::eq(
        path.to_dot_delimited_string(),
        path.to_dot_delimited_string()
    ));

    assert_eq!(path.root_path().to_dot_delimited_string(), "");
    assert_eq!(path.parent().unwrap().to_dot_delimited_string(), "connection");
}

#[test]
fn iterates_from_root_to_tail() {
    beanpath_testhelpers::setup();

    let path = meta_data_path();

    let mut iter = path.iter();
    assert_eq!(iter.len(), 3);
    assert_path_is(ROOT_NAME, &DATA_SOURCE, true, iter.next().unwrap());
    assert_path_is("connection", &CONNECTION, false, iter.next().unwrap());
    assert_path_is("metaData", &DATABASE_META_DATA, false, iter.next().unwrap());
    assert!(iter.next().is_none());

    // restartable
    let names: Vec<&str> = (&path).into_iter().map(Path::name).collect();
    assert_eq!(names, [ROOT_NAME, "connection", "metaData"]);

    let root = Path::root(&DATA_SOURCE);
    assert_eq!(root.iter().count(), 1);
    assert!(root.iter().next().unwrap().ptr_eq(&root));
}

#[test]
fn equals_and_hash_code() {
    beanpath_testhelpers::setup();

    let some_path = Path::root(&lang::OBJECT).append("foo", &lang::STRING);
    let same_path = Path::root(&lang::OBJECT).append("foo", &lang::STRING);
    let other_path = Path::root(&lang::OBJECT).append("bar", &lang::STRING);
    let other_type = Path::root(&lang::OBJECT).append("foo", &lang::INTEGER);
    let other_root = Path::root(&DATA_SOURCE).append("foo", &lang::STRING);

    assert_eq!(some_path, some_path);
    assert_eq!(some_path, same_path);
    assert_ne!(some_path, other_path);
    assert_ne!(same_path, other_path);
    assert_ne!(some_path, other_type);
    assert_ne!(some_path, other_root);

    assert_eq!(some_path.hash_code(), same_path.hash_code());

    let set: HashSet<Path> = [some_path.clone(), same_path, other_path].into_iter().collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains(&some_path));
}

#[test]
fn hash_code_is_stable_across_threads() {
    beanpath_testhelpers::setup();

    let path = meta_data_path();
    let expected = meta_data_path().hash_code();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(path.hash_code(), expected));
        }
    });
    assert_eq!(path.hash_code(), expected);
}

#[test]
fn to_string_representation() {
    beanpath_testhelpers::setup();

    let path = meta_data_path();

    insta::assert_snapshot!(path, @"<root>:DataSource/connection:Connection/metaData:DatabaseMetaData");
    insta::assert_snapshot!(path.root_path(), @"<root>:DataSource");
    assert_eq!(format!("{path:?}"), format!("Path({path})"));
}

fn deep_path(depth: usize) -> Path {
    let mut path = Path::root(&DATA_SOURCE);
    for _ in 0..depth {
        path = path.append("connection", &CONNECTION);
    }
    path
}

#[test]
fn deep_paths_hash_compare_and_drop() {
    beanpath_testhelpers::setup();

    const DEPTH: usize = 500_000;
    let path = deep_path(DEPTH);
    let same = deep_path(DEPTH);
    let shorter = deep_path(DEPTH - 1);

    assert_eq!(path.depth(), DEPTH);
    assert_eq!(path.hash_code(), same.hash_code());
    assert_eq!(path, same);
    assert_ne!(path, shorter);
    assert_eq!(path.parent(), Some(&shorter));

    drop(path);
    drop(same);

    // ancestors still referenced elsewhere survive the drop
    let parent = shorter.parent().cloned();
    drop(shorter);
    assert_eq!(parent.map(|p| p.depth()), Some(DEPTH - 2));
}
