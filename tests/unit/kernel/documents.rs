use super::*;

fn registry_with(paths: &[&str]) -> (OpenDocuments, Vec<DocumentId>) {
    let mut docs = OpenDocuments::new();
    let window = docs.open_window();
    let ids = paths
        .iter()
        .map(|path| docs.open(window, Some(PathBuf::from(path))).unwrap())
        .collect();
    (docs, ids)
}

#[test]
fn open_and_lookup_by_path() {
    let mut docs = OpenDocuments::new();
    let window = docs.open_window();
    let a = docs.open(window, Some(PathBuf::from("/w/a.txt"))).unwrap();
    let scratch = docs.open(window, None).unwrap();

    assert_eq!(docs.len(), 2);
    assert_eq!(docs.lookup(Path::new("/w/a.txt")), vec![a]);
    assert_eq!(docs.path(scratch), None);
    assert_eq!(docs.documents_in(window), &[a, scratch]);
}

#[test]
fn same_file_in_two_windows_is_two_documents() {
    let mut docs = OpenDocuments::new();
    let first = docs.open_window();
    let second = docs.open_window();
    let a = docs.open(first, Some(PathBuf::from("/w/a.txt"))).unwrap();
    let b = docs.open(second, Some(PathBuf::from("/w/a.txt"))).unwrap();

    assert_eq!(docs.lookup(Path::new("/w/a.txt")), vec![a, b]);
    let listed = docs.documents();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].window, first);
    assert_eq!(listed[1].window, second);
}

#[test]
fn open_in_closed_window_is_rejected() {
    let mut docs = OpenDocuments::new();
    let window = docs.open_window();
    docs.open(window, Some(PathBuf::from("/w/a.txt"))).unwrap();

    assert!(docs.close_window(window));
    assert!(docs.is_empty());
    assert!(docs.lookup(Path::new("/w/a.txt")).is_empty());
    assert!(docs.open(window, None).is_none());
    assert!(!docs.close_window(window));
}

#[test]
fn close_removes_from_index_and_window() {
    let (mut docs, ids) = registry_with(&["/w/a.txt", "/w/b.txt"]);
    assert!(docs.close(ids[0]));
    assert!(!docs.close(ids[0]));
    assert!(docs.lookup(Path::new("/w/a.txt")).is_empty());
    assert_eq!(docs.len(), 1);
}

#[test]
fn repoint_updates_index() {
    let (mut docs, ids) = registry_with(&["/w/a.txt"]);
    assert!(docs.repoint(ids[0], PathBuf::from("/w/b.txt")));

    assert!(docs.lookup(Path::new("/w/a.txt")).is_empty());
    assert_eq!(docs.lookup(Path::new("/w/b.txt")), vec![ids[0]]);
    assert_eq!(docs.path(ids[0]), Some(Path::new("/w/b.txt")));
}

#[test]
fn retarget_document_moves_every_window_copy() {
    let mut docs = OpenDocuments::new();
    let first = docs.open_window();
    let second = docs.open_window();
    let a = docs.open(first, Some(PathBuf::from("/w/a.txt"))).unwrap();
    let b = docs.open(second, Some(PathBuf::from("/w/a.txt"))).unwrap();
    let other = docs.open(second, Some(PathBuf::from("/w/other.txt"))).unwrap();

    let moved = retarget_document(&mut docs, Path::new("/w/a.txt"), Path::new("/w/z.txt"));

    assert_eq!(moved, 2);
    assert_eq!(docs.path(a), Some(Path::new("/w/z.txt")));
    assert_eq!(docs.path(b), Some(Path::new("/w/z.txt")));
    assert_eq!(docs.path(other), Some(Path::new("/w/other.txt")));
}

#[test]
fn retarget_document_matches_unnormalized_paths() {
    let (mut docs, ids) = registry_with(&["/w/sub/../a.txt"]);
    let moved = retarget_document(&mut docs, Path::new("/w/a.txt"), Path::new("/w/b.txt"));
    assert_eq!(moved, 1);
    assert_eq!(docs.path(ids[0]), Some(Path::new("/w/b.txt")));
}

#[test]
fn retarget_subtree_keeps_relative_layout() {
    let (mut docs, ids) = registry_with(&["/a/b/x.txt", "/a/b/deep/y.txt", "/a/bx.txt", "/a/b"]);

    let moved = retarget_subtree(&mut docs, Path::new("/a/b"), Path::new("/a/c"));

    assert_eq!(moved, 2);
    assert_eq!(docs.path(ids[0]), Some(Path::new("/a/c/x.txt")));
    assert_eq!(docs.path(ids[1]), Some(Path::new("/a/c/deep/y.txt")));
    assert_eq!(docs.path(ids[2]), Some(Path::new("/a/bx.txt")));
    assert_eq!(docs.path(ids[3]), Some(Path::new("/a/b")));
}

#[test]
fn retarget_subtree_ignores_untitled_documents() {
    let mut docs = OpenDocuments::new();
    let window = docs.open_window();
    let scratch = docs.open(window, None).unwrap();

    assert_eq!(retarget_subtree(&mut docs, Path::new("/a"), Path::new("/b")), 0);
    assert_eq!(docs.path(scratch), None);
}

#[test]
fn retarget_into_other_directory_tree() {
    let (mut docs, ids) = registry_with(&["/src/pkg/mod.rs"]);
    let moved = retarget_subtree(&mut docs, Path::new("/src/pkg"), Path::new("/lib/vendor/pkg"));
    assert_eq!(moved, 1);
    assert_eq!(docs.path(ids[0]), Some(Path::new("/lib/vendor/pkg/mod.rs")));
}
