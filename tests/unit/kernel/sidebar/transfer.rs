use super::*;
use crate::kernel::command::SidebarCommand;
use crate::kernel::services::ports::Settings;
use crate::kernel::sidebar::test_support::Harness;
use tempfile::tempdir;

#[test]
fn duplicate_prompt_prefills_source_and_selects_stem() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("report.tar.gz");
    std::fs::write(&source, "").unwrap();
    let mut h = Harness::new();
    h.cancel_next_prompt();

    let outcome = h.run(SidebarCommand::Duplicate, &[source.clone()]).unwrap();

    assert_eq!(outcome, Outcome::Cancelled);
    let request = &h.host.requests[0];
    assert_eq!(request.label, "Duplicate as:");
    assert_eq!(request.initial, source.to_string_lossy());
    assert_eq!(request.selected_text(), "report");
    assert!(h.rx.try_recv().is_err());
}

#[test]
fn move_prompt_uses_same_selection() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("report.tar.gz");
    std::fs::write(&source, "").unwrap();
    let mut h = Harness::new();
    h.cancel_next_prompt();

    h.run(SidebarCommand::Move, &[source]).unwrap();

    assert_eq!(h.host.requests[0].label, "Move to:");
    assert_eq!(h.host.requests[0].selected_text(), "report");
}

#[test]
fn duplicate_file_opens_copy_after_completion() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.txt");
    std::fs::write(&source, "hello").unwrap();
    let copy = dir.path().join("a copy.txt");
    let mut h = Harness::new();
    h.answer(copy.to_str().unwrap());

    let submitted = h.run(SidebarCommand::Duplicate, &[source.clone()]).unwrap();
    assert!(matches!(submitted, Outcome::Submitted(_)));
    assert_eq!(
        h.host.statuses[0],
        format!("Copying \"{}\" to \"{}\"", source.display(), copy.display())
    );

    let done = h.finish().unwrap();

    assert_eq!(done, Outcome::Duplicated(copy.clone()));
    assert_eq!(std::fs::read_to_string(&copy).unwrap(), "hello");
    assert!(source.exists());
    assert_eq!(h.host.opened, vec![copy]);
    assert_eq!(h.host.refreshes, 1);
}

#[test]
fn relative_answer_lands_next_to_source() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.txt");
    std::fs::write(&source, "a").unwrap();
    let mut h = Harness::new();
    h.answer("b.txt");

    h.run(SidebarCommand::Duplicate, &[source]).unwrap();
    h.finish().unwrap();

    assert!(dir.path().join("b.txt").is_file());
}

#[test]
fn duplicate_directory_does_not_open_anything() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("pkg");
    std::fs::create_dir_all(source.join("sub")).unwrap();
    std::fs::write(source.join("sub").join("x.txt"), "x").unwrap();
    let target = dir.path().join("pkg2");
    let mut h = Harness::new();
    h.answer(target.to_str().unwrap());

    h.run(SidebarCommand::Duplicate, &[source]).unwrap();
    h.finish().unwrap();

    assert_eq!(
        std::fs::read_to_string(target.join("sub").join("x.txt")).unwrap(),
        "x"
    );
    assert!(h.host.opened.is_empty());
}

#[test]
fn duplicate_respects_open_setting() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.txt");
    std::fs::write(&source, "a").unwrap();
    let mut h = Harness::builder()
        .settings(Settings {
            open_duplicated_files: false,
            ..Settings::default()
        })
        .build();
    h.answer("b.txt");

    h.run(SidebarCommand::Duplicate, &[source]).unwrap();
    h.finish().unwrap();

    assert!(h.host.opened.is_empty());
}

#[test]
fn duplicate_onto_existing_file_fails_and_refreshes() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.txt");
    let taken = dir.path().join("b.txt");
    std::fs::write(&source, "a").unwrap();
    std::fs::write(&taken, "b").unwrap();
    let mut h = Harness::new();
    h.answer("b.txt");

    h.run(SidebarCommand::Duplicate, &[source.clone()]).unwrap();
    let err = h.finish().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(std::fs::read_to_string(&taken).unwrap(), "b");
    assert_eq!(
        h.last_status(),
        Some(
            format!(
                "Unable to duplicate: \"{}\" to \"{}\". File or Folder already exists: {}",
                source.display(),
                taken.display(),
                taken.display()
            )
            .as_str()
        )
    );
    assert_eq!(h.host.refreshes, 1);
}

#[test]
fn move_file_retargets_document() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.txt");
    std::fs::write(&source, "a").unwrap();
    let target = dir.path().join("moved").join("a.txt");
    let mut h = Harness::new();
    let doc = h.open(&source);
    h.answer(target.to_str().unwrap());

    h.run(SidebarCommand::Move, &[source.clone()]).unwrap();
    let done = h.finish().unwrap();

    assert_eq!(
        done,
        Outcome::Relocated {
            to: target.clone(),
            retargeted: 1
        }
    );
    assert!(!source.exists());
    assert!(target.is_file());
    assert_eq!(h.documents.path(doc), Some(target.as_path()));
    assert_eq!(
        h.last_status(),
        Some(format!("Moved \"{}\" to \"{}\"", source.display(), target.display()).as_str())
    );
}

#[test]
fn move_directory_retargets_subtree() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("b");
    std::fs::create_dir(&source).unwrap();
    std::fs::write(source.join("x.txt"), "x").unwrap();
    let sibling = dir.path().join("bx.txt");
    std::fs::write(&sibling, "").unwrap();
    let target = dir.path().join("c");

    let mut h = Harness::new();
    let inside = h.open(&source.join("x.txt"));
    let outside = h.open(&sibling);
    h.answer("c");

    h.run(SidebarCommand::Move, &[source]).unwrap();
    h.finish().unwrap();

    assert_eq!(
        h.documents.path(inside),
        Some(target.join("x.txt").as_path())
    );
    assert_eq!(h.documents.path(outside), Some(sibling.as_path()));
}

#[test]
fn move_failure_keeps_documents() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.txt");
    std::fs::write(&source, "a").unwrap();
    std::fs::write(dir.path().join("b.txt"), "b").unwrap();
    let mut h = Harness::new();
    let doc = h.open(&source);
    h.answer("b.txt");

    h.run(SidebarCommand::Move, &[source.clone()]).unwrap();
    assert!(h.finish().is_err());

    assert!(source.exists());
    assert_eq!(h.documents.path(doc), Some(source.as_path()));
    assert!(h.last_status().unwrap().starts_with("Unable to move:"));
}

#[test]
fn transfer_without_target_does_not_prompt() {
    let mut h = Harness::new();
    assert_eq!(h.run(SidebarCommand::Move, &[]).unwrap(), Outcome::NoTarget);
    assert_eq!(
        h.run(SidebarCommand::Duplicate, &[]).unwrap(),
        Outcome::NoTarget
    );
    assert!(h.host.requests.is_empty());
}

#[cfg(unix)]
#[test]
fn duplicate_read_only_file_succeeds_and_opens_copy() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let source = dir.path().join("ro.txt");
    std::fs::write(&source, "locked").unwrap();
    std::fs::set_permissions(&source, std::fs::Permissions::from_mode(0o444)).unwrap();
    let copy = dir.path().join("ro2.txt");
    let mut h = Harness::new();
    h.answer("ro2.txt");

    h.run(SidebarCommand::Duplicate, &[source]).unwrap();
    let done = h.finish().unwrap();

    assert_eq!(done, Outcome::Duplicated(copy.clone()));
    assert_eq!(std::fs::read_to_string(&copy).unwrap(), "locked");
    assert_eq!(h.host.opened, vec![copy]);
    assert!(!h.host.statuses.iter().any(|s| s.starts_with("Unable")));
}
