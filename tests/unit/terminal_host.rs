use super::*;
use std::io::Cursor;

fn host(input: &str, assume_yes: bool) -> TerminalHost<Cursor<Vec<u8>>, Vec<u8>> {
    TerminalHost::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        vec![PathBuf::from("/w")],
        Some(PathBuf::from("/w/a.txt")),
        assume_yes,
    )
}

fn output(host: &TerminalHost<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(host.output.clone()).unwrap()
}

#[test]
fn empty_line_accepts_prefilled_text() {
    let mut host = host("\n", false);
    let answer = host.show_input(InputRequest::new("New Name:", "a.txt").with_selection(0..1));
    assert_eq!(answer.as_deref(), Some("a.txt"));
    assert_eq!(output(&host), "New Name: [a.txt] (a) ");
}

#[test]
fn typed_answer_is_trimmed_of_line_ending() {
    let mut host = host("b.txt\r\n", false);
    let answer = host.show_input(InputRequest::new("New Name:", "a.txt"));
    assert_eq!(answer.as_deref(), Some("b.txt"));
}

#[test]
fn eof_cancels_prompt_and_confirmation() {
    let mut host = host("", false);
    assert_eq!(host.show_input(InputRequest::new("File Name:", "")), None);
    assert!(!host.confirm("Delete /w/a.txt?", "Delete"));
}

#[test]
fn confirm_accepts_yes_or_ok_label() {
    let mut host = host("y\nDELETE\nno\n", false);
    assert!(host.confirm("Delete /w/a.txt?", "Delete"));
    assert!(host.confirm("Delete /w/a.txt?", "Delete"));
    assert!(!host.confirm("Delete /w/a.txt?", "Delete"));
}

#[test]
fn assume_yes_skips_reading() {
    let mut host = host("", true);
    assert!(host.confirm("Delete 2 items?", "Delete"));
    assert_eq!(output(&host), "");
}

#[test]
fn status_and_open_requests_are_recorded() {
    let mut host = host("", false);
    host.status_message("Copied \"a.txt\" to clipboard");
    host.open_file(Path::new("/w/b.txt"));

    assert_eq!(output(&host), "Copied \"a.txt\" to clipboard\n");
    assert_eq!(host.take_opened(), vec![PathBuf::from("/w/b.txt")]);
    assert!(host.take_opened().is_empty());
    assert_eq!(host.folders(), vec![PathBuf::from("/w")]);
    assert_eq!(host.active_file(), Some(PathBuf::from("/w/a.txt")));
}
