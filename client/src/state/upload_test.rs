use super::*;

#[test]
fn accepts_document_extensions_case_insensitively() {
    for name in ["guide.pdf", "Policy.DOCX", "faq.txt", "page.html"] {
        assert!(is_accepted(name), "{name} should be accepted");
    }
}

#[test]
fn rejects_other_extensions() {
    for name in ["photo.png", "sheet.xlsx", "page.htm", "doc", "archive.pdf.zip"] {
        assert!(!is_accepted(name), "{name} should be rejected");
    }
}

#[test]
fn enqueue_tracks_accepted_and_rejected_files() {
    let mut state = UploadState::default();
    let id = state.enqueue("faq.txt", 120).unwrap();
    assert_eq!(state.enqueue("logo.png", 5), None);

    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].id, id);
    assert_eq!(state.entries[0].status, UploadStatus::Uploading);
    assert_eq!(state.rejected, vec!["logo.png".to_owned()]);

    state.clear_rejected();
    assert!(state.rejected.is_empty());
}

#[test]
fn uploads_settle_independently() {
    let mut state = UploadState::default();
    let a = state.enqueue("a.pdf", 1).unwrap();
    let b = state.enqueue("b.pdf", 1).unwrap();
    let c = state.enqueue("c.pdf", 1).unwrap();

    state.finish(&a, Ok(()));
    state.finish(&b, Err("Upload failed".to_owned()));

    assert_eq!(state.entries[0].status, UploadStatus::Success);
    assert_eq!(state.entries[1].status, UploadStatus::Error("Upload failed".to_owned()));
    assert_eq!(state.entries[2].status, UploadStatus::Uploading);
    assert_eq!(state.count(&UploadStatus::Success), 1);
    assert_eq!(state.count(&UploadStatus::Error(String::new())), 1);
    assert_eq!(state.count(&UploadStatus::Uploading), 1);

    state.remove(&c);
    state.finish(&c, Ok(()));
    assert_eq!(state.entries.len(), 2);
}
