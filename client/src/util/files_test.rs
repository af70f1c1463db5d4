use super::*;

#[test]
fn extension_is_lowercased() {
    assert_eq!(extension("Report.PDF").as_deref(), Some("pdf"));
    assert_eq!(extension("archive.tar.gz").as_deref(), Some("gz"));
}

#[test]
fn extension_requires_stem_and_suffix() {
    assert_eq!(extension("README"), None);
    assert_eq!(extension(".env"), None);
    assert_eq!(extension("trailing."), None);
}

#[test]
fn has_extension_checks_list() {
    assert!(has_extension("notes.TXT", &["pdf", "txt"]));
    assert!(!has_extension("image.png", &["pdf", "txt"]));
    assert!(!has_extension("noext", &["pdf"]));
}

#[test]
fn format_size_scales_units() {
    assert_eq!(format_size(0), "0 Bytes");
    assert_eq!(format_size(512), "512 Bytes");
    assert_eq!(format_size(1536), "1.5 KB");
    assert_eq!(format_size(2 * 1024 * 1024), "2 MB");
}
