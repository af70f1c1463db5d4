use super::*;

// =============================================================
// MemoryTokenStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryTokenStore::new().read(), None);
}

#[test]
fn memory_store_save_overwrites() {
    let store = MemoryTokenStore::with_credential("first");
    store.save("second");
    assert_eq!(store.read().as_deref(), Some("second"));
}

#[test]
fn memory_store_clear_is_idempotent() {
    let store = MemoryTokenStore::with_credential("abc");
    store.clear();
    store.clear();
    assert_eq!(store.read(), None);
}

#[test]
fn memory_store_clones_share_the_slot() {
    let store = MemoryTokenStore::new();
    let observer = store.clone();
    store.save("shared");
    assert_eq!(observer.read().as_deref(), Some("shared"));
    observer.clear();
    assert_eq!(store.read(), None);
}

// =============================================================
// LocalStorageTokenStore outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_store_is_empty_without_a_browser() {
    let store = LocalStorageTokenStore::new();
    store.save("ignored");
    assert_eq!(store.read(), None);
    store.clear();
}
