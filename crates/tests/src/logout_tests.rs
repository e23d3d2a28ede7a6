use platform::fixtures::DEMO_STARTUP_EMAIL;
use platform::{SessionStorage, SessionStore};
use pretty_assertions::assert_eq;

use crate::common::{backend, test_store, BrokenStorage};

#[tokio::test]
async fn logout_clears_session_and_slot() {
    let (mut store, storage) = test_store();
    assert!(store.login(DEMO_STARTUP_EMAIL, "pw").await);

    store.logout();

    assert!(!store.session().is_authenticated());
    assert_eq!(store.session().stats(), None);
    assert_eq!(storage.load().unwrap(), None);
}

#[tokio::test]
async fn restore_after_logout_is_signed_out() {
    let (mut store, storage) = test_store();
    assert!(store.login(DEMO_STARTUP_EMAIL, "pw").await);
    store.logout();

    let restored = SessionStore::restore(storage, backend());
    assert!(!restored.session().is_authenticated());
}

#[test]
fn logout_when_signed_out_is_harmless() {
    let (mut store, _) = test_store();
    store.logout();
    store.logout();
    assert!(!store.session().is_authenticated());
}

#[test]
fn logout_survives_a_broken_slot() {
    let mut store = SessionStore::new(BrokenStorage, backend());
    store.logout();
    assert!(!store.session().is_authenticated());
}
