use platform::fixtures::{DEMO_INVESTOR_EMAIL, DEMO_STARTUP_EMAIL};
use platform::{SessionStorage, SessionStore};
use pretty_assertions::assert_eq;
use shared_types::{UserPatch, UserRole};

use crate::common::{backend, registration, FlakyStorage};

#[tokio::test]
async fn login_fails_when_the_slot_cannot_be_written() {
    let storage = FlakyStorage::default();
    storage.set_fail_writes(true);
    let mut store = SessionStore::new(storage.clone(), backend());

    assert!(!store.login(DEMO_STARTUP_EMAIL, "pw").await);
    assert!(!store.session().is_authenticated());
    assert_eq!(storage.inner().load().unwrap(), None);
}

#[tokio::test]
async fn failed_write_keeps_the_previous_session() {
    let storage = FlakyStorage::default();
    let mut store = SessionStore::new(storage.clone(), backend());
    assert!(store.login(DEMO_STARTUP_EMAIL, "pw").await);
    let before = store.session().clone();

    storage.set_fail_writes(true);
    assert!(!store.login(DEMO_INVESTOR_EMAIL, "pw").await);
    assert_eq!(store.session(), &before);

    let patch = UserPatch {
        name: Some("Unsaved".into()),
        ..Default::default()
    };
    assert!(!store.update_user_profile(&patch).await);
    assert_eq!(store.session(), &before);
}

#[tokio::test]
async fn register_fails_when_the_slot_cannot_be_written() {
    let storage = FlakyStorage::default();
    storage.set_fail_writes(true);
    let mut store = SessionStore::new(storage, backend());

    let data = registration("Nia Park", "nia@nimbus.dev");
    assert!(!store.register(&data, UserRole::Startup).await);
    assert!(!store.session().is_authenticated());
}
