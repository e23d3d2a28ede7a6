use platform::fixtures::{DEMO_INVESTOR_EMAIL, DEMO_STARTUP_EMAIL};
use platform::{MemoryStorage, SessionStore};
use pretty_assertions::assert_eq;
use shared_types::UserRole;

use crate::common::{backend, test_store, BrokenStorage};

#[tokio::test]
async fn signed_in_user_survives_a_reload() {
    let (mut store, storage) = test_store();
    assert!(store.login(DEMO_INVESTOR_EMAIL, "pw").await);
    let user = store.session().user().cloned();

    let restored = SessionStore::restore(storage, backend());
    assert_eq!(restored.session().user().cloned(), user);
    assert_eq!(restored.session().role(), Some(UserRole::Investor));

    let stats = restored.session().stats().unwrap();
    assert_eq!(stats.potential_investments, Some(0));
    assert!((10..=109).contains(&stats.profile_views));
}

#[tokio::test]
async fn restored_session_can_be_updated() {
    let (mut store, storage) = test_store();
    assert!(store.login(DEMO_STARTUP_EMAIL, "pw").await);

    let mut restored = SessionStore::restore(storage, backend());
    let patch = shared_types::UserPatch {
        name: Some("Back Again".into()),
        ..Default::default()
    };
    assert!(restored.update_user_profile(&patch).await);
    assert_eq!(restored.session().user().unwrap().name(), "Back Again");
}

#[test]
fn empty_slot_is_signed_out() {
    let restored = SessionStore::restore(MemoryStorage::new(), backend());
    assert!(!restored.session().is_authenticated());
}

#[test]
fn corrupt_slot_is_signed_out() {
    for raw in ["not json", "{}", r#"{"role":"admin","name":"x"}"#, "null"] {
        let restored = SessionStore::restore(MemoryStorage::with_value(raw), backend());
        assert!(!restored.session().is_authenticated(), "accepted {raw:?}");
        assert_eq!(restored.session().stats(), None);
    }
}

#[test]
fn unreadable_slot_is_signed_out() {
    let restored = SessionStore::restore(BrokenStorage, backend());
    assert!(!restored.session().is_authenticated());
}
