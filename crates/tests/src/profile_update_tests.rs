use platform::fixtures::{DEMO_INVESTOR_EMAIL, DEMO_STARTUP_EMAIL};
use platform::SessionStorage;
use pretty_assertions::assert_eq;
use shared_types::{InvestorPatch, ProfileForm, User, UserPatch, UserRole};

use crate::common::test_store;

#[tokio::test]
async fn update_without_session_creates_nothing() {
    let (mut store, storage) = test_store();
    let patch = UserPatch {
        name: Some("Ghost".into()),
        ..Default::default()
    };
    assert!(!store.update_user_profile(&patch).await);
    assert!(!store.session().is_authenticated());
    assert_eq!(storage.load().unwrap(), None);
}

#[tokio::test]
async fn profile_form_edits_are_merged_and_persisted() {
    let (mut store, storage) = test_store();
    assert!(store.login(DEMO_STARTUP_EMAIL, "pw").await);
    let user = store.session().user().cloned().unwrap();

    let mut form = ProfileForm::from_user(&user);
    form.organization = "  Launchpad AI ".into();
    form.detail = "Berlin".into();
    assert!(form.field_errors().is_empty());
    assert!(store.update_user_profile(&form.to_patch(UserRole::Startup)).await);

    let Some(User::Startup(updated)) = store.session().user() else {
        panic!("variant changed");
    };
    assert_eq!(updated.profile.startup_name, "Launchpad AI");
    assert_eq!(updated.profile.headquarters, "Berlin");
    assert_eq!(updated.account.id, user.id());

    let raw = storage.load().unwrap().unwrap();
    assert!(raw.contains("Launchpad AI"));
}

#[tokio::test]
async fn other_role_patch_is_ignored() {
    let (mut store, _) = test_store();
    assert!(store.login(DEMO_STARTUP_EMAIL, "pw").await);
    let before = store.session().user().cloned().unwrap();

    let patch = UserPatch {
        investor: Some(InvestorPatch {
            risk_appetite: Some("Aggressive".into()),
            ..Default::default()
        }),
        ..Default::default()
    };
    assert!(store.update_user_profile(&patch).await);
    assert_eq!(store.session().user(), Some(&before));
}

#[tokio::test]
async fn update_keeps_the_stats_snapshot() {
    let (mut store, _) = test_store();
    assert!(store.login(DEMO_INVESTOR_EMAIL, "pw").await);
    let stats = store.session().stats().cloned();

    let patch = UserPatch {
        phone_number: Some("+44 20 7946 0000".into()),
        ..Default::default()
    };
    assert!(store.update_user_profile(&patch).await);
    assert_eq!(store.session().stats().cloned(), stats);
}

#[tokio::test]
async fn late_update_for_another_user_is_dropped() {
    let (mut store, _) = test_store();
    assert!(store.login(DEMO_STARTUP_EMAIL, "pw").await);
    let startup = store.session().user().cloned().unwrap();
    let pending = store
        .backend()
        .update_account(&startup, &UserPatch::default())
        .await;

    assert!(store.login(DEMO_INVESTOR_EMAIL, "pw").await);
    assert!(!store.complete_update(pending));
    assert_eq!(store.session().role(), Some(UserRole::Investor));
}
