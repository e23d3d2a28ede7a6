use pretty_assertions::assert_eq;
use shared_types::{User, UserRole};

use crate::common::{test_store, FIXTURE_EMAILS};
use platform::fixtures::{DEMO_INVESTOR_EMAIL, DEMO_STARTUP_EMAIL};
use platform::SessionStorage;

// ─── Known accounts ─────────────────────────────────────────────────────────

#[tokio::test]
async fn every_fixture_account_can_sign_in() {
    for email in FIXTURE_EMAILS {
        let (mut store, _) = test_store();
        assert!(store.login(email, "anything").await, "login failed for {email}");
        let session = store.session();
        assert!(session.is_authenticated());
        assert_eq!(session.user().map(User::email), Some(email));
        assert!(session.stats().is_some(), "no stats for {email}");
    }
}

#[tokio::test]
async fn role_follows_the_account_variant() {
    let (mut store, _) = test_store();
    assert!(store.login(DEMO_INVESTOR_EMAIL, "pw").await);
    assert_eq!(store.session().role(), Some(UserRole::Investor));

    let stats = store.session().stats().cloned().unwrap();
    assert_eq!(stats.open_deals, Some(0));
    assert_eq!(stats.funding_progress, None);
    assert!((5..=24).contains(&stats.total_matches));
}

#[tokio::test]
async fn email_lookup_is_exact() {
    let (mut store, _) = test_store();
    assert!(!store.login("  startup@example.com ", "pw").await);
    assert!(!store.login("Startup@Example.com", "pw").await);
    assert!(!store.session().is_authenticated());
}

#[tokio::test]
async fn successful_login_persists_the_user() {
    let (mut store, storage) = test_store();
    assert!(store.login(DEMO_STARTUP_EMAIL, "pw").await);

    let raw = storage.load().unwrap().expect("slot should be written");
    let stored: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(Some(&stored), store.session().user());
}

// ─── Unknown accounts ───────────────────────────────────────────────────────

#[tokio::test]
async fn unknown_email_is_rejected() {
    let (mut store, storage) = test_store();
    assert!(!store.login("nobody@example.com", "pw").await);
    assert!(!store.session().is_authenticated());
    assert_eq!(storage.load().unwrap(), None);
}

#[tokio::test]
async fn failed_login_keeps_the_previous_session() {
    let (mut store, _) = test_store();
    assert!(store.login(DEMO_STARTUP_EMAIL, "pw").await);
    let before = store.session().clone();

    assert!(!store.login("STARTUP@EXAMPLE.COM", "pw").await);
    assert_eq!(store.session(), &before);
}

#[tokio::test]
async fn second_login_replaces_the_first() {
    let (mut store, _) = test_store();
    assert!(store.login(DEMO_STARTUP_EMAIL, "pw").await);
    assert!(store.login(DEMO_INVESTOR_EMAIL, "pw").await);
    assert_eq!(store.session().role(), Some(UserRole::Investor));
}
