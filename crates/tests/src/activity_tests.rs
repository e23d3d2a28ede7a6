use platform::fixtures::{DEMO_INVESTOR_EMAIL, DEMO_STARTUP_EMAIL};
use pretty_assertions::assert_eq;

use crate::common::{backend, registration, FIXTURE_EMAILS};
use shared_types::UserRole;

#[tokio::test]
async fn matches_are_sorted_best_first() {
    let backend = backend();
    for email in FIXTURE_EMAILS {
        let user = backend.authenticate(email, "pw").await.unwrap();
        let matches = backend.matches_for(&user).await;
        assert!(
            matches.windows(2).all(|w| w[0].score >= w[1].score),
            "unsorted matches for {email}"
        );
        for m in &matches {
            let other = backend.directory().find_by_id(&m.counterpart_id);
            assert_eq!(other.map(|u| u.role()), Some(user.role().counterpart()));
        }
    }
}

#[tokio::test]
async fn demo_startup_sees_its_own_activity() {
    let backend = backend();
    let user = backend.authenticate(DEMO_STARTUP_EMAIL, "pw").await.unwrap();

    let matches = backend.matches_for(&user).await;
    assert_eq!(matches[0].counterpart_name, "Alex Thompson");
    assert_eq!(matches[0].score_band(), "strong");

    let meetings = backend.meetings_for(&user).await;
    assert!(meetings.iter().all(|m| m.startup_id == user.id()));
    assert!(meetings.windows(2).all(|w| w[0].date <= w[1].date));

    let deals = backend.deals_for(&user).await;
    assert!(deals.iter().all(|d| d.involves(user.id())));
    assert!(deals.windows(2).all(|w| w[0].updated_at >= w[1].updated_at));
}

#[tokio::test]
async fn threads_group_messages_by_counterpart() {
    let backend = backend();
    let user = backend.authenticate(DEMO_INVESTOR_EMAIL, "pw").await.unwrap();
    let threads = backend.threads_for(&user).await;

    for thread in &threads {
        assert!(!thread.messages.is_empty());
        assert!(thread
            .messages
            .iter()
            .all(|m| m.counterpart_of(user.id()) == Some(thread.counterpart_id.as_str())));
        assert!(thread
            .messages
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp));
        assert_eq!(
            thread.counterpart_name,
            backend.directory().display_name(&thread.counterpart_id)
        );
    }
}

#[tokio::test]
async fn new_accounts_have_no_activity() {
    let backend = backend();
    let user = backend
        .create_account(&registration("Nia Park", "nia@nimbus.dev"), UserRole::Startup)
        .await
        .unwrap();

    assert!(backend.matches_for(&user).await.is_empty());
    assert!(backend.meetings_for(&user).await.is_empty());
    assert!(backend.deals_for(&user).await.is_empty());
    assert!(backend.threads_for(&user).await.is_empty());
}
