use platform::backend::NOT_SPECIFIED;
use platform::SessionStorage;
use pretty_assertions::assert_eq;
use shared_types::{DashboardStats, Level, User, UserRole};

use crate::common::{registration, test_store};

#[tokio::test]
async fn startup_registration_signs_in_with_zero_stats() {
    let (mut store, storage) = test_store();
    let data = registration("Nia Park", "nia@nimbus.dev");
    assert!(store.register(&data, UserRole::Startup).await);

    let session = store.session();
    assert_eq!(session.role(), Some(UserRole::Startup));
    assert_eq!(session.stats(), Some(&DashboardStats::zeroed(UserRole::Startup)));
    assert!(storage.load().unwrap().is_some());

    let Some(User::Startup(user)) = session.user() else {
        panic!("expected a startup account");
    };
    assert_eq!(user.account.name, "Nia Park");
    assert_eq!(user.account.email, "nia@nimbus.dev");
    assert_eq!(user.account.level, Level::L1);
    assert!(user.account.quest_id.starts_with("Q-"));
    assert_eq!(user.profile.startup_name, "Nimbus Labs");
    assert_eq!(user.profile.industry, vec!["Fintech".to_string()]);
    assert_eq!(user.profile.headquarters, NOT_SPECIFIED);
}

#[tokio::test]
async fn investor_registration_gets_investor_defaults() {
    let (mut store, _) = test_store();
    let data = registration("Omar Reyes", "omar@fund.vc");
    assert!(store.register(&data, UserRole::Investor).await);

    let session = store.session();
    assert_eq!(session.stats(), Some(&DashboardStats::zeroed(UserRole::Investor)));
    let Some(User::Investor(user)) = session.user() else {
        panic!("expected an investor account");
    };
    // startup-only fields in the registration data are ignored
    assert_eq!(user.profile.investor_type, "");
    assert_eq!(user.profile.investment_stage, vec!["Seed".to_string()]);
    assert_eq!(user.profile.risk_appetite, NOT_SPECIFIED);
}

#[tokio::test]
async fn registered_email_is_not_added_to_the_directory() {
    let (mut store, _) = test_store();
    let data = registration("Nia Park", "nia@nimbus.dev");
    assert!(store.register(&data, UserRole::Startup).await);
    store.logout();

    assert!(!store.login("nia@nimbus.dev", "pw").await);
}

#[tokio::test]
async fn minimal_investor_registration() {
    let (mut store, _) = test_store();
    let data = shared_types::UserPatch {
        name: Some("A".into()),
        email: Some("a@b.com".into()),
        ..Default::default()
    };
    assert!(store.register(&data, UserRole::Investor).await);

    let session = store.session();
    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(UserRole::Investor));
    assert_eq!(session.stats().map(|s| s.total_matches), Some(0));
    assert_eq!(session.user().map(User::email), Some("a@b.com"));
}
