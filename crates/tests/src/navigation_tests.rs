use platform::fixtures::{DEMO_INVESTOR_EMAIL, DEMO_STARTUP_EMAIL};
use pretty_assertions::assert_eq;
use shared_types::{
    guard, is_active, page_title, section_path, visible_items, Access, DrawerState, Section,
    UserRole,
};

use crate::common::test_store;

// ─── Guard scenarios ────────────────────────────────────────────────────────

#[tokio::test]
async fn signed_out_visitor_is_sent_to_login() {
    let (store, _) = test_store();
    let role = store.session().role();
    for route_role in UserRole::ALL {
        assert_eq!(guard(role, route_role, Some(Section::Dashboard)), Access::RedirectLogin);
        assert_eq!(guard(role, route_role, None), Access::RedirectLogin);
    }
}

#[tokio::test]
async fn startup_session_reaches_its_own_sections_only() {
    let (mut store, _) = test_store();
    assert!(store.login(DEMO_STARTUP_EMAIL, "pw").await);
    let role = store.session().role();

    for section in visible_items(UserRole::Startup) {
        assert_eq!(guard(role, UserRole::Startup, Some(section)), Access::Allow);
    }
    assert_eq!(
        guard(role, UserRole::Investor, Some(Section::Dashboard)),
        Access::RedirectHome(UserRole::Startup)
    );
    assert_eq!(
        guard(role, UserRole::Startup, Some(Section::StartupMatches)),
        Access::RedirectLanding
    );
}

#[tokio::test]
async fn logout_revokes_dashboard_access() {
    let (mut store, _) = test_store();
    assert!(store.login(DEMO_INVESTOR_EMAIL, "pw").await);
    assert_eq!(
        guard(store.session().role(), UserRole::Investor, Some(Section::Funding)),
        Access::Allow
    );

    store.logout();
    assert_eq!(
        guard(store.session().role(), UserRole::Investor, Some(Section::Funding)),
        Access::RedirectLogin
    );
}

// ─── Menu and titles ────────────────────────────────────────────────────────

#[test]
fn menus_differ_only_in_role_entries() {
    let startup = visible_items(UserRole::Startup);
    let investor = visible_items(UserRole::Investor);
    assert_eq!(startup.len(), 8);
    assert_eq!(investor.len(), 8);
    assert!(startup.contains(&Section::InvestorMatches));
    assert!(startup.contains(&Section::StartupProfile));
    assert!(investor.contains(&Section::StartupMatches));
    assert!(investor.contains(&Section::InvestorProfile));
    assert_eq!(startup[0], Section::Dashboard);
    assert_eq!(startup.last(), Some(&Section::Settings));
}

#[test]
fn every_menu_entry_titles_and_highlights_its_page() {
    for role in UserRole::ALL {
        for section in visible_items(role) {
            let location = section_path(role, section);
            assert!(location.starts_with(role.route_prefix()));
            assert_eq!(page_title(&location), section.label(), "{location}");
            assert!(is_active(&location, section));
        }
    }
}

#[test]
fn unknown_location_titles_as_dashboard() {
    assert_eq!(page_title("/startup"), "Dashboard");
    assert_eq!(page_title("/nowhere"), "Dashboard");
}

#[test]
fn drawer_toggles_between_widths() {
    let drawer = DrawerState::default();
    assert_eq!(drawer.width(), 260);
    assert_eq!(drawer.toggle().width(), 64);
    assert_eq!(drawer.toggle().toggle(), drawer);
}
