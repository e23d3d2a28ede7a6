pub mod analytics;
pub mod communications;
pub mod dashboard;
pub mod documents;
pub mod funding;
pub mod landing;
pub mod login;
pub mod matches;
pub mod profile;
pub mod register;
pub mod settings;
pub mod shell;
pub mod widgets;

use crate::auth::use_auth;
use dioxus::prelude::*;
use shared_types::{guard, Access, Section, UserRole};

use landing::Landing;
use login::Login;
use register::Register;
use shell::DashboardShell;

/// Application routes.
///
/// Both role subtrees share one pair of variants; the `role` segment only
/// parses as `startup` or `investor`, and anything else falls through to
/// [`Route::NotFound`].
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/register?:role")]
    Register { role: Option<String> },
    #[layout(RoleGuard)]
        #[route("/:role")]
        RoleHome { role: UserRole },
        #[layout(DashboardShell)]
            #[route("/:role/:section")]
            SectionPage { role: UserRole, section: Section },
        #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    pub fn section(role: UserRole, section: Section) -> Self {
        Route::SectionPage { role, section }
    }

    /// Dashboard home of `role`.
    pub fn home(role: UserRole) -> Self {
        Self::section(role, Section::Dashboard)
    }

    /// The subtree role and section this route points into, if any.
    fn dashboard_target(&self) -> Option<(UserRole, Option<Section>)> {
        match self {
            Route::RoleHome { role } => Some((*role, None)),
            Route::SectionPage { role, section } => Some((*role, Some(*section))),
            _ => None,
        }
    }
}

/// Where a guard decision sends the user, if anywhere.
fn redirect_for(access: Access) -> Option<Route> {
    match access {
        Access::Allow => None,
        Access::RedirectLogin => Some(Route::Login {}),
        Access::RedirectHome(role) => Some(Route::home(role)),
        Access::RedirectLanding => Some(Route::Landing {}),
    }
}

/// Role subtree guard: sends visitors without a session to `/login`, a
/// session of the other role to its own dashboard, and sections owned by
/// the other role to `/`.
#[component]
fn RoleGuard() -> Element {
    let route: Route = use_route();
    let auth = use_auth();

    let Some((route_role, section)) = route.dashboard_target() else {
        return rsx! { Outlet::<Route> {} };
    };

    match redirect_for(guard(auth.role(), route_role, section)) {
        None => rsx! { Outlet::<Route> {} },
        Some(target) => {
            tracing::debug!(from = %route, to = %target, "route guard redirect");
            navigator().replace(target);
            rsx! {
                div { class: "page-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

/// `/startup` and `/investor` land on the dashboard home.
#[component]
fn RoleHome(role: UserRole) -> Element {
    navigator().replace(Route::home(role));
    rsx! {}
}

/// Renders the page for a dashboard section.
#[component]
fn SectionPage(role: UserRole, section: Section) -> Element {
    match section {
        Section::Dashboard => match role {
            UserRole::Startup => rsx! { dashboard::StartupDashboard {} },
            UserRole::Investor => rsx! { dashboard::InvestorDashboard {} },
        },
        Section::InvestorMatches | Section::StartupMatches => rsx! { matches::Matches {} },
        Section::Communications => rsx! { communications::Communications {} },
        Section::Funding => rsx! { funding::Funding {} },
        Section::Analytics => rsx! { analytics::Analytics {} },
        Section::Documents => rsx! { documents::Documents {} },
        Section::StartupProfile | Section::InvestorProfile => rsx! { profile::Profile {} },
        Section::Settings => rsx! { settings::Settings {} },
    }
}

/// Unknown paths go back to the landing page.
#[component]
fn NotFound(route: Vec<String>) -> Element {
    tracing::debug!(path = %route.join("/"), "unknown path");
    navigator().replace(Route::Landing {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{section_path, visible_items};

    #[test]
    fn section_routes_match_rebased_paths() {
        for role in UserRole::ALL {
            for section in visible_items(role) {
                assert_eq!(
                    Route::section(role, section).to_string(),
                    section_path(role, section)
                );
            }
        }
    }

    #[test]
    fn role_paths_parse() {
        let route: Route = "/investor/startup-matches".parse().unwrap();
        assert_eq!(route, Route::section(UserRole::Investor, Section::StartupMatches));
        let route: Route = "/startup".parse().unwrap();
        assert_eq!(route, Route::RoleHome { role: UserRole::Startup });
    }

    #[test]
    fn public_paths_are_not_role_subtrees() {
        assert_eq!("/login".parse::<Route>().unwrap(), Route::Login {});
        assert_eq!("/".parse::<Route>().unwrap(), Route::Landing {});
    }

    #[test]
    fn unknown_paths_fall_through() {
        for path in ["/admin/dashboard", "/startup/billing", "/nowhere"] {
            assert!(matches!(
                path.parse::<Route>().unwrap(),
                Route::NotFound { .. }
            ));
        }
    }

    #[test]
    fn guard_decisions_map_to_routes() {
        assert_eq!(redirect_for(Access::Allow), None);
        assert_eq!(redirect_for(Access::RedirectLogin), Some(Route::Login {}));
        assert_eq!(
            redirect_for(Access::RedirectHome(UserRole::Investor)),
            Some(Route::home(UserRole::Investor))
        );
        assert_eq!(redirect_for(Access::RedirectLanding), Some(Route::Landing {}));
    }

    #[test]
    fn foreign_section_redirects_to_landing() {
        let route = Route::section(UserRole::Investor, Section::InvestorMatches);
        let (role, section) = route.dashboard_target().unwrap();
        let target = redirect_for(guard(Some(UserRole::Investor), role, section));
        assert_eq!(target, Some(Route::Landing {}));
    }
}
