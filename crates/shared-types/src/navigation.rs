//! Dashboard navigation model: menu entries, role filtering, path
//! re-basing, page titles, drawer width and route access decisions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::UserRole;

/// Who may see a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavAudience {
    Startup,
    Investor,
    Both,
}

impl NavAudience {
    pub fn includes(&self, role: UserRole) -> bool {
        match self {
            NavAudience::Both => true,
            NavAudience::Startup => role == UserRole::Startup,
            NavAudience::Investor => role == UserRole::Investor,
        }
    }
}

/// A page inside a role's dashboard subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Dashboard,
    InvestorMatches,
    StartupMatches,
    Communications,
    Funding,
    Analytics,
    Documents,
    StartupProfile,
    InvestorProfile,
    Settings,
}

impl Section {
    /// Menu order.
    pub const ALL: [Section; 10] = [
        Section::Dashboard,
        Section::InvestorMatches,
        Section::StartupMatches,
        Section::Communications,
        Section::Funding,
        Section::Analytics,
        Section::Documents,
        Section::StartupProfile,
        Section::InvestorProfile,
        Section::Settings,
    ];

    /// URL segment, without the leading slash.
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::InvestorMatches => "investor-matches",
            Section::StartupMatches => "startup-matches",
            Section::Communications => "communications",
            Section::Funding => "funding",
            Section::Analytics => "analytics",
            Section::Documents => "documents",
            Section::StartupProfile => "startup-profile",
            Section::InvestorProfile => "investor-profile",
            Section::Settings => "settings",
        }
    }

    /// Path relative to the role prefix, e.g. `/funding`.
    pub fn path(&self) -> String {
        format!("/{}", self.slug())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::InvestorMatches => "Investor Matches",
            Section::StartupMatches => "Startup Matches",
            Section::Communications => "Communications",
            Section::Funding => "Funding & Deals",
            Section::Analytics => "Analytics",
            Section::Documents => "Documents",
            Section::StartupProfile => "Startup Profile",
            Section::InvestorProfile => "Investor Profile",
            Section::Settings => "Settings",
        }
    }

    pub fn audience(&self) -> NavAudience {
        match self {
            Section::InvestorMatches | Section::StartupProfile => NavAudience::Startup,
            Section::StartupMatches | Section::InvestorProfile => NavAudience::Investor,
            _ => NavAudience::Both,
        }
    }

    pub fn allowed_for(&self, role: UserRole) -> bool {
        self.audience().includes(role)
    }

    /// The matches page for `role`.
    pub fn matches_for(role: UserRole) -> Self {
        match role {
            UserRole::Startup => Section::InvestorMatches,
            UserRole::Investor => Section::StartupMatches,
        }
    }

    /// The profile page for `role`.
    pub fn profile_for(role: UserRole) -> Self {
        match role {
            UserRole::Startup => Section::StartupProfile,
            UserRole::Investor => Section::InvestorProfile,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dashboard section: {}", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Menu entries shown to `role`, in menu order.
pub fn visible_items(role: UserRole) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|section| section.allowed_for(role))
        .collect()
}

/// Re-base a relative dashboard path under the role's prefix.
pub fn rebase(role: UserRole, path: &str) -> String {
    format!("{}{}", role.route_prefix(), path)
}

/// Absolute path of a section in the role's subtree.
pub fn section_path(role: UserRole, section: Section) -> String {
    rebase(role, &section.path())
}

/// Top-bar title for the current location.
///
/// The first entry whose path ends the location wins; otherwise the first
/// entry (other than the dashboard home) whose path appears anywhere in it.
pub fn page_title(location: &str) -> &'static str {
    Section::ALL
        .into_iter()
        .find(|section| {
            let path = section.path();
            location.ends_with(&path)
                || (*section != Section::Dashboard && location.contains(&path))
        })
        .map(|section| section.label())
        .unwrap_or("Dashboard")
}

/// Whether a menu entry is highlighted for the current location.
pub fn is_active(location: &str, section: Section) -> bool {
    location.contains(&section.path())
}

/// Width mode of the dashboard side drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Expanded,
    Collapsed,
}

impl DrawerState {
    pub const EXPANDED_WIDTH: u32 = 260;
    pub const COLLAPSED_WIDTH: u32 = 64;

    pub fn toggle(self) -> Self {
        match self {
            DrawerState::Expanded => DrawerState::Collapsed,
            DrawerState::Collapsed => DrawerState::Expanded,
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            DrawerState::Expanded => Self::EXPANDED_WIDTH,
            DrawerState::Collapsed => Self::COLLAPSED_WIDTH,
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, DrawerState::Expanded)
    }

    /// `data-state` attribute value used by the sidebar styles.
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawerState::Expanded => "expanded",
            DrawerState::Collapsed => "collapsed",
        }
    }
}

/// Outcome of checking a dashboard route against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    /// No session: go to `/login`.
    RedirectLogin,
    /// Signed in as another role: go to that role's dashboard home.
    RedirectHome(UserRole),
    /// The section does not exist for this subtree: go to `/`.
    RedirectLanding,
}

/// Decide whether `session_role` may view `section` under the
/// `route_role` subtree. `None` for `section` is the subtree index.
pub fn guard(session_role: Option<UserRole>, route_role: UserRole, section: Option<Section>) -> Access {
    if let Some(section) = section {
        if !section.allowed_for(route_role) {
            return Access::RedirectLanding;
        }
    }
    match session_role {
        None => Access::RedirectLogin,
        Some(role) if role != route_role => Access::RedirectHome(role),
        Some(_) => Access::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn startup_menu_hides_investor_entries() {
        let labels: Vec<_> = visible_items(UserRole::Startup)
            .iter()
            .map(|s| s.label())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Dashboard",
                "Investor Matches",
                "Communications",
                "Funding & Deals",
                "Analytics",
                "Documents",
                "Startup Profile",
                "Settings",
            ]
        );
    }

    #[test]
    fn investor_menu_hides_startup_entries() {
        let items = visible_items(UserRole::Investor);
        assert_eq!(items.len(), 8);
        assert!(items.contains(&Section::StartupMatches));
        assert!(items.contains(&Section::InvestorProfile));
        assert!(!items.contains(&Section::InvestorMatches));
        assert!(!items.contains(&Section::StartupProfile));
    }

    #[test]
    fn rebase_prefixes_role() {
        assert_eq!(rebase(UserRole::Startup, "/funding"), "/startup/funding");
        assert_eq!(
            section_path(UserRole::Investor, Section::StartupMatches),
            "/investor/startup-matches"
        );
    }

    #[test]
    fn page_titles() {
        assert_eq!(page_title("/startup/investor-matches"), "Investor Matches");
        assert_eq!(page_title("/investor/dashboard"), "Dashboard");
        assert_eq!(page_title("/investor/funding"), "Funding & Deals");
        assert_eq!(page_title("/startup/analytics/weekly"), "Analytics");
        assert_eq!(page_title("/startup"), "Dashboard");
        assert_eq!(page_title("/startup/dashboard/extra"), "Dashboard");
    }

    #[test]
    fn active_entry_matches_containment() {
        assert!(is_active("/startup/settings", Section::Settings));
        assert!(!is_active("/startup/settings", Section::Dashboard));
    }

    #[test]
    fn drawer_toggle_flips_width() {
        let drawer = DrawerState::default();
        assert_eq!(drawer.width(), 260);
        let collapsed = drawer.toggle();
        assert_eq!(collapsed.width(), 64);
        assert!(!collapsed.is_expanded());
        assert_eq!(collapsed.toggle(), DrawerState::Expanded);
    }

    #[test]
    fn section_slugs_round_trip_through_from_str() {
        for section in Section::ALL {
            assert_eq!(section.slug().parse::<Section>(), Ok(section));
        }
        assert!("billing".parse::<Section>().is_err());
    }

    #[test]
    fn guard_decisions() {
        use UserRole::*;
        assert_eq!(guard(None, Startup, Some(Section::Dashboard)), Access::RedirectLogin);
        assert_eq!(guard(Some(Startup), Startup, Some(Section::Funding)), Access::Allow);
        assert_eq!(guard(Some(Startup), Startup, None), Access::Allow);
        assert_eq!(
            guard(Some(Investor), Startup, Some(Section::Dashboard)),
            Access::RedirectHome(Investor)
        );
        assert_eq!(
            guard(Some(Investor), Investor, Some(Section::InvestorMatches)),
            Access::RedirectLanding
        );
        assert_eq!(
            guard(None, Investor, Some(Section::StartupProfile)),
            Access::RedirectLanding
        );
    }
}
