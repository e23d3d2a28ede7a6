use serde::{Deserialize, Serialize};

use crate::UserRole;

/// Summary figures shown on the dashboard home.
///
/// A snapshot: regenerated on login and rehydration, zeroed on
/// registration, never incremented in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_matches: u32,
    pub profile_views: u32,
    pub meetings_scheduled: u32,
    pub active_deals: u32,
    /// Startup only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_progress: Option<u32>,
    /// Startup only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_commitments: Option<u32>,
    /// Investor only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_deals: Option<u32>,
    /// Investor only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potential_investments: Option<u32>,
}

impl DashboardStats {
    /// All counters zero, with the role-specific figures present.
    pub fn zeroed(role: UserRole) -> Self {
        Self::default().with_role_figures(role)
    }

    /// Fill the role-specific figures with zero and clear the other role's.
    pub fn with_role_figures(mut self, role: UserRole) -> Self {
        match role {
            UserRole::Startup => {
                self.funding_progress = Some(0);
                self.investment_commitments = Some(0);
                self.open_deals = None;
                self.potential_investments = None;
            }
            UserRole::Investor => {
                self.funding_progress = None;
                self.investment_commitments = None;
                self.open_deals = Some(0);
                self.potential_investments = Some(0);
            }
        }
        self
    }

    /// Label/value pairs for the stat cards, in display order.
    pub fn cards(&self, role: UserRole) -> Vec<(&'static str, u32)> {
        let matches_label = match role {
            UserRole::Startup => "Investor Matches",
            UserRole::Investor => "Startup Matches",
        };
        vec![
            (matches_label, self.total_matches),
            ("Profile Views", self.profile_views),
            ("Meetings Scheduled", self.meetings_scheduled),
            ("Active Deals", self.active_deals),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_startup_stats_carry_startup_figures() {
        let stats = DashboardStats::zeroed(UserRole::Startup);
        assert_eq!(stats.total_matches, 0);
        assert_eq!(stats.funding_progress, Some(0));
        assert_eq!(stats.open_deals, None);
    }

    #[test]
    fn zeroed_investor_stats_carry_investor_figures() {
        let stats = DashboardStats::zeroed(UserRole::Investor);
        assert_eq!(stats.potential_investments, Some(0));
        assert_eq!(stats.investment_commitments, None);
    }

    #[test]
    fn card_labels_follow_role() {
        let stats = DashboardStats {
            total_matches: 7,
            ..Default::default()
        };
        assert_eq!(stats.cards(UserRole::Investor)[0], ("Startup Matches", 7));
        assert_eq!(stats.cards(UserRole::Startup).len(), 4);
    }
}
