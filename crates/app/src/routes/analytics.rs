use crate::auth::use_auth;
use crate::routes::widgets::{deal_variant, use_activity, Activity, LoadingCards};
use dioxus::prelude::*;
use shared_types::{DealStatus, UserRole};
use shared_ui::{
    Badge, Card, CardContent, CardDescription, CardHeader, CardTitle, EmptyState, PageHeader,
    ProgressBar, StatCard,
};

const DEAL_STAGES: [DealStatus; 4] = [
    DealStatus::Interested,
    DealStatus::DueDiligence,
    DealStatus::Committed,
    DealStatus::Closed,
];

/// Share of matches in each score band, as percentages.
fn band_shares(activity: &Activity) -> [(&'static str, f64); 3] {
    let total = activity.matches.len();
    let share = |band: &str| {
        if total == 0 {
            return 0.0;
        }
        let n = activity.matches.iter().filter(|m| m.score_band() == band).count();
        n as f64 * 100.0 / total as f64
    };
    [
        ("Strong (80+)", share("strong")),
        ("Fair (60–79)", share("fair")),
        ("Weak (below 60)", share("weak")),
    ]
}

fn average_score(activity: &Activity) -> Option<u32> {
    if activity.matches.is_empty() {
        return None;
    }
    let sum: u32 = activity.matches.iter().map(|m| u32::from(m.score)).sum();
    Some(sum / activity.matches.len() as u32)
}

fn deal_counts(activity: &Activity) -> Vec<(DealStatus, usize)> {
    DEAL_STAGES
        .into_iter()
        .map(|s| (s, activity.deals.iter().filter(|(d, _)| d.status == s).count()))
        .collect()
}

#[component]
pub fn Analytics() -> Element {
    let auth = use_auth();
    let session = auth.session();
    let role = session.role().unwrap_or(UserRole::Startup);
    let stats = session.stats().cloned().unwrap_or_default();
    let activity = use_activity();

    let Some(activity) = activity() else {
        return rsx! {
            PageHeader { title: "Analytics" }
            LoadingCards {}
        };
    };
    let avg = average_score(&activity)
        .map(|s| format!("{s}%"))
        .unwrap_or_else(|| "—".to_string());
    let open_deals = activity.deals.iter().filter(|(d, _)| d.status.is_open()).count();

    rsx! {
        PageHeader { title: "Analytics", subtitle: "How your profile is performing" }

        div { class: "grid grid-stats",
            StatCard { label: "Profile Views", value: stats.profile_views.to_string() }
            StatCard { label: "Average Match Score", value: avg }
            StatCard { label: "Open Deals", value: open_deals.to_string() }
            {match role {
                UserRole::Startup => rsx! {
                    StatCard {
                        label: "Funding Progress",
                        value: format!("{}%", stats.funding_progress.unwrap_or_default()),
                    }
                },
                UserRole::Investor => rsx! {
                    StatCard {
                        label: "Potential Investments",
                        value: stats.potential_investments.unwrap_or_default().to_string(),
                    }
                },
            }}
        }

        div { class: "grid grid-two section-gap",
            Card {
                CardHeader {
                    CardTitle { "Match Quality" }
                    CardDescription { "{activity.matches.len()} matches" }
                }
                CardContent {
                    if activity.matches.is_empty() {
                        EmptyState { title: "No matches yet" }
                    } else {
                        for (label, share) in band_shares(&activity) {
                            ProgressBar { key: "{label}", value: share, label: label.to_string() }
                        }
                    }
                }
            }
            Card {
                CardHeader { CardTitle { "Deal Pipeline" } }
                CardContent {
                    ul { class: "list",
                        for (status, count) in deal_counts(&activity) {
                            li { key: "{status.label()}", class: "list-row",
                                Badge { variant: deal_variant(status), "{status.label()}" }
                                span { class: "list-row-title", "{count}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Match;

    fn with_scores(scores: &[u8]) -> Activity {
        Activity {
            matches: scores
                .iter()
                .map(|&score| Match {
                    counterpart_id: format!("c-{score}"),
                    counterpart_name: "C".into(),
                    score,
                    reasons: vec![],
                    interest: None,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn shares_sum_to_hundred() {
        let activity = with_scores(&[90, 85, 70, 10]);
        let shares = band_shares(&activity);
        assert_eq!(shares[0].1, 50.0);
        assert_eq!(shares[1].1, 25.0);
        assert_eq!(shares[2].1, 25.0);
    }

    #[test]
    fn empty_activity_has_no_average() {
        assert_eq!(average_score(&Activity::default()), None);
        assert_eq!(average_score(&with_scores(&[80, 61])), Some(70));
        assert_eq!(band_shares(&Activity::default())[0].1, 0.0);
    }

    #[test]
    fn deal_counts_cover_every_stage() {
        let counts = deal_counts(&Activity::default());
        assert_eq!(counts.len(), 4);
        assert!(counts.iter().all(|(_, n)| *n == 0));
    }
}
