use crate::auth::use_auth;
use crate::format_helpers::{format_currency, format_ticket, join_or_dash};
use crate::routes::widgets::{use_activity, LoadingCards, MatchRow, MeetingRow};
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdDollarSign, LdTrendingUp, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{DashboardStats, MeetingStatus, Section, User, UserRole};
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, EmptyState, PageHeader,
    ProgressBar, StatCard,
};

/// How many matches the dashboard home previews.
const PREVIEW_MATCHES: usize = 3;

fn first_name(user: Option<&User>) -> String {
    user.and_then(|u| u.name().split_whitespace().next())
        .unwrap_or("there")
        .to_string()
}

#[component]
fn StatIcon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        1 => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 } },
        2 => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
        _ => rsx! { Icon::<LdDollarSign> { icon: LdDollarSign, width: 18, height: 18 } },
    }
}

/// The four headline figures of the session snapshot.
#[component]
fn StatsGrid(stats: DashboardStats, role: UserRole) -> Element {
    rsx! {
        div { class: "grid grid-stats",
            for (i, (label, value)) in stats.cards(role).into_iter().enumerate() {
                StatCard {
                    key: "{label}",
                    label: label.to_string(),
                    value: value.to_string(),
                    icon: rsx! { StatIcon { index: i } },
                }
            }
        }
    }
}

/// Top matches and upcoming meetings, shared by both dashboards.
#[component]
fn ActivityColumns(role: UserRole) -> Element {
    let activity = use_activity();
    let matches_section = Section::matches_for(role);

    let Some(activity) = activity() else {
        return rsx! { LoadingCards {} };
    };
    let upcoming: Vec<_> = activity
        .meetings
        .iter()
        .filter(|(m, _)| m.status == MeetingStatus::Scheduled)
        .cloned()
        .collect();

    rsx! {
        div { class: "grid grid-two section-gap",
            Card {
                CardHeader {
                    CardTitle { "Top Matches" }
                    CardDescription {
                        Link { to: Route::section(role, matches_section), "View all" }
                    }
                }
                CardContent {
                    if activity.matches.is_empty() {
                        EmptyState { title: "No matches yet" }
                    } else {
                        ul { class: "list",
                            for item in activity.matches.iter().take(PREVIEW_MATCHES).cloned() {
                                MatchRow { key: "{item.counterpart_id}", item }
                            }
                        }
                    }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Upcoming Meetings" }
                }
                CardContent {
                    if upcoming.is_empty() {
                        EmptyState { title: "No meetings scheduled" }
                    } else {
                        ul { class: "list",
                            for (meeting, counterpart) in upcoming {
                                MeetingRow { key: "{meeting.id}", meeting, counterpart }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn StartupDashboard() -> Element {
    let auth = use_auth();
    let session = auth.session();
    let stats = session.stats().cloned().unwrap_or_default();
    let funding = match session.user() {
        Some(User::Startup(u)) => u.profile.funding.clone(),
        _ => None,
    };

    rsx! {
        PageHeader {
            title: format!("Welcome back, {}", first_name(session.user())),
            subtitle: "Here is how your raise is going",
        }
        StatsGrid { stats, role: UserRole::Startup }

        Card { class: "section-gap",
            CardHeader {
                CardTitle { "Funding Progress" }
                if let Some(round) = funding.as_ref() {
                    CardDescription { "{round.current_round} round" }
                }
            }
            CardContent {
                {match funding {
                    Some(round) => rsx! {
                        ProgressBar {
                            value: round.progress_percent() as f64,
                            label: format!(
                                "{} raised of {}",
                                format_currency(round.total_raised),
                                format_currency(round.target_amount)
                            ),
                        }
                    },
                    None => rsx! {
                        EmptyState { title: "No funding round yet",
                            Link { to: Route::section(UserRole::Startup, Section::StartupProfile), "Complete your profile" }
                        }
                    },
                }}
            }
        }

        ActivityColumns { role: UserRole::Startup }
    }
}

#[component]
pub fn InvestorDashboard() -> Element {
    let auth = use_auth();
    let session = auth.session();
    let stats = session.stats().cloned().unwrap_or_default();
    let profile = match session.user() {
        Some(User::Investor(u)) => Some(u.profile.clone()),
        _ => None,
    };

    rsx! {
        PageHeader {
            title: format!("Welcome back, {}", first_name(session.user())),
            subtitle: "Startups matching your thesis",
        }
        StatsGrid { stats, role: UserRole::Investor }

        if let Some(profile) = profile {
            Card { class: "section-gap",
                CardHeader {
                    CardTitle { "Investment Focus" }
                    CardDescription { "{profile.investor_type}" }
                }
                CardContent {
                    dl { class: "detail-grid",
                        dt { "Ticket size" }
                        dd { {format_ticket(profile.ticket_size)} }
                        dt { "Stages" }
                        dd { {join_or_dash(&profile.investment_stage)} }
                        dt { "Industries" }
                        dd { {join_or_dash(&profile.industry)} }
                        if let Some(portfolio) = profile.portfolio.as_ref() {
                            dt { "Portfolio" }
                            dd {
                                "{portfolio.total_investments} investments · {format_currency(portfolio.portfolio_size)} · {portfolio.successful_exits} exits"
                            }
                        }
                    }
                }
            }
        }

        ActivityColumns { role: UserRole::Investor }
    }
}
