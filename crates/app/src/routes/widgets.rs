//! Rows and badges shared by several dashboard pages.

use crate::format_helpers::{format_currency, format_date, format_datetime};
use dioxus::prelude::*;
use platform::Backend;
use shared_types::{Deal, DealStatus, Match, Meeting, MeetingStatus, Thread, User, UserRole};
use shared_ui::{Badge, BadgeVariant, SkeletonCard, UserAvatar};

/// Everything the dashboard pages list for the signed-in user, with
/// counterpart names already resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Activity {
    pub matches: Vec<Match>,
    pub meetings: Vec<(Meeting, String)>,
    pub deals: Vec<(Deal, String)>,
    pub threads: Vec<Thread>,
}

/// The other party of a startup/investor pair, seen from `role`.
pub fn counterpart_id<'a>(role: UserRole, startup_id: &'a str, investor_id: &'a str) -> &'a str {
    match role {
        UserRole::Startup => investor_id,
        UserRole::Investor => startup_id,
    }
}

pub async fn load_activity(backend: Backend, user: User) -> Activity {
    let role = user.role();
    let matches = backend.matches_for(&user).await;
    let meetings = backend.meetings_for(&user).await;
    let deals = backend.deals_for(&user).await;
    let threads = backend.threads_for(&user).await;
    let directory = backend.directory();

    Activity {
        matches,
        meetings: meetings
            .into_iter()
            .map(|m| {
                let name = directory.display_name(counterpart_id(role, &m.startup_id, &m.investor_id));
                (m, name)
            })
            .collect(),
        deals: deals
            .into_iter()
            .map(|d| {
                let name = directory.display_name(counterpart_id(role, &d.startup_id, &d.investor_id));
                (d, name)
            })
            .collect(),
        threads,
    }
}

/// Activity of the signed-in user, fetched once per session change.
/// `None` while loading.
pub fn use_activity() -> Resource<Activity> {
    let auth = crate::auth::use_auth();
    use_resource(move || async move {
        match auth.user() {
            Some(user) => load_activity(auth.backend(), user).await,
            None => Activity::default(),
        }
    })
}

#[component]
pub fn LoadingCards(#[props(default = 2)] count: usize) -> Element {
    rsx! {
        div { class: "grid grid-two",
            for i in 0..count {
                SkeletonCard { key: "{i}" }
            }
        }
    }
}

pub fn score_variant(m: &Match) -> BadgeVariant {
    match m.score_band() {
        "strong" => BadgeVariant::Success,
        "fair" => BadgeVariant::Warning,
        _ => BadgeVariant::Neutral,
    }
}

pub fn deal_variant(status: DealStatus) -> BadgeVariant {
    match status {
        DealStatus::Interested => BadgeVariant::Primary,
        DealStatus::DueDiligence => BadgeVariant::Warning,
        DealStatus::Committed => BadgeVariant::Success,
        DealStatus::Closed => BadgeVariant::Neutral,
    }
}

pub fn meeting_variant(status: MeetingStatus) -> BadgeVariant {
    match status {
        MeetingStatus::Scheduled => BadgeVariant::Primary,
        MeetingStatus::Completed => BadgeVariant::Success,
        MeetingStatus::Cancelled => BadgeVariant::Danger,
    }
}

fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// One suggested counterpart. `detailed` adds reasons and interest.
#[component]
pub fn MatchRow(item: Match, #[props(default = false)] detailed: bool) -> Element {
    let variant = score_variant(&item);
    rsx! {
        li { class: "list-row",
            UserAvatar { initials: initials_of(&item.counterpart_name) }
            div { class: "list-row-main",
                span { class: "list-row-title", "{item.counterpart_name}" }
                if detailed {
                    if let Some(interest) = item.interest {
                        span { class: "list-row-meta", "{interest.label()}" }
                    }
                    div { class: "tag-list",
                        for reason in item.reasons.iter() {
                            Badge { key: "{reason}", variant: BadgeVariant::Outline, "{reason}" }
                        }
                    }
                }
            }
            Badge { variant, "{item.score}% match" }
        }
    }
}

#[component]
pub fn MeetingRow(meeting: Meeting, counterpart: String) -> Element {
    rsx! {
        li { class: "list-row",
            div { class: "list-row-main",
                span { class: "list-row-title", "{meeting.title}" }
                span { class: "list-row-meta",
                    "{format_datetime(meeting.date)} · {meeting.duration_minutes} min · with {counterpart}"
                }
                if let Some(desc) = meeting.description.as_ref() {
                    span { class: "list-row-meta", "{desc}" }
                }
            }
            Badge { variant: meeting_variant(meeting.status), "{meeting.status.label()}" }
        }
    }
}

#[component]
pub fn DealRow(deal: Deal, counterpart: String) -> Element {
    let amount = deal.amount.map(format_currency).unwrap_or_else(|| "—".to_string());
    let equity = deal.equity.map(|e| format!("{e}% equity")).unwrap_or_default();
    rsx! {
        li { class: "list-row",
            div { class: "list-row-main",
                span { class: "list-row-title", "{counterpart}" }
                span { class: "list-row-meta", "{amount} {equity}" }
                if let Some(notes) = deal.notes.as_ref() {
                    span { class: "list-row-meta", "{notes}" }
                }
                span { class: "list-row-meta", "Updated {format_date(deal.updated_at)}" }
            }
            Badge { variant: deal_variant(deal.status), "{deal.status.label()}" }
        }
    }
}
