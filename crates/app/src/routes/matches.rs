use crate::auth::use_auth;
use crate::routes::widgets::{use_activity, LoadingCards, MatchRow};
use dioxus::prelude::*;
use shared_types::{Match, UserRole};
use shared_ui::{Badge, BadgeVariant, Card, CardContent, EmptyState, PageHeader};

/// Score filter on the matches page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Band {
    #[default]
    All,
    Strong,
    Fair,
    Weak,
}

impl Band {
    const ALL: [Band; 4] = [Band::All, Band::Strong, Band::Fair, Band::Weak];

    fn label(&self) -> &'static str {
        match self {
            Band::All => "All",
            Band::Strong => "Strong",
            Band::Fair => "Fair",
            Band::Weak => "Weak",
        }
    }

    fn admits(&self, m: &Match) -> bool {
        match self {
            Band::All => true,
            Band::Strong => m.score_band() == "strong",
            Band::Fair => m.score_band() == "fair",
            Band::Weak => m.score_band() == "weak",
        }
    }
}

/// Investor matches for a startup, startup matches for an investor.
#[component]
pub fn Matches() -> Element {
    let auth = use_auth();
    let role = auth.role().unwrap_or(UserRole::Startup);
    let activity = use_activity();
    let mut band = use_signal(Band::default);

    let (title, subtitle) = match role {
        UserRole::Startup => ("Investor Matches", "Investors whose thesis fits your startup"),
        UserRole::Investor => ("Startup Matches", "Startups that fit your investment focus"),
    };

    rsx! {
        PageHeader { title: title.to_string(), subtitle: subtitle.to_string(),
            div { class: "tag-list",
                for b in Band::ALL {
                    button {
                        key: "{b.label()}",
                        r#type: "button",
                        class: "filter-chip",
                        "data-selected": band() == b,
                        onclick: move |_| band.set(b),
                        "{b.label()}"
                    }
                }
            }
        }

        {match activity() {
            None => rsx! { LoadingCards { count: 1 } },
            Some(activity) => {
                let shown: Vec<Match> = activity
                    .matches
                    .iter()
                    .filter(|m| band().admits(m))
                    .cloned()
                    .collect();
                rsx! {
                    Card {
                        CardContent {
                            p { class: "list-row-meta",
                                Badge { variant: BadgeVariant::Neutral, "{shown.len()}" }
                                " of {activity.matches.len()} matches"
                            }
                            if shown.is_empty() {
                                EmptyState { title: "No matches in this range" }
                            } else {
                                ul { class: "list",
                                    for item in shown {
                                        MatchRow { key: "{item.counterpart_id}", item, detailed: true }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }}
    }
}
