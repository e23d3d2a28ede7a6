use crate::auth::use_auth;
use crate::format_helpers::{format_currency, format_date, format_ticket, join_or_dash};
use crate::routes::widgets::{use_activity, DealRow, LoadingCards};
use dioxus::prelude::*;
use shared_types::{FundingRound, InvestorProfile, User};
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, EmptyState, PageHeader,
    ProgressBar,
};

/// Current round for startups, investment terms and portfolio for
/// investors, then the deal pipeline for both.
#[component]
pub fn Funding() -> Element {
    let auth = use_auth();
    let activity = use_activity();

    rsx! {
        PageHeader { title: "Funding", subtitle: "Rounds, terms and deals in progress" }

        {match auth.user() {
            Some(User::Startup(u)) => rsx! { RoundCard { round: u.profile.funding.clone() } },
            Some(User::Investor(u)) => rsx! { TermsCard { profile: u.profile.clone() } },
            None => rsx! {},
        }}

        Card { class: "section-gap",
            CardHeader {
                CardTitle { "Deals" }
                CardDescription { "Most recently updated first" }
            }
            CardContent {
                {match activity() {
                    None => rsx! { LoadingCards { count: 1 } },
                    Some(a) if a.deals.is_empty() => rsx! { EmptyState { title: "No deals yet" } },
                    Some(a) => rsx! {
                        ul { class: "list",
                            for (deal, counterpart) in a.deals {
                                DealRow { key: "{deal.id}", deal, counterpart }
                            }
                        }
                    },
                }}
            }
        }
    }
}

#[component]
fn RoundCard(round: Option<FundingRound>) -> Element {
    let Some(round) = round else {
        return rsx! {
            Card {
                CardContent { EmptyState { title: "No funding round yet" } }
            }
        };
    };
    let equity = round
        .equity_offered
        .map(|e| format!("{e}%"))
        .unwrap_or_else(|| "—".to_string());

    rsx! {
        Card {
            CardHeader {
                CardTitle { "{round.current_round} round" }
                CardDescription { "Target {format_currency(round.target_amount)}" }
            }
            CardContent {
                ProgressBar {
                    value: round.progress_percent() as f64,
                    label: format!("{} raised", format_currency(round.total_raised)),
                }
                dl { class: "detail-grid section-gap",
                    dt { "Equity offered" }
                    dd { "{equity}" }
                    dt { "Use of funds" }
                    dd { {join_or_dash(&round.use_of_funds)} }
                    dt { "Ideal investors" }
                    dd { {join_or_dash(&round.ideal_investor_type)} }
                }
            }
        }
    }
}

#[component]
fn TermsCard(profile: InvestorProfile) -> Element {
    rsx! {
        div { class: "grid grid-two",
            Card {
                CardHeader {
                    CardTitle { "Investment Terms" }
                    CardDescription { "{profile.investor_type}" }
                }
                CardContent {
                    dl { class: "detail-grid",
                        dt { "Ticket size" }
                        dd { {format_ticket(profile.ticket_size)} }
                        dt { "Deal types" }
                        dd { {join_or_dash(&profile.deal_type)} }
                        dt { "Stages" }
                        dd { {join_or_dash(&profile.investment_stage)} }
                        dt { "Risk appetite" }
                        dd { "{profile.risk_appetite}" }
                    }
                }
            }
            Card {
                CardHeader { CardTitle { "Portfolio" } }
                CardContent {
                    {match profile.portfolio {
                        None => rsx! { EmptyState { title: "No investments recorded" } },
                        Some(portfolio) => rsx! {
                            p { class: "list-row-meta",
                                "{portfolio.total_investments} investments · {format_currency(portfolio.portfolio_size)} deployed · {portfolio.successful_exits} exits"
                            }
                            ul { class: "list",
                                for startup in portfolio.funded_startups {
                                    li { key: "{startup.name}", class: "list-row",
                                        div { class: "list-row-main",
                                            span { class: "list-row-title", "{startup.name}" }
                                            span { class: "list-row-meta", "{startup.industry}" }
                                        }
                                        span { class: "list-row-meta",
                                            {startup.amount.map(format_currency).unwrap_or_default()}
                                            " "
                                            {startup.date.map(format_date).unwrap_or_default()}
                                        }
                                    }
                                }
                            }
                        },
                    }}
                }
            }
        }
    }
}
