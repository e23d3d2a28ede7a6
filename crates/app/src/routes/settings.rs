use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{ContactMethod, DealFlowFrequency, User, Visibility};
use shared_ui::theme::ThemeState;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, PageHeader,
};

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Read-only privacy and contact preferences as label/value rows.
fn preference_rows(user: &User) -> Vec<(&'static str, String)> {
    match user {
        User::Startup(u) => match &u.profile.privacy {
            Some(p) => vec![
                ("Public profile", yes_no(p.is_public).to_string()),
                ("Show financials", yes_no(p.show_financials).to_string()),
                ("Direct messages", yes_no(p.allow_direct_messaging).to_string()),
            ],
            None => Vec::new(),
        },
        User::Investor(u) => match &u.profile.preferences {
            Some(p) => vec![
                (
                    "Visibility",
                    match p.visibility {
                        Visibility::Public => "Public",
                        Visibility::Private => "Private",
                    }
                    .to_string(),
                ),
                ("Direct messages", yes_no(p.allow_messages).to_string()),
                (
                    "Contact via",
                    match p.contact_method {
                        ContactMethod::Email => "Email",
                        ContactMethod::Platform => "Platform",
                        ContactMethod::Video => "Video call",
                    }
                    .to_string(),
                ),
                (
                    "Deal flow digest",
                    match p.deal_flow_frequency {
                        DealFlowFrequency::Daily => "Daily",
                        DealFlowFrequency::Weekly => "Weekly",
                        DealFlowFrequency::Monthly => "Monthly",
                    }
                    .to_string(),
                ),
            ],
            None => Vec::new(),
        },
    }
}

#[component]
pub fn Settings() -> Element {
    let mut auth = use_auth();
    let mut theme: ThemeState = use_context();
    let user = auth.user();
    let dark = theme.current().is_dark();

    rsx! {
        PageHeader { title: "Settings", subtitle: "Appearance, privacy and account" }

        div { class: "grid grid-two",
            Card {
                CardHeader {
                    CardTitle { "Appearance" }
                    CardDescription { "Stored in this browser" }
                }
                CardContent {
                    div { class: "list-row",
                        div { class: "list-row-main",
                            span { class: "list-row-title", "Dark mode" }
                            span { class: "list-row-meta",
                                if dark { "On" } else { "Off" }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_: MouseEvent| theme.toggle(),
                            if dark { "Use light theme" } else { "Use dark theme" }
                        }
                    }
                }
            }

            if let Some(user) = user {
                Card {
                    CardHeader { CardTitle { "Privacy" } }
                    CardContent {
                        {
                            let rows = preference_rows(&user);
                            if rows.is_empty() {
                                rsx! { p { class: "list-row-meta", "Using default privacy settings" } }
                            } else {
                                rsx! {
                                    dl { class: "detail-grid",
                                        for (label, value) in rows {
                                            div { key: "{label}",
                                                dt { "{label}" }
                                                dd { "{value}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader { CardTitle { "Account" } }
                    CardContent {
                        dl { class: "detail-grid",
                            dt { "Email" }
                            dd { "{user.email()}" }
                            dt { "Quest ID" }
                            dd { "{user.account().quest_id}" }
                            dt { "Account type" }
                            dd { "{user.role().display_name()}" }
                            dt { "Level" }
                            dd { Badge { variant: BadgeVariant::Primary, "{user.account().level.as_str()}" } }
                        }
                    }
                    CardFooter {
                        Button {
                            variant: ButtonVariant::Danger,
                            onclick: move |_: MouseEvent| {
                                auth.logout();
                                navigator().push(Route::Login {});
                            },
                            "Log out"
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
    use platform::fixtures::{DEMO_INVESTOR_EMAIL, DEMO_STARTUP_EMAIL};
    use platform::Backend;
    use pretty_assertions::assert_eq;
    use shared_types::LatencyConfig;

    #[tokio::test]
    async fn demo_preferences_render_as_rows() {
        let backend = Backend::new(LatencyConfig::none());
        let startup = backend.authenticate(DEMO_STARTUP_EMAIL, "x").await.unwrap();
        let rows = preference_rows(&startup);
        assert_eq!(rows[0], ("Public profile", "Yes".to_string()));
        assert_eq!(rows.len(), 3);

        let investor = backend.authenticate(DEMO_INVESTOR_EMAIL, "x").await.unwrap();
        let rows = preference_rows(&investor);
        assert_eq!(rows[2], ("Contact via", "Platform".to_string()));
        assert_eq!(rows[3], ("Deal flow digest", "Weekly".to_string()));
    }
}
