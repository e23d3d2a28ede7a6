use crate::auth::use_auth;
use crate::routes::widgets::{use_activity, Activity, LoadingCards};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdFolder;
use dioxus_free_icons::Icon;
use shared_types::{Attachment, User};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, EmptyState,
    PageHeader,
};

/// Profile documents as (label, link) pairs.
fn profile_documents(user: &User) -> Vec<(String, String)> {
    match user {
        User::Startup(u) => u
            .profile
            .documents
            .as_ref()
            .map(|d| {
                d.entries()
                    .into_iter()
                    .map(|(label, url)| (label.to_string(), url.to_string()))
                    .collect()
            })
            .unwrap_or_default(),
        User::Investor(u) => {
            let Some(v) = u.profile.verification.as_ref() else {
                return Vec::new();
            };
            [
                ("Government ID", &v.government_id),
                ("Accreditation", &v.accreditation_status),
            ]
            .into_iter()
            .filter_map(|(label, doc)| doc.clone().map(|d| (label.to_string(), d)))
            .collect()
        }
    }
}

/// Files shared in conversations, with who shared them.
fn shared_files(activity: &Activity) -> Vec<(Attachment, String)> {
    activity
        .threads
        .iter()
        .flat_map(|t| t.attachments().map(|a| (a.clone(), t.counterpart_name.clone())))
        .collect()
}

#[component]
pub fn Documents() -> Element {
    let auth = use_auth();
    let own = auth.user().as_ref().map(profile_documents).unwrap_or_default();
    let activity = use_activity();

    rsx! {
        PageHeader { title: "Documents", subtitle: "Your uploads and files shared with you" }

        div { class: "grid grid-two",
            Card {
                CardHeader {
                    CardTitle { "Profile Documents" }
                    CardDescription { "Visible to matched counterparts" }
                }
                CardContent {
                    if own.is_empty() {
                        EmptyState { title: "Nothing uploaded yet" }
                    } else {
                        ul { class: "list",
                            for (label, url) in own {
                                li { key: "{label}", class: "list-row",
                                    Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 }
                                    div { class: "list-row-main",
                                        span { class: "list-row-title", "{label}" }
                                    }
                                    a { href: "{url}", target: "_blank", "Open" }
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Shared in Conversations" } }
                CardContent {
                    {match activity() {
                        None => rsx! { LoadingCards { count: 1 } },
                        Some(a) => {
                            let files = shared_files(&a);
                            if files.is_empty() {
                                rsx! { EmptyState { title: "No shared files" } }
                            } else {
                                rsx! {
                                    ul { class: "list",
                                        for (file, from) in files {
                                            li { key: "{file.url}", class: "list-row",
                                                div { class: "list-row-main",
                                                    a { class: "list-row-title", href: "{file.url}", target: "_blank", "{file.name}" }
                                                    span { class: "list-row-meta", "From {from}" }
                                                }
                                                Badge { variant: BadgeVariant::Outline, "{file.kind}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use platform::fixtures::{DEMO_INVESTOR_EMAIL, DEMO_STARTUP_EMAIL};
    use platform::Backend;
    use shared_types::LatencyConfig;

    #[tokio::test]
    async fn demo_accounts_list_profile_documents() {
        let backend = Backend::new(LatencyConfig::none());
        let startup = backend.authenticate(DEMO_STARTUP_EMAIL, "x").await.unwrap();
        let investor = backend.authenticate(DEMO_INVESTOR_EMAIL, "x").await.unwrap();
        assert_eq!(
            profile_documents(&startup),
            vec![("Pitch Deck".to_string(), "/documents/launchpad-deck.pdf".to_string())]
        );
        assert!(profile_documents(&investor).is_empty());
    }

    #[test]
    fn no_threads_means_no_shared_files() {
        assert!(shared_files(&Activity::default()).is_empty());
    }
}
