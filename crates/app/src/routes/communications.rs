use crate::auth::use_auth;
use crate::format_helpers::format_datetime;
use crate::routes::widgets::{use_activity, LoadingCards};
use dioxus::prelude::*;
use shared_types::Thread;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, CountBadge, EmptyState,
    PageHeader,
};

/// Conversation list on the left, selected thread on the right.
#[component]
pub fn Communications() -> Element {
    let auth = use_auth();
    let me = auth.user().map(|u| u.id().to_string()).unwrap_or_default();
    let activity = use_activity();
    let mut selected = use_signal(|| Option::<String>::None);

    let Some(activity) = activity() else {
        return rsx! {
            PageHeader { title: "Communications" }
            LoadingCards {}
        };
    };
    let threads = activity.threads;
    let unread: usize = threads.iter().map(|t| t.unread_for(&me)).sum();
    let open: Option<Thread> = selected()
        .and_then(|id| threads.iter().find(|t| t.counterpart_id == id).cloned())
        .or_else(|| threads.first().cloned());

    rsx! {
        PageHeader {
            title: "Communications",
            subtitle: format!("{unread} unread"),
        }

        if threads.is_empty() {
            Card {
                CardContent {
                    EmptyState { title: "No conversations yet" }
                }
            }
        } else {
            div { class: "grid grid-two",
                Card {
                    CardHeader { CardTitle { "Conversations" } }
                    CardContent {
                        ul { class: "list",
                            for thread in threads.iter().cloned() {
                                li {
                                    key: "{thread.counterpart_id}",
                                    class: "list-row list-row-button",
                                    "data-selected": open.as_ref().map(|t| t.counterpart_id == thread.counterpart_id).unwrap_or(false),
                                    onclick: {
                                        let id = thread.counterpart_id.clone();
                                        move |_| selected.set(Some(id.clone()))
                                    },
                                    div { class: "list-row-main",
                                        span { class: "list-row-title", "{thread.counterpart_name}" }
                                        if let Some(last) = thread.last_message() {
                                            span { class: "list-row-meta", "{last.content}" }
                                        }
                                    }
                                    CountBadge { count: thread.unread_for(&me) }
                                }
                            }
                        }
                    }
                }

                if let Some(thread) = open {
                    ThreadView { thread, me: me.clone() }
                }
            }
        }
    }
}

#[component]
fn ThreadView(thread: Thread, me: String) -> Element {
    rsx! {
        Card {
            CardHeader { CardTitle { "{thread.counterpart_name}" } }
            CardContent {
                ul { class: "message-list",
                    for msg in thread.messages.iter() {
                        li {
                            key: "{msg.id}",
                            class: "message",
                            "data-own": msg.sender_id == me,
                            p { class: "message-body", "{msg.content}" }
                            if !msg.attachments.is_empty() {
                                div { class: "tag-list",
                                    for file in msg.attachments.iter() {
                                        a {
                                            key: "{file.url}",
                                            href: "{file.url}",
                                            target: "_blank",
                                            Badge { variant: BadgeVariant::Outline, "{file.name}" }
                                        }
                                    }
                                }
                            }
                            span { class: "list-row-meta", {format_datetime(msg.timestamp)} }
                        }
                    }
                }
            }
        }
    }
}
