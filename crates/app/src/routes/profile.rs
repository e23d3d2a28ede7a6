use crate::auth::use_auth;
use crate::format_helpers::{format_date, format_ticket, join_or_dash};
use dioxus::prelude::*;
use shared_types::{ProfileForm, User, UserRole};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, Input, PageHeader, UserAvatar,
};
use std::collections::HashMap;

/// Labels for the two role-dependent form fields.
fn field_labels(role: UserRole) -> (&'static str, &'static str) {
    match role {
        UserRole::Startup => ("Startup Name", "Headquarters"),
        UserRole::Investor => ("Investor Type", "Risk Appetite"),
    }
}

/// Startup or investor profile: summary card plus an editable form for
/// the contact and organization fields.
#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let mut editing = use_signal(|| false);
    let mut form = use_signal(|| auth.user().map(|u| ProfileForm::from_user(&u)).unwrap_or_default());
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut notice = use_signal(|| Option::<Result<(), String>>::None);
    let mut saving = use_signal(|| false);

    let Some(user) = auth.user() else {
        return rsx! {};
    };
    let role = user.role();

    let start_edit = {
        let user = user.clone();
        move |_: MouseEvent| {
            form.set(ProfileForm::from_user(&user));
            field_errors.set(HashMap::new());
            notice.set(None);
            editing.set(true);
        }
    };

    let handle_save = move |evt: FormEvent| async move {
        evt.prevent_default();
        let errors = form.read().field_errors();
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(HashMap::new());

        saving.set(true);
        let patch = form.read().to_patch(role);
        let result = auth.update_profile(patch).await;
        if result.is_ok() {
            editing.set(false);
        }
        notice.set(Some(result));
        saving.set(false);
    };

    let field_error = move |name: &str| field_errors.read().get(name).cloned().unwrap_or_default();
    let (org_label, detail_label) = field_labels(role);

    rsx! {
        PageHeader {
            title: format!("{} Profile", role.display_name()),
            subtitle: "How counterparts see you",
            if !editing() {
                Button { variant: ButtonVariant::Outline, onclick: start_edit, "Edit Profile" }
            }
        }

        {match notice() {
            Some(Ok(())) => rsx! { div { class: "notice", "data-tone": "success", "Profile updated" } },
            Some(Err(msg)) => rsx! { div { class: "notice", "data-tone": "error", role: "alert", "{msg}" } },
            None => rsx! {},
        }}

        if editing() {
            Card {
                CardHeader { CardTitle { "Edit Profile" } }
                form { onsubmit: handle_save,
                    CardContent {
                        div { class: "form-grid",
                            Input {
                                name: "name",
                                label: "Full Name",
                                value: form.read().name.clone(),
                                error: field_error("name"),
                                on_input: move |e: FormEvent| form.write().name = e.value(),
                            }
                            Input {
                                name: "email",
                                label: "Email",
                                input_type: "email",
                                value: form.read().email.clone(),
                                error: field_error("email"),
                                on_input: move |e: FormEvent| form.write().email = e.value(),
                            }
                            Input {
                                name: "phone_number",
                                label: "Phone Number",
                                input_type: "tel",
                                value: form.read().phone_number.clone(),
                                on_input: move |e: FormEvent| form.write().phone_number = e.value(),
                            }
                            Input {
                                name: "linkedin_profile",
                                label: "LinkedIn",
                                value: form.read().linkedin_profile.clone(),
                                on_input: move |e: FormEvent| form.write().linkedin_profile = e.value(),
                            }
                            Input {
                                name: "organization",
                                label: org_label.to_string(),
                                value: form.read().organization.clone(),
                                on_input: move |e: FormEvent| form.write().organization = e.value(),
                            }
                            Input {
                                name: "detail",
                                label: detail_label.to_string(),
                                value: form.read().detail.clone(),
                                on_input: move |e: FormEvent| form.write().detail = e.value(),
                            }
                        }
                    }
                    CardFooter {
                        Button {
                            variant: ButtonVariant::Ghost,
                            disabled: saving(),
                            onclick: move |_: MouseEvent| editing.set(false),
                            "Cancel"
                        }
                        Button { submit: true, loading: saving(),
                            if saving() { "Saving..." } else { "Save Changes" }
                        }
                    }
                }
            }
        } else {
            ProfileSummary { user }
        }
    }
}

#[component]
fn ProfileSummary(user: User) -> Element {
    let account = user.account().clone();
    let role = user.role();

    rsx! {
        div { class: "grid grid-two",
            Card {
                CardHeader {
                    div { class: "list-row",
                        UserAvatar { initials: user.initials(), tone: role.as_str().to_string(), large: true }
                        div { class: "list-row-main",
                            CardTitle { "{account.name}" }
                            CardDescription { "{user.organization()}" }
                        }
                        Badge { variant: BadgeVariant::Primary, "{account.level.as_str()}" }
                    }
                }
                CardContent {
                    dl { class: "detail-grid",
                        dt { "Quest ID" }
                        dd { "{account.quest_id}" }
                        dt { "Email" }
                        dd { "{account.email}" }
                        dt { "Phone" }
                        dd { "{account.phone_number}" }
                        if !account.linkedin_profile.is_empty() {
                            dt { "LinkedIn" }
                            dd { a { href: "{account.linkedin_profile}", target: "_blank", "{account.linkedin_profile}" } }
                        }
                        dt { "Member since" }
                        dd { {format_date(account.created_at)} }
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Details" } }
                CardContent {
                    dl { class: "detail-grid",
                        dt { "Industries" }
                        dd { {join_or_dash(user.industries())} }
                        {match &user {
                            User::Startup(u) => rsx! {
                                dt { "Business model" }
                                dd { "{u.profile.business_model}" }
                                dt { "Headquarters" }
                                dd { "{u.profile.headquarters}" }
                                dt { "Founded" }
                                dd { "{u.profile.year_founded}" }
                                dt { "Regions" }
                                dd { {join_or_dash(&u.profile.operational_regions)} }
                                if let Some(site) = u.profile.website.as_ref() {
                                    dt { "Website" }
                                    dd { a { href: "{site}", target: "_blank", "{site}" } }
                                }
                                if !u.profile.co_founders.is_empty() {
                                    dt { "Team" }
                                    dd {
                                        {u.profile.co_founders.iter().map(|c| format!("{} ({})", c.name, c.role)).collect::<Vec<_>>().join(", ")}
                                    }
                                }
                            },
                            User::Investor(u) => rsx! {
                                dt { "Investor type" }
                                dd { "{u.profile.investor_type}" }
                                dt { "Ticket size" }
                                dd { {format_ticket(u.profile.ticket_size)} }
                                dt { "Stages" }
                                dd { {join_or_dash(&u.profile.investment_stage)} }
                                dt { "Geography" }
                                dd { {join_or_dash(&u.profile.geographic_preferences)} }
                                dt { "Risk appetite" }
                                dd { "{u.profile.risk_appetite}" }
                                if let Some(level) = u.profile.activity_level {
                                    dt { "Activity" }
                                    dd { "{level.label()}" }
                                }
                            },
                        }}
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

    #[test]
    fn role_fields_are_labelled() {
        assert_eq!(field_labels(UserRole::Startup), ("Startup Name", "Headquarters"));
        assert_eq!(field_labels(UserRole::Investor).0, "Investor Type");
    }
}
