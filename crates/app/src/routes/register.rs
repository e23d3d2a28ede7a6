use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdRocket};
use dioxus_free_icons::Icon;
use shared_types::{RegisterForm, RegisterStep, UserRole};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Input,
};
use std::collections::HashMap;

/// Three-step sign-up wizard. `?role=startup|investor` preselects the role
/// and opens on the second step.
#[component]
pub fn Register(role: Option<String>) -> Element {
    let auth = use_auth();
    let preselected = role.as_deref().and_then(UserRole::parse_role);
    let mut form = use_signal(|| RegisterForm::with_role(preselected));
    let mut step = use_signal(|| form.peek().initial_step());
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if let Some(role) = auth.role() {
        navigator().replace(Route::home(role));
    }

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        error_msg.set(None);

        // Only the fields owned by the current step block moving on.
        let errors = form.read().validate_step(step());
        let valid = errors.is_empty();
        field_errors.set(errors);
        if !valid {
            return;
        }
        if let Some(next) = step().next() {
            step.set(next);
            return;
        }

        let snapshot = form();
        let Some(role) = snapshot.role else {
            step.set(RegisterStep::ChooseRole);
            return;
        };
        loading.set(true);
        match auth.register(snapshot.to_patch(), role).await {
            Ok(role) => {
                navigator().push(Route::home(role));
            }
            Err(msg) => error_msg.set(Some(msg)),
        }
        loading.set(false);
    };

    let go_back = move |_: MouseEvent| {
        field_errors.set(HashMap::new());
        if let Some(prev) = step().back() {
            step.set(prev);
        }
    };

    let field_error = move |name: &str| field_errors.read().get(name).cloned().unwrap_or_default();
    let current = step();
    let company_label = match form.read().role {
        Some(UserRole::Investor) => "Firm / Investor Type",
        _ => "Startup Name",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card auth-card-wide",

                CardHeader {
                    Link { to: Route::Landing {}, class: "auth-brand", "Questomer" }
                    CardTitle { "Create Account" }
                    CardDescription { "Join the platform connecting startups with investors" }
                }

                CardContent {
                    ol { class: "stepper",
                        for s in RegisterStep::ALL {
                            li {
                                key: "{s.index()}",
                                class: "stepper-step",
                                "data-state": if s == current { "active" } else if s.index() < current.index() { "done" } else { "todo" },
                                span { class: "stepper-index", "{s.index() + 1}" }
                                span { class: "stepper-label", "{s.label()}" }
                            }
                        }
                    }

                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_submit,
                        {match current {
                            RegisterStep::ChooseRole => rsx! {
                                p { class: "auth-step-hint", "How will you use Questomer?" }
                                div { class: "role-choice",
                                    for choice in UserRole::ALL {
                                        button {
                                            key: "{choice}",
                                            r#type: "button",
                                            class: "role-option",
                                            "data-selected": form.read().role == Some(choice),
                                            onclick: move |_| form.write().role = Some(choice),
                                            {match choice {
                                                UserRole::Startup => rsx! { Icon::<LdRocket> { icon: LdRocket, width: 28, height: 28 } },
                                                UserRole::Investor => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 28, height: 28 } },
                                            }}
                                            span { class: "role-option-title", "I'm a {choice.display_name()}" }
                                            span { class: "role-option-text",
                                                {match choice {
                                                    UserRole::Startup => "Raise funding and meet investors who fit your stage",
                                                    UserRole::Investor => "Discover startups that match your thesis",
                                                }}
                                            }
                                        }
                                    }
                                }
                                if !field_error("role").is_empty() {
                                    div { class: "field-error", {field_error("role")} }
                                }
                            },
                            RegisterStep::BasicInfo => rsx! {
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
                                    error: field_error("phone_number"),
                                    on_input: move |e: FormEvent| form.write().phone_number = e.value(),
                                }
                                Input {
                                    name: "company",
                                    label: company_label.to_string(),
                                    value: form.read().company.clone(),
                                    on_input: move |e: FormEvent| form.write().company = e.value(),
                                }
                                Input {
                                    name: "industry",
                                    label: "Industry",
                                    placeholder: "e.g. FinTech",
                                    value: form.read().industry.clone(),
                                    on_input: move |e: FormEvent| form.write().industry = e.value(),
                                }
                            },
                            RegisterStep::AccountSetup => rsx! {
                                Input {
                                    name: "password",
                                    label: "Password",
                                    input_type: "password",
                                    placeholder: "At least 8 characters",
                                    value: form.read().password.clone(),
                                    error: field_error("password"),
                                    on_input: move |e: FormEvent| form.write().password = e.value(),
                                }
                                Input {
                                    name: "confirm_password",
                                    label: "Confirm Password",
                                    input_type: "password",
                                    value: form.read().confirm_password.clone(),
                                    error: field_error("confirm_password"),
                                    on_input: move |e: FormEvent| form.write().confirm_password = e.value(),
                                }
                                label { class: "auth-terms",
                                    input {
                                        r#type: "checkbox",
                                        checked: form.read().agree_to_terms,
                                        onchange: move |e: FormEvent| form.write().agree_to_terms = e.checked(),
                                    }
                                    "I agree to the terms and conditions"
                                }
                                if !field_error("agree_to_terms").is_empty() {
                                    div { class: "field-error", {field_error("agree_to_terms")} }
                                }
                            },
                        }}

                        div { class: "auth-actions",
                            if current.back().is_some() {
                                Button {
                                    variant: ButtonVariant::Outline,
                                    disabled: loading(),
                                    onclick: go_back,
                                    "Back"
                                }
                            }
                            Button {
                                submit: true,
                                loading: loading(),
                                if current.next().is_some() {
                                    "Next"
                                } else if loading() {
                                    "Creating account..."
                                } else {
                                    "Create Account"
                                }
                            }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
