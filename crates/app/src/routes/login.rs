use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff};
use dioxus_free_icons::Icon;
use platform::fixtures::{DEMO_INVESTOR_EMAIL, DEMO_PASSWORD, DEMO_STARTUP_EMAIL};
use shared_types::{FeatureFlags, LoginForm};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Input,
};
use std::collections::HashMap;

fn password_input_type(visible: bool) -> &'static str {
    if visible {
        "text"
    } else {
        "password"
    }
}

/// Email/password sign-in. Field errors are computed before anything is
/// sent; a signed-in visitor is sent straight to their dashboard.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let flags: FeatureFlags = use_context();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);
    let mut show_password = use_signal(|| false);

    if let Some(role) = auth.role() {
        navigator().replace(Route::home(role));
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        error_msg.set(None);

        let form = LoginForm::new(email(), password());
        let errors = form.field_errors();
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(HashMap::new());

        loading.set(true);
        match auth.login(form.email, form.password).await {
            Ok(role) => {
                navigator().push(Route::home(role));
            }
            Err(msg) => error_msg.set(Some(msg)),
        }
        loading.set(false);
    };

    let toggle_label = if show_password() {
        "Hide password"
    } else {
        "Show password"
    };
    let field_error = move |name: &str| field_errors.read().get(name).cloned().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    Link { to: Route::Landing {}, class: "auth-brand", "Questomer" }
                    CardTitle { "Sign In" }
                    CardDescription { "Welcome back! Sign in to continue to your dashboard" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            name: "email",
                            label: "Email",
                            input_type: "email",
                            placeholder: "you@company.com",
                            value: email(),
                            error: field_error("email"),
                            on_input: move |e: FormEvent| {
                                email.set(e.value());
                                error_msg.set(None);
                            },
                        }
                        div { class: "auth-password",
                            Input {
                                name: "password",
                                label: "Password",
                                input_type: password_input_type(show_password()).to_string(),
                                placeholder: "Enter your password",
                                value: password(),
                                error: field_error("password"),
                                on_input: move |e: FormEvent| {
                                    password.set(e.value());
                                    error_msg.set(None);
                                },
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                size: ButtonSize::Small,
                                class: "auth-password-toggle",
                                aria_label: toggle_label,
                                onclick: move |_: MouseEvent| show_password.set(!show_password()),
                                if show_password() {
                                    Icon { icon: LdEyeOff, width: 16, height: 16 }
                                } else {
                                    Icon { icon: LdEye, width: 16, height: 16 }
                                }
                            }
                        }
                        Button {
                            submit: true,
                            full_width: true,
                            loading: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }

                    if flags.demo_hint {
                        div { class: "auth-demo",
                            p { class: "auth-demo-title", "Demo accounts" }
                            p { "Startup: " code { "{DEMO_STARTUP_EMAIL}" } }
                            p { "Investor: " code { "{DEMO_INVESTOR_EMAIL}" } }
                            p { "Any password works, e.g. " code { "{DEMO_PASSWORD}" } }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Don't have an account? "
                        Link { to: Route::Register { role: None }, "Sign up" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_visibility_switches_input_type() {
        assert_eq!(password_input_type(false), "password");
        assert_eq!(password_input_type(true), "text");
    }
}
