use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::UserRole;
use shared_ui::{Button, ButtonSize, ButtonVariant, Card, CardContent, CardTitle};

const FEATURES: [(&str, &str); 4] = [
    (
        "Smart Matching",
        "Startups and investors are matched on industry, stage and investment criteria.",
    ),
    (
        "Secure Communications",
        "Message counterparts and share documents without leaving the platform.",
    ),
    (
        "Comprehensive Profiles",
        "Detailed startup and investor profiles make every introduction count.",
    ),
    (
        "Deal Management",
        "Track meetings, deal progress and your portfolio in one place.",
    ),
];

fn register_as(role: UserRole) -> Route {
    Route::Register {
        role: Some(role.as_str().to_string()),
    }
}

#[component]
pub fn Landing() -> Element {
    let auth = use_auth();
    let home = auth.role().map(Route::home);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: "landing",
            header { class: "landing-nav",
                span { class: "landing-brand", "Questomer" }
                div { class: "landing-nav-actions",
                    if let Some(home) = home {
                        Link { to: home,
                            Button { variant: ButtonVariant::Primary, "Go to dashboard" }
                        }
                    } else {
                        Link { to: Route::Login {},
                            Button { variant: ButtonVariant::Ghost, "Login" }
                        }
                        Link { to: Route::Register { role: None },
                            Button { "Sign Up" }
                        }
                    }
                }
            }

            section { class: "landing-hero",
                h1 { "Connect Startups with the Right Investors" }
                p { class: "landing-lead",
                    "Finding the perfect match for your startup or investment portfolio has never been easier."
                }
                div { class: "landing-cta",
                    Link { to: register_as(UserRole::Startup),
                        Button { size: ButtonSize::Large, variant: ButtonVariant::Secondary, "I'm a Startup" }
                    }
                    Link { to: register_as(UserRole::Investor),
                        Button { size: ButtonSize::Large, variant: ButtonVariant::Outline, "I'm an Investor" }
                    }
                }
            }

            section { class: "landing-features",
                h2 { "Why Choose Questomer" }
                div { class: "landing-feature-grid",
                    for (title, text) in FEATURES {
                        Card { key: "{title}", class: "landing-feature",
                            CardContent {
                                CardTitle { "{title}" }
                                p { "{text}" }
                            }
                        }
                    }
                }
            }

            footer { class: "landing-footer",
                p { "Already have an account? " Link { to: Route::Login {}, "Sign in" } }
                p { class: "landing-copy", "© Questomer. All rights reserved." }
            }
        }
    }
}
