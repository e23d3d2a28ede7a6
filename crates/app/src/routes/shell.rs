use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBriefcase, LdDollarSign, LdFolder, LdLayoutDashboard, LdLogOut,
    LdMessageSquare, LdSettings, LdTrendingUp, LdUser, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{is_active, page_title, visible_items, FeatureFlags, Section, UserRole};
use shared_ui::{
    use_drawer, Badge, BadgeVariant, CountBadge, DropdownMenu, DropdownMenuContent,
    DropdownMenuItem, DropdownMenuLabel, DropdownMenuSeparator, DropdownMenuTrigger, Sidebar,
    SidebarContent, SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem,
    SidebarProvider, SidebarSeparator, SidebarTrigger, UserAvatar,
};

/// Static entries in the notifications menu.
pub const NOTIFICATIONS: [&str; 3] = ["New investor match", "Meeting request", "Document shared"];

#[component]
fn SectionIcon(section: Section) -> Element {
    match section {
        Section::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        Section::InvestorMatches | Section::StartupMatches => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        Section::Communications => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 18, height: 18 } },
        Section::Funding => rsx! { Icon::<LdDollarSign> { icon: LdDollarSign, width: 18, height: 18 } },
        Section::Analytics => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 } },
        Section::Documents => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 } },
        Section::StartupProfile => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
        Section::InvestorProfile => rsx! { Icon::<LdUser> { icon: LdUser, width: 18, height: 18 } },
        Section::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
    }
}

/// Dashboard layout: collapsible side drawer with the role's menu, top bar
/// with page title, notifications and user menu.
#[component]
pub fn DashboardShell() -> Element {
    let route: Route = use_route();
    let Route::SectionPage { role, .. } = route else {
        return rsx! { Outlet::<Route> {} };
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            Sidebar {
                Brand {}
                SidebarSeparator {}
                SidebarContent {
                    SidebarMenu {
                        for section in visible_items(role) {
                            SidebarMenuItem { key: "{section}",
                                Link { to: Route::section(role, section),
                                    SidebarMenuButton {
                                        label: section.label().to_string(),
                                        active: is_active(&route.to_string(), section),
                                        icon: rsx! { SectionIcon { section } },
                                    }
                                }
                            }
                        }
                    }
                }
            }

            SidebarInset {
                TopBar { role, location: route.to_string() }
                div {
                    class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// "Questomer" when expanded, "Q" when collapsed.
#[component]
fn Brand() -> Element {
    let drawer = use_drawer();
    rsx! {
        SidebarHeader {
            span { class: "sidebar-brand",
                if drawer().is_expanded() { "Questomer" } else { "Q" }
            }
        }
    }
}

#[component]
fn TopBar(role: UserRole, location: String) -> Element {
    let flags: FeatureFlags = use_context();
    let mut auth = use_auth();
    let session = auth.session();
    let title = page_title(&location);

    let (name, email, initials) = session
        .user()
        .map(|u| (u.name().to_string(), u.email().to_string(), u.initials()))
        .unwrap_or_else(|| (String::new(), String::new(), role.initial().to_string()));

    rsx! {
        header { class: "topbar",
            SidebarTrigger {}
            h2 { class: "topbar-title", "{title}" }
            Badge { variant: BadgeVariant::Outline, class: "topbar-role", "{role.display_name()}" }
            div { class: "topbar-spacer" }

            if flags.notifications {
                DropdownMenu {
                    DropdownMenuTrigger {
                        span { class: "topbar-icon", "aria-label": "Notifications",
                            Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
                            CountBadge { count: NOTIFICATIONS.len() }
                        }
                    }
                    DropdownMenuContent {
                        for (i, note) in NOTIFICATIONS.iter().enumerate() {
                            DropdownMenuItem::<String> {
                                key: "{i}",
                                value: note.to_string(),
                                index: i,
                                on_select: move |_: String| {},
                                "{note}"
                            }
                        }
                    }
                }
            }

            DropdownMenu {
                DropdownMenuTrigger {
                    UserAvatar { initials, tone: role.as_str().to_string() }
                }
                DropdownMenuContent {
                    DropdownMenuLabel { title: name, detail: email }
                    DropdownMenuSeparator {}
                    DropdownMenuItem::<String> {
                        value: "profile".to_string(),
                        index: 0usize,
                        on_select: move |_: String| {
                            navigator().push(Route::section(role, Section::profile_for(role)));
                        },
                        Icon::<LdUser> { icon: LdUser, width: 16, height: 16 }
                        "Profile"
                    }
                    DropdownMenuItem::<String> {
                        value: "settings".to_string(),
                        index: 1usize,
                        on_select: move |_: String| {
                            navigator().push(Route::section(role, Section::Settings));
                        },
                        Icon::<LdSettings> { icon: LdSettings, width: 16, height: 16 }
                        "Settings"
                    }
                    DropdownMenuSeparator {}
                    DropdownMenuItem::<String> {
                        value: "logout".to_string(),
                        index: 2usize,
                        on_select: move |_: String| {
                            auth.logout();
                            navigator().push(Route::Login {});
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Logout"
                    }
                }
            }
        }
    }
}
