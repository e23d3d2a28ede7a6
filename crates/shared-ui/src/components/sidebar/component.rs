use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMenu;
use dioxus_free_icons::Icon;
use shared_types::DrawerState;

// ─── Context ───────────────────────────────────────────────────────────

/// Provides the drawer state to the shell. The drawer starts expanded
/// unless `initial` says otherwise.
#[component]
pub fn SidebarProvider(#[props(default)] initial: DrawerState, children: Element) -> Element {
    let state = use_signal(|| initial);
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-drawer": state().as_str(),
            style: "--drawer-width: {state().width()}px",
            {children}
        }
    }
}

/// Drawer state of the enclosing [`SidebarProvider`].
pub fn use_drawer() -> Signal<DrawerState> {
    use_context::<Signal<DrawerState>>()
}

// ─── Layout components ─────────────────────────────────────────────────

/// Permanent side drawer; only its width changes with the state.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let state = use_drawer();

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new("data-state", state().as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        nav {
            ..merged,
            {children}
        }
    }
}

// ─── Menu components ───────────────────────────────────────────────────

#[component]
pub fn SidebarMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-menu", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        ul {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarMenuItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-menu-item", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        li {
            ..merged,
            {children}
        }
    }
}

/// Icon plus label. When the drawer is collapsed only the icon shows and
/// the label moves into the tooltip.
#[component]
pub fn SidebarMenuButton(
    label: String,
    #[props(default = false)] active: bool,
    #[props(default)] icon: Element,
    #[props(default)] trailing: Element,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let state = use_drawer();
    let expanded = state().is_expanded();

    let base = vec![
        Attribute::new("class", "sidebar-menu-button", None, false),
        Attribute::new(
            "data-active",
            if active { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        span {
            title: if expanded { "" } else { "{label}" },
            "aria-current": if active { "page" } else { "false" },
            ..merged,
            span { class: "sidebar-menu-icon", {icon} }
            if expanded {
                span { class: "sidebar-menu-label", "{label}" }
                {trailing}
            }
        }
    }
}

// ─── Utility components ────────────────────────────────────────────────

/// Expands or collapses the drawer.
#[component]
pub fn SidebarTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    #[props(default)] children: Element,
) -> Element {
    let mut state = use_drawer();

    let base = vec![Attribute::new("class", "sidebar-trigger", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            "aria-label": if state().is_expanded() { "Collapse navigation" } else { "Expand navigation" },
            onclick: move |_| {
                let next = state().toggle();
                tracing::debug!(drawer = next.as_str(), "drawer toggled");
                state.set(next);
            },
            ..merged,
            Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
            {children}
        }
    }
}

#[component]
pub fn SidebarSeparator(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-separator", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        hr {
            ..merged,
        }
    }
}

/// Main column next to the drawer. Its left offset follows the drawer width.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-inset", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        main {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn expanded_drawer_shows_labels() {
        fn app() -> Element {
            rsx! {
                SidebarProvider {
                    Sidebar {
                        SidebarMenuButton { label: "Dashboard", active: true }
                    }
                }
            }
        }
        let html = render(app);
        assert!(html.contains("data-state=\"expanded\""));
        assert!(html.contains("--drawer-width: 260px"));
        assert!(html.contains("sidebar-menu-label"));
        assert!(html.contains("data-active=\"true\""));
    }

    #[test]
    fn collapsed_drawer_hides_labels() {
        fn app() -> Element {
            rsx! {
                SidebarProvider { initial: DrawerState::Collapsed,
                    Sidebar {
                        SidebarMenuButton { label: "Settings" }
                    }
                }
            }
        }
        let html = render(app);
        assert!(html.contains("data-state=\"collapsed\""));
        assert!(html.contains("--drawer-width: 64px"));
        assert!(!html.contains("sidebar-menu-label"));
        assert!(html.contains("title=\"Settings\""));
    }
}
