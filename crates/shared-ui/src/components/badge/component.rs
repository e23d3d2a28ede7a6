use dioxus::prelude::*;

/// Colour family for badges. Status pills map their state onto one of these.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Success,
    Warning,
    Danger,
    Neutral,
    Outline,
}

impl BadgeVariant {
    fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Danger => "danger",
            BadgeVariant::Neutral => "neutral",
            BadgeVariant::Outline => "outline",
        }
    }
}

#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-variant", variant.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Small rounded counter, e.g. unread messages next to a menu entry.
#[component]
pub fn CountBadge(count: usize) -> Element {
    if count == 0 {
        return rsx! {};
    }
    let shown = if count > 99 { "99+".to_string() } else { count.to_string() };
    rsx! {
        Badge { variant: BadgeVariant::Danger, class: "count-badge", "{shown}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_renders_nothing() {
        fn app() -> Element {
            rsx! { CountBadge { count: 0 } }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        assert!(!dioxus_ssr::render(&dom).contains("count-badge"));
    }

    #[test]
    fn large_counts_are_capped() {
        fn app() -> Element {
            rsx! { CountBadge { count: 140 } }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("99+"));
    }
}
