use dioxus::prelude::*;

/// Pulsing placeholder block.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// Card-shaped placeholder with `lines` text bars, shown while a list loads.
#[component]
pub fn SkeletonCard(#[props(default = 3)] lines: usize) -> Element {
    rsx! {
        div { class: "skeleton-card",
            Skeleton { class: "skeleton-heading" }
            for i in 0..lines {
                Skeleton { key: "{i}", class: "skeleton-line" }
            }
        }
    }
}
