use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

#[component]
pub fn Progress(mut props: prim::ProgressProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress { ..props }
    }
}

#[component]
pub fn ProgressIndicator(mut props: prim::ProgressIndicatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress-indicator", None, false));

    rsx! {
        prim::ProgressIndicator { ..props }
    }
}

/// Labelled bar for a percentage in `0..=100`; values outside are clamped.
#[component]
pub fn ProgressBar(value: f64, #[props(default)] label: String) -> Element {
    let pct = value.clamp(0.0, 100.0);
    rsx! {
        div { class: "progress-bar",
            if !label.is_empty() {
                div { class: "progress-bar-caption",
                    span { "{label}" }
                    span { class: "progress-bar-value", "{pct:.0}%" }
                }
            }
            Progress { value: Some(pct),
                ProgressIndicator { style: "width: {pct}%" }
            }
        }
    }
}
