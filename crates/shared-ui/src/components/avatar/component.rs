use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

#[component]
pub fn Avatar(mut props: prim::AvatarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { ..props }
    }
}

#[component]
pub fn AvatarImage(mut props: prim::AvatarImageProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar-image", None, false));

    rsx! {
        prim::AvatarImage { ..props }
    }
}

#[component]
pub fn AvatarFallback(mut props: prim::AvatarFallbackProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "avatar-fallback", None, false));

    rsx! {
        prim::AvatarFallback { ..props }
    }
}

/// Circle with a person's initials, optionally tinted by role.
#[component]
pub fn UserAvatar(
    initials: String,
    #[props(default)] tone: String,
    #[props(default = false)] large: bool,
) -> Element {
    let size = if large { "lg" } else { "md" };
    rsx! {
        div {
            class: "user-avatar",
            "data-size": size,
            "data-tone": tone,
            Avatar {
                AvatarFallback { "{initials}" }
            }
        }
    }
}
