use dioxus::prelude::*;

use super::navigation::NavItem;

pub mod backgrounds;
pub mod disclaimer;
pub mod fields;
pub mod footer;
pub mod forms;
pub mod header;
pub mod social_login;
pub mod status_badge;

/// Client-side link to a page or a splash page section.
#[component]
pub fn NavLink(item: NavItem, #[props(default)] class: &'static str, #[props(default)] active: bool) -> Element {
    let navigator = use_navigator();
    let href = item.href();
    let label = item.label;
    let class = if active { format!("{class} active") } else { class.to_string() };

    rsx! {
        a {
            href: "{href}",
            class: "{class}",
            aria_current: aria_current(active),
            prevent_default: "onclick",
            onclick: move |_| {
                navigator.push(item.route());
            },
            "{label}"
        }
    }
}

fn aria_current(active: bool) -> Option<&'static str> {
    active.then_some("page")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_active_link_is_marked_current() {
        assert_eq!(aria_current(true), Some("page"));
        assert_eq!(aria_current(false), None);
    }
}
