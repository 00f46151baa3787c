use dioxus::prelude::*;

use super::NavLink;
use crate::client::navigation::FOOTER_ITEMS;

#[component]
pub fn SiteFooter(disclaimer_open: Signal<bool>) -> Element {
    let mut disclaimer_open = disclaimer_open;

    rsx! {
        footer {
            class: "site-footer",
            div {
                class: "footer-inner",
                div {
                    class: "footer-brand",
                    span { class: "brand", "qE Technologies" }
                    span { "· Calm minds. Cooperative matter." }
                }
                div {
                    class: "footer-links",
                    for item in FOOTER_ITEMS {
                        NavLink { item: item }
                    }
                }
            }
            p {
                class: "footer-note",
                "© qE Technologies. "
                button {
                    class: "link-button",
                    onclick: move |_| disclaimer_open.set(true),
                    "Disclaimer"
                }
            }
        }
    }
}
