use dioxus::prelude::*;

use super::NavLink;
use crate::client::navigation::{NavItem, HEADER_ITEMS};
use crate::client::Route;

const BRAND: NavItem = NavItem::page("qE Technologies", Route::home());
const CTA: NavItem = NavItem::page("Request Early Access", Route::EarlyAccess {});

#[component]
pub fn SiteHeader() -> Element {
    let route = use_route::<Route>();

    rsx! {
        header {
            class: "site-header",
            div {
                class: "header-inner",
                NavLink { item: BRAND, class: "brand" }
                nav {
                    class: "main-nav",
                    for item in HEADER_ITEMS {
                        NavLink {
                            active: item.is_active(&route),
                            item: item,
                        }
                    }
                }
                NavLink { item: CTA, class: "cta" }
            }
        }
    }
}
