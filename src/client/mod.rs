#![allow(non_snake_case)]

use crate::common;
use common::{Backend, MockBackend, PageMeta, CONFIG};

use dioxus::prelude::*;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod browser;
mod components;
mod hooks;
mod logging;
mod navigation;
mod pages;

use browser::BrowserClock;
use components::disclaimer::DisclaimerModal;
use components::footer::SiteFooter;
use components::header::SiteHeader;
use hooks::use_page_metadata;
use navigation::normalize_fragment;
use pages::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    logging::init();
    tracing::info!(latency_ms = CONFIG.simulated_latency_millis, "starting qE site");
    launch(App);
}

/// Site routes. The splash page carries the URL fragment, so `/#how` targets its
/// `how` section and history entries keep the section they pointed at.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/#:section")]
        Splash { section: String },
        #[route("/early-access")]
        EarlyAccess {},
        #[route("/technical-overview")]
        TechnicalOverview {},
        #[route("/partnerships")]
        Partnerships {},
}

impl Route {
    pub const fn home() -> Self {
        Self::Splash { section: String::new() }
    }

    /// The splash section this route targets, if any.
    pub fn section(&self) -> Option<&str> {
        match self {
            Self::Splash { section } => normalize_fragment(section),
            _ => None,
        }
    }

    pub fn page_meta(&self) -> PageMeta {
        match self {
            Self::Splash { .. } => splash::META,
            Self::EarlyAccess {} => early_access::META,
            Self::TechnicalOverview {} => technical_overview::META,
            Self::Partnerships {} => partnerships::META,
        }
    }
}

/// Services shared by every page.
#[derive(Clone)]
pub struct Services {
    pub backend: Rc<dyn Backend>,
}

impl Services {
    fn browser() -> Self {
        let backend = MockBackend::new(BrowserClock).with_latency(CONFIG.simulated_latency());
        Self {
            backend: Rc::new(backend),
        }
    }
}

fn App() -> Element {
    use_context_provider(Services::browser);

    rsx!(Router::<Route> {})
}

#[component]
fn SiteLayout() -> Element {
    let disclaimer_open = use_signal(|| false);
    let route = use_route::<Route>();
    use_page_metadata(route.page_meta());

    rsx! {
        style { { include_str!("css/site.css") } }
        div {
            class: "site",
            DisclaimerModal { open: disclaimer_open }
            SiteHeader {}
            div {
                class: "site-content",
                Outlet::<Route> {}
            }
            SiteFooter { disclaimer_open: disclaimer_open }
        }
    }
}
