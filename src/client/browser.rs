//! Thin wrappers over the browser APIs the site needs.

use crate::common::{Clock, MetaDocument, MetaKey};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use super::navigation::ScrollAction;

pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::sleep(duration).boxed_local()
    }
}

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// The live `document`.
pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    pub fn current() -> Option<Self> {
        document().map(|document| Self { document })
    }
}

impl MetaDocument for BrowserDocument {
    type Error = JsValue;

    fn set_title(&mut self, title: &str) -> Result<(), JsValue> {
        self.document.set_title(title);
        Ok(())
    }

    fn upsert_meta(&mut self, key: MetaKey, content: &str) -> Result<(), JsValue> {
        let meta = match self.document.query_selector(&key.selector())? {
            Some(meta) => meta,
            None => {
                let meta = self.document.create_element("meta")?;
                meta.set_attribute(key.attribute(), key.value())?;
                let head = self
                    .document
                    .head()
                    .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
                head.append_child(&meta)?;
                meta
            }
        };

        meta.set_attribute("content", content)
    }
}

pub fn element_exists(id: &str) -> bool {
    document().and_then(|d| d.get_element_by_id(id)).is_some()
}

pub fn scroll(action: &ScrollAction) {
    let Some(window) = web_sys::window() else {
        return;
    };

    match action {
        ScrollAction::Stay => {}
        ScrollAction::Top => {
            let mut opts = ScrollToOptions::new();
            opts.top(0.0);
            opts.behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
        ScrollAction::Element(id) => {
            if let Some(target) = document().and_then(|d| d.get_element_by_id(id)) {
                let mut opts = ScrollIntoViewOptions::new();
                opts.behavior(ScrollBehavior::Smooth);
                opts.block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }
    }
}
