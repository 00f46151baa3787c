use crate::common::{
    Backend, FormController, LoginPanel, MetadataService, PageMeta, SocialProvider, Submission, SubmitBlocked, CONFIG,
};
use dioxus::prelude::*;
use std::rc::Rc;

use super::browser::BrowserDocument;
use super::Services;

/// Applies `meta` to the document head after render, and again whenever it changes.
pub fn use_page_metadata(meta: PageMeta) {
    use_effect(use_reactive((&meta,), |(meta,)| {
        let Some(document) = BrowserDocument::current() else {
            tracing::warn!(title = meta.title, "no document to apply page metadata to");
            return;
        };

        if let Err(err) = MetadataService::new(document).apply(&meta) {
            tracing::warn!(title = meta.title, ?err, "failed to apply page metadata");
        }
    }));
}

/// Tears a controller down when its component unmounts, so a late result is ignored.
struct Teardown<F: FnMut()>(F);

impl<F: FnMut()> Drop for Teardown<F> {
    fn drop(&mut self) {
        (self.0)();
    }
}

#[derive(Clone)]
pub struct FormHandle<R: 'static> {
    pub controller: Signal<FormController<R>>,
    backend: Rc<dyn Backend>,
}

pub fn use_form<R: Submission>() -> FormHandle<R> {
    let services = use_context::<Services>();
    let controller = use_signal(|| FormController::<R>::new(CONFIG.reset_drafts_on_success));

    use_hook(move || {
        let mut controller = controller;
        Rc::new(Teardown(move || {
            if let Ok(mut form) = controller.try_write() {
                form.teardown();
            }
        }))
    });

    FormHandle {
        controller,
        backend: services.backend,
    }
}

impl<R: Submission> FormHandle<R> {
    pub fn edit(&self, field: &str, f: impl FnOnce(&mut R)) {
        let mut controller = self.controller;
        controller.write().edit(field, f);
    }

    /// Starts a submit cycle. The call runs on this component's scope, so it is dropped
    /// along with the form.
    pub fn submit(&self) {
        let mut controller = self.controller;

        let begun = controller.write().begin_submit();
        let (ticket, draft) = match begun {
            Ok(begun) => begun,
            Err(SubmitBlocked::Invalid(errors)) => {
                tracing::debug!(form = R::NAME, %errors, "submission blocked by validation");
                return;
            }
            Err(blocked) => {
                tracing::debug!(form = R::NAME, %blocked, "submission ignored");
                return;
            }
        };

        if let Ok(payload) = serde_json::to_string(&draft) {
            tracing::debug!(form = R::NAME, %payload, "submitting");
        }

        let backend = self.backend.clone();
        spawn(async move {
            let result = draft.send(backend).await;

            match &result {
                Ok(receipt) => tracing::info!(form = R::NAME, timestamp = receipt.timestamp, "submission confirmed"),
                Err(err) => tracing::error!(form = R::NAME, %err, "submission failed"),
            }

            if !controller.write().finish(ticket, result) {
                tracing::debug!(form = R::NAME, "discarded stale submission result");
            }
        });
    }
}

#[derive(Clone)]
pub struct LoginHandle {
    pub panel: Signal<LoginPanel>,
    backend: Rc<dyn Backend>,
}

pub fn use_login_panel() -> LoginHandle {
    let services = use_context::<Services>();
    let panel = use_signal(LoginPanel::default);

    use_hook(move || {
        let mut panel = panel;
        Rc::new(Teardown(move || {
            if let Ok(mut panel) = panel.try_write() {
                panel.teardown();
            }
        }))
    });

    LoginHandle {
        panel,
        backend: services.backend,
    }
}

impl LoginHandle {
    pub fn login(&self, provider: SocialProvider) {
        let mut panel = self.panel;

        let ticket = match panel.write().begin(provider) {
            Ok(ticket) => ticket,
            Err(blocked) => {
                tracing::debug!(%provider, %blocked, "login ignored");
                return;
            }
        };

        let backend = self.backend.clone();
        spawn(async move {
            let result = backend.login_with_provider(provider).await;

            if let Err(err) = &result {
                tracing::error!(%provider, %err, "social login failed");
            }

            panel.write().finish(ticket, result);
        });
    }
}
