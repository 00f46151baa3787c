use futures::future::LocalBoxFuture;
use futures::FutureExt;
use std::rc::Rc;

use super::api::{Backend, Receipt};
use super::controller::{StatusMessages, Submission};
use super::requests::{EarlyAccessRequest, PartnershipRequest, TechnicalOverviewRequest};
use super::validation::ValidationErrors;

impl Submission for EarlyAccessRequest {
    const NAME: &'static str = "early_access";
    const MESSAGES: StatusMessages = StatusMessages {
        loading: "Submitting your early access request…",
        success: "You're on the list. We’ll reach out with next steps.",
        error: "We could not submit right now. Please retry in a moment.",
    };

    fn validate(&self) -> Result<(), ValidationErrors> {
        EarlyAccessRequest::validate(self)
    }

    fn send(self, backend: Rc<dyn Backend>) -> LocalBoxFuture<'static, Receipt<Self>> {
        async move { backend.submit_early_access(self).await }.boxed_local()
    }
}

impl Submission for TechnicalOverviewRequest {
    const NAME: &'static str = "technical_overview";
    const MESSAGES: StatusMessages = StatusMessages {
        loading: "Preparing your technical overview…",
        success: "Download link sent. Check your inbox for the technical overview.",
        error: "Unable to send the technical overview. Try again shortly.",
    };

    fn validate(&self) -> Result<(), ValidationErrors> {
        TechnicalOverviewRequest::validate(self)
    }

    fn send(self, backend: Rc<dyn Backend>) -> LocalBoxFuture<'static, Receipt<Self>> {
        async move { backend.submit_technical_overview(self).await }.boxed_local()
    }
}

impl Submission for PartnershipRequest {
    const NAME: &'static str = "partnership";
    const MESSAGES: StatusMessages = StatusMessages {
        loading: "Sharing your note with our partnerships team…",
        success: "Thanks for reaching out. We will reply with a tailored fit session.",
        error: "We could not send your note. Please try again in a few minutes.",
    };

    fn validate(&self) -> Result<(), ValidationErrors> {
        PartnershipRequest::validate(self)
    }

    fn send(self, backend: Rc<dyn Backend>) -> LocalBoxFuture<'static, Receipt<Self>> {
        async move { backend.submit_partnership(self).await }.boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::api::{MockBackend, SubmitError};
    use crate::common::clock::{Clock, ManualClock};
    use crate::common::controller::FormController;
    use crate::common::requests::{Readiness, SocialLoginResponse, SocialProvider};
    use crate::common::status::FormState;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    /// A backend that refuses everything, standing in for a live one having a bad day.
    struct Unreachable;

    impl Backend for Unreachable {
        fn submit_early_access(&self, _: EarlyAccessRequest) -> LocalBoxFuture<'_, Receipt<EarlyAccessRequest>> {
            futures::future::ready(Err(SubmitError::Network("offline".into()))).boxed_local()
        }

        fn submit_technical_overview(
            &self,
            _: TechnicalOverviewRequest,
        ) -> LocalBoxFuture<'_, Receipt<TechnicalOverviewRequest>> {
            futures::future::ready(Err(SubmitError::Network("offline".into()))).boxed_local()
        }

        fn submit_partnership(&self, _: PartnershipRequest) -> LocalBoxFuture<'_, Receipt<PartnershipRequest>> {
            futures::future::ready(Err(SubmitError::Rejected("rate limited".into()))).boxed_local()
        }

        fn login_with_provider(
            &self,
            _: SocialProvider,
        ) -> LocalBoxFuture<'_, Result<SocialLoginResponse, SubmitError>> {
            futures::future::ready(Err(SubmitError::Network("offline".into()))).boxed_local()
        }
    }

    fn ada() -> EarlyAccessRequest {
        EarlyAccessRequest {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            company: "Analytical Engines".into(),
            use_case: "Structural monitoring".into(),
            readiness: Readiness::Pilot,
        }
    }

    #[test]
    fn early_access_round_trip() {
        let clock = ManualClock::starting_at(10_000);
        let backend: Rc<dyn Backend> = Rc::new(MockBackend::new(clock.clone()));
        let mut form = FormController::<EarlyAccessRequest>::new(false);
        form.edit("fullName", |d| *d = ada());

        let (ticket, draft) = form.begin_submit().unwrap();
        assert_eq!(form.status().state, FormState::Loading);
        assert_eq!(form.status().message, "Submitting your early access request…");

        let result = block_on(draft.send(backend));
        assert!(clock.now_millis() - 10_000 >= 600);

        let receipt = result.clone().unwrap();
        assert_eq!(receipt.received, ada());

        assert!(form.finish(ticket, result));
        assert_eq!(form.status().state, FormState::Success);
        assert!(form.status().message.contains("You're on the list"));
    }

    #[test]
    fn technical_overview_uses_its_own_messages() {
        let clock = ManualClock::default();
        let backend: Rc<dyn Backend> = Rc::new(MockBackend::new(clock).with_latency(Duration::from_millis(1)));
        let mut form = FormController::<TechnicalOverviewRequest>::new(false);
        form.edit("email", |d| d.email = "cto@example.com".into());

        let (ticket, draft) = form.begin_submit().unwrap();
        let result = block_on(draft.clone().send(backend));
        assert_eq!(result.as_ref().unwrap().received, draft);

        form.finish(ticket, result);
        assert_eq!(
            form.status().message,
            "Download link sent. Check your inbox for the technical overview."
        );
    }

    #[test]
    fn backend_failure_lands_in_error_state() {
        let backend: Rc<dyn Backend> = Rc::new(Unreachable);
        let mut form = FormController::<EarlyAccessRequest>::new(false);
        form.edit("fullName", |d| *d = ada());

        let (ticket, draft) = form.begin_submit().unwrap();
        let result = block_on(draft.send(backend));
        assert!(result.is_err());

        form.finish(ticket, result);
        assert_eq!(form.status().state, FormState::Error);
        assert_eq!(form.status().message, "We could not submit right now. Please retry in a moment.");
        assert!(!form.is_submitting());
    }

    #[test]
    fn forms_submit_independently() {
        let backend: Rc<dyn Backend> = Rc::new(MockBackend::new(ManualClock::default()));

        let mut early = FormController::<EarlyAccessRequest>::new(false);
        early.edit("fullName", |d| *d = ada());
        let mut partners = FormController::<PartnershipRequest>::new(false);
        partners.edit("fullName", |d| {
            d.full_name = "Grace Hopper".into();
            d.organization = "Navy".into();
            d.message = "Harbor pilot".into();
        });

        let (early_ticket, early_draft) = early.begin_submit().unwrap();
        let (partner_ticket, partner_draft) = partners.begin_submit().unwrap();
        assert!(early.is_submitting() && partners.is_submitting());

        partners.finish(partner_ticket, block_on(partner_draft.send(backend.clone())));
        assert!(early.is_submitting());
        assert_eq!(partners.status().state, FormState::Success);

        early.finish(early_ticket, block_on(early_draft.send(backend)));
        assert_eq!(early.status().state, FormState::Success);
    }
}
