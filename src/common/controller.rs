//! Per-form submission state.
//!
//! A controller owns one draft, one [`FormStatus`] and one [`SubmitCycle`]. Results of a
//! call only land if they belong to the cycle that is still pending; anything arriving
//! after a teardown is dropped.

use futures::future::LocalBoxFuture;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

use super::api::{Backend, Receipt, SubmitError};
use super::requests::{SocialLoginResponse, SocialProvider};
use super::status::FormStatus;
use super::validation::{FieldIssue, ValidationErrors};

/// Proof that a result belongs to a specific submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct SubmitCycle {
    generation: u64,
    pending: Option<u64>,
    torn_down: bool,
}

impl SubmitCycle {
    pub fn start(&mut self) -> Result<Ticket, SubmitBlocked> {
        if self.torn_down {
            return Err(SubmitBlocked::TornDown);
        }
        if self.pending.is_some() {
            return Err(SubmitBlocked::InFlight);
        }

        self.generation += 1;
        self.pending = Some(self.generation);
        Ok(Ticket(self.generation))
    }

    /// Closes the cycle `ticket` belongs to. Returns false when the result is stale.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if self.torn_down || self.pending != Some(ticket.0) {
            return false;
        }

        self.pending = None;
        true
    }

    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.pending = None;
    }

    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the form is no longer mounted")]
    TornDown,
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

pub struct StatusMessages {
    pub loading: &'static str,
    pub success: &'static str,
    pub error: &'static str,
}

/// A request record one of the lead-capture forms sends.
pub trait Submission: Clone + Default + PartialEq + fmt::Debug + serde::Serialize + 'static {
    /// Used in logs.
    const NAME: &'static str;
    const MESSAGES: StatusMessages;

    fn validate(&self) -> Result<(), ValidationErrors>;

    fn send(self, backend: Rc<dyn Backend>) -> LocalBoxFuture<'static, Receipt<Self>>;
}

pub struct FormController<R> {
    draft: R,
    status: FormStatus,
    field_errors: ValidationErrors,
    cycle: SubmitCycle,
    reset_on_success: bool,
}

impl<R: Submission> Default for FormController<R> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<R: Submission> FormController<R> {
    pub fn new(reset_on_success: bool) -> Self {
        Self {
            draft: R::default(),
            status: FormStatus::idle(),
            field_errors: ValidationErrors::default(),
            cycle: SubmitCycle::default(),
            reset_on_success,
        }
    }

    pub fn draft(&self) -> &R {
        &self.draft
    }

    /// Edits one field of the draft and forgets any error reported for it.
    pub fn edit(&mut self, field: &str, f: impl FnOnce(&mut R)) {
        f(&mut self.draft);
        self.field_errors.clear_field(field);
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn field_issue(&self, field: &str) -> Option<FieldIssue> {
        self.field_errors.issue(field)
    }

    /// True exactly while the submit control must be disabled.
    pub fn is_submitting(&self) -> bool {
        self.status.is_loading()
    }

    /// Validates the draft and moves to loading. Hands back the ticket for this cycle and
    /// a snapshot of the draft to send.
    ///
    /// An invalid draft leaves the status untouched; the reasons are kept per field.
    pub fn begin_submit(&mut self) -> Result<(Ticket, R), SubmitBlocked> {
        if self.cycle.in_flight() {
            return Err(SubmitBlocked::InFlight);
        }

        if let Err(errors) = self.draft.validate() {
            self.field_errors = errors.clone();
            return Err(errors.into());
        }

        let ticket = self.cycle.start()?;
        self.field_errors = ValidationErrors::default();
        self.status = FormStatus::loading(R::MESSAGES.loading);

        Ok((ticket, self.draft.clone()))
    }

    /// Applies the outcome of the call made under `ticket`. Returns false when the
    /// outcome was discarded.
    pub fn finish<T>(&mut self, ticket: Ticket, result: Result<T, SubmitError>) -> bool {
        if !self.cycle.settle(ticket) {
            return false;
        }

        self.status = match result {
            Ok(_) => {
                if self.reset_on_success {
                    self.draft = R::default();
                }
                FormStatus::success(R::MESSAGES.success)
            }
            Err(_) => FormStatus::error(R::MESSAGES.error),
        };

        true
    }

    pub fn teardown(&mut self) {
        self.cycle.teardown();
    }
}

/// State behind the one-click login buttons.
#[derive(Debug, Default)]
pub struct LoginPanel {
    status: FormStatus,
    profile: Option<SocialLoginResponse>,
    pending: Option<SocialProvider>,
    cycle: SubmitCycle,
}

impl LoginPanel {
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn profile(&self) -> Option<&SocialLoginResponse> {
        self.profile.as_ref()
    }

    pub fn is_connecting(&self) -> bool {
        self.status.is_loading()
    }

    pub fn begin(&mut self, provider: SocialProvider) -> Result<Ticket, SubmitBlocked> {
        let ticket = self.cycle.start()?;
        self.pending = Some(provider);
        self.status = FormStatus::loading(format!("Connecting with {provider}…"));
        Ok(ticket)
    }

    pub fn finish(&mut self, ticket: Ticket, result: Result<SocialLoginResponse, SubmitError>) -> bool {
        if !self.cycle.settle(ticket) {
            return false;
        }

        let provider = self.pending.take();
        self.status = match result {
            Ok(profile) => {
                let status = FormStatus::success(format!(
                    "Welcome, {}. We captured your {} profile ({}).",
                    profile.name,
                    provider.unwrap_or(profile.provider),
                    profile.email
                ));
                self.profile = Some(profile);
                status
            }
            Err(_) => FormStatus::error("We could not complete the login. Please retry."),
        };

        true
    }

    pub fn teardown(&mut self) {
        self.cycle.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::status::FormState;
    use crate::common::{PartnershipRequest, SubmissionReceipt};
    use pretty_assertions::assert_eq;

    fn filled() -> PartnershipRequest {
        PartnershipRequest {
            full_name: "Grace Hopper".into(),
            organization: "Navy".into(),
            message: "Pilot in a harbor".into(),
        }
    }

    fn ok(request: PartnershipRequest) -> Receipt<PartnershipRequest> {
        Ok(SubmissionReceipt::ok(request, 0))
    }

    #[test]
    fn cycle_hands_out_fresh_tickets() {
        let mut cycle = SubmitCycle::default();

        let first = cycle.start().unwrap();
        assert_eq!(cycle.start(), Err(SubmitBlocked::InFlight));
        assert!(cycle.settle(first));
        assert!(!cycle.settle(first));

        let second = cycle.start().unwrap();
        assert_ne!(first, second);
        assert!(!cycle.settle(first));
        assert!(cycle.settle(second));
    }

    #[test]
    fn teardown_discards_pending_result() {
        let mut cycle = SubmitCycle::default();
        let ticket = cycle.start().unwrap();
        cycle.teardown();

        assert!(!cycle.settle(ticket));
        assert_eq!(cycle.start(), Err(SubmitBlocked::TornDown));
    }

    #[test]
    fn status_walks_idle_loading_success() {
        let mut form = FormController::<PartnershipRequest>::new(false);
        form.edit("fullName", |d| *d = filled());
        assert_eq!(form.status().state, FormState::Idle);
        assert!(!form.is_submitting());

        let (ticket, sent) = form.begin_submit().unwrap();
        assert_eq!(sent, filled());
        assert_eq!(form.status().state, FormState::Loading);
        assert!(form.is_submitting());

        assert!(form.finish(ticket, ok(sent)));
        assert_eq!(form.status().state, FormState::Success);
        assert!(!form.is_submitting());
        // values stay put unless configured otherwise
        assert_eq!(form.draft(), &filled());
    }

    #[test]
    fn resubmit_goes_back_to_loading() {
        let mut form = FormController::<PartnershipRequest>::new(false);
        form.edit("fullName", |d| *d = filled());

        let (ticket, sent) = form.begin_submit().unwrap();
        form.finish(ticket, ok(sent));

        form.begin_submit().unwrap();
        assert_eq!(form.status().state, FormState::Loading);
    }

    #[test]
    fn failure_shows_static_message() {
        let mut form = FormController::<PartnershipRequest>::new(false);
        form.edit("fullName", |d| *d = filled());

        let (ticket, _) = form.begin_submit().unwrap();
        let failed: Receipt<PartnershipRequest> = Err(SubmitError::Network("connection reset".into()));
        assert!(form.finish(ticket, failed));

        assert_eq!(
            form.status(),
            &FormStatus::error("We could not send your note. Please try again in a few minutes.")
        );
    }

    #[test]
    fn double_submit_is_blocked() {
        let mut form = FormController::<PartnershipRequest>::new(false);
        form.edit("fullName", |d| *d = filled());

        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit().unwrap_err(), SubmitBlocked::InFlight);
        assert!(form.is_submitting());
    }

    #[test]
    fn invalid_draft_keeps_status_and_reports_fields() {
        let mut form = FormController::<PartnershipRequest>::new(false);

        let err = form.begin_submit().unwrap_err();
        assert!(matches!(err, SubmitBlocked::Invalid(_)));
        assert_eq!(form.status(), &FormStatus::idle());
        assert_eq!(form.field_issue("organization"), Some(FieldIssue::Required));

        form.edit("organization", |d| d.organization = "Navy".into());
        assert_eq!(form.field_issue("organization"), None);
        assert_eq!(form.field_issue("message"), Some(FieldIssue::Required));
    }

    #[test]
    fn result_after_teardown_is_dropped() {
        let mut form = FormController::<PartnershipRequest>::new(false);
        form.edit("fullName", |d| *d = filled());

        let (ticket, sent) = form.begin_submit().unwrap();
        form.teardown();

        assert!(!form.finish(ticket, ok(sent)));
        assert_eq!(form.status().state, FormState::Loading);
    }

    #[test]
    fn reset_on_success_restores_defaults() {
        let mut form = FormController::<PartnershipRequest>::new(true);
        form.edit("fullName", |d| *d = filled());

        let (ticket, sent) = form.begin_submit().unwrap();
        form.finish(ticket, ok(sent));

        assert_eq!(form.draft(), &PartnershipRequest::default());
        assert_eq!(form.status().state, FormState::Success);
    }

    #[test]
    fn login_panel_captures_profile() {
        let mut panel = LoginPanel::default();

        let ticket = panel.begin(SocialProvider::Google).unwrap();
        assert_eq!(panel.status(), &FormStatus::loading("Connecting with google…"));
        assert!(panel.is_connecting());
        assert_eq!(panel.begin(SocialProvider::Facebook), Err(SubmitBlocked::InFlight));

        let profile = SocialLoginResponse::canned(SocialProvider::Google);
        assert!(panel.finish(ticket, Ok(profile.clone())));
        assert_eq!(panel.profile(), Some(&profile));
        assert_eq!(
            panel.status().message,
            "Welcome, Google Researcher. We captured your google profile (researcher@qe.example)."
        );
    }

    #[test]
    fn new_login_overwrites_profile() {
        let mut panel = LoginPanel::default();

        let ticket = panel.begin(SocialProvider::Google).unwrap();
        panel.finish(ticket, Ok(SocialLoginResponse::canned(SocialProvider::Google)));

        let ticket = panel.begin(SocialProvider::Facebook).unwrap();
        panel.finish(ticket, Ok(SocialLoginResponse::canned(SocialProvider::Facebook)));

        assert_eq!(panel.profile().map(|p| p.name.as_str()), Some("Facebook Engineer"));
    }

    #[test]
    fn failed_login_keeps_previous_profile() {
        let mut panel = LoginPanel::default();

        let ticket = panel.begin(SocialProvider::Google).unwrap();
        panel.finish(ticket, Ok(SocialLoginResponse::canned(SocialProvider::Google)));

        let ticket = panel.begin(SocialProvider::Facebook).unwrap();
        panel.finish(ticket, Err(SubmitError::Rejected("popup closed".into())));

        assert_eq!(panel.status().state, FormState::Error);
        assert_eq!(panel.profile().map(|p| p.provider), Some(SocialProvider::Google));
    }
}
