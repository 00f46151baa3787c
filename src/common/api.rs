//! The backend the forms talk to.
//!
//! There is no server behind the site yet. [`MockBackend`] answers every call after an
//! artificial delay, and always successfully. Callers still go through [`Backend`] and
//! handle [`SubmitError`] so a live implementation can be swapped in.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use std::time::Duration;
use thiserror::Error;

use super::clock::Clock;
use super::requests::{
    EarlyAccessRequest, PartnershipRequest, SocialLoginResponse, SocialProvider, SubmissionReceipt,
    TechnicalOverviewRequest,
};

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("network unavailable: {0}")]
    Network(String),
    #[error("request rejected: {0}")]
    Rejected(String),
}

pub type Receipt<T> = Result<SubmissionReceipt<T>, SubmitError>;

pub trait Backend {
    fn submit_early_access(&self, payload: EarlyAccessRequest) -> LocalBoxFuture<'_, Receipt<EarlyAccessRequest>>;

    fn submit_technical_overview(
        &self,
        payload: TechnicalOverviewRequest,
    ) -> LocalBoxFuture<'_, Receipt<TechnicalOverviewRequest>>;

    fn submit_partnership(&self, payload: PartnershipRequest) -> LocalBoxFuture<'_, Receipt<PartnershipRequest>>;

    fn login_with_provider(
        &self,
        provider: SocialProvider,
    ) -> LocalBoxFuture<'_, Result<SocialLoginResponse, SubmitError>>;
}

/// Resolves to `response` once `latency` has passed on `clock`.
pub async fn simulate_network<T>(clock: &dyn Clock, response: T, latency: Duration) -> T {
    clock.sleep(latency).await;
    response
}

pub struct MockBackend<C> {
    clock: C,
    latency: Duration,
}

impl<C: Clock> MockBackend<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            latency: DEFAULT_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn acknowledge<T: 'static>(&self, payload: T) -> LocalBoxFuture<'_, Receipt<T>> {
        // Stamped when the call is made, not when the simulated reply lands.
        let receipt = SubmissionReceipt::ok(payload, self.clock.now_millis());
        async move { Ok(simulate_network(&self.clock, receipt, self.latency).await) }.boxed_local()
    }
}

impl<C: Clock> Backend for MockBackend<C> {
    fn submit_early_access(&self, payload: EarlyAccessRequest) -> LocalBoxFuture<'_, Receipt<EarlyAccessRequest>> {
        self.acknowledge(payload)
    }

    fn submit_technical_overview(
        &self,
        payload: TechnicalOverviewRequest,
    ) -> LocalBoxFuture<'_, Receipt<TechnicalOverviewRequest>> {
        self.acknowledge(payload)
    }

    fn submit_partnership(&self, payload: PartnershipRequest) -> LocalBoxFuture<'_, Receipt<PartnershipRequest>> {
        self.acknowledge(payload)
    }

    fn login_with_provider(
        &self,
        provider: SocialProvider,
    ) -> LocalBoxFuture<'_, Result<SocialLoginResponse, SubmitError>> {
        let profile = SocialLoginResponse::canned(provider);
        async move { Ok(simulate_network(&self.clock, profile, self.latency).await) }.boxed_local()
    }
}
