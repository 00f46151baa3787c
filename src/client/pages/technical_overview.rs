use dioxus::prelude::*;

use super::FormPage;
use crate::client::components::forms::TechnicalOverviewForm;
use crate::common::PageMeta;

pub const META: PageMeta = PageMeta {
    title: "Technical Overview | qE Technologies",
    description: Some(
        "Request the qE technical overview to understand Pebble, Anchor Matter, and Drive Channel architectures for your stack.",
    ),
    keywords: None,
};

#[component]
pub fn TechnicalOverview() -> Element {
    rsx! {
        FormPage {
            eyebrow: "Technical Briefing",
            heading: "Integrate qE with confidence.",
            lede: "The qE stack is designed for observability, compliance, and performance. Share how you architect systems today and we will map Pebble, Anchor Matter, and Drive Channel into your data flows with diagrams, API references, and latency profiles.",
            highlights: vec![
                ("Deployment clarity", "Data boundaries, safety gates, and auditability for regulated teams."),
                ("Performance data", "Latency envelopes, sampling cadence, and hardware requirements."),
            ],
            bullets: vec![
                "Security model with audit-ready logging and permissions.",
                "Reference deployments for materials, healthcare, and genetic programs.",
                "Change management and rollout plans for calm-state interfaces.",
            ],
            TechnicalOverviewForm {}
        }
    }
}
