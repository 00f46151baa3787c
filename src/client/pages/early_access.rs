use dioxus::prelude::*;

use super::FormPage;
use crate::client::components::forms::EarlyAccessForm;
use crate::common::PageMeta;

pub const META: PageMeta = PageMeta {
    title: "Request Early Access | qE Technologies",
    description: Some(
        "Join the qE early access program to pilot Pebble, Anchor Matter, and the Drive Channel with calm, quantum-aware controls.",
    ),
    keywords: None,
};

#[component]
pub fn EarlyAccess() -> Element {
    rsx! {
        FormPage {
            eyebrow: "Early Access Program",
            heading: "Pilot calm-state quantum interfaces first.",
            lede: "We prioritize teams with clear safety, compliance, or infrastructure needs. Tell us how you plan to deploy Pebble, Anchor Matter, or the Drive Channel and we will share tailored runbooks, pilots, and validation artifacts.",
            highlights: vec![
                ("Wearable pilots", "Neural interface readiness checklists and calm-state validation."),
                ("Anchor Matter", "Material and biological substrates tuned for active resilience."),
                ("Drive Channel", "Quantum-safe control layers with transparent decisioning."),
            ],
            bullets: vec![
                "Proof-of-concept blueprints tailored to regulated industries.",
                "Pre-flight assessments for biosafety, materials safety, and data integrity.",
                "Hands-on onboarding with qE engineers and partner labs.",
            ],
            EarlyAccessForm {}
        }
    }
}
