use dioxus::prelude::*;

use super::FormPage;
use crate::client::components::forms::PartnershipForm;
use crate::common::PageMeta;

pub const META: PageMeta = PageMeta {
    title: "Partnerships | qE Technologies",
    description: Some(
        "Propose a partnership with qE Technologies for research, field deployments, or ecosystem integrations across calm computing and adaptive materials.",
    ),
    keywords: None,
};

#[component]
pub fn Partnerships() -> Element {
    rsx! {
        FormPage {
            eyebrow: "Partnerships",
            heading: "Build with qE: research, pilots, and ecosystems.",
            lede: "Whether you run a research lab, operate critical infrastructure, or lead product at a calm computing startup, share the collaboration you have in mind. We align teams with the right qE leads for co-development or field work.",
            highlights: vec![],
            bullets: vec![
                "Credible field sites for Anchor Matter resilience pilots.",
                "Clinical or lab partners with calm-state safety protocols.",
                "Platform teams ready to embed Drive Channel decisioning.",
            ],
            PartnershipForm {}
        }
    }
}
