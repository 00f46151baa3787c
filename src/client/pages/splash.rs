use dioxus::prelude::*;

use crate::client::browser;
use crate::client::components::backgrounds::{
    EthicsSafetyVisualization, QuantumLatticeBackground, ResearchVisualization, StressVisualization,
};
use crate::client::components::social_login::SocialLoginPanel;
use crate::client::components::NavLink;
use crate::client::navigation::{scroll_action, NavItem};
use crate::client::Route;
use crate::common::{find_post, PageMeta, BLOG_POSTS};

pub const META: PageMeta = PageMeta {
    title: "qE Technologies | Calm quantum interfaces for matter and biology",
    description: Some(
        "qE Technologies builds calm quantum interfaces (Pebble wearable, Anchor Matter, and Drive Channel) to monitor stress, heal materials, and guide adaptive biology.",
    ),
    keywords: Some(
        "quantum wearables, Anchor Matter, Drive Channel, calm computing, self-healing materials, adaptive biology, structural monitoring",
    ),
};

const PRODUCTS: [(&str, &str); 3] = [
    ("Pebble™", "Neural interface wearable. Quantum gates calm perception. Direct intent encoding."),
    ("Anchor Matter™", "Programmable substrates. Structural, cellular, and genetic. Sense and respond."),
    ("Drive Channel", "Quantum-safe control layer. Materials. Biology. Genetic systems."),
];

const DOMAINS: [(&str, &str, [&str; 4]); 3] = [
    (
        "Materials & Infrastructure",
        "Micro-fractures in glass. Uneven wear in supports. Subtle stress patterns that no dashboard ever sees.",
        [
            "Real-time structural integrity monitoring",
            "Active material healing and self-repair",
            "Predictive maintenance and failure prevention",
            "Bridge, building, and critical infrastructure resilience",
        ],
    ),
    (
        "Healthcare & Pharmaceuticals",
        "Cellular damage detection. Drug delivery calibration. Real-time physiological feedback at the bio-quantum interface.",
        [
            "Quantum-gated neural interface for calm perception",
            "Precision pharmaceutical targeting and dosing",
            "Cellular-level stress and damage detection",
            "Biocompatible Anchor Matter for tissue regeneration",
        ],
    ),
    (
        "Gene Augmentation & Adaptive Biology",
        "Guided genetic expression. Adaptive protein synthesis. Evolution on demand, with guardrails.",
        [
            "Calm-state triggered gene expression optimization",
            "Real-time adaptive protein and enzyme synthesis",
            "Genetic expression integrity verification",
            "Safe, bounded biological augmentation",
        ],
    ),
];

const STEPS: [(&str, &str); 3] = [
    (
        "1 · Sense",
        "Pebble watches your physiology for calm, attentive states while Anchor Matter monitors local stress, micro-fractures, and fatigue.",
    ),
    (
        "2 · Encode",
        "When conditions are right, Pebble opens a calm channel and converts a tiny intent vector into a secure drive pattern using entangled photonics and on-device AI.",
    ),
    (
        "3 · Act",
        "Anchor Matter uses that pattern as a stream of decisions: which micro-repair to try, where to soften, where to stiffen. Structures drift toward safer configurations.",
    ),
];

const HEALTHCARE: [(&str, &str); 4] = [
    ("Chronic Pain Management", "Precision delivery with no system-wide toxicity."),
    ("Autoimmune Modulation", "Calm-gated immune suppression. Inflammation detection and response."),
    ("Stroke Recovery", "Anchor guides neuroplasticity. Neural regeneration on demand."),
    ("Post-Surgical Healing", "Active tissue repair. Infection prevention. Scar minimization."),
];

const GENETICS: [(&str, &str); 4] = [
    ("Stress Response Optimization", "Cortisol management through adaptive expression tuning."),
    ("Metabolic Flexibility", "Switch between fuel sources based on calm-state detection."),
    ("Circadian Entrainment", "Melatonin and cortisol tuning via quantum-gated biology."),
    ("Mitochondrial Performance", "Real-time ATP production scaling. Hypoxia resilience."),
];

const STACK: [(&str, &str); 3] = [
    (
        "Pebble™",
        "Calm-gated wearable with integrated photonic lattice, sensors, and edge AI. Designed for humans in the loop, not out of it.",
    ),
    (
        "Anchor Matter™",
        "Self-sensing, self-adjusting materials for glass, steel, and advanced composites, plus LM-series bounding aerosols for controlled environments.",
    ),
    (
        "Drive Channel",
        "A secure, low-energy control layer that coordinates Pebble and Anchor. Built to be auditable, bounded, and scientifically testable.",
    ),
];

const GUARDRAILS: [&str; 5] = [
    "No black-box miracles: every intervention is logged.",
    "Bounded deployments: Anchor runs inside defined risk envelopes.",
    "Internal ethics & safety council with veto power over demos and deployments.",
    "Science-first claims, backed by experiments and external review where it counts.",
    "Designed to coexist with regulators, insurers, and safety officers rather than fight them.",
];

const BLOG_LINK: NavItem = NavItem::section("Explore the qE Blog for research updates and deeper dives.", "blog");

#[component]
pub fn Splash(section: String) -> Element {
    let navigator = use_navigator();

    use_effect(use_reactive((&section,), |(section,)| {
        let action = scroll_action(&Route::Splash { section }, browser::element_exists);
        tracing::debug!(?action, "splash scroll");
        browser::scroll(&action);
    }));

    let expanded = find_post(&section).map(|post| post.slug);

    rsx! {
        main {
            class: "splash",

            section {
                class: "hero",
                QuantumLatticeBackground {}
                div {
                    class: "hero-inner",
                    p { class: "eyebrow", "Calm minds. Cooperative matter." }
                    h1 {
                        "From observation to action."
                        span { class: "accent", "Instantly." }
                    }
                    p {
                        class: "lede",
                        "qE links a new class of quantum-aware wearables with living and non-living systems, so structures sense stress, cells detect damage, and genetic expression optimizes in real time. All through a calm, quantum gate."
                    }
                    div {
                        class: "hero-actions",
                        button {
                            class: "pill primary",
                            onclick: move |_| { navigator.push(Route::EarlyAccess {}); },
                            "Request Early Access"
                        }
                        button {
                            class: "pill outline",
                            onclick: move |_| { navigator.push(Route::TechnicalOverview {}); },
                            "Download Technical Overview"
                        }
                    }
                    p { class: "muted", NavLink { item: BLOG_LINK, class: "inline-link" } }
                    div {
                        class: "card-row",
                        for (name, blurb) in PRODUCTS {
                            div {
                                class: "mini-card",
                                p { class: "card-title", "{name}" }
                                p { "{blurb}" }
                            }
                        }
                    }
                }
            }

            section {
                id: "login",
                class: "band",
                div {
                    class: "split",
                    div {
                        p { class: "eyebrow", "Login services" }
                        h2 { "Capture your profile and sync with qE instantly." }
                        p {
                            class: "muted",
                            "Start with social login to pin your details before exploring early access, technical overviews, and partnership flows."
                        }
                    }
                    SocialLoginPanel {}
                }
            }

            section {
                id: "what",
                class: "band",
                StressVisualization {}
                h2 { "Quiet healing across domains." }
                p {
                    class: "muted",
                    "From infrastructure to biology, qE detects problems before they cascade and enables systems, inorganic and living, to repair, optimize, and adapt in real time."
                }
                div {
                    class: "card-row",
                    for (title, body, points) in DOMAINS {
                        div {
                            class: "card",
                            h3 { "{title}" }
                            p { "{body}" }
                            ul {
                                for point in points {
                                    li { "{point}" }
                                }
                            }
                        }
                    }
                }
            }

            section {
                id: "how",
                class: "band",
                h2 { "How qE works (without the magic)." }
                p { class: "muted", "Three layers. One continuous loop from sensing to action." }
                div {
                    class: "card-row",
                    for (title, body) in STEPS {
                        div {
                            class: "card",
                            h3 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
                p {
                    class: "callout",
                    strong { "No telekinesis. No mind reading. " }
                    "Just physics, data, and a new way for materials to listen."
                }
            }

            section {
                id: "healthcare",
                class: "band",
                p { class: "eyebrow", "Bio-Quantum Medicine" }
                h2 { "Healing from the inside. Quantumly precise." }
                p {
                    class: "muted",
                    "Precision pharmaceutical delivery meets distributed intelligence. Drugs are released only where needed, in the dose your cells require, guided by quantum-safe control."
                }
                FeatureGrid { heading: "Healthcare Applications", items: HEALTHCARE.to_vec() }
            }

            section {
                id: "genetics",
                class: "band",
                p { class: "eyebrow", "Guided Evolution" }
                h2 { "Your biology, optimized. In real time." }
                p {
                    class: "muted",
                    "No permanent edits. No viral vectors. Reversible, bounded, and auditable. Your adaptive biology runs on your terms, with your consciousness in the loop."
                }
                FeatureGrid { heading: "Genetic Programs", items: GENETICS.to_vec() }
            }

            section {
                id: "stack",
                class: "band",
                h2 { "The qE Stack" }
                p { class: "muted", "From wrist to steel beam, qE is a full-stack platform for active resilience." }
                div {
                    class: "card-row",
                    for (name, body) in STACK {
                        div {
                            class: "card",
                            h3 { "{name}" }
                            p { "{body}" }
                        }
                    }
                }
            }

            section {
                id: "ethics",
                class: "band",
                EthicsSafetyVisualization {}
                h2 { "Built with guardrails." }
                p {
                    class: "muted",
                    "Technology that touches the physical world demands more than nice slide decks. It needs real limits."
                }
                ul {
                    class: "guardrails",
                    for rule in GUARDRAILS {
                        li { "{rule}" }
                    }
                }
            }

            section {
                id: "blog",
                class: "band",
                ResearchVisualization {}
                h2 { "Research, without the noise." }
                p {
                    class: "muted",
                    "Curated updates on entangled photons, active materials, and the calm interfaces that make qE possible."
                }
                div {
                    class: "posts",
                    for post in BLOG_POSTS {
                        article {
                            key: "{post.slug}",
                            id: "{post.slug}",
                            class: "card post",
                            h3 { "{post.title}" }
                            p { class: "muted", "{post.summary}" }
                            if expanded == Some(post.slug) {
                                for paragraph in post.content {
                                    p { "{paragraph}" }
                                }
                            } else {
                                NavLink { item: NavItem::section("Read the post →", post.slug), class: "inline-link" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureGrid(heading: &'static str, items: Vec<(&'static str, &'static str)>) -> Element {
    rsx! {
        div {
            class: "feature-grid",
            p { class: "card-title", "{heading}" }
            for (name, body) in items {
                div {
                    class: "feature",
                    p { class: "feature-name", "{name}" }
                    p { class: "muted", "{body}" }
                }
            }
        }
    }
}
