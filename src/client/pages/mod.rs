use dioxus::prelude::*;

pub mod early_access;
pub mod partnerships;
pub mod splash;
pub mod technical_overview;

pub use early_access::EarlyAccess;
pub use partnerships::Partnerships;
pub use splash::Splash;
pub use technical_overview::TechnicalOverview;

/// Two-column shell shared by the lead-capture pages: pitch on the left, form on the right.
#[component]
fn FormPage(
    eyebrow: &'static str,
    heading: &'static str,
    lede: &'static str,
    highlights: Vec<(&'static str, &'static str)>,
    bullets: Vec<&'static str>,
    children: Element,
) -> Element {
    rsx! {
        main {
            class: "form-page",
            section {
                class: "split",
                div {
                    class: "pitch",
                    p { class: "eyebrow", "{eyebrow}" }
                    h1 { "{heading}" }
                    p { class: "lede", "{lede}" }
                    div {
                        class: "card-row",
                        for (title, body) in highlights {
                            div {
                                class: "mini-card",
                                p { class: "card-title", "{title}" }
                                p { "{body}" }
                            }
                        }
                    }
                    ul {
                        class: "bullets",
                        for bullet in bullets {
                            li { "{bullet}" }
                        }
                    }
                }
                div {
                    class: "form-column",
                    {children}
                }
            }
        }
    }
}
