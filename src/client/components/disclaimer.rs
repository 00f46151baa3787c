use dioxus::prelude::*;

#[component]
pub fn DisclaimerModal(open: Signal<bool>) -> Element {
    let mut open = open;

    if !open() {
        return None;
    }

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| open.set(false),
        }
        div {
            class: "modal-frame",
            div {
                class: "modal",
                role: "dialog",
                div {
                    class: "modal-header",
                    h2 { "Disclaimer" }
                    button {
                        class: "modal-close",
                        aria_label: "Close disclaimer",
                        onclick: move |_| open.set(false),
                        "×"
                    }
                }
                div {
                    class: "modal-body",
                    p {
                        "qE is a fictional company in a work of science fiction. Any resemblance to real entities, products, or technologies is coincidental and unintentional."
                    }
                    p {
                        class: "fine-print",
                        "The concepts, materials, and technologies described on this site are speculative and presented for entertainment purposes only."
                    }
                }
                div {
                    class: "modal-footer",
                    button {
                        class: "pill",
                        onclick: move |_| open.set(false),
                        "Got it"
                    }
                }
            }
        }
    }
}
