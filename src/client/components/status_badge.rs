use crate::common::{FormState, FormStatus};
use dioxus::prelude::*;

#[component]
pub fn FormStatusBadge(status: FormStatus) -> Element {
    let tone = match status.state {
        FormState::Idle => return None,
        FormState::Loading => "status loading",
        FormState::Success => "status success",
        FormState::Error => "status error",
    };

    rsx! {
        p {
            class: "{tone}",
            role: "status",
            aria_live: "polite",
            "{status.message}"
        }
    }
}
