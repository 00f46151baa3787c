use crate::common::FieldIssue;
use dioxus::prelude::*;

#[component]
fn FieldMessage(#[props(!optional)] issue: Option<FieldIssue>) -> Element {
    let issue = issue?;

    rsx! {
        span { class: "field-error", "{issue.message()}" }
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    name: &'static str,
    value: String,
    #[props(default = "text")] kind: &'static str,
    #[props(default)] placeholder: &'static str,
    #[props(!optional)] issue: Option<FieldIssue>,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: "field",
            "{label}"
            input {
                name: "{name}",
                r#type: "{kind}",
                value: "{value}",
                placeholder: "{placeholder}",
                class: if issue.is_some() { "invalid" } else { "" },
                oninput: move |evt| oninput.call(evt.value()),
            }
            FieldMessage { issue: issue }
        }
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    name: &'static str,
    value: String,
    #[props(default)] placeholder: &'static str,
    #[props(!optional)] issue: Option<FieldIssue>,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: "field",
            "{label}"
            textarea {
                name: "{name}",
                rows: "3",
                value: "{value}",
                placeholder: "{placeholder}",
                class: if issue.is_some() { "invalid" } else { "" },
                oninput: move |evt| oninput.call(evt.value()),
            }
            FieldMessage { issue: issue }
        }
    }
}

/// A select over `(value, label)` options.
#[component]
pub fn SelectField(
    label: &'static str,
    name: &'static str,
    value: String,
    options: Vec<(&'static str, &'static str)>,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: "field",
            "{label}"
            select {
                name: "{name}",
                oninput: move |evt| oninput.call(evt.value()),
                for (option_value, option_label) in options {
                    option {
                        value: "{option_value}",
                        selected: option_value == value,
                        "{option_label}"
                    }
                }
            }
        }
    }
}
