//! The three lead-capture forms.

use crate::client::hooks::use_form;
use crate::common::{
    EarlyAccessRequest, PartnershipRequest, Readiness, TechnicalOverviewRequest, FOCUS_AREA_OPTIONS, ROLE_OPTIONS,
};
use dioxus::prelude::*;
use std::str::FromStr;
use strum::IntoEnumIterator;

use super::fields::{SelectField, TextAreaField, TextField};
use super::status_badge::FormStatusBadge;

#[component]
pub fn EarlyAccessForm() -> Element {
    let form = use_form::<EarlyAccessRequest>();
    let (draft, status, busy, issues) = {
        let controller = form.controller.read();
        let issues = ["fullName", "email", "company", "useCase"].map(|field| controller.field_issue(field));
        (controller.draft().clone(), controller.status().clone(), controller.is_submitting(), issues)
    };
    let [name_issue, email_issue, company_issue, use_case_issue] = issues;

    let readiness_options: Vec<(&'static str, &'static str)> =
        Readiness::iter().map(|r| (r.into(), r.label())).collect();

    let (f1, f2, f3, f4, f5, submit) = (form.clone(), form.clone(), form.clone(), form.clone(), form.clone(), form.clone());

    rsx! {
        div {
            id: "early-access",
            class: "form-card",
            div {
                class: "form-heading",
                h3 { "Request Early Access" }
                span { class: "eyebrow", "Pebble & Anchor" }
            }
            form {
                class: "form-grid",
                prevent_default: "onsubmit",
                onsubmit: move |_| submit.submit(),
                TextField {
                    label: "Full name",
                    name: "fullName",
                    value: draft.full_name,
                    issue: name_issue,
                    oninput: move |value: String| f1.edit("fullName", |d| d.full_name = value),
                }
                TextField {
                    label: "Work email",
                    name: "email",
                    kind: "email",
                    value: draft.email,
                    issue: email_issue,
                    oninput: move |value: String| f2.edit("email", |d| d.email = value),
                }
                TextField {
                    label: "Company or lab",
                    name: "company",
                    value: draft.company,
                    issue: company_issue,
                    oninput: move |value: String| f3.edit("company", |d| d.company = value),
                }
                TextField {
                    label: "Primary use case",
                    name: "useCase",
                    value: draft.use_case,
                    placeholder: "Stress-aware steel, quantum-gated pharma, etc.",
                    issue: use_case_issue,
                    oninput: move |value: String| f4.edit("useCase", |d| d.use_case = value),
                }
                SelectField {
                    label: "Deployment readiness",
                    name: "readiness",
                    value: draft.readiness.to_string(),
                    options: readiness_options,
                    oninput: move |value: String| {
                        match Readiness::from_str(&value) {
                            Ok(readiness) => f5.edit("readiness", |d| d.readiness = readiness),
                            Err(err) => tracing::warn!(%value, %err, "unknown readiness option"),
                        }
                    },
                }
                button {
                    r#type: "submit",
                    class: "pill primary",
                    disabled: busy,
                    if busy { "Submitting…" } else { "Send request" }
                }
            }
            FormStatusBadge { status: status }
        }
    }
}

#[component]
pub fn TechnicalOverviewForm() -> Element {
    let form = use_form::<TechnicalOverviewRequest>();
    let (draft, status, busy, email_issue) = {
        let controller = form.controller.read();
        (
            controller.draft().clone(),
            controller.status().clone(),
            controller.is_submitting(),
            controller.field_issue("email"),
        )
    };

    let (f1, f2, f3, submit) = (form.clone(), form.clone(), form.clone(), form.clone());

    rsx! {
        div {
            id: "technical-overview",
            class: "form-card",
            div {
                class: "form-heading",
                h3 { "Download Technical Overview" }
                span { class: "eyebrow", "Drive Channel" }
            }
            form {
                class: "form-grid",
                prevent_default: "onsubmit",
                onsubmit: move |_| submit.submit(),
                TextField {
                    label: "Work email",
                    name: "techEmail",
                    kind: "email",
                    value: draft.email,
                    issue: email_issue,
                    oninput: move |value: String| f1.edit("email", |d| d.email = value),
                }
                SelectField {
                    label: "Role",
                    name: "role",
                    value: draft.role,
                    options: ROLE_OPTIONS.to_vec(),
                    oninput: move |value: String| f2.edit("role", |d| d.role = value),
                }
                SelectField {
                    label: "Focus area",
                    name: "focusArea",
                    value: draft.focus_area,
                    options: FOCUS_AREA_OPTIONS.to_vec(),
                    oninput: move |value: String| f3.edit("focusArea", |d| d.focus_area = value),
                }
                button {
                    r#type: "submit",
                    class: "pill outline",
                    disabled: busy,
                    if busy { "Sending…" } else { "Email me the deck" }
                }
            }
            FormStatusBadge { status: status }
        }
    }
}

#[component]
pub fn PartnershipForm() -> Element {
    let form = use_form::<PartnershipRequest>();
    let (draft, status, busy, issues) = {
        let controller = form.controller.read();
        let issues = ["fullName", "organization", "message"].map(|field| controller.field_issue(field));
        (controller.draft().clone(), controller.status().clone(), controller.is_submitting(), issues)
    };
    let [name_issue, organization_issue, message_issue] = issues;

    let (f1, f2, f3, submit) = (form.clone(), form.clone(), form.clone(), form.clone());

    rsx! {
        div {
            id: "partnerships",
            class: "form-card",
            div {
                class: "form-heading",
                h3 { "Partnership & Pilot" }
                span { class: "eyebrow", "Custom Fit" }
            }
            form {
                class: "form-grid",
                prevent_default: "onsubmit",
                onsubmit: move |_| submit.submit(),
                TextField {
                    label: "Full name",
                    name: "partnerName",
                    value: draft.full_name,
                    issue: name_issue,
                    oninput: move |value: String| f1.edit("fullName", |d| d.full_name = value),
                }
                TextField {
                    label: "Organization",
                    name: "organization",
                    value: draft.organization,
                    issue: organization_issue,
                    oninput: move |value: String| f2.edit("organization", |d| d.organization = value),
                }
                TextAreaField {
                    label: "How can we help?",
                    name: "message",
                    value: draft.message,
                    placeholder: "Pilot in a hospital wing, deploy on a bridge, evaluate in your lab…",
                    issue: message_issue,
                    oninput: move |value: String| f3.edit("message", |d| d.message = value),
                }
                button {
                    r#type: "submit",
                    class: "pill light",
                    disabled: busy,
                    if busy { "Sending…" } else { "Start a conversation" }
                }
            }
            FormStatusBadge { status: status }
        }
    }
}
