use crate::client::hooks::use_login_panel;
use crate::common::SocialProvider;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use super::status_badge::FormStatusBadge;

fn provider_icon(provider: SocialProvider) -> &'static str {
    match provider {
        SocialProvider::Google => "🔗",
        SocialProvider::Facebook => "🌐",
    }
}

#[component]
pub fn SocialLoginPanel() -> Element {
    let login = use_login_panel();
    let (status, profile, busy) = {
        let panel = login.panel.read();
        (panel.status().clone(), panel.profile().cloned(), panel.is_connecting())
    };

    rsx! {
        div {
            class: "login-panel",
            div {
                class: "login-heading",
                div {
                    p { class: "eyebrow", "Profile capture" }
                    h3 { "One-click login" }
                }
                span { aria_hidden: "true", "🔐" }
            }
            p {
                class: "muted",
                "Sign in with a social profile to save your contact details for follow ups."
            }
            div {
                class: "login-buttons",
                for provider in SocialProvider::iter() {
                    button {
                        key: "{provider}",
                        r#type: "button",
                        class: "pill outline",
                        disabled: busy,
                        onclick: {
                            let login = login.clone();
                            move |_| login.login(provider)
                        },
                        span { aria_hidden: "true", "{provider_icon(provider)}" }
                        " Continue with {provider.label()}"
                    }
                }
            }
            {profile.map(|profile| rsx! {
                div {
                    class: "session-card",
                    p { class: "session-title", "Active session" }
                    p { "{profile.name}" }
                    p { class: "muted", "{profile.email}" }
                }
            })}
            FormStatusBadge { status: status }
        }
    }
}
