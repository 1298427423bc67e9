//! Sign-in page.

use crate::backend::session::UserInfo;
use crate::backend::utils::route::Route;
use crate::frontend::services::context::AuthState;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use serde_json::Value;

/// Collects a username and an access token and starts the session.
///
/// Verifying credentials against the API is the API client's job; this
/// page only hands the result to [`AuthState::login`].
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let mut auth = use_context::<AuthState>();
    let mut username = use_signal(String::new);
    let mut token = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let name = username.read().trim().to_string();
        let credential = token.read().trim().to_string();

        if name.is_empty() || credential.is_empty() {
            error.set(Some("Username and token are required".to_string()));
            return;
        }

        let mut user = UserInfo::new();
        user.insert("username".to_string(), Value::String(name));

        if let Err(e) = auth.login(user, credential) {
            log::error!("Failed to persist session: {e}");
        }
        error.set(None);
        nav.push(Route::UserList {});
    };

    rsx! {
        main {
            class: "login",
            h1 { class: "welcome-text", "Sign in" }
            form {
                class: "login-form",
                onsubmit: on_submit,
                input {
                    class: "inline-input",
                    r#type: "text",
                    value: "{username}",
                    placeholder: "Username",
                    autofocus: true,
                    oninput: move |e| username.set(e.value()),
                }
                input {
                    class: "inline-input",
                    r#type: "password",
                    value: "{token}",
                    placeholder: "Access token",
                    oninput: move |e| token.set(e.value()),
                }
                button { class: "login-button", r#type: "submit", "Sign in" }
            }
            if let Some(message) = error() {
                div { class: "error-message error-visible", "{message}" }
            }
        }
    }
}
