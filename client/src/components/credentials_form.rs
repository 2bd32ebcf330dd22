//! Username/password form shared by the login and register pages.
//!
//! The form owns required-field validation: an incomplete submission sets the
//! status message and never reaches `on_submit`, so no request is sent.

#[cfg(test)]
#[path = "credentials_form_test.rs"]
mod credentials_form_test;

use leptos::prelude::*;

use crate::net::types::Credentials;
use crate::util::messages;

/// Per-view form state, discarded with the page on unmount.
#[derive(Clone, Copy)]
pub struct FormState {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub message: RwSignal<String>,
    pub busy: RwSignal<bool>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
            busy: RwSignal::new(false),
        }
    }

    /// Mark a request as in flight and show `pending`.
    pub fn start(self, pending: &str) {
        self.busy.set(true);
        self.message.set(pending.to_owned());
    }

    /// Apply a finished request. Returns `false` when the view has been
    /// unmounted meanwhile, in which case the caller must not navigate.
    pub fn finish(self, message: String) -> bool {
        let _ = self.message.try_set(message);
        self.busy.try_update(|busy| *busy = false).is_some()
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate raw input into credentials or the message to display.
pub(crate) fn validate_submission(username: &str, password: &str) -> Result<Credentials, &'static str> {
    Credentials::parse(username, password).map_err(|_| messages::CREDENTIALS_REQUIRED)
}

#[component]
pub fn CredentialsForm(
    state: FormState,
    submit_label: &'static str,
    on_submit: Callback<Credentials>,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.busy.get() {
            return;
        }
        match validate_submission(&state.username.get(), &state.password.get()) {
            Ok(credentials) => on_submit.run(credentials),
            Err(message) => state.message.set(message.to_owned()),
        }
    };

    view! {
        <form class="credentials-form" on:submit=on_form_submit>
            <div>
                <label for="username">"Username:"</label>
                <input
                    id="username"
                    type="text"
                    required=true
                    prop:value=move || state.username.get()
                    on:input=move |ev| state.username.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label for="password">"Password:"</label>
                <input
                    id="password"
                    type="password"
                    required=true
                    prop:value=move || state.password.get()
                    on:input=move |ev| state.password.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" disabled=move || state.busy.get()>
                {submit_label}
            </button>
        </form>
        <Show when=move || !state.message.get().is_empty()>
            <p class="form-message">{move || state.message.get()}</p>
        </Show>
    }
}
