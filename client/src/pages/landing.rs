//! Landing page offering login or registration.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::Route;
use crate::util::messages;

#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();
    let go_login = {
        let navigate = navigate.clone();
        move |_| navigate(Route::Login.path(), NavigateOptions::default())
    };
    let go_register = move |_| navigate(Route::Register.path(), NavigateOptions::default());

    view! {
        <div class="form-container landing-page">
            <h2>{messages::LANDING_HEADING}</h2>
            <p>{messages::LANDING_PROMPT}</p>
            <div class="button-group">
                <button class="primary-button" on:click=go_login>
                    "Login"
                </button>
                <button class="secondary-button" on:click=go_register>
                    "Daftar"
                </button>
            </div>
        </div>
    }
}
