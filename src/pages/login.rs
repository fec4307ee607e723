//! Login page with email/password sign-in.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_query_map;

use crate::state::auth::AuthState;
use crate::state::submission::{SubmissionStatus, require};

/// Sign-in form. Shows a confirmation banner when arriving from signup
/// (`?registered=true`); on success stores the user and navigates home.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let just_registered = move || query.read().get("registered").as_deref() == Some("true");

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(SubmissionStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let (email_value, password_value) = (email.get_untracked(), password.get_untracked());
        if let Err(err) =
            require("Email", &email_value).and_then(|()| require("Password", &password_value))
        {
            status.update(|s| s.fail(err.to_string()));
            return;
        }
        if !status.try_update(|s| s.begin()).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(user) => {
                        status.update(SubmissionStatus::succeed);
                        auth.update(|a| a.user = Some(user));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(msg) => status.update(|s| s.fail(msg)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&email_value, &password_value, &auth);
        }
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <div class="card__header">
                    <a class="auth-card__brand" href="/">
                        "CodeMasters"
                    </a>
                    <h1 class="card__title">"Sign in"</h1>
                    <p class="card__description">"Enter your email and password to sign in"</p>
                </div>

                <Show when=just_registered>
                    <div class="alert alert--success">
                        "Account created successfully. Sign in to continue."
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="card__content">
                        <label class="field">
                            "Email"
                            <input
                                class="field__input"
                                type="email"
                                placeholder="john@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            "Password"
                            <input
                                class="field__input"
                                type="password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>

                        {move || {
                            status
                                .get()
                                .error()
                                .map(|msg| view! { <p class="form-error">{msg.to_owned()}</p> })
                        }}
                    </div>
                    <div class="card__footer">
                        <button
                            type="submit"
                            class="btn btn--primary btn--block"
                            prop:disabled=move || status.get().is_loading()
                        >
                            {move || {
                                if status.get().is_loading() { "Signing in..." } else { "Sign In" }
                            }}
                        </button>
                        <p class="auth-card__alt">
                            "Don't have an account? " <a href="/signup">"Sign up"</a>
                        </p>
                    </div>
                </form>
            </div>
        </div>
    }
}
