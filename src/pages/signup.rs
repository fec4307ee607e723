//! Signup page: create a user or admin account.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::signup::SignupForm;
use crate::state::submission::SubmissionStatus;

/// Account creation form. Admin signups additionally require the emailed
/// verification code. On success navigates to `/login?registered=true`.
#[component]
pub fn SignupPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let form = RwSignal::new(SignupForm::default());
    let status = RwSignal::new(SubmissionStatus::default());
    // Flipped the first time the admin role is picked; in a real flow this
    // is where the verification email would be requested.
    let admin_code_sent = RwSignal::new(false);

    let on_role_user = move |_| form.update(|f| f.role = Role::User);
    let on_role_admin = move |_| {
        form.update(|f| f.role = Role::Admin);
        if !admin_code_sent.get_untracked() {
            admin_code_sent.set(true);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let data = form.get_untracked();
        if let Err(err) = data.validate() {
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
                match crate::net::api::create_user_account(&data).await {
                    Ok(_) => {
                        status.update(SubmissionStatus::succeed);
                        navigate("/login?registered=true", NavigateOptions::default());
                    }
                    Err(msg) => status.update(|s| s.fail(msg)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &data;
        }
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <div class="card__header">
                    <a class="auth-card__brand" href="/">
                        "CodeMasters"
                    </a>
                    <h1 class="card__title">"Create an account"</h1>
                    <p class="card__description">"Enter your information to create an account"</p>
                </div>
                <form on:submit=on_submit>
                    <div class="card__content">
                        <label class="field">
                            "Full Name"
                            <input
                                class="field__input"
                                type="text"
                                placeholder="John Doe"
                                prop:value=move || form.get().name
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            "Email"
                            <input
                                class="field__input"
                                type="email"
                                placeholder="john@example.com"
                                prop:value=move || form.get().email
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            "Password"
                            <input
                                class="field__input"
                                type="password"
                                prop:value=move || form.get().password
                                on:input=move |ev| {
                                    form.update(|f| f.password = event_target_value(&ev))
                                }
                            />
                        </label>

                        <fieldset class="field field--radio-group">
                            <legend>"Account Type"</legend>
                            <label class="field__radio">
                                <input
                                    type="radio"
                                    name="role"
                                    value="user"
                                    prop:checked=move || form.get().role == Role::User
                                    on:change=on_role_user
                                />
                                "User"
                            </label>
                            <label class="field__radio">
                                <input
                                    type="radio"
                                    name="role"
                                    value="admin"
                                    prop:checked=move || form.get().role == Role::Admin
                                    on:change=on_role_admin
                                />
                                "Admin"
                            </label>
                        </fieldset>

                        <Show when=move || form.get().role == Role::Admin>
                            <label class="field">
                                "Admin Verification Code"
                                <input
                                    class="field__input"
                                    type="text"
                                    placeholder="Enter 6-digit code sent to your email"
                                    prop:value=move || form.get().admin_code
                                    on:input=move |ev| {
                                        form.update(|f| f.admin_code = event_target_value(&ev))
                                    }
                                />
                            </label>
                            <Show when=move || admin_code_sent.get()>
                                <p class="field__hint">
                                    "A verification code has been sent to your email. Please check and enter it above."
                                </p>
                            </Show>
                        </Show>

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
                                if status.get().is_loading() {
                                    "Creating account..."
                                } else {
                                    "Create Account"
                                }
                            }}
                        </button>
                        <p class="auth-card__alt">
                            "Already have an account? " <a href="/login">"Sign in"</a>
                        </p>
                    </div>
                </form>
            </div>
        </div>
    }
}
