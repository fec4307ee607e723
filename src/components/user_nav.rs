//! Header user area: current user with sign-out, or login/signup actions.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Shows the signed-in user's name and a sign-out button, or Login/Sign Up
/// links for anonymous visitors.
#[component]
pub fn UserNav() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.update(|a| a.user = None);
        });
    };

    view! {
        <div class="user-nav">
            {move || {
                let state = auth.get();
                if let Some(user) = state.user {
                    view! {
                        <div class="user-nav__session">
                            <span class="user-nav__name">{user.name}</span>
                            <button class="btn btn--outline" on:click=on_sign_out>
                                "Sign Out"
                            </button>
                        </div>
                    }
                        .into_any()
                } else if state.loading {
                    view! { <span class="user-nav__loading"></span> }.into_any()
                } else {
                    view! {
                        <div class="user-nav__actions">
                            <a class="btn btn--outline" href="/login">
                                "Login"
                            </a>
                            <a class="btn btn--primary" href="/signup">
                                "Sign Up"
                            </a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
