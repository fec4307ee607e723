//! Join page for a live contest.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_params_map;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::main_nav::MainNav;
use crate::components::user_nav::UserNav;
use crate::net::types::ContestStatus;
use crate::state::auth::AuthState;
use crate::state::join::JoinForm;
use crate::state::submission::SubmissionStatus;

/// Entry form for an active contest. A valid registration ID joins the
/// contest; after the success confirmation the page redirects to the arena
/// two seconds later. Input and submit stay disabled from the moment the
/// call starts until the redirect fires.
#[component]
pub fn JoinContestPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let contest_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let contest = move || crate::net::api::mock_contest(&contest_id.get(), ContestStatus::Active);

    let form = RwSignal::new(JoinForm::default());
    let status = RwSignal::new(SubmissionStatus::default());

    // Input and button are locked while joining and through the redirect.
    let locked = move || {
        let s = status.get();
        s.is_loading() || s.is_success()
    };

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
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
            let id = contest_id.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::join_contest(&id, &data.registration_id).await {
                    Ok(()) => {
                        status.update(SubmissionStatus::succeed);
                        // Let the confirmation sink in before entering the arena.
                        gloo_timers::future::sleep(std::time::Duration::from_millis(2000)).await;
                        navigate(&format!("/contests/{id}/arena"), NavigateOptions::default());
                    }
                    Err(msg) => status.update(|s| s.fail(msg)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &data;
        }
    });

    view! {
        <Show
            when=move || !auth.get().loading
            fallback=|| view! { <div class="page page--centered">"Loading..."</div> }
        >
            <div class="page">
                <header class="page__header">
                    <MainNav/>
                    <UserNav/>
                </header>
                <main class="page__main">
                    <a class="btn btn--ghost" href="/contests">
                        "Back to Contests"
                    </a>

                    <h1 class="page__title">"Join Live Contest"</h1>
                    <p class="page__subtitle">
                        "Enter your registration ID to join the ongoing contest"
                    </p>

                    <div class="card join-card">
                        <div class="card__header">
                            <h2 class="card__title">"Join " {move || contest().title}</h2>
                            <p class="card__description">"This contest is currently live and active"</p>
                        </div>
                        <div class="card__content">
                            <div class="callout callout--warning">
                                "Make sure you're ready before joining. The timer will start immediately after you join."
                            </div>

                            <form on:submit=move |ev| on_submit.run(ev)>
                                <label class="field">
                                    "Registration ID"
                                    <input
                                        class="field__input"
                                        type="text"
                                        placeholder="Enter your registration ID"
                                        prop:value=move || form.get().registration_id
                                        prop:disabled=locked
                                        on:input=move |ev| {
                                            form.update(|f| f.registration_id = event_target_value(&ev))
                                        }
                                    />
                                </label>
                                <p class="field__hint">
                                    "You must have registered for this contest earlier"
                                </p>

                                {move || {
                                    status
                                        .get()
                                        .error()
                                        .map(|msg| {
                                            view! { <div class="alert alert--error">{msg.to_owned()}</div> }
                                        })
                                }}

                                <Show when=move || status.get().is_success()>
                                    <div class="alert alert--success">
                                        "Successfully joined the contest! Redirecting to contest arena..."
                                    </div>
                                </Show>

                                <button
                                    type="submit"
                                    class="btn btn--primary btn--block"
                                    prop:disabled=locked
                                >
                                    {move || match status.get() {
                                        SubmissionStatus::Loading => "Joining...",
                                        SubmissionStatus::Success => "Joined",
                                        _ => "Join Contest Now",
                                    }}
                                </button>
                            </form>
                        </div>
                        <div class="card__footer card__footer--centered">
                            <p class="field__hint">
                                "Not registered yet? "
                                <a href=move || {
                                    format!("/contests/{}/register", contest_id.get())
                                }>"Register first"</a>
                            </p>
                        </div>
                    </div>
                </main>
            </div>
        </Show>
    }
}
