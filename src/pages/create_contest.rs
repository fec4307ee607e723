//! Admin page for creating a new contest.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::main_nav::MainNav;
use crate::components::user_nav::UserNav;
use crate::net::types::ContestType;
use crate::state::auth::AuthState;
use crate::state::contest_form::ContestForm;
use crate::state::submission::SubmissionStatus;

const CONTEST_TYPES: [ContestType; 3] = [
    ContestType::WeeklyChallenge,
    ContestType::AlgorithmSprint,
    ContestType::CodeMastersCup,
];

/// Contest creation form. Admin-only; on success navigates to
/// `/admin/dashboard?created=true`.
#[component]
pub fn CreateContestPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Only admins create contests.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let state = auth.get();
            if state.loading {
                return;
            }
            if state.user.is_none() {
                navigate("/login", NavigateOptions::default());
            } else if !state.is_admin() {
                navigate("/contests", NavigateOptions::default());
            }
        });
    }

    let form = RwSignal::new(ContestForm::default());
    let status = RwSignal::new(SubmissionStatus::default());

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
                match crate::net::api::create_contest(&data).await {
                    Ok(_) => {
                        status.update(SubmissionStatus::succeed);
                        navigate("/admin/dashboard?created=true", NavigateOptions::default());
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
        <div class="page">
            <header class="page__header">
                <MainNav/>
                <UserNav/>
            </header>
            <main class="page__main page__main--narrow">
                <h1 class="page__title">"Create New Contest"</h1>
                <div class="card">
                    <form on:submit=on_submit>
                        <div class="card__header">
                            <h2 class="card__title">"Contest Details"</h2>
                            <p class="card__description">
                                "Fill in the details for your new coding contest"
                            </p>
                        </div>
                        <div class="card__content">
                            <label class="field">
                                "Contest Title"
                                <input
                                    class="field__input"
                                    type="text"
                                    placeholder="e.g., Algorithm Challenge #1"
                                    prop:value=move || form.get().title
                                    on:input=move |ev| {
                                        form.update(|f| f.title = event_target_value(&ev))
                                    }
                                />
                            </label>
                            <label class="field">
                                "Description"
                                <textarea
                                    class="field__input field__input--textarea"
                                    placeholder="Describe the contest and its rules"
                                    prop:value=move || form.get().description
                                    on:input=move |ev| {
                                        form.update(|f| f.description = event_target_value(&ev))
                                    }
                                ></textarea>
                            </label>
                            <div class="field-row">
                                <label class="field">
                                    "Date"
                                    <input
                                        class="field__input"
                                        type="date"
                                        prop:value=move || form.get().date
                                        on:input=move |ev| {
                                            form.update(|f| f.date = event_target_value(&ev))
                                        }
                                    />
                                </label>
                                <label class="field">
                                    "Start Time"
                                    <input
                                        class="field__input"
                                        type="time"
                                        prop:value=move || form.get().start_time
                                        on:input=move |ev| {
                                            form.update(|f| f.start_time = event_target_value(&ev))
                                        }
                                    />
                                </label>
                            </div>
                            <div class="field-row">
                                <label class="field">
                                    "Duration (hours)"
                                    <input
                                        class="field__input"
                                        type="number"
                                        min="0.5"
                                        step="0.5"
                                        placeholder="2"
                                        prop:value=move || form.get().duration
                                        on:input=move |ev| {
                                            form.update(|f| f.duration = event_target_value(&ev))
                                        }
                                    />
                                </label>
                                <label class="field">
                                    "Contest Type"
                                    <select
                                        class="field__input"
                                        prop:value=move || form.get().contest_type.as_str().to_owned()
                                        on:change=move |ev| {
                                            if let Some(t) = ContestType::parse(&event_target_value(&ev)) {
                                                form.update(|f| f.contest_type = t);
                                            }
                                        }
                                    >
                                        {CONTEST_TYPES
                                            .into_iter()
                                            .map(|t| {
                                                view! { <option value=t.as_str()>{t.label()}</option> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </label>
                            </div>

                            {move || {
                                status
                                    .get()
                                    .error()
                                    .map(|msg| view! { <p class="form-error">{msg.to_owned()}</p> })
                            }}
                        </div>
                        <div class="card__footer card__footer--split">
                            <a class="btn btn--outline" href="/admin/dashboard">
                                "Cancel"
                            </a>
                            <button
                                type="submit"
                                class="btn btn--primary"
                                prop:disabled=move || status.get().is_loading()
                            >
                                {move || {
                                    if status.get().is_loading() {
                                        "Creating..."
                                    } else {
                                        "Create Contest"
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </main>
        </div>
    }
}
