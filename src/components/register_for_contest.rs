//! Registration card for an upcoming contest.

use leptos::prelude::*;

use crate::net::types::Contest;
use crate::state::submission::SubmissionStatus;

/// Contest summary plus a register action. On success the card shows the
/// issued registration ID in place — the user needs it later to join, so
/// there is no redirect.
#[component]
pub fn RegisterForContest(contest: Contest) -> impl IntoView {
    let status = RwSignal::new(SubmissionStatus::default());
    let registration_id = RwSignal::new(None::<String>);

    let contest_id = contest.id.clone();
    let join_href = format!("/contests/{}/join", contest.id);
    let schedule = format!(
        "{} at {} - {} hours",
        contest.date, contest.start_time, contest.duration
    );

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !status.try_update(|s| s.begin()).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let contest_id = contest_id.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register_for_contest(&contest_id).await {
                    Ok(id) => {
                        registration_id.set(Some(id));
                        status.update(SubmissionStatus::succeed);
                    }
                    Err(msg) => status.update(|s| s.fail(msg)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &contest_id;
        }
    });

    view! {
        <div class="card register-card">
            <div class="card__header">
                <h2 class="card__title">"Register for " {contest.title}</h2>
                <p class="card__description">{contest.contest_type.label()}</p>
            </div>
            <div class="card__content">
                <p class="register-card__description">{contest.description}</p>
                <p class="register-card__schedule">{schedule}</p>

                <Show when=move || registration_id.get().is_none()>
                    <form on:submit=move |ev| on_submit.run(ev)>
                        {move || {
                            status
                                .get()
                                .error()
                                .map(|msg| {
                                    view! { <p class="form-error">{msg.to_owned()}</p> }
                                })
                        }}
                        <button
                            type="submit"
                            class="btn btn--primary btn--block"
                            prop:disabled=move || status.get().is_loading()
                        >
                            {move || {
                                if status.get().is_loading() {
                                    "Registering..."
                                } else {
                                    "Register for Contest"
                                }
                            }}
                        </button>
                    </form>
                </Show>

                <Show when=move || registration_id.get().is_some()>
                    <div class="alert alert--success">
                        <p class="alert__title">"You're registered!"</p>
                        <p class="alert__body">
                            "Your registration ID is "
                            <strong>{move || registration_id.get().unwrap_or_default()}</strong>
                            ". Save it; you'll need it to join when the contest goes live."
                        </p>
                        <a class="btn btn--outline" href=join_href.clone()>
                            "Go to join page"
                        </a>
                    </div>
                </Show>
            </div>
        </div>
    }
}
