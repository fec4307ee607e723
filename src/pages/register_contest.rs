//! Registration page for an upcoming contest.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::main_nav::MainNav;
use crate::components::register_for_contest::RegisterForContest;
use crate::components::user_nav::UserNav;
use crate::net::types::ContestStatus;
use crate::state::auth::AuthState;

/// Hosts the registration card for the contest named in the route.
#[component]
pub fn RegisterContestPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();

    let contest_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let contest =
        move || crate::net::api::mock_contest(&contest_id.get(), ContestStatus::Upcoming);

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

                    <h1 class="page__title">"Contest Registration"</h1>
                    <p class="page__subtitle">
                        "Register for the contest to participate and compete with other coders"
                    </p>

                    {move || view! { <RegisterForContest contest=contest()/> }}
                </main>
            </div>
        </Show>
    }
}
