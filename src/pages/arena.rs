//! Arena placeholder — the join flow's redirect target.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::main_nav::MainNav;
use crate::components::user_nav::UserNav;
use crate::net::types::ContestStatus;

/// Minimal arena shell. The problem workspace itself is served by the
/// contest runtime and is out of this crate's scope.
#[component]
pub fn ArenaPage() -> impl IntoView {
    let params = use_params_map();
    let contest_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let contest = move || crate::net::api::mock_contest(&contest_id.get(), ContestStatus::Active);

    view! {
        <div class="page">
            <header class="page__header">
                <MainNav/>
                <UserNav/>
            </header>
            <main class="page__main">
                <h1 class="page__title">{move || contest().title}</h1>
                <p class="page__subtitle">
                    "You're in. The contest is live; problems will appear here."
                </p>
            </main>
        </div>
    }
}
