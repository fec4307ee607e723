//! Contests index listing upcoming and live contests.

use leptos::prelude::*;

use crate::components::contest_card::ContestCard;
use crate::components::main_nav::MainNav;
use crate::components::user_nav::UserNav;

/// Contest list page. Each card links to the action matching the contest's
/// status: register while upcoming, join once live.
#[component]
pub fn ContestsPage() -> impl IntoView {
    let contests = LocalResource::new(|| crate::net::api::fetch_contests());

    view! {
        <div class="page">
            <header class="page__header">
                <MainNav/>
                <UserNav/>
            </header>
            <main class="page__main">
                <h1 class="page__title">"Contests"</h1>
                <div class="contests__grid">
                    <Suspense fallback=move || view! { <p>"Loading contests..."</p> }>
                        {move || {
                            contests
                                .get()
                                .map(|list| {
                                    list.into_iter()
                                        .map(|contest| view! { <ContestCard contest=contest/> })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </Suspense>
                </div>
            </main>
        </div>
    }
}
