//! Admin dashboard listing contests with a create action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::contest_card::ContestCard;
use crate::components::main_nav::MainNav;
use crate::components::user_nav::UserNav;
use crate::state::auth::AuthState;

/// Contest overview for admins. Shows a confirmation banner when arriving
/// from a successful contest creation (`?created=true`).
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

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

    let just_created = move || query.read().get("created").as_deref() == Some("true");

    let contests = LocalResource::new(|| crate::net::api::fetch_contests());

    view! {
        <div class="page">
            <header class="page__header">
                <MainNav/>
                <UserNav/>
            </header>
            <main class="page__main">
                <div class="page__title-row">
                    <h1 class="page__title">"Admin Dashboard"</h1>
                    <a class="btn btn--primary" href="/admin/create-contest">
                        "+ New Contest"
                    </a>
                </div>

                <Show when=just_created>
                    <div class="alert alert--success">"Contest created successfully."</div>
                </Show>

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
