//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    admin_dashboard::AdminDashboardPage, arena::ArenaPage, contests::ContestsPage,
    create_contest::CreateContestPage, join_contest::JoinContestPage, login::LoginPage,
    register_contest::RegisterContestPage, signup::SignupPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth context, resolves the session once on mount,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Resolve the signed-in user once the browser is available. A result
    // arriving after the user navigated away is simply dropped.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
        #[cfg(not(feature = "hydrate"))]
        auth.update(|a| a.loading = false);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/codemasters.css"/>
        <Title text="CodeMasters"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ContestsPage/>
                <Route path=StaticSegment("contests") view=ContestsPage/>
                <Route
                    path=(StaticSegment("contests"), ParamSegment("id"), StaticSegment("register"))
                    view=RegisterContestPage
                />
                <Route
                    path=(StaticSegment("contests"), ParamSegment("id"), StaticSegment("join"))
                    view=JoinContestPage
                />
                <Route
                    path=(StaticSegment("contests"), ParamSegment("id"), StaticSegment("arena"))
                    view=ArenaPage
                />
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("create-contest"))
                    view=CreateContestPage
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=AdminDashboardPage
                />
            </Routes>
        </Router>
    }
}
