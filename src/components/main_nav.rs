//! Top navigation: brand, section links, and the dark-mode toggle.

use leptos::prelude::*;

use crate::util::dark_mode;

/// Main navigation strip shown in every page header.
#[component]
pub fn MainNav() -> impl IntoView {
    let dark = RwSignal::new(dark_mode::read_preference());

    // Apply the stored preference once the browser is available.
    Effect::new(move || dark_mode::apply(dark.get()));

    let on_toggle = move |_| {
        let next = dark_mode::toggle(dark.get_untracked());
        dark.set(next);
    };

    view! {
        <nav class="main-nav">
            <a class="main-nav__brand" href="/">
                "CodeMasters"
            </a>
            <a class="main-nav__link" href="/contests">
                "Contests"
            </a>
            <button class="main-nav__dark-toggle" on:click=on_toggle title="Toggle dark mode">
                {move || if dark.get() { "Light" } else { "Dark" }}
            </button>
        </nav>
    }
}
