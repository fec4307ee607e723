//! Reusable card component for contest list items.

use leptos::prelude::*;

use crate::net::types::{Contest, ContestStatus};

/// A contest summary card with a status badge and the action matching the
/// contest's lifecycle: register while upcoming, join once live.
#[component]
pub fn ContestCard(contest: Contest) -> impl IntoView {
    let (action_href, action_label) = match contest.status {
        ContestStatus::Active => (format!("/contests/{}/join", contest.id), "Join Now"),
        ContestStatus::Upcoming => (format!("/contests/{}/register", contest.id), "Register"),
    };
    let schedule = format!(
        "{} at {} - {} hours",
        contest.date, contest.start_time, contest.duration
    );

    view! {
        <div class="contest-card">
            <div class="contest-card__header">
                <span class="contest-card__title">{contest.title}</span>
                <span class=format!(
                    "contest-card__badge contest-card__badge--{}",
                    match contest.status {
                        ContestStatus::Active => "active",
                        ContestStatus::Upcoming => "upcoming",
                    },
                )>{contest.status.label()}</span>
            </div>
            <span class="contest-card__type">{contest.contest_type.label()}</span>
            <p class="contest-card__description">{contest.description}</p>
            <span class="contest-card__schedule">{schedule}</span>
            <a class="btn btn--primary" href=action_href>
                {action_label}
            </a>
        </div>
    }
}
