//! Reusable UI components shared across pages.

pub mod contest_card;
pub mod main_nav;
pub mod register_for_contest;
pub mod user_nav;
