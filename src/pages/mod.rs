//! Page components, one per route.

pub mod admin_dashboard;
pub mod arena;
pub mod contests;
pub mod create_contest;
pub mod join_contest;
pub mod login;
pub mod register_contest;
pub mod signup;
