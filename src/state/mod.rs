//! Client-side state and form models.
//!
//! DESIGN
//! ======
//! Split by flow (`signup`, `contest_form`, `join`, `auth`) so each page
//! depends on a small focused model. The shared submission state machine
//! lives in `submission`; validation is pure and unit-tested here, pages
//! only wire signals and callbacks around it.

pub mod auth;
pub mod contest_form;
pub mod join;
pub mod signup;
pub mod submission;
