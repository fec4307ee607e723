//! Small browser utilities.

pub mod dark_mode;
