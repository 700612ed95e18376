//! Domain utilities

pub mod month_names;
