//! Motivation domain - a single philosopher agent producing a quote of the day.

pub mod actions;
pub mod models;

pub use actions::{motivator, quote_of_the_day, QUOTE_PROMPT};
pub use models::Quote;
