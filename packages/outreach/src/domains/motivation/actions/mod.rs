mod quote;

pub use quote::{motivator, quote_of_the_day, QUOTE_PROMPT};
